//! Console Router

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::application::config::ConsoleConfig;
use crate::domain::api::UpstreamApi;
use crate::infra::http::HttpUpstreamApi;
use crate::presentation::handlers::{self, ConsoleState};

/// Create the console API router backed by the HTTP upstream adapter
pub fn console_router(api: HttpUpstreamApi, config: ConsoleConfig) -> Router {
    console_router_generic(api, config)
}

/// Create a console API router for any upstream implementation
pub fn console_router_generic<A>(api: A, config: ConsoleConfig) -> Router
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let state = ConsoleState::new(api, config);

    Router::new()
        .route("/session/login", post(handlers::login::<A>))
        .route("/session/logout", post(handlers::logout::<A>))
        .route("/session/me", get(handlers::me::<A>))
        .route(
            "/translators",
            get(handlers::translators_index::<A>).post(handlers::translators_create::<A>),
        )
        .route(
            "/translators/{id}/toggle-status",
            patch(handlers::translators_toggle_status::<A>),
        )
        .route("/translators/{id}", delete(handlers::translators_delete::<A>))
        .route("/series", get(handlers::series_index::<A>))
        .route("/series/{id}", delete(handlers::series_delete::<A>))
        .route("/series/{id}/chapters", get(handlers::series_chapters::<A>))
        .route(
            "/chapters/{id}",
            get(handlers::chapter_show::<A>).delete(handlers::chapter_delete::<A>),
        )
        .route(
            "/chapters/{id}/toggle-premium",
            patch(handlers::chapter_toggle_premium::<A>),
        )
        .route("/assign-series", post(handlers::series_assign::<A>))
        .route(
            "/announcements",
            get(handlers::announcements_index::<A>).post(handlers::announcements_create::<A>),
        )
        .route(
            "/announcements/{id}",
            patch(handlers::announcements_update::<A>).delete(handlers::announcements_delete::<A>),
        )
        .route(
            "/announcements/{id}/toggle-active",
            patch(handlers::announcements_toggle_active::<A>),
        )
        .route(
            "/dashboard/statistics",
            get(handlers::dashboard_statistics::<A>),
        )
        .route(
            "/dashboard/recent-purchases",
            get(handlers::recent_purchases::<A>),
        )
        .route(
            "/dashboard/recent-coin-purchases",
            get(handlers::recent_coin_purchases::<A>),
        )
        .route("/categories", get(handlers::categories_index::<A>))
        .with_state(state)
}
