//! HTTP Handlers
//!
//! Every handler resolves to an [`ActionReply`] envelope with HTTP 200;
//! the UI branches on the `success` flag, not the status code. Only the
//! session handlers touch response headers (cookie relay and clearing).

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use shared::action::reply::ActionReply;
use upstream::cookie::clear_cookie_value;

use crate::application::actions::{announcement, auth, category, dashboard, novel, translator};
use crate::application::config::ConsoleConfig;
use crate::domain::api::UpstreamApi;
use crate::domain::entity::{AnnouncementPatch, AuthSession, NewAnnouncement};
use crate::presentation::dto::{
    AssignSeriesRequest, CreateTranslatorRequest, LimitQuery, LoginRequest, SeriesQuery,
};

/// Shared state for console handlers
pub struct ConsoleState<A> {
    pub api: Arc<A>,
    pub config: Arc<ConsoleConfig>,
}

impl<A> ConsoleState<A> {
    pub fn new(api: A, config: ConsoleConfig) -> Self {
        Self {
            api: Arc::new(api),
            config: Arc::new(config),
        }
    }
}

// Manual impl so the state clones without requiring A: Clone
impl<A> Clone for ConsoleState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            config: Arc::clone(&self.config),
        }
    }
}

/// Cookie header forwarded verbatim to the backend
fn forwarded_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

// ============================================================================
// Session
// ============================================================================

/// POST /api/session/login
///
/// On success the relayed session cookie rides on the response; the
/// envelope body carries the session payload either way.
pub async fn login<A>(
    State(state): State<ConsoleState<A>>,
    Json(req): Json<LoginRequest>,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    match auth::login(state.api.as_ref(), &state.config, &req.into()).await {
        Ok(outcome) => {
            let reply = ActionReply::Success(outcome.session);
            match outcome.cookie {
                Some(cookie) => (
                    StatusCode::OK,
                    [(header::SET_COOKIE, cookie.to_header_value())],
                    reply,
                )
                    .into_response(),
                None => reply.into_response(),
            }
        }
        Err(err) => ActionReply::<AuthSession>::from(err).into_response(),
    }
}

/// POST /api/session/logout
///
/// The session cookie clears regardless of whether the upstream call
/// succeeded; the envelope reports the upstream outcome.
pub async fn logout<A>(State(state): State<ConsoleState<A>>, headers: HeaderMap) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    let result = auth::logout(state.api.as_ref(), cookies.as_deref()).await;

    let clear = clear_cookie_value(&state.config.session_cookie_name);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear)],
        ActionReply::from(result),
    )
        .into_response()
}

/// GET /api/session/me
pub async fn me<A>(State(state): State<ConsoleState<A>>, headers: HeaderMap) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(auth::current_user(state.api.as_ref(), cookies.as_deref()).await)
        .into_response()
}

// ============================================================================
// Translators
// ============================================================================

/// GET /api/translators
pub async fn translators_index<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(translator::all_translators(state.api.as_ref(), cookies.as_deref()).await)
        .into_response()
}

/// POST /api/translators
pub async fn translators_create<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
    Json(req): Json<CreateTranslatorRequest>,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        translator::create_translator(
            state.api.as_ref(),
            &req.username,
            &req.email,
            cookies.as_deref(),
        )
        .await,
    )
    .into_response()
}

/// PATCH /api/translators/{id}/toggle-status
pub async fn translators_toggle_status<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        translator::toggle_translator_status(state.api.as_ref(), &id, cookies.as_deref()).await,
    )
    .into_response()
}

/// DELETE /api/translators/{id}
pub async fn translators_delete<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        translator::delete_translator(state.api.as_ref(), &id, cookies.as_deref()).await,
    )
    .into_response()
}

// ============================================================================
// Series / Chapters
// ============================================================================

/// GET /api/series
pub async fn series_index<A>(
    State(state): State<ConsoleState<A>>,
    Query(query): Query<SeriesQuery>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    let filter = query.into_filter();
    ActionReply::from(novel::series_page(state.api.as_ref(), &filter, cookies.as_deref()).await)
        .into_response()
}

/// DELETE /api/series/{id}
pub async fn series_delete<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(novel::delete_series(state.api.as_ref(), &id, cookies.as_deref()).await)
        .into_response()
}

/// GET /api/series/{id}/chapters
pub async fn series_chapters<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(novel::series_chapters(state.api.as_ref(), &id, cookies.as_deref()).await)
        .into_response()
}

/// GET /api/chapters/{id}
pub async fn chapter_show<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(novel::chapter_content(state.api.as_ref(), &id, cookies.as_deref()).await)
        .into_response()
}

/// PATCH /api/chapters/{id}/toggle-premium
pub async fn chapter_toggle_premium<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        novel::toggle_chapter_premium(state.api.as_ref(), &id, cookies.as_deref()).await,
    )
    .into_response()
}

/// DELETE /api/chapters/{id}
pub async fn chapter_delete<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(novel::delete_chapter(state.api.as_ref(), &id, cookies.as_deref()).await)
        .into_response()
}

/// POST /api/assign-series
pub async fn series_assign<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
    Json(req): Json<AssignSeriesRequest>,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        novel::assign_series(state.api.as_ref(), &req.into(), cookies.as_deref()).await,
    )
    .into_response()
}

// ============================================================================
// Announcements
// ============================================================================

/// GET /api/announcements
pub async fn announcements_index<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        announcement::all_announcements(state.api.as_ref(), cookies.as_deref()).await,
    )
    .into_response()
}

/// POST /api/announcements
pub async fn announcements_create<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
    Json(req): Json<NewAnnouncement>,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        announcement::create_announcement(state.api.as_ref(), &req, cookies.as_deref()).await,
    )
    .into_response()
}

/// PATCH /api/announcements/{id}
pub async fn announcements_update<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<AnnouncementPatch>,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        announcement::update_announcement(state.api.as_ref(), &id, &patch, cookies.as_deref())
            .await,
    )
    .into_response()
}

/// PATCH /api/announcements/{id}/toggle-active
pub async fn announcements_toggle_active<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        announcement::toggle_announcement_active(state.api.as_ref(), &id, cookies.as_deref())
            .await,
    )
    .into_response()
}

/// DELETE /api/announcements/{id}
pub async fn announcements_delete<A>(
    State(state): State<ConsoleState<A>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(
        announcement::delete_announcement(state.api.as_ref(), &id, cookies.as_deref()).await,
    )
    .into_response()
}

// ============================================================================
// Dashboard / Categories
// ============================================================================

/// GET /api/dashboard/statistics
pub async fn dashboard_statistics<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(dashboard::statistics(state.api.as_ref(), cookies.as_deref()).await)
        .into_response()
}

/// GET /api/dashboard/recent-purchases
pub async fn recent_purchases<A>(
    State(state): State<ConsoleState<A>>,
    Query(query): Query<LimitQuery>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    let limit = query.limit.unwrap_or(dashboard::DEFAULT_RECENT_LIMIT);
    ActionReply::from(
        dashboard::recent_purchases(state.api.as_ref(), limit, cookies.as_deref()).await,
    )
    .into_response()
}

/// GET /api/dashboard/recent-coin-purchases
pub async fn recent_coin_purchases<A>(
    State(state): State<ConsoleState<A>>,
    Query(query): Query<LimitQuery>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    let limit = query.limit.unwrap_or(dashboard::DEFAULT_RECENT_LIMIT);
    ActionReply::from(
        dashboard::recent_coin_purchases(state.api.as_ref(), limit, cookies.as_deref()).await,
    )
    .into_response()
}

/// GET /api/categories
pub async fn categories_index<A>(
    State(state): State<ConsoleState<A>>,
    headers: HeaderMap,
) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let cookies = forwarded_cookies(&headers);
    ActionReply::from(category::all_categories(state.api.as_ref(), cookies.as_deref()).await)
        .into_response()
}
