//! Console Gateway Entry Point
//!
//! Serves the admin console: the `/api` action surface plus the guarded
//! page shell. Uses `anyhow` for startup errors; request-level failures
//! travel inside the action envelope.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, http,
    http::{Method, header},
    response::Html,
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admin::presentation::middleware::{GuardState, route_guard};
use admin::{ConsoleConfig, HttpUpstreamApi, console_router};
use upstream::client::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,admin=info,upstream=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConsoleConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Upstream configured");

    let client = UpstreamClient::new(config.base_url.as_str())?;
    let api = HttpUpstreamApi::new(client);

    let guard_state = GuardState {
        api: Arc::new(api.clone()),
        config: Arc::new(config.clone()),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router: API surface plus the guarded page shell
    let app = Router::new()
        .nest("/api", console_router(api, config.clone()))
        .route("/", get(page_shell))
        .fallback(page_shell)
        .layer(axum::middleware::from_fn(move |req, next| {
            route_guard(guard_state.clone(), req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("GATEWAY_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Minimal shell for page navigations that clear the route guard; the
/// console front-end hydrates against the `/api` surface.
async fn page_shell() -> Html<&'static str> {
    Html(include_str!("shell.html"))
}
