//! Route Guard Middleware
//!
//! Validates the session cookie on every guarded navigation by calling the
//! backend profile endpoint. The token is opaque to the console; the backend
//! is the only authority on whether a session is live.

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;
use url::form_urlencoded;

use upstream::cookie::{clear_cookie_value, extract_cookie};

use crate::application::config::ConsoleConfig;
use crate::domain::api::UpstreamApi;

/// Route guard state
pub struct GuardState<A> {
    pub api: Arc<A>,
    pub config: Arc<ConsoleConfig>,
}

impl<A> Clone for GuardState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            config: Arc::clone(&self.config),
        }
    }
}

/// True for page navigations the guard inspects
///
/// API routes carry their own envelope-level failures, and asset requests
/// must never bounce through the login page.
pub fn guard_applies(path: &str) -> bool {
    if path.starts_with("/api") || path.starts_with("/static") || path.starts_with("/image") {
        return false;
    }
    if path == "/favicon.ico" {
        return false;
    }
    // Anything with a file extension is an asset, not a page
    let last_segment = path.rsplit('/').next().unwrap_or("");
    !last_segment.contains('.')
}

/// Session-validating middleware for page navigations
pub async fn route_guard<A>(state: GuardState<A>, req: Request<Body>, next: Next) -> Response
where
    A: UpstreamApi + Send + Sync + 'static,
{
    let path = req.uri().path().to_string();

    if !guard_applies(&path) {
        return next.run(req).await;
    }

    let token = extract_cookie(req.headers(), &state.config.session_cookie_name);
    let on_login_page = path == state.config.login_path;

    let Some(token) = token else {
        if on_login_page {
            return next.run(req).await;
        }
        return redirect_to_login(&state.config, &path);
    };

    match state.api.check_profile(&token).await {
        Ok(_) => {
            // A live session has no business on the login page
            if on_login_page {
                Redirect::temporary(&state.config.dashboard_path).into_response()
            } else {
                next.run(req).await
            }
        }
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "session validation failed");
            let response = if on_login_page {
                next.run(req).await
            } else {
                redirect_to_login(&state.config, &path)
            };
            with_cleared_cookie(response, &state.config.session_cookie_name)
        }
    }
}

/// Redirect to the login page, preserving the requested path
fn redirect_to_login(config: &ConsoleConfig, path: &str) -> Response {
    let encoded: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
    let target = format!("{}?redirect={encoded}", config.login_path);
    Redirect::temporary(&target).into_response()
}

/// Attach an expiring session cookie to the response
fn with_cleared_cookie(mut response: Response, cookie_name: &str) -> Response {
    if let Ok(value) = clear_cookie_value(cookie_name).parse() {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_applies_to_pages() {
        assert!(guard_applies("/dashboard"));
        assert!(guard_applies("/novels"));
        assert!(guard_applies("/login"));
        assert!(guard_applies("/"));
    }

    #[test]
    fn test_guard_skips_api_and_assets() {
        assert!(!guard_applies("/api/session/me"));
        assert!(!guard_applies("/static/app.css"));
        assert!(!guard_applies("/image/cover-1.webp"));
        assert!(!guard_applies("/favicon.ico"));
        assert!(!guard_applies("/assets/chunk.39ab2c.js"));
    }

    #[test]
    fn test_redirect_target_encodes_path() {
        let config = ConsoleConfig::default();
        let response = redirect_to_login(&config, "/novels/42");

        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(location, "/login?redirect=%2Fnovels%2F42");
    }
}
