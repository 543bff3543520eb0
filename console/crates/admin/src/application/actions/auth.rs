//! Auth Actions

use shared::action::error::ActionResult;
use upstream::cookie::{SetCookie, find_session_cookie};

use crate::application::actions::reshape;
use crate::application::config::ConsoleConfig;
use crate::domain::api::{Credentials, UpstreamApi};
use crate::domain::entity::{Ack, AuthSession, User};

/// Successful login: the session payload plus the cookie to relay, if the
/// backend issued one
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: AuthSession,
    pub cookie: Option<SetCookie>,
}

/// Authenticate against the backend and pick the session cookie out of the
/// response headers
///
/// Only the configured session cookie is relayed; any other `Set-Cookie`
/// the backend emits is dropped.
pub async fn login<A: UpstreamApi + Sync>(
    api: &A,
    config: &ConsoleConfig,
    credentials: &Credentials,
) -> ActionResult<LoginOutcome> {
    let (result, headers) = api.login(credentials).await;
    let session = reshape(result)?;

    let cookie = headers
        .get("set-cookie")
        .and_then(|joined| find_session_cookie(joined, &config.session_cookie_name));

    if cookie.is_none() {
        tracing::warn!(
            cookie = %config.session_cookie_name,
            "login succeeded but no session cookie was issued"
        );
    }

    Ok(LoginOutcome { session, cookie })
}

pub async fn logout<A: UpstreamApi + Sync>(api: &A, cookies: Option<&str>) -> ActionResult<Ack> {
    reshape(api.logout(cookies).await)
}

pub async fn current_user<A: UpstreamApi + Sync>(
    api: &A,
    cookies: Option<&str>,
) -> ActionResult<User> {
    reshape(api.current_user(cookies).await)
}
