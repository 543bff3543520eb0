//! Session Context
//!
//! Holds the authenticated admin for one console session. State is explicit:
//! the context is created unresolved, a [`refresh`](SessionContext::refresh)
//! settles it, and every transition goes through a method on it.

use shared::action::error::{ActionError, ActionResult};

use crate::application::actions::auth;
use crate::application::config::ConsoleConfig;
use crate::domain::api::{Credentials, UpstreamApi};
use crate::domain::entity::User;

/// Authentication state for one console session
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<User>,
    token: Option<String>,
    loading: bool,
}

impl SessionContext {
    /// Unresolved context; callers should [`refresh`](Self::refresh) before
    /// trusting [`is_authenticated`](Self::is_authenticated)
    pub fn new() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }

    /// Context restored from a previously relayed session token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            user: None,
            token: Some(token.into()),
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True until the first refresh or login settles the context
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cookie header carrying the stored token, if any
    pub fn cookie_header(&self, config: &ConsoleConfig) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| format!("{}={token}", config.session_cookie_name))
    }

    /// Re-resolve the current user from the stored token
    ///
    /// Any failure settles the context as unauthenticated; the cause is
    /// already logged by the upstream layer.
    pub async fn refresh<A: UpstreamApi + Sync>(&mut self, api: &A, config: &ConsoleConfig) {
        let cookies = self.cookie_header(config);
        match auth::current_user(api, cookies.as_deref()).await {
            Ok(user) => self.user = Some(user),
            Err(_) => self.user = None,
        }
        self.loading = false;
    }

    /// Authenticate and adopt the relayed session cookie
    ///
    /// The freshly issued token is validated with a read-back against the
    /// current-user endpoint before the context trusts it, so a caller that
    /// navigates immediately after login sees a settled session.
    pub async fn login<A: UpstreamApi + Sync>(
        &mut self,
        api: &A,
        config: &ConsoleConfig,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> ActionResult<User> {
        let credentials = Credentials {
            email: email.into(),
            password: password.into(),
        };
        let outcome = auth::login(api, config, &credentials).await?;

        let user = match outcome.cookie {
            Some(cookie) => {
                let header = format!("{}={}", config.session_cookie_name, cookie.value);
                let user = auth::current_user(api, Some(&header)).await.map_err(|_| {
                    ActionError::new("Login succeeded but the session could not be established")
                })?;
                self.token = Some(cookie.value);
                user
            }
            // No cookie relayed; fall back to the login payload so the UI
            // still has a user, but the session will not survive a refresh.
            None => outcome.session.user,
        };

        self.user = Some(user.clone());
        self.loading = false;
        Ok(user)
    }

    /// Invalidate the session server-side and clear local state
    ///
    /// The upstream call is best-effort; local state clears either way so
    /// the console never keeps a session the user asked to end.
    pub async fn logout<A: UpstreamApi + Sync>(&mut self, api: &A, config: &ConsoleConfig) {
        let cookies = self.cookie_header(config);
        if let Err(err) = auth::logout(api, cookies.as_deref()).await {
            tracing::warn!(error = %err, "upstream logout failed; clearing local session anyway");
        }
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}
