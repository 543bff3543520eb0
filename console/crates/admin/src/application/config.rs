//! Console Configuration

use std::env;

/// Environment variable naming the backend origin
pub const BASE_URL_ENV: &str = "UPSTREAM_BASE_URL";

/// Console application configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend origin all endpoint paths resolve against
    pub base_url: String,
    /// Session cookie name issued by the backend
    pub session_cookie_name: String,
    /// Path of the login page
    pub login_path: String,
    /// Path authenticated users land on
    pub dashboard_path: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            session_cookie_name: "adminAccessToken".to_string(),
            login_path: "/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Read config from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }

    /// Config pointed at a specific origin (tests, local tooling)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.session_cookie_name, "adminAccessToken");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.dashboard_path, "/dashboard");
    }

    #[test]
    fn test_with_base_url() {
        let config = ConsoleConfig::with_base_url("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.session_cookie_name, "adminAccessToken");
    }
}
