//! Application Configuration
//!
//! Values are baked in at build time from `KHSA_*` environment variables.
//! Anything missing or malformed falls back to its default with a warning.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::models::Location;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`")]
    InvalidBaseUrl(String),
    #[error("API base URL `{0}` cannot carry a path")]
    OpaqueBaseUrl(String),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub log_level: log::Level,
    pub page_size: u32,
    pub search_debounce: Duration,
    pub alert_settle: Duration,
    pub portal_poll: Duration,
    pub toast_lifetime: Duration,
    /// Map centre used when geolocation is unavailable (Damascus).
    pub fallback_center: Location,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            log_level: DEFAULT_LOG_LEVEL,
            page_size: 10,
            search_debounce: Duration::from_millis(500),
            alert_settle: Duration::from_millis(500),
            portal_poll: Duration::from_secs(15),
            toast_lifetime: Duration::from_millis(3500),
            fallback_center: Location {
                latitude: 33.5138,
                longitude: 36.2765,
            },
        }
    }
}

impl AppConfig {
    /// Configuration from the build environment.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::resolve(option_env!("KHSA_API_BASE_URL"), option_env!("KHSA_LOG_LEVEL"))
    }

    /// Applies overrides, returning the problems that forced a fallback.
    pub fn resolve(base_url: Option<&str>, log_level: Option<&str>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(raw) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            match parse_base_url(raw) {
                Ok(url) => config.api_base_url = url,
                Err(e) => problems.push(e),
            }
        }
        if let Some(raw) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            match raw.parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => problems.push(ConfigError::InvalidLogLevel(raw.to_string())),
            }
        }

        (config, problems)
    }

    /// Server origin, used to resolve relative upload paths.
    pub fn server_origin(&self) -> String {
        self.api_base_url.origin().ascii_serialization()
    }

    /// Absolute URL for an image path the server returned.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
            path.to_string()
        } else if path.starts_with("/static/") {
            format!("{}{}", self.server_origin(), path)
        } else {
            format!(
                "{}/static/uploads/{}",
                self.server_origin(),
                path.trim_start_matches('/')
            )
        }
    }

    /// Full URL of a backend endpoint, for browser navigations.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_base_url() -> Url {
    // The literal is a valid absolute URL
    Url::parse(DEFAULT_API_BASE_URL).unwrap_or_else(|_| unreachable!())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|_| ConfigError::InvalidBaseUrl(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::OpaqueBaseUrl(raw.to_string()));
    }
    Ok(url)
}

/// Logs fallback warnings once the logger is up.
pub fn report(problems: &[ConfigError]) {
    for problem in problems {
        log::warn!("[CONFIG] {problem}, using default");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let (config, problems) = AppConfig::resolve(None, None);
        assert!(problems.is_empty());
        assert_eq!(config.api_base_url.as_str(), "http://localhost:5000/api/v1");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.portal_poll, Duration::from_secs(15));
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_overrides_and_fallbacks() {
        let (config, problems) = AppConfig::resolve(Some("https://api.khsa.example/api/v1"), Some("debug"));
        assert!(problems.is_empty());
        assert_eq!(config.api_base_url.host_str(), Some("api.khsa.example"));
        assert_eq!(config.log_level, log::Level::Debug);

        let (config, problems) = AppConfig::resolve(Some("not a url"), Some("loud"));
        assert_eq!(
            problems,
            vec![
                ConfigError::InvalidBaseUrl("not a url".into()),
                ConfigError::InvalidLogLevel("loud".into()),
            ]
        );
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_image_url_resolution() {
        let config = AppConfig::default();
        assert_eq!(
            config.image_url("logo.png"),
            "http://localhost:5000/static/uploads/logo.png"
        );
        assert_eq!(
            config.image_url("/static/uploads/a.jpg"),
            "http://localhost:5000/static/uploads/a.jpg"
        );
        assert_eq!(
            config.image_url("https://cdn.example/x.jpg"),
            "https://cdn.example/x.jpg"
        );
    }

    #[test]
    fn test_endpoint() {
        let config = AppConfig::default();
        assert_eq!(
            config.endpoint("/auth/oauth/login/github"),
            "http://localhost:5000/api/v1/auth/oauth/login/github"
        );
    }
}
