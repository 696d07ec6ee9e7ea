//! Client Configuration
//!
//! Build-time settings for the backend location, request timeout and log
//! level. Values are baked in at compile time from `EDUSEARCH_*` variables.

use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_MEDIA_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Countries offered by the search filter as (code, display name).
/// The display name is what the backend matches against.
pub const COUNTRY_LIST: &[(&str, &str)] = &[
    ("NP", "Nepal"),
    ("US", "USA"),
    ("UK", "UK"),
    ("IN", "India"),
    ("AU", "Australia"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub media_base_url: String,
    pub request_timeout_ms: u32,
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

impl Config {
    /// Read compile-time overrides, keeping defaults for anything unset or
    /// unparsable.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EDUSEARCH_API_URL"),
            option_env!("EDUSEARCH_MEDIA_URL"),
            option_env!("EDUSEARCH_TIMEOUT_MS"),
            option_env!("EDUSEARCH_LOG"),
        )
    }

    fn from_values(
        api: Option<&str>,
        media: Option<&str>,
        timeout: Option<&str>,
        level: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(api) = api.map(str::trim).filter(|v| !v.is_empty()) {
            config.api_base_url = api.to_string();
        }
        if let Some(media) = media.map(str::trim).filter(|v| !v.is_empty()) {
            config.media_base_url = media.to_string();
        }
        if let Some(ms) = timeout.and_then(|v| v.trim().parse::<u32>().ok()) {
            config.request_timeout_ms = ms;
        }
        if let Some(filter) = level.and_then(|v| v.trim().parse::<log::LevelFilter>().ok()) {
            config.log_level = filter;
        }
        config
    }

    /// Absolute URL for an API path, e.g. `endpoint("search/")`.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }

    /// Absolute URL for a media path returned by the backend.
    /// Already-absolute URLs pass through untouched.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
            path.to_string()
        } else {
            join_url(&self.media_base_url, path)
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = Config::default();
        assert_eq!(config.endpoint("search/"), "http://localhost:8000/api/search/");
        assert_eq!(config.endpoint("/login/"), "http://localhost:8000/api/login/");

        let bare = Config { api_base_url: "https://api.example.com/api".into(), ..Config::default() };
        assert_eq!(bare.endpoint("profile/"), "https://api.example.com/api/profile/");
    }

    #[test]
    fn test_media_url() {
        let config = Config::default();
        assert_eq!(config.media_url("/media/logos/a.png"), "http://localhost:8000/media/logos/a.png");
        assert_eq!(config.media_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
        assert_eq!(config.media_url("blob:http://localhost/abc"), "blob:http://localhost/abc");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_values(
            Some("https://edu.example.com/api/"),
            Some(" "),
            Some("2500"),
            Some("warn"),
        );
        assert_eq!(config.api_base_url, "https://edu.example.com/api/");
        assert_eq!(config.media_base_url, DEFAULT_MEDIA_BASE_URL);
        assert_eq!(config.request_timeout_ms, 2500);
        assert_eq!(config.log_level, log::LevelFilter::Warn);
    }

    #[test]
    fn test_bad_overrides_fall_back() {
        let config = Config::from_values(None, None, Some("soon"), Some("loud"));
        assert_eq!(config, Config::default());
    }
}
