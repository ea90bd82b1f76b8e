//! Build-time client configuration.
//!
//! The browser bundle has no process environment, so values are baked in at
//! compile time with `option_env!`:
//!
//! - `PROJECTION_API_BASE`: API prefix, default `/api` (the dev proxy strips it)
//! - `PROJECTION_API_TIMEOUT_MS`: request timeout, default 10000
//! - `PROJECTION_LOG_LEVEL`: console log level, default `info`
//!
//! Unparseable values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Static configuration of the shared HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint path, without a trailing slash.
    pub base_path: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_API_BASE.to_owned(),
            timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api: ApiConfig::default(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Configuration baked in by the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PROJECTION_API_BASE"),
            option_env!("PROJECTION_API_TIMEOUT_MS"),
            option_env!("PROJECTION_LOG_LEVEL"),
        )
    }

    pub fn from_values(base: Option<&str>, timeout_ms: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api: ApiConfig { base_path: parse_base_path(base), timeout: parse_timeout(timeout_ms) },
            log_level: parse_log_level(log_level),
        }
    }
}

fn parse_base_path(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE.to_owned();
    }
    if trimmed.starts_with('/') || trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let millis = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_API_TIMEOUT_MS);
    Duration::from_millis(millis)
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
