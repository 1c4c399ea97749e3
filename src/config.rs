//! Gate configuration with typed defaults.
//!
//! In the browser the values come from `<meta name="profile-gate:KEY">` tags in
//! the host page (read by the `browser` module); parsing itself only needs a key
//! lookup so it runs natively under test.
//!
//! Keys:
//! - `attempts`: status requests before giving up (default 20, at least 1)
//! - `delay-ms`: pause between attempts in milliseconds (default 150)
//! - `status-endpoint`: default `/api/profile-status`
//! - `profile-path`: redirect target path, default `/profile`
//! - `skip-prefixes`: comma-separated path prefixes, default `/auth/,/login,/profile`
//! - `log-level`: console log level, default `warn`
//!
//! Blank values count as absent.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::GateError;
use crate::guard::{DEFAULT_EXCLUDED_PREFIXES, PathGuard};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 150;
pub const DEFAULT_STATUS_ENDPOINT: &str = "/api/profile-status";
pub const DEFAULT_PROFILE_PATH: &str = "/profile";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Warn;

/// Prefix of the `<meta name>` attributes the browser entry reads.
pub const META_NAME_PREFIX: &str = "profile-gate:";

/// CSS selector for the `<meta>` tag carrying `key`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn meta_selector(key: &str) -> String {
    format!("meta[name=\"{META_NAME_PREFIX}{key}\"]")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub status_endpoint: String,
    pub profile_path: String,
    pub excluded_prefixes: Vec<String>,
    pub log_level: log::Level,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_owned(),
            profile_path: DEFAULT_PROFILE_PATH.to_owned(),
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| (*p).to_owned()).collect(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl GateConfig {
    /// Build a config from a key lookup, falling back to defaults for
    /// absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigParse`] when a present value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let max_attempts = parse_attempts(value("attempts").as_deref())?;
        let retry_delay = parse_delay(value("delay-ms").as_deref())?;
        let status_endpoint = value("status-endpoint").unwrap_or_else(|| DEFAULT_STATUS_ENDPOINT.to_owned());
        let profile_path = value("profile-path").unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_owned());
        let excluded_prefixes = match value("skip-prefixes") {
            Some(raw) => parse_prefixes(&raw),
            None => Self::default().excluded_prefixes,
        };
        let log_level = parse_log_level(value("log-level").as_deref())?;

        Ok(Self { max_attempts, retry_delay, status_endpoint, profile_path, excluded_prefixes, log_level })
    }

    pub fn guard(&self) -> PathGuard {
        PathGuard::new(self.excluded_prefixes.iter().cloned())
    }
}

fn parse_attempts(raw: Option<&str>) -> Result<u32, GateError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_ATTEMPTS);
    };
    match raw.parse::<u32>() {
        Ok(0) => Err(GateError::ConfigParse("attempts must be at least 1".into())),
        Ok(n) => Ok(n),
        Err(e) => Err(GateError::ConfigParse(format!("invalid attempts '{raw}': {e}"))),
    }
}

fn parse_delay(raw: Option<&str>) -> Result<Duration, GateError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(DEFAULT_RETRY_DELAY_MS));
    };
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| GateError::ConfigParse(format!("invalid delay-ms '{raw}': {e}")))
}

fn parse_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, GateError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    raw.parse::<log::Level>()
        .map_err(|_| GateError::ConfigParse(format!("unknown log-level '{raw}'")))
}
