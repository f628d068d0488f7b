//! Configuration loading and resolution.

use std::time::Duration;

use data_fetcher::{FetchConfig, DEFAULT_TIMEOUT_SECS};

/// Target fetched when neither the CLI nor the environment names one.
pub const DEFAULT_TARGET_URL: &str = "http://127.0.0.1:8000/data";

/// Environment variable overriding the target URL.
pub const TARGET_ENV: &str = "MY_DATA_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "MY_DATA_TIMEOUT_SECS";

/// Resolve the target URL: explicit flag, then environment, then the default.
pub fn resolve_target_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Ok(env_url) = std::env::var(TARGET_ENV) {
        if !env_url.trim().is_empty() {
            return env_url;
        }
    }

    DEFAULT_TARGET_URL.to_string()
}

/// Resolve the timeout: explicit flag, then environment, then the default.
///
/// Zero is treated as unset.
pub fn resolve_timeout(explicit: Option<u64>) -> Duration {
    let secs = explicit
        .filter(|&s| s > 0)
        .or_else(|| {
            std::env::var(TIMEOUT_ENV)
                .ok()
                .and_then(|raw| parse_timeout_secs(&raw))
        })
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Duration::from_secs(secs)
}

fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|&s: &u64| s > 0)
}

/// Build the fetch configuration from CLI values and the environment.
pub fn resolve_fetch_config(url: Option<&str>, timeout_secs: Option<u64>) -> FetchConfig {
    FetchConfig::new(resolve_target_url(url)).with_timeout(resolve_timeout(timeout_secs))
}
