//! Client configuration.

use std::time::Duration;

/// Default backend base, matching the server's local development port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Fixed cadence between status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Job-lifecycle client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, including the API prefix (no trailing slash)
    pub base_url: String,
    /// Delay between the completion of one status check and the next
    pub poll_interval: Duration,
    /// Per-request timeout; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,
    /// Give up after this many consecutive failed status checks;
    /// `None` retries forever
    pub max_transient_failures: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: Some(Duration::from_secs(30)),
            max_transient_failures: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// `VIDBOX_REQUEST_TIMEOUT_SECS=0` disables the request timeout.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("VIDBOX_API_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let poll_interval = std::env::var("VIDBOX_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        let request_timeout = match std::env::var("VIDBOX_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.request_timeout,
        };

        let max_transient_failures = std::env::var("VIDBOX_MAX_TRANSIENT_FAILURES")
            .ok()
            .and_then(|s| s.parse().ok());

        Self {
            base_url,
            poll_interval,
            request_timeout,
            max_transient_failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_behavior() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
        assert_eq!(config.max_transient_failures, None);
    }
}
