//! Retry budget and backoff windows.

use std::time::Duration;

/// Policy governing session lifetime, retries, and backoff for every call.
///
/// Defaults match the vendor's observed behavior: sessions die server-side
/// after ~30 minutes (refreshed proactively at 25), the rate limiter wants
/// ~30 seconds of quiet after a throttled login and a few seconds between
/// steady-state calls, and bursts right after login are penalized (hence the
/// warm-up delay).
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt (total cycles = 1 + max_retries).
    pub max_retries: u32,
    /// Delay before the first attempt of any call.
    pub warmup_delay: Duration,
    /// Backoff after a rate-limited login.
    pub login_backoff: Duration,
    /// Backoff after a rate-limited steady-state call.
    pub retry_backoff: Duration,
    /// Backoff after a transport-level failure.
    pub network_backoff: Duration,
    /// Local session validity window; below the server's own expiry.
    pub session_timeout: Duration,
    /// Per-request socket timeout.
    pub request_timeout: Duration,
}

impl RetryPolicy {
    /// Policy with all delays zeroed. For tests and interactive probes
    /// against mock backends; keeps the retry budget intact.
    pub fn immediate() -> Self {
        Self {
            max_retries: 2,
            warmup_delay: Duration::ZERO,
            login_backoff: Duration::ZERO,
            retry_backoff: Duration::ZERO,
            network_backoff: Duration::ZERO,
            session_timeout: Duration::from_secs(25 * 60),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Sets the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the steady-state rate-limit backoff.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Sets the local session validity window.
    pub fn with_session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }

    /// Sets the warm-up delay applied before the first attempt.
    pub fn with_warmup_delay(mut self, delay: Duration) -> Self {
        self.warmup_delay = delay;
        self
    }

    /// Whether a transport error is worth retrying.
    pub fn is_transient(error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            warmup_delay: Duration::from_secs(5),
            login_backoff: Duration::from_secs(30),
            retry_backoff: Duration::from_secs(3),
            network_backoff: Duration::from_secs(5),
            session_timeout: Duration::from_secs(25 * 60),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.warmup_delay, Duration::from_secs(5));
        assert_eq!(policy.login_backoff, Duration::from_secs(30));
        assert_eq!(policy.retry_backoff, Duration::from_secs(3));
        assert_eq!(policy.network_backoff, Duration::from_secs(5));
        assert_eq!(policy.session_timeout, Duration::from_secs(1500));
    }

    #[test]
    fn test_immediate_zeroes_delays_only() {
        let policy = RetryPolicy::immediate();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.warmup_delay, Duration::ZERO);
        assert_eq!(policy.login_backoff, Duration::ZERO);
        assert_eq!(policy.session_timeout, Duration::from_secs(1500));
    }

    #[test]
    fn test_builders() {
        let policy = RetryPolicy::immediate()
            .with_max_retries(5)
            .with_retry_backoff(Duration::from_millis(50))
            .with_session_timeout(Duration::from_millis(10));
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.retry_backoff, Duration::from_millis(50));
        assert_eq!(policy.session_timeout, Duration::from_millis(10));
    }
}
