//! Retry policy and backoff timing.

use chrono::{DateTime, Utc};
use rand::Rng;
use reqwest::{
    StatusCode,
    header::{HeaderMap, RETRY_AFTER},
};
use std::time::Duration;

/// Longest delay the policy will ever produce.
const MAX_BACKOFF_SECS: f64 = 3600.0;

/// Exponential backoff with jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial: Duration,
    /// Upper bound on any delay.
    pub max: Duration,
    /// Growth factor per attempt.
    pub multiplier: f64,
    /// Add up to 25% random jitter.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial: Duration::from_millis(250),
            max: Duration::from_secs(8),
            multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Computed delay before retry number `attempt` (zero-based).
    ///
    /// Non-finite or negative settings are sanitized instead of panicking.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);

        let multiplier = if self.multiplier.is_finite() && self.multiplier >= 0.0 {
            self.multiplier
        } else {
            1.0
        };
        let initial = self.initial.as_secs_f64();
        let max = self.max_secs();

        let base = initial * multiplier.powi(exponent);
        let clamped = if base.is_finite() { base.clamp(0.0, max) } else { max };
        let delay = Duration::from_secs_f64(clamped);

        let delay = if self.jitter {
            let factor = rand::rng().random_range(0.0..=0.25);
            delay + delay.mul_f64(factor)
        } else {
            delay
        };

        delay.min(Duration::from_secs_f64(max))
    }

    /// Delay before retry number `attempt`, honouring a server `Retry-After`.
    #[must_use]
    pub fn delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        retry_after.map_or_else(
            || self.backoff(attempt),
            |wait| wait.min(Duration::from_secs_f64(self.max_secs())),
        )
    }

    fn max_secs(&self) -> f64 {
        self.max.as_secs_f64().min(MAX_BACKOFF_SECS)
    }
}

/// Server-requested delay for a response with `status`.
///
/// Only 429 and 503 responses may override the computed backoff; any other
/// status gets `None` even when it carries `Retry-After`.
#[must_use]
pub fn server_delay(status: StatusCode, headers: &HeaderMap) -> Option<Duration> {
    matches!(status, StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE)
        .then(|| parse_retry_after(headers))
        .flatten()
}

/// Parse a `Retry-After` header as delta-seconds or an HTTP date.
///
/// Dates in the past and negative values yield `None`.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();

    if let Ok(seconds) = value.parse::<i64>() {
        return u64::try_from(seconds).ok().map(Duration::from_secs);
    }

    let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
    (at - Utc::now()).to_std().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn steady() -> RetryPolicy {
        RetryPolicy {
            jitter: false,
            ..RetryPolicy::default()
        }
    }

    #[test]
    fn test_exponential_growth() {
        let policy = steady();
        assert_eq!(policy.backoff(0), Duration::from_millis(250));
        assert_eq!(policy.backoff(1), Duration::from_millis(500));
        assert_eq!(policy.backoff(2), Duration::from_secs(1));
        assert_eq!(policy.backoff(10), Duration::from_secs(8));
        assert_eq!(policy.backoff(u32::MAX), Duration::from_secs(8));
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let policy = RetryPolicy::default();
        for _ in 0..100 {
            let delay = policy.backoff(1);
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(625));
        }
        assert!(policy.backoff(20) <= policy.max);
    }

    #[test]
    fn test_bad_multiplier_is_sanitized() {
        let policy = RetryPolicy {
            multiplier: f64::NAN,
            ..steady()
        };
        assert_eq!(policy.backoff(5), Duration::from_millis(250));

        let policy = RetryPolicy {
            multiplier: -3.0,
            ..steady()
        };
        assert_eq!(policy.backoff(3), Duration::from_millis(250));
    }

    #[test]
    fn test_retry_after_overrides_and_is_clamped() {
        let policy = steady();
        assert_eq!(policy.delay(0, Some(Duration::from_secs(2))), Duration::from_secs(2));
        assert_eq!(policy.delay(0, Some(Duration::from_secs(120))), Duration::from_secs(8));
        assert_eq!(policy.delay(1, None), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static(" 3 "));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(3)));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("-1"));
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_server_delay_only_for_429_and_503() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("4"));

        let four = Some(Duration::from_secs(4));
        assert_eq!(server_delay(StatusCode::TOO_MANY_REQUESTS, &headers), four);
        assert_eq!(server_delay(StatusCode::SERVICE_UNAVAILABLE, &headers), four);
        assert_eq!(server_delay(StatusCode::INTERNAL_SERVER_ERROR, &headers), None);
        assert_eq!(server_delay(StatusCode::BAD_GATEWAY, &headers), None);
        assert_eq!(server_delay(StatusCode::GATEWAY_TIMEOUT, &headers), None);
    }

    #[test]
    fn test_future_http_date() {
        let at = Utc::now() + chrono::Duration::seconds(30);
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(&at.to_rfc2822()).unwrap());
        let wait = parse_retry_after(&headers).unwrap();
        assert!(wait <= Duration::from_secs(30));
        assert!(wait >= Duration::from_secs(25));
    }
}
