//! Client configuration.

use crate::{Result, error::AltPeError};
use secrecy::{ExposeSecret, SecretString};
use std::{env, fmt, path::PathBuf, time::Duration};
use url::Url;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.alternatives.pe";

/// Environment variable holding the OAuth client id.
pub const ENV_CLIENT_ID: &str = "ALTERNATIVES_PE_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "ALTERNATIVES_PE_CLIENT_SECRET";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "ALTERNATIVES_PE_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT: &str = "ALTERNATIVES_PE_TIMEOUT";
/// Environment variable overriding the retry count.
pub const ENV_MAX_RETRIES: &str = "ALTERNATIVES_PE_MAX_RETRIES";
/// Environment variable enabling the JSONL request log.
pub const ENV_LOG_REQUESTS: &str = "ALTERNATIVES_PE_LOG_REQUESTS";
/// Environment variable setting the request log directory.
pub const ENV_LOG_DIR: &str = "ALTERNATIVES_PE_LOG_DIR";

/// Configuration for [`AltPeClient`](crate::AltPeClient).
pub struct AltPeConfig {
    /// API host, without the `/api/v2` prefix.
    pub base_url: String,
    /// OAuth client id.
    pub client_id: Option<String>,
    /// OAuth client secret.
    pub client_secret: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries after the first attempt for retryable failures.
    pub max_retries: u32,
    /// First retry delay.
    pub backoff_initial: Duration,
    /// Upper bound on any retry delay.
    pub backoff_max: Duration,
    /// Append every request/response to a JSONL file.
    pub log_requests: bool,
    /// Directory for the JSONL request log.
    pub log_dir: PathBuf,
}

impl Default for AltPeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: None,
            client_secret: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            backoff_initial: Duration::from_millis(250),
            backoff_max: Duration::from_secs(8),
            log_requests: false,
            log_dir: PathBuf::from("altpe-logs"),
        }
    }
}

impl fmt::Debug for AltPeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AltPeConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("backoff_initial", &self.backoff_initial)
            .field("backoff_max", &self.backoff_max)
            .field("log_requests", &self.log_requests)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl AltPeConfig {
    /// Build a configuration from the process environment.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        config.client_id = get(ENV_CLIENT_ID);
        config.client_secret = get(ENV_CLIENT_SECRET).map(SecretString::from);

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(raw) = get(ENV_TIMEOUT) {
            let secs: f64 = raw
                .parse()
                .map_err(|_| AltPeError::Config(format!("{ENV_TIMEOUT} is not a number: {raw}")))?;
            config.timeout = Duration::try_from_secs_f64(secs)
                .ok()
                .filter(|timeout| !timeout.is_zero())
                .ok_or_else(|| {
                    AltPeError::Config(format!("{ENV_TIMEOUT} must be a positive number: {raw}"))
                })?;
        }
        if let Some(raw) = get(ENV_MAX_RETRIES) {
            config.max_retries = raw.parse().map_err(|_| {
                AltPeError::Config(format!("{ENV_MAX_RETRIES} is not a whole number: {raw}"))
            })?;
        }
        if let Some(raw) = get(ENV_LOG_REQUESTS) {
            config.log_requests = parse_flag(&raw);
        }
        if let Some(dir) = get(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set the client credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(SecretString::from(client_secret.into()));
        self
    }

    /// Set the API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry count.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the retry backoff bounds.
    #[must_use]
    pub const fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.backoff_initial = initial;
        self.backoff_max = max;
        self
    }

    /// Enable the JSONL request log in `dir`.
    #[must_use]
    pub fn with_request_log(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_requests = true;
        self.log_dir = dir.into();
        self
    }

    /// The client id and secret, if both are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AltPeError::MissingCredentials`] otherwise.
    pub fn credentials(&self) -> Result<(&str, &SecretString)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret))
                if !id.trim().is_empty() && !secret.expose_secret().trim().is_empty() =>
            {
                Ok((id.as_str(), secret))
            }
            _ => Err(AltPeError::MissingCredentials),
        }
    }

    /// The base URL, parsed and checked.
    ///
    /// # Errors
    ///
    /// Returns [`AltPeError::Config`] unless it is an absolute http(s) URL.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| AltPeError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(AltPeError::Config(format!(
                "base URL must be an absolute http(s) URL: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AltPeConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert!(!config.log_requests);
        assert!(matches!(config.credentials(), Err(AltPeError::MissingCredentials)));
    }

    #[test]
    fn test_from_lookup() {
        let config = AltPeConfig::from_lookup(lookup(&[
            (ENV_CLIENT_ID, "id"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_TIMEOUT, "2.5"),
            (ENV_MAX_RETRIES, "5"),
            (ENV_LOG_REQUESTS, "TRUE"),
            (ENV_LOG_DIR, "/tmp/altpe"),
        ]))
        .unwrap();

        let (id, secret) = config.credentials().unwrap();
        assert_eq!(id, "id");
        assert_eq!(secret.expose_secret(), "secret");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.max_retries, 5);
        assert!(config.log_requests);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/altpe"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        let err = AltPeConfig::from_lookup(lookup(&[(ENV_TIMEOUT, "soon")])).unwrap_err();
        assert!(matches!(err, AltPeError::Config(ref m) if m.contains(ENV_TIMEOUT)));

        let err = AltPeConfig::from_lookup(lookup(&[(ENV_MAX_RETRIES, "-1")])).unwrap_err();
        assert!(matches!(err, AltPeError::Config(_)));
    }

    #[test]
    fn test_from_lookup_rejects_zero_timeout() {
        for raw in ["0", "0.0", "-2"] {
            let err = AltPeConfig::from_lookup(lookup(&[(ENV_TIMEOUT, raw)])).unwrap_err();
            assert!(matches!(err, AltPeError::Config(ref m) if m.contains("positive")));
        }
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let config = AltPeConfig::default().with_credentials("id", "  ");
        assert!(matches!(config.credentials(), Err(AltPeError::MissingCredentials)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AltPeConfig::default().with_credentials("id", "hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_base_url_validation() {
        assert!(AltPeConfig::default().parsed_base_url().is_ok());
        assert!(AltPeConfig::default().with_base_url("ftp://host").parsed_base_url().is_err());
        assert!(AltPeConfig::default().with_base_url("not a url").parsed_base_url().is_err());
    }
}
