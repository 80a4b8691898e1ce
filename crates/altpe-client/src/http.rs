//! Authenticated transport shared by every endpoint.

use crate::{
    Result,
    auth::{TokenCache, request_token},
    config::AltPeConfig,
    error::AltPeError,
    query::Query,
    request_log::{Exchange, REDACTED, RequestLog},
    retry::{RetryPolicy, server_delay},
};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tracing::{debug, warn};
use url::Url;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("altpe/", env!("CARGO_PKG_VERSION"));

/// Path prefix of every endpoint.
const API_PREFIX: [&str; 2] = ["api", "v2"];

/// HTTP transport: base URL, bearer token, retries and the request log.
///
/// Cloning is cheap and clones share the token cache.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: Client,
    base_url: Url,
    client_id: String,
    client_secret: SecretString,
    retry: RetryPolicy,
    tokens: TokenCache,
    log: Option<RequestLog>,
}

/// Result of one attempt.
enum Attempt {
    Success(String),
    Failed {
        error: AltPeError,
        retry_after: Option<Duration>,
    },
}

impl HttpClient {
    /// Build a transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AltPeError::MissingCredentials`] without credentials,
    /// [`AltPeError::Config`] for a bad base URL or a zero timeout and
    /// [`AltPeError::Request`] if the HTTP client cannot be built.
    pub fn new(config: &AltPeConfig) -> Result<Self> {
        let (client_id, client_secret) = config.credentials()?;
        let base_url = config.parsed_base_url()?;
        if config.timeout.is_zero() {
            return Err(AltPeError::Config("timeout must be greater than zero".to_string()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let retry = RetryPolicy {
            max_retries: config.max_retries,
            initial: config.backoff_initial,
            max: config.backoff_max,
            ..RetryPolicy::default()
        };

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                client_id: client_id.to_string(),
                client_secret: SecretString::from(client_secret.expose_secret().to_string()),
                retry,
                tokens: TokenCache::new(),
                log: config.log_requests.then(|| RequestLog::new(&config.log_dir)),
            }),
        })
    }

    /// Configured API host.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Retry policy in effect.
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.inner.retry
    }

    /// Absolute URL of `/api/v2/{segments...}`.
    ///
    /// Segments are percent-encoded; a trailing empty segment produces a
    /// trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`AltPeError::Config`] if the base URL cannot take a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| AltPeError::Config("base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Cached bearer token, fetching one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AltPeError::Authentication`] if the credentials are rejected.
    pub async fn token(&self) -> Result<Arc<SecretString>> {
        let inner = &self.inner;
        let token_url = self.endpoint(&["oauth", "token"])?;
        inner
            .tokens
            .get_or_fetch(|| {
                request_token(
                    &inner.http,
                    token_url,
                    &inner.client_id,
                    &inner.client_secret,
                    inner.log.as_ref(),
                )
            })
            .await
    }

    /// Forget the cached token; the next request authenticates again.
    pub async fn reset_token(&self) {
        self.inner.tokens.clear().await;
    }

    /// `GET /api/v2/{segments...}` and decode the JSON body into `T`.
    ///
    /// Retryable failures are retried with backoff. A 401 drops the cached
    /// token and the request is repeated once with a fresh one.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`AltPeError`] for the final failed attempt, or
    /// [`AltPeError::Decode`] if the body does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &Query,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let retry = &self.inner.retry;

        let mut attempt = 0u32;
        let mut reauthenticated = false;

        loop {
            let token = self.token().await?;
            match self.send(&url, query, &token, attempt).await {
                Attempt::Success(body) => {
                    return serde_json::from_str(&body)
                        .map_err(|source| AltPeError::Decode { context: path, source });
                }
                Attempt::Failed {
                    error: AltPeError::Authentication {
                        status: Some(401), ..
                    },
                    ..
                } if !reauthenticated => {
                    warn!(method = "GET", path = %path, "token rejected, re-authenticating");
                    self.inner.tokens.invalidate(&token).await;
                    reauthenticated = true;
                }
                Attempt::Failed { error, retry_after }
                    if error.is_retryable() && attempt < retry.max_retries =>
                {
                    let delay = retry.delay(attempt, retry_after);
                    warn!(
                        method = "GET",
                        path = %path,
                        status = ?error.status(),
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Attempt::Failed { error, .. } => return Err(error),
            }
        }
    }

    async fn send(&self, url: &Url, query: &Query, token: &SecretString, attempt: u32) -> Attempt {
        let inner = &self.inner;
        let path = url.path();

        let mut bearer = match HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())) {
            Ok(value) => value,
            Err(_) => {
                return Attempt::Failed {
                    error: AltPeError::Authentication {
                        message: "access token is not a valid header value".to_string(),
                        status: None,
                    },
                    retry_after: None,
                };
            }
        };
        bearer.set_sensitive(true);

        let mut request = inner
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, bearer);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }

        debug!(method = "GET", path, attempt, "sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return Attempt::Failed {
                    error: e.into(),
                    retry_after: None,
                };
            }
        };

        let status = response.status();
        let retry_after = server_delay(status, response.headers());
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Attempt::Failed {
                    error: e.into(),
                    retry_after: None,
                };
            }
        };

        debug!(
            method = "GET",
            path,
            status = status.as_u16(),
            attempt,
            bytes = body.len(),
            "received response"
        );

        if let Some(log) = &inner.log {
            log.record(&Exchange {
                method: "GET",
                url: url.as_str(),
                params: query.pairs(),
                data: None,
                headers: json!({"Accept": "application/json", "Authorization": REDACTED}),
                status: status.as_u16(),
                body: &body,
            })
            .await;
        }

        if status.is_success() {
            Attempt::Success(body)
        } else {
            Attempt::Failed {
                error: AltPeError::from_response(status, &body, retry_after),
                retry_after,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpClient {
        let config = AltPeConfig::default()
            .with_credentials("id", "secret")
            .with_base_url(base);
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let http = client("https://api.alternatives.pe");
        assert_eq!(
            http.endpoint(&["companies"]).unwrap().as_str(),
            "https://api.alternatives.pe/api/v2/companies"
        );
        assert_eq!(
            http.endpoint(&["funds", ""]).unwrap().as_str(),
            "https://api.alternatives.pe/api/v2/funds/"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let http = client("https://api.alternatives.pe/");
        assert_eq!(
            http.endpoint(&["companies", "A B/1", "uen"]).unwrap().as_str(),
            "https://api.alternatives.pe/api/v2/companies/A%20B%2F1/uen"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let http = client("http://localhost:8080/proxy/");
        assert_eq!(
            http.endpoint(&["people", "7"]).unwrap().as_str(),
            "http://localhost:8080/proxy/api/v2/people/7"
        );
    }

    #[test]
    fn test_requires_credentials() {
        let err = HttpClient::new(&AltPeConfig::default()).unwrap_err();
        assert!(matches!(err, AltPeError::MissingCredentials));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = AltPeConfig::default()
            .with_credentials("id", "secret")
            .with_timeout(Duration::ZERO);
        let err = HttpClient::new(&config).unwrap_err();
        assert!(matches!(err, AltPeError::Config(_)));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("altpe/"));
    }
}
