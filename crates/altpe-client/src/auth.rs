//! OAuth client-credentials exchange and the shared token cache.

use crate::{
    Result,
    error::AltPeError,
    request_log::{Exchange, RequestLog},
};
use altpe_types::TokenResponse;
use reqwest::{Client, StatusCode, header::ACCEPT};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::{future::Future, sync::Arc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};
use url::Url;

/// Cached bearer token, shared by every clone of a client.
///
/// Acquisition is single-flight: callers that find the cache empty queue on
/// a mutex and re-check before fetching, so concurrent requests trigger one
/// token exchange.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: RwLock<Option<Arc<SecretString>>>,
    fetch_lock: Mutex<()>,
}

impl TokenCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if one has been acquired.
    pub async fn current(&self) -> Option<Arc<SecretString>> {
        self.token.read().await.clone()
    }

    /// Return the cached token or run `fetch` to obtain one.
    ///
    /// # Errors
    ///
    /// Propagates the error from `fetch`; the cache stays empty.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<SecretString>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SecretString>>,
    {
        if let Some(token) = self.current().await {
            return Ok(token);
        }

        let _guard = self.fetch_lock.lock().await;
        if let Some(token) = self.current().await {
            return Ok(token);
        }

        let token = Arc::new(fetch().await?);
        *self.token.write().await = Some(Arc::clone(&token));
        Ok(token)
    }

    /// Drop `stale` from the cache.
    ///
    /// A no-op if another caller already replaced it.
    pub async fn invalidate(&self, stale: &Arc<SecretString>) {
        let mut slot = self.token.write().await;
        if slot.as_ref().is_some_and(|current| Arc::ptr_eq(current, stale)) {
            *slot = None;
        }
    }

    /// Drop whatever token is cached.
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }
}

/// Exchange client credentials for a bearer token.
///
/// # Errors
///
/// Returns [`AltPeError::Authentication`] when the server rejects the
/// credentials or answers with anything but a token, and
/// [`AltPeError::Request`] on transport failure.
pub(crate) async fn request_token(
    http: &Client,
    endpoint: Url,
    client_id: &str,
    client_secret: &SecretString,
    log: Option<&RequestLog>,
) -> Result<SecretString> {
    debug!(url = %endpoint, "requesting access token");

    let form = [
        ("client_id", client_id),
        ("client_secret", client_secret.expose_secret()),
    ];
    let response = http
        .post(endpoint.clone())
        .header(ACCEPT, "application/json")
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if let Some(log) = log {
        log.record(&Exchange {
            method: "POST",
            url: endpoint.as_str(),
            params: &[],
            data: Some(json!({
                "client_id": client_id,
                "client_secret": client_secret.expose_secret(),
            })),
            headers: json!({
                "Accept": "application/json",
                "Content-Type": "application/x-www-form-urlencoded",
            }),
            status: status.as_u16(),
            body: &body,
        })
        .await;
    }

    token_from_response(status, &body)
}

fn token_from_response(status: StatusCode, body: &str) -> Result<SecretString> {
    match status {
        StatusCode::OK => {
            let parsed: TokenResponse =
                serde_json::from_str(body).map_err(|source| AltPeError::Decode {
                    context: "oauth/token".to_string(),
                    source,
                })?;
            if parsed.token.trim().is_empty() {
                return Err(AltPeError::Authentication {
                    message: "Authentication failed: empty token".to_string(),
                    status: Some(200),
                });
            }
            Ok(SecretString::from(parsed.token))
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            warn!("token request rejected: invalid client credentials");
            Err(AltPeError::Authentication {
                message: "Invalid client credentials".to_string(),
                status: Some(422),
            })
        }
        other => {
            warn!(status = other.as_u16(), "token request failed");
            Err(AltPeError::Authentication {
                message: format!("Authentication failed: {}", body.trim()),
                status: Some(other.as_u16()),
            })
        }
    }
}
