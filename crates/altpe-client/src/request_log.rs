//! Append-only JSONL log of API exchanges.
//!
//! Each request/response pair becomes one line in
//! `{dir}/requests-YYYY-MM-DD.jsonl` (UTC date). Credentials and tokens are
//! redacted before anything touches disk.

use chrono::{NaiveDate, Utc};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};
use tracing::warn;

/// Replacement for redacted values.
pub const REDACTED: &str = "***REDACTED***";

const SENSITIVE_KEYS: [&str; 4] = ["authorization", "client_secret", "client_id", "token"];

/// Writer for the JSONL request log.
#[derive(Debug)]
pub struct RequestLog {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

/// One request/response pair.
#[derive(Debug)]
pub(crate) struct Exchange<'a> {
    pub(crate) method: &'a str,
    pub(crate) url: &'a str,
    pub(crate) params: &'a [(String, String)],
    pub(crate) data: Option<Value>,
    pub(crate) headers: Value,
    pub(crate) status: u16,
    pub(crate) body: &'a str,
}

impl Exchange<'_> {
    fn to_entry(&self) -> Value {
        let params: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        let (body_json, body_text) = match serde_json::from_str::<Value>(self.body) {
            Ok(parsed) => (parsed, Value::Null),
            Err(_) => (Value::Null, Value::String(self.body.to_string())),
        };

        redact(json!({
            "timestamp": Utc::now().to_rfc3339(),
            "method": self.method,
            "url": self.url,
            "request": {
                "params": params,
                "data": self.data.clone().unwrap_or_else(|| json!({})),
                "headers": self.headers,
            },
            "response": {
                "status_code": self.status,
                "json": body_json,
                "text": body_text,
            },
        }))
    }
}

impl RequestLog {
    /// Log into `dir`, created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Directory the log writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding entries for `date`.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("requests-{}.jsonl", date.format("%Y-%m-%d")))
    }

    /// Append one exchange. Failures are logged, never returned.
    pub(crate) async fn record(&self, exchange: &Exchange<'_>) {
        let path = self.path_for(Utc::now().date_naive());
        if let Err(e) = self.append(&path, &exchange.to_entry()).await {
            warn!(path = %path.display(), error = %e, "failed to write request log");
        }
    }

    async fn append(&self, path: &Path, entry: &Value) -> std::io::Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        tokio::fs::create_dir_all(&self.dir).await?;
        let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}

/// Replace sensitive keys anywhere in `value` with [`REDACTED`].
#[must_use]
pub fn redact(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| {
                    if is_sensitive(&key) {
                        (key, Value::String(REDACTED.to_string()))
                    } else {
                        (key, redact(child))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(redact).collect()),
        other => other,
    }
}

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_nested() {
        let value = json!({
            "headers": {"Authorization": "Bearer abc", "Accept": "application/json"},
            "data": [{"client_secret": "s", "client_id": "i"}],
            "response": {"TOKEN": "t", "name": "ok"},
        });
        let redacted = redact(value);
        assert_eq!(redacted["headers"]["Authorization"], REDACTED);
        assert_eq!(redacted["headers"]["Accept"], "application/json");
        assert_eq!(redacted["data"][0]["client_secret"], REDACTED);
        assert_eq!(redacted["data"][0]["client_id"], REDACTED);
        assert_eq!(redacted["response"]["TOKEN"], REDACTED);
        assert_eq!(redacted["response"]["name"], "ok");
    }

    #[test]
    fn test_entry_shape() {
        let params = vec![("limit".to_string(), "10".to_string())];
        let exchange = Exchange {
            method: "GET",
            url: "https://api.example.com/api/v2/funds/",
            params: &params,
            data: None,
            headers: json!({"authorization": "Bearer x"}),
            status: 200,
            body: r#"{"token": "abc", "total_records": 0}"#,
        };
        let entry = exchange.to_entry();
        assert_eq!(entry["method"], "GET");
        assert_eq!(entry["request"]["params"]["limit"], "10");
        assert_eq!(entry["request"]["headers"]["authorization"], REDACTED);
        assert_eq!(entry["response"]["status_code"], 200);
        assert_eq!(entry["response"]["json"]["token"], REDACTED);
        assert_eq!(entry["response"]["text"], Value::Null);
        assert_eq!(entry["request"]["data"], json!({}));
    }

    #[test]
    fn test_non_json_body_kept_as_text() {
        let exchange = Exchange {
            method: "GET",
            url: "u",
            params: &[],
            data: None,
            headers: json!({}),
            status: 502,
            body: "Bad Gateway",
        };
        let entry = exchange.to_entry();
        assert_eq!(entry["response"]["json"], Value::Null);
        assert_eq!(entry["response"]["text"], "Bad Gateway");
    }

    #[test]
    fn test_daily_file_name() {
        let log = RequestLog::new("/var/log/altpe");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            log.path_for(date),
            PathBuf::from("/var/log/altpe/requests-2024-03-09.jsonl")
        );
    }

    #[tokio::test]
    async fn test_record_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = RequestLog::new(dir.path().join("nested"));
        let exchange = Exchange {
            method: "POST",
            url: "u",
            params: &[],
            data: Some(json!({"client_id": "id", "client_secret": "secret"})),
            headers: json!({}),
            status: 200,
            body: "{}",
        };
        log.record(&exchange).await;
        log.record(&exchange).await;

        let path = log.path_for(Utc::now().date_naive());
        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!contents.contains("\"secret\""));
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["request"]["data"]["client_secret"], REDACTED);
    }
}
