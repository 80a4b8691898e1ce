//! Loosely-typed scalar values and lenient field decoders.
//!
//! The API is not consistent about scalar encodings: ids come back as strings
//! or integers, optional numbers come back as `""`, and flags come back as
//! booleans or `0`/`1`. The helpers here absorb those differences so the
//! record types can stay strongly typed.

use derive_more::{Display, From};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned, de::Error as _};
use serde_json::Value;

/// Record identifier that the server may encode as an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id.
    #[display("{_0}")]
    Int(i64),
    /// Textual id.
    #[display("{_0}")]
    Text(String),
}

impl RecordId {
    /// Numeric value of the id, parsing textual ids when possible.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A field the server sends either as a number or as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum NumberOrText {
    /// Numeric value.
    #[display("{_0}")]
    Number(f64),
    /// Text value.
    #[display("{_0}")]
    Text(String),
}

impl NumberOrText {
    /// Numeric value, parsing text when it holds a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Decode an optional field, treating `null` and `""` as absent.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
}

/// Decode a flag sent as a boolean, a `0`/`1` number or a `"0"`/`"1"` string.
pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::Number(n) => Ok(n.as_f64().map(|v| v != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "1" | "true" | "yes" => Ok(Some(true)),
            "0" | "false" | "no" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid flag value: {other:?}"))),
        },
        other => Err(D::Error::custom(format!("invalid flag value: {other}"))),
    }
}

/// Decode a value sent either as a single string or as a list of strings.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

/// Decode a list that the server may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "empty_as_none")]
        quarter: Option<f64>,
        #[serde(default, deserialize_with = "lenient_flag")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "one_or_many")]
        errors: Vec<String>,
        #[serde(default, deserialize_with = "null_as_empty")]
        tags: Vec<String>,
    }

    fn decode(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_record_id_variants() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[12, "34", "abc"]"#).unwrap();
        assert_eq!(ids[0], RecordId::Int(12));
        assert_eq!(ids[1].as_i64(), Some(34));
        assert_eq!(ids[2].as_i64(), None);
        assert_eq!(ids[2].to_string(), "abc");
    }

    #[test]
    fn test_number_or_text() {
        let values: Vec<NumberOrText> = serde_json::from_str(r#"[1.5, "2.25", "n/a"]"#).unwrap();
        assert_eq!(values[0].as_f64(), Some(1.5));
        assert_eq!(values[1].as_f64(), Some(2.25));
        assert_eq!(values[2].as_f64(), None);
    }

    #[test]
    fn test_empty_string_is_none() {
        assert_eq!(decode(r#"{"quarter": ""}"#).quarter, None);
        assert_eq!(decode(r#"{"quarter": null}"#).quarter, None);
        assert_eq!(decode(r#"{"quarter": 3}"#).quarter, Some(3.0));
        assert_eq!(decode("{}").quarter, None);
    }

    #[test]
    fn test_empty_as_none_rejects_garbage() {
        assert!(serde_json::from_str::<Fields>(r#"{"quarter": "Q3"}"#).is_err());
    }

    #[test]
    fn test_flag_encodings() {
        assert_eq!(decode(r#"{"flag": true}"#).flag, Some(true));
        assert_eq!(decode(r#"{"flag": 0}"#).flag, Some(false));
        assert_eq!(decode(r#"{"flag": 1}"#).flag, Some(true));
        assert_eq!(decode(r#"{"flag": "1"}"#).flag, Some(true));
        assert_eq!(decode(r#"{"flag": null}"#).flag, None);
    }

    #[test]
    fn test_one_or_many() {
        assert_eq!(decode(r#"{"errors": "bad"}"#).errors, vec!["bad"]);
        assert_eq!(decode(r#"{"errors": ["a", "b"]}"#).errors, vec!["a", "b"]);
    }

    #[test]
    fn test_null_list() {
        assert!(decode(r#"{"tags": null}"#).tags.is_empty());
        assert_eq!(decode(r#"{"tags": ["x"]}"#).tags, vec!["x"]);
    }
}
