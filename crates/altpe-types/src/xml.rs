//! Render records as indented XML.
//!
//! Useful for dropping API results into reports or prompts where XML reads
//! better than JSON. Objects become nested elements, arrays become repeated
//! `<item>` elements and `null` becomes an empty element.

use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;

/// Serialize `value` and render it as XML under a `root` element.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON.
pub fn to_xml<T: Serialize + ?Sized>(value: &T, root: &str) -> serde_json::Result<String> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_element(&mut out, &element_name(root), &value, 0);
    Ok(out)
}

fn write_element(out: &mut String, name: &str, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Null => {
            let _ = writeln!(out, "{indent}<{name}/>");
        }
        Value::Object(map) if map.is_empty() => {
            let _ = writeln!(out, "{indent}<{name}/>");
        }
        Value::Array(items) if items.is_empty() => {
            let _ = writeln!(out, "{indent}<{name}/>");
        }
        Value::Object(map) => {
            let _ = writeln!(out, "{indent}<{name}>");
            for (key, child) in map {
                write_element(out, &element_name(key), child, depth + 1);
            }
            let _ = writeln!(out, "{indent}</{name}>");
        }
        Value::Array(items) => {
            let _ = writeln!(out, "{indent}<{name}>");
            for child in items {
                write_element(out, "item", child, depth + 1);
            }
            let _ = writeln!(out, "{indent}</{name}>");
        }
        Value::String(s) => {
            let _ = writeln!(out, "{indent}<{name}>{}</{name}>", escape(s));
        }
        Value::Bool(b) => {
            let _ = writeln!(out, "{indent}<{name}>{b}</{name}>");
        }
        Value::Number(n) => {
            let _ = writeln!(out, "{indent}<{name}>{n}</{name}>");
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Coerce a JSON key into a valid XML element name.
fn element_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' })
        .collect();
    if !name.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_rendering() {
        let value = json!({"name": "Acme & Co", "sectors": [{"id": 22}], "uen": null});
        let xml = to_xml(&value, "company").unwrap();
        let expected = "<company>\n  <name>Acme &amp; Co</name>\n  <sectors>\n    <item>\n      \
                        <id>22</id>\n    </item>\n  </sectors>\n  <uen/>\n</company>\n";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_element_names_are_sanitized() {
        let xml = to_xml(&json!({"2023": "x", "a b": true}), "root").unwrap();
        assert!(xml.contains("<_2023>x</_2023>"));
        assert!(xml.contains("<a_b>true</a_b>"));
    }

    #[test]
    fn test_empty_collections() {
        let xml = to_xml(&json!({"data": []}), "page").unwrap();
        assert_eq!(xml, "<page>\n  <data/>\n</page>\n");
    }
}
