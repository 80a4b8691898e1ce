//! Rendering results to stdout.

use altpe::to_xml;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Pretty-printed JSON.
    Json,
    /// Indented XML.
    Xml,
}

/// Render `value` in `format`; `root` names the XML root element.
pub(crate) fn render<T: Serialize + ?Sized>(
    value: &T,
    root: &str,
    format: Format,
) -> Result<String> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Xml => to_xml(value, root)?,
    };
    Ok(text)
}

/// Render `value` and print it.
pub(crate) fn emit<T: Serialize + ?Sized>(value: &T, root: &str, format: Format) -> Result<()> {
    println!("{}", render(value, root, format)?.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json() {
        let text = render(&json!({"name": "Acme"}), "company", Format::Json).unwrap();
        assert!(text.contains("\"name\": \"Acme\""));
    }

    #[test]
    fn test_render_xml() {
        let text = render(&json!({"name": "Acme"}), "company", Format::Xml).unwrap();
        assert!(text.starts_with("<company>"));
        assert!(text.contains("<name>Acme</name>"));
    }
}
