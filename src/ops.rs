//! Inspection operations: key lookup, listing, and result types.
//!
//! Works on the resolved config serialized with its exported (lower camel
//! case) key names, so `highlight.noClasses` reads the same way a user would
//! write it.

use std::fmt;

use confique::Config;
use confique::meta::{FieldKind, Meta};
use toml::{Table, Value};

use crate::error::MarkupConfigError;
use crate::profile::MarkupConfig;
use crate::provider::{matches_key, table_get};

/// Result of an inspection operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A generated TOML template string.
    Template(String),
    /// The exported documentation, as pretty-printed JSON.
    Docs(String),
    /// A key's resolved value and its doc comment.
    KeyValue {
        key: String,
        value: String,
        doc: Vec<String>,
    },
    /// All resolved configuration key-value pairs.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Template(t) | ConfigResult::Docs(t) => write!(f, "{t}"),
            ConfigResult::KeyValue { key, value, doc } => {
                for line in doc {
                    writeln!(f, "# {line}")?;
                }
                write!(f, "{key} = {value}")
            }
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Get a resolved value by dotted key, including its doc comment.
pub fn get_value(config: &MarkupConfig, key: &str) -> Result<ConfigResult, MarkupConfigError> {
    let table = to_table(config, key)?;
    let value = table_get(&table, key).ok_or_else(|| MarkupConfigError::KeyNotFound(key.into()))?;

    Ok(ConfigResult::KeyValue {
        key: key.into(),
        value: format_value(value),
        doc: lookup_doc(&MarkupConfig::META, key),
    })
}

/// List all resolved values as dotted key-value pairs.
pub fn list_values(config: &MarkupConfig) -> Result<ConfigResult, MarkupConfigError> {
    let table = to_table(config, "<list>")?;
    let mut entries = Vec::new();
    collect_entries("", &table, &mut entries);
    Ok(ConfigResult::Listing { entries })
}

fn to_table(config: &MarkupConfig, key: &str) -> Result<Table, MarkupConfigError> {
    match Value::try_from(config) {
        Ok(Value::Table(t)) => Ok(t),
        Ok(_) => Err(MarkupConfigError::InvalidValue {
            key: key.into(),
            reason: "config did not serialize to a table".into(),
        }),
        Err(e) => Err(MarkupConfigError::InvalidValue {
            key: key.into(),
            reason: e.to_string(),
        }),
    }
}

fn collect_entries(prefix: &str, table: &Table, out: &mut Vec<(String, String)>) {
    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(nested) => collect_entries(&dotted, nested, out),
            other => out.push((dotted, format_value(other))),
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Walk confique's `Meta` tree to find the doc comment for a dotted key path.
fn lookup_doc(meta: &Meta, dotted_key: &str) -> Vec<String> {
    let segments: Vec<&str> = dotted_key.split('.').collect();
    lookup_doc_recursive(meta, &segments)
}

fn lookup_doc_recursive(meta: &Meta, segments: &[&str]) -> Vec<String> {
    let Some((first, rest)) = segments.split_first() else {
        return vec![];
    };
    let Some(field) = meta.fields.iter().find(|f| matches_key(f.name, first)) else {
        return vec![];
    };
    if rest.is_empty() {
        return field.doc.iter().map(|s| s.trim().to_string()).collect();
    }
    match &field.kind {
        FieldKind::Nested { meta } => lookup_doc_recursive(meta, rest),
        FieldKind::Leaf { .. } => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::default_profile;

    #[test]
    fn get_flat_key() {
        let result = get_value(&default_profile(), "defaultMarkdownHandler").unwrap();
        match result {
            ConfigResult::KeyValue { value, .. } => assert_eq!(value, "goldmark"),
            other => panic!("Expected KeyValue, got {other:?}"),
        }
    }

    #[test]
    fn get_nested_key() {
        let result = get_value(&default_profile(), "highlight.tabWidth").unwrap();
        match result {
            ConfigResult::KeyValue { value, .. } => assert_eq!(value, "4"),
            other => panic!("Expected KeyValue, got {other:?}"),
        }
    }

    #[test]
    fn get_accepts_any_key_spelling() {
        let result = get_value(&default_profile(), "goldmark.parser.attribute.title").unwrap();
        match result {
            ConfigResult::KeyValue { value, .. } => assert_eq!(value, "true"),
            other => panic!("Expected KeyValue, got {other:?}"),
        }
        assert!(get_value(&default_profile(), "table_of_contents.end_level").is_ok());
    }

    #[test]
    fn get_acronym_key() {
        for key in ["goldmark.parser.autoHeadingID", "goldmark.parser.auto_heading_id"] {
            match get_value(&default_profile(), key).unwrap() {
                ConfigResult::KeyValue { value, .. } => assert_eq!(value, "true"),
                other => panic!("Expected KeyValue, got {other:?}"),
            }
        }
    }

    #[test]
    fn get_nonexistent_key() {
        let result = get_value(&default_profile(), "nonexistent");
        assert!(matches!(result, Err(MarkupConfigError::KeyNotFound(_))));
    }

    #[test]
    fn get_includes_doc() {
        let result = get_value(&default_profile(), "highlight.tabWidth").unwrap();
        match result {
            ConfigResult::KeyValue { doc, .. } => {
                let doc_text = doc.join(" ");
                assert!(doc_text.contains("Tab width"), "doc: {doc_text}");
            }
            other => panic!("Expected KeyValue, got {other:?}"),
        }
    }

    #[test]
    fn list_values_uses_exported_keys() {
        let result = list_values(&default_profile()).unwrap();
        match result {
            ConfigResult::Listing { entries } => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert!(keys.contains(&"defaultMarkdownHandler"));
                assert!(keys.contains(&"highlight.noClasses"));
                assert!(keys.contains(&"goldmark.parser.attribute.block"));
                assert!(keys.contains(&"blackFriday.footnoteAnchorPrefix"));
                assert!(keys.contains(&"asciidocExt.safeMode"));
                assert!(!keys.contains(&"goldmark.parser"));
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn list_values_formats_arrays() {
        let mut config = default_profile();
        config.blackfriday.extensions = vec!["hardLineBreak".into()];
        let result = list_values(&config).unwrap();
        match result {
            ConfigResult::Listing { entries } => {
                let ext = entries
                    .iter()
                    .find(|(k, _)| k == "blackFriday.extensions")
                    .unwrap();
                assert!(ext.1.contains("hardLineBreak"));
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn listing_display_format() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("defaultMarkdownHandler".into(), "goldmark".into()),
                ("highlight.style".into(), "monokai".into()),
            ],
        };
        let display = format!("{result}");
        assert_eq!(
            display,
            "defaultMarkdownHandler = goldmark\nhighlight.style = monokai"
        );
    }

    #[test]
    fn key_value_display_includes_doc() {
        let result = ConfigResult::KeyValue {
            key: "highlight.style".into(),
            value: "monokai".into(),
            doc: vec!["Name of the highlighting style.".into()],
        };
        assert_eq!(
            format!("{result}"),
            "# Name of the highlighting style.\nhighlight.style = monokai"
        );
    }
}
