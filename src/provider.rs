//! The generic key-value store the resolver reads from.
//!
//! The store is an arbitrary nested string-keyed map. Resolution only needs
//! three things from it: a named top-level section as a table, a top-level
//! scalar as a string, and a top-level legacy table. [`ConfigProvider`] covers
//! those with a single required method, dotted-path [`lookup`](ConfigProvider::lookup),
//! and derives the rest through the weak coercion table in [`crate::coerce`].
//!
//! `toml::Table` implements the trait directly, so a parsed config document is
//! already a provider.

use toml::{Table, Value};

use crate::coerce::{self, Target};
use crate::error::MarkupConfigError;

/// Read access to a nested configuration store.
pub trait ConfigProvider {
    /// Look up a value by dotted path (e.g. `"markup.goldmark.parser"`).
    fn lookup(&self, key: &str) -> Option<&Value>;

    /// Look up a table by dotted path. Returns an owned copy so the caller can
    /// mutate it without touching the store.
    fn get_table(&self, key: &str) -> Option<Table> {
        self.lookup(key)?.as_table().cloned()
    }

    /// Look up a scalar and convert it to a string.
    fn get_string(&self, key: &str) -> Option<String> {
        match coerce::coerce(self.lookup(key)?.clone(), Target::Str) {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a scalar and convert it to a bool.
    fn get_bool(&self, key: &str) -> Option<bool> {
        coerce::coerce(self.lookup(key)?.clone(), Target::Bool).as_bool()
    }

    fn is_set(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

impl ConfigProvider for Table {
    fn lookup(&self, key: &str) -> Option<&Value> {
        table_get(self, key)
    }
}

/// Parse a TOML document into a store.
pub fn from_toml_str(content: &str) -> Result<Table, MarkupConfigError> {
    Ok(toml::from_str(content)?)
}

/// Navigate a `toml::Table` by dotted key path.
///
/// Each segment is matched exactly first, then with [`matches_key`], so
/// `"Markup.Goldmark"` finds `markup.goldmark`.
pub fn table_get<'a>(table: &'a Table, dotted_key: &str) -> Option<&'a Value> {
    let mut segments = dotted_key.split('.');
    let mut current = find_segment(table, segments.next()?)?;
    for segment in segments {
        current = find_segment(current.as_table()?, segment)?;
    }
    Some(current)
}

/// The key actually stored in `table` that matches `key`, if any.
pub fn stored_key(table: &Table, key: &str) -> Option<String> {
    if table.contains_key(key) {
        return Some(key.to_string());
    }
    table.keys().find(|k| matches_key(k, key)).cloned()
}

/// Key equality ignoring ASCII case and underscores.
///
/// `defaultMarkdownHandler`, `defaultmarkdownhandler` and
/// `default_markdown_handler` all name the same field.
pub fn matches_key(a: &str, b: &str) -> bool {
    let mut a = a.chars().filter(|c| *c != '_');
    let mut b = b.chars().filter(|c| *c != '_');
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => {}
            _ => return false,
        }
    }
}

fn find_segment<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    table
        .get(key)
        .or_else(|| table.iter().find(|(k, _)| matches_key(k, key)).map(|(_, v)| v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(toml_str: &str) -> Table {
        from_toml_str(toml_str).unwrap()
    }

    #[test]
    fn lookup_flat_key() {
        let s = store("footnoteAnchorPrefix = \"fn-\"");
        assert_eq!(s.lookup("footnoteAnchorPrefix").unwrap().as_str(), Some("fn-"));
    }

    #[test]
    fn lookup_nested_key() {
        let s = store("[markup.goldmark.parser]\nattribute = true");
        let v = s.lookup("markup.goldmark.parser.attribute").unwrap();
        assert_eq!(v.as_bool(), Some(true));
    }

    #[test]
    fn lookup_matches_case_insensitively() {
        let s = store("[Markup]\nDefaultMarkdownHandler = \"blackfriday\"");
        let v = s.lookup("markup.defaultMarkdownHandler").unwrap();
        assert_eq!(v.as_str(), Some("blackfriday"));
    }

    #[test]
    fn lookup_missing_key() {
        let s = store("port = 8080");
        assert!(s.lookup("nope").is_none());
        assert!(s.lookup("port.deeper").is_none());
    }

    #[test]
    fn concrete_table_and_trait_object_agree() {
        let s = store("[Markup.Goldmark]\nrenderer = 1");
        let provider: &dyn ConfigProvider = &s;
        assert_eq!(s.lookup("markup.goldmark.renderer").and_then(Value::as_integer), Some(1));
        assert_eq!(
            s.lookup("markup.goldmark.renderer"),
            provider.lookup("markup.goldmark.renderer")
        );
    }

    #[test]
    fn get_table_returns_copy() {
        let s = store("[markup]\ndefaultMarkdownHandler = \"goldmark\"");
        let mut section = s.get_table("markup").unwrap();
        section.insert("extra".into(), Value::Boolean(true));
        assert!(s.lookup("markup.extra").is_none());
    }

    #[test]
    fn get_table_on_scalar_is_none() {
        let s = store("markup = 5");
        assert!(s.get_table("markup").is_none());
    }

    #[test]
    fn get_string_converts_numbers() {
        let s = store("footnoteAnchorPrefix = 42");
        assert_eq!(s.get_string("footnoteAnchorPrefix").as_deref(), Some("42"));
    }

    #[test]
    fn get_string_on_table_is_none() {
        let s = store("[footnoteAnchorPrefix]\na = 1");
        assert!(s.get_string("footnoteAnchorPrefix").is_none());
    }

    #[test]
    fn get_bool_parses_strings() {
        let s = store("pygmentsUseClasses = \"true\"\npygmentsCodeFences = 0");
        assert_eq!(s.get_bool("pygmentsUseClasses"), Some(true));
        assert_eq!(s.get_bool("pygmentsCodeFences"), Some(false));
    }

    #[test]
    fn get_bool_rejects_garbage() {
        let s = store("pygmentsUseClasses = \"maybe\"");
        assert_eq!(s.get_bool("pygmentsUseClasses"), None);
    }

    #[test]
    fn matches_key_ignores_case_and_underscores() {
        assert!(matches_key("default_markdown_handler", "defaultMarkdownHandler"));
        assert!(matches_key("hl_lines", "hl_Lines"));
        assert!(matches_key("goldmark", "GOLDMARK"));
        assert!(!matches_key("goldmark", "goldmarks"));
        assert!(!matches_key("style", "styl"));
    }

    #[test]
    fn stored_key_prefers_exact_match() {
        let s = store("Style = 1\nstyle = 2");
        assert_eq!(stored_key(&s, "style").as_deref(), Some("style"));
        assert_eq!(stored_key(&s, "STYLE").as_deref(), Some("Style"));
    }

    #[test]
    fn from_toml_str_rejects_invalid_documents() {
        let err = from_toml_str("markup = [").unwrap_err();
        assert!(matches!(err, MarkupConfigError::Parse(_)));
    }
}
