//! Rewrites values whose shape changed between configuration versions.
//!
//! Runs on the raw section before decoding so the decoder only ever sees the
//! current shape. Each [`ShapeRule`] locates one path, checks for the old shape
//! and rewrites it in place. Rules touch disjoint paths, never fail, and are
//! idempotent: a value already in the new shape is left alone.

use toml::{Table, Value};
use tracing::debug;

use crate::provider::{matches_key, stored_key};

/// A boolean that has since become a table.
pub struct ShapeRule {
    /// Dotted path of the table holding the value, relative to the section.
    pub parent: &'static str,
    /// Key of the value inside `parent`.
    pub key: &'static str,
    /// Build the new shape from the old boolean.
    pub rewrite: fn(bool) -> Table,
}

pub const SHAPE_RULES: &[ShapeRule] = &[ShapeRule {
    parent: "goldmark.parser",
    key: "attribute",
    rewrite: parser_attribute,
}];

/// Apply every shape rule to `section`.
pub fn normalize(section: &mut Table) {
    for rule in SHAPE_RULES {
        apply(section, rule);
    }
}

// `attribute = true` used to mean "attributes on headings".
fn parser_attribute(title: bool) -> Table {
    let mut t = Table::new();
    t.insert("title".into(), Value::Boolean(title));
    t
}

fn apply(section: &mut Table, rule: &ShapeRule) {
    let Some(parent) = table_at_mut(section, rule.parent) else {
        return;
    };
    let keys: Vec<String> = parent
        .keys()
        .filter(|k| matches_key(k, rule.key))
        .cloned()
        .collect();
    for key in keys {
        if let Some(&Value::Boolean(old)) = parent.get(&key) {
            debug!(
                parent = rule.parent,
                key = %key,
                value = old,
                "rewriting legacy boolean shape"
            );
            parent.insert(key, Value::Table((rule.rewrite)(old)));
        }
    }
}

fn table_at_mut<'a>(table: &'a mut Table, dotted: &str) -> Option<&'a mut Table> {
    let mut current = table;
    for segment in dotted.split('.') {
        let key = stored_key(current, segment)?;
        current = current.get_mut(&key)?.as_table_mut()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(toml_str: &str) -> Table {
        toml_str.parse::<Table>().unwrap()
    }

    #[test]
    fn boolean_true_becomes_title_table() {
        let mut section = table("[goldmark.parser]\nattribute = true");
        normalize(&mut section);
        let attr = section["goldmark"]["parser"]["attribute"].as_table().unwrap();
        assert_eq!(attr["title"].as_bool(), Some(true));
        assert_eq!(attr.len(), 1);
    }

    #[test]
    fn boolean_false_becomes_title_table() {
        let mut section = table("[goldmark.parser]\nattribute = false");
        normalize(&mut section);
        let attr = section["goldmark"]["parser"]["attribute"].as_table().unwrap();
        assert_eq!(attr["title"].as_bool(), Some(false));
    }

    #[test]
    fn new_shape_passes_through() {
        let mut section = table("[goldmark.parser.attribute]\ntitle = false\nblock = true");
        let before = section.clone();
        normalize(&mut section);
        assert_eq!(section, before);
    }

    #[test]
    fn idempotent() {
        let mut once = table("[goldmark.parser]\nattribute = true\nautoHeadingID = false");
        normalize(&mut once);
        let mut twice = once.clone();
        normalize(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn sibling_keys_untouched() {
        let mut section = table("[goldmark.parser]\nattribute = true\nautoHeadingIDType = \"blackfriday\"");
        normalize(&mut section);
        let parser = section["goldmark"]["parser"].as_table().unwrap();
        assert_eq!(parser["autoHeadingIDType"].as_str(), Some("blackfriday"));
    }

    #[test]
    fn missing_path_is_noop() {
        let mut section = table("defaultMarkdownHandler = \"goldmark\"");
        let before = section.clone();
        normalize(&mut section);
        assert_eq!(section, before);
    }

    #[test]
    fn wrong_typed_parent_is_noop() {
        let mut section = table("[goldmark]\nparser = \"fast\"");
        let before = section.clone();
        normalize(&mut section);
        assert_eq!(section, before);
    }

    #[test]
    fn wrong_typed_value_is_noop() {
        let mut section = table("[goldmark.parser]\nattribute = \"yes\"");
        let before = section.clone();
        normalize(&mut section);
        assert_eq!(section, before);
    }

    #[test]
    fn every_spelling_is_rewritten() {
        let mut section = table("[goldmark.parser]\nAttribute = false\n[goldmark.parser.attribute]\nblock = true");
        normalize(&mut section);
        let parser = section["goldmark"]["parser"].as_table().unwrap();
        assert_eq!(parser["Attribute"]["title"].as_bool(), Some(false));
        assert_eq!(parser["attribute"]["block"].as_bool(), Some(true));
    }

    #[test]
    fn path_matches_case_insensitively() {
        let mut section = table("[Goldmark.Parser]\nAttribute = true");
        normalize(&mut section);
        let attr = section["Goldmark"]["Parser"]["Attribute"].as_table().unwrap();
        assert_eq!(attr["title"].as_bool(), Some(true));
    }
}
