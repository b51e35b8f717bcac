use serde_json::{Map as JsonMap, Value as JsonValue};
use toml::Table;

/// Lay `fallback` underneath `base`, in place.
///
/// Keys missing from `base` are taken from `fallback`. When both sides hold a
/// table for the same key, recurse. Any other value already in `base` is kept.
pub fn underlay(base: &mut Table, fallback: Table) {
    for (key, fallback_val) in fallback {
        match (base.remove(&key), fallback_val) {
            (Some(toml::Value::Table(mut base_tbl)), toml::Value::Table(fallback_tbl)) => {
                underlay(&mut base_tbl, fallback_tbl);
                base.insert(key, toml::Value::Table(base_tbl));
            }
            (Some(existing), _) => {
                base.insert(key, existing);
            }
            (None, fallback_val) => {
                base.insert(key, fallback_val);
            }
        }
    }
}

/// Deep-merge `overlay` into the JSON object `base`. Objects recurse; any
/// other value in `overlay` replaces the one in `base`.
pub fn merge_json(
    base: &mut JsonMap<String, JsonValue>,
    overlay: JsonMap<String, JsonValue>,
) {
    for (key, overlay_val) in overlay {
        match (base.remove(&key), overlay_val) {
            (Some(JsonValue::Object(mut base_obj)), JsonValue::Object(overlay_obj)) => {
                merge_json(&mut base_obj, overlay_obj);
                base.insert(key, JsonValue::Object(base_obj));
            }
            (_, overlay_val) => {
                base.insert(key, overlay_val);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(toml_str: &str) -> Table {
        toml_str.parse::<Table>().unwrap()
    }

    #[test]
    fn missing_keys_filled_from_fallback() {
        let mut base = table("smartypants = false");
        underlay(&mut base, table("fractions = false"));
        assert_eq!(base["smartypants"].as_bool(), Some(false));
        assert_eq!(base["fractions"].as_bool(), Some(false));
    }

    #[test]
    fn base_scalar_wins() {
        let mut base = table(r#"footnoteAnchorPrefix = "modern""#);
        underlay(&mut base, table(r#"footnoteAnchorPrefix = "legacy""#));
        assert_eq!(base["footnoteAnchorPrefix"].as_str(), Some("modern"));
    }

    #[test]
    fn nested_tables_recurse() {
        let mut base = table(
            r#"
            [parser]
            autoHeadingIDType = "blackfriday"
            "#,
        );
        let fallback = table(
            r#"
            [parser]
            autoHeadingIDType = "github"
            autoHeadingID = false
            "#,
        );
        underlay(&mut base, fallback);
        let parser = base["parser"].as_table().unwrap();
        assert_eq!(parser["autoHeadingIDType"].as_str(), Some("blackfriday"));
        assert_eq!(parser["autoHeadingID"].as_bool(), Some(false));
    }

    #[test]
    fn base_scalar_not_replaced_by_fallback_table() {
        let mut base = table("extensions = \"x\"");
        underlay(&mut base, table("[extensions]\na = 1"));
        assert_eq!(base["extensions"].as_str(), Some("x"));
    }

    #[test]
    fn empty_fallback_is_noop() {
        let mut base = table("a = 1");
        let before = base.clone();
        underlay(&mut base, Table::new());
        assert_eq!(base, before);
    }

    #[test]
    fn empty_base_takes_fallback() {
        let mut base = Table::new();
        let fallback = table("a = 1\n[b]\nc = 2");
        underlay(&mut base, fallback.clone());
        assert_eq!(base, fallback);
    }

    #[test]
    fn json_objects_merge_deeply() {
        let mut base = json!({"config": {"markup": {"a": 1}}});
        let overlay = json!({"config": {"security": {"b": 2}}});
        merge_json(
            base.as_object_mut().unwrap(),
            overlay.as_object().unwrap().clone(),
        );
        assert_eq!(base, json!({"config": {"markup": {"a": 1}, "security": {"b": 2}}}));
    }

    #[test]
    fn json_overlay_scalar_wins() {
        let mut base = JsonMap::new();
        base.insert("a".into(), json!(1));
        let mut overlay = JsonMap::new();
        overlay.insert("a".into(), json!(2));
        merge_json(&mut base, overlay);
        assert_eq!(base["a"], json!(2));
    }
}
