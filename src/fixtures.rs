#[cfg(test)]
pub mod test {
    use toml::Table;

    use crate::provider::from_toml_str;

    /// Parse a TOML fixture into a store.
    pub fn store(toml_str: &str) -> Table {
        from_toml_str(toml_str).unwrap()
    }

    /// A site configuration from before the markup section existed: renderer
    /// options at the top level and the attribute flag as a boolean.
    pub const LEGACY_SITE: &str = r#"
footnoteAnchorPrefix = "fn-"
footnoteReturnLinkContents = "↩"
pygmentsStyle = "dracula"
pygmentsUseClasses = true

[blackfriday]
hrefTargetBlank = true
extensions = "hardLineBreak"

[markup]
defaultMarkdownHandler = "blackfriday"

[markup.goldmark.parser]
attribute = true
"#;

    /// The same site written against the current schema.
    pub const MODERN_SITE: &str = r#"
[markup]
defaultMarkdownHandler = "blackfriday"

[markup.highlight]
style = "dracula"
noClasses = false

[markup.blackfriday]
hrefTargetBlank = true
extensions = ["hardLineBreak"]
footnoteAnchorPrefix = "fn-"
footnoteReturnLinkContents = "↩"

[markup.goldmark.parser.attribute]
title = true
"#;

    #[test]
    fn fixtures_parse() {
        assert!(store(LEGACY_SITE).contains_key("markup"));
        assert!(store(MODERN_SITE).contains_key("markup"));
    }
}
