//! The resolved configuration and its Default Profile.

use std::sync::LazyLock;

use confique::Config;
use serde::Serialize;

use crate::highlight::HighlightConfig;
use crate::renderers::{
    AsciidocExtConfig, BlackFridayConfig, GoldmarkConfig, PandocConfig, TableOfContentsConfig,
};

/// Name of the top-level section the markup settings live under.
pub const SECTION: &str = "markup";

/// Settings for the markup rendering subsystem.
#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkupConfig {
    /// Renderer used for the "md" and "markdown" extensions.
    #[config(default = "goldmark")]
    pub default_markdown_handler: String,

    /// Code highlighting.
    #[config(nested)]
    pub highlight: HighlightConfig,

    /// Table of contents.
    #[config(nested)]
    pub table_of_contents: TableOfContentsConfig,

    /// Goldmark renderer.
    #[config(nested)]
    pub goldmark: GoldmarkConfig,

    /// Blackfriday renderer (legacy).
    #[config(nested)]
    #[serde(rename = "blackFriday")]
    pub blackfriday: BlackFridayConfig,

    /// Asciidoctor renderer.
    #[config(nested)]
    pub asciidoc_ext: AsciidocExtConfig,

    /// Pandoc renderer.
    #[config(nested)]
    pub pandoc: PandocConfig,
}

static DEFAULT_PROFILE: LazyLock<MarkupConfig> = LazyLock::new(|| {
    MarkupConfig::builder()
        .load()
        .expect("markup-config: every field of MarkupConfig declares a default")
});

/// An owned copy of the Default Profile.
pub fn default_profile() -> MarkupConfig {
    DEFAULT_PROFILE.clone()
}

/// The shared, read-only Default Profile.
pub fn default_profile_ref() -> &'static MarkupConfig {
    &DEFAULT_PROFILE
}

impl Default for MarkupConfig {
    fn default() -> Self {
        default_profile()
    }
}
