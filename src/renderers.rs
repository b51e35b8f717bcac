//! Per-renderer settings.
//!
//! Each backend owns its own schema; the resolver only decodes these onto
//! their defaults and never checks what the options mean.

use confique::Config;
use serde::Serialize;

/// Table of contents levels.
#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableOfContentsConfig {
    /// First heading level included.
    #[config(default = 2)]
    pub start_level: u32,

    /// Last heading level included.
    #[config(default = 3)]
    pub end_level: u32,

    /// Render an ordered list instead of an unordered one.
    #[config(default = false)]
    pub ordered: bool,
}

// -- Goldmark -----------------------------------------------------------------

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoldmarkConfig {
    /// HTML renderer options.
    #[config(nested)]
    pub renderer: GoldmarkRenderer,

    /// Parser options.
    #[config(nested)]
    pub parser: GoldmarkParser,

    /// Enabled markdown extensions.
    #[config(nested)]
    pub extensions: GoldmarkExtensions,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoldmarkRenderer {
    /// Render soft line breaks as hard breaks.
    #[config(default = false)]
    pub hard_wraps: bool,

    /// Emit XHTML instead of HTML.
    #[config(default = false)]
    pub xhtml: bool,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoldmarkParser {
    /// Generate heading IDs automatically.
    #[config(default = true)]
    #[serde(rename = "autoHeadingID")]
    pub auto_heading_id: bool,

    /// Heading ID style: "github", "github-ascii" or "blackfriday".
    #[config(default = "github")]
    #[serde(rename = "autoHeadingIDType")]
    pub auto_heading_id_type: String,

    /// Attribute syntax support.
    #[config(nested)]
    pub attribute: ParserAttribute,
}

/// Where `{.class #id}` attribute syntax is accepted.
///
/// Older configurations set this as a single boolean meaning "on titles".
#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParserAttribute {
    /// Accept attributes on headings.
    #[config(default = true)]
    pub title: bool,

    /// Accept attributes on block elements.
    #[config(default = false)]
    pub block: bool,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoldmarkExtensions {
    #[config(default = true)]
    pub typographer: bool,
    #[config(default = true)]
    pub footnote: bool,
    #[config(default = true)]
    pub definition_list: bool,
    #[config(default = true)]
    pub table: bool,
    #[config(default = true)]
    pub strikethrough: bool,
    #[config(default = true)]
    pub linkify: bool,
    #[config(default = true)]
    pub task_list: bool,
}

// -- Blackfriday --------------------------------------------------------------

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlackFridayConfig {
    /// Enable smart punctuation.
    #[config(default = true)]
    pub smartypants: bool,

    /// Use LaTeX-style dashes with smart punctuation.
    #[config(default = true)]
    pub smartypants_latex_dashes: bool,

    /// Render angled double quotes.
    #[config(default = false)]
    pub angled_quotes: bool,

    /// Render fractions like 1/2 as typographic fractions.
    #[config(default = true)]
    pub fractions: bool,

    /// Open external links in a new window.
    #[config(default = false)]
    pub href_target_blank: bool,

    /// Add rel="nofollow" to external links.
    #[config(default = false)]
    pub nofollow_links: bool,

    /// Add rel="noreferrer" to external links.
    #[config(default = false)]
    pub noreferrer_links: bool,

    /// Enable smart dashes.
    #[config(default = true)]
    pub smart_dashes: bool,

    /// Use LaTeX-style dashes.
    #[config(default = true)]
    pub latex_dashes: bool,

    /// Render task lists.
    #[config(default = true)]
    pub task_lists: bool,

    /// Use plain heading IDs without a document-specific suffix.
    #[config(default = false)]
    #[serde(rename = "plainIDAnchors")]
    pub plain_id_anchors: bool,

    /// Drop raw HTML from content.
    #[config(default = false)]
    #[serde(rename = "skipHTML")]
    pub skip_html: bool,

    /// Extra extensions to enable.
    #[config(default = [])]
    pub extensions: Vec<String>,

    /// Default extensions to disable.
    #[config(default = [])]
    pub extensions_mask: Vec<String>,

    /// Prefix for footnote anchors.
    #[config(default = "")]
    pub footnote_anchor_prefix: String,

    /// Text of the link back from a footnote.
    #[config(default = "")]
    pub footnote_return_link_contents: String,
}

// -- External renderers -------------------------------------------------------

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AsciidocExtConfig {
    /// Output backend.
    #[config(default = "html5")]
    pub backend: String,

    /// Extensions to load.
    #[config(default = [])]
    pub extensions: Vec<String>,

    /// Render the body only.
    #[config(default = true)]
    pub no_header_or_footer: bool,

    /// Safe mode: "unsafe", "safe", "server" or "secure".
    #[config(default = "unsafe")]
    pub safe_mode: String,

    /// Number section titles.
    #[config(default = false)]
    pub section_numbers: bool,

    #[config(default = false)]
    pub verbose: bool,

    #[config(default = false)]
    pub trace: bool,

    /// Minimum log level that fails the render.
    #[config(default = "fatal")]
    pub fail_level: String,

    /// Keep the renderer's own table of contents.
    #[config(default = true)]
    #[serde(rename = "preserveTOC")]
    pub preserve_toc: bool,
}

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PandocConfig {
    /// Input format passed to the renderer.
    #[config(default = "markdown")]
    pub input_format: String,

    /// Input format extensions, e.g. "+smart".
    #[config(default = [])]
    pub extensions: Vec<String>,

    /// Extra command line arguments.
    #[config(default = [])]
    pub extra_args: Vec<String>,
}
