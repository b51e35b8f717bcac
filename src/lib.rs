//! Resolve the markup rendering settings of a site configuration into one
//! typed, fully populated struct.
//!
//! The settings live in a `markup` section of a larger configuration store.
//! Users write any subset of keys, in any letter case, sometimes with values
//! of the wrong scalar type, and sometimes still in shapes or places that an
//! older version of the schema used. Resolution turns all of that into a
//! [`MarkupConfig`]:
//!
//! ```ignore
//! let store = markup_config::from_toml_str(&std::fs::read_to_string("site.toml")?)?;
//! let config = markup_config::decode(&store)?;
//! assert_eq!(config.default_markdown_handler, "goldmark");
//! ```
//!
//! # Design: struct as source of truth
//!
//! [`MarkupConfig`] and its nested sub-schemas derive confique's `Config`:
//!
//! - **`#[config(default = ...)]`** declares the Default Profile. An empty or
//!   absent section resolves to exactly these values.
//! - **`///` doc comments** become the comments in the generated template and
//!   the output of `markup get`.
//! - **`#[config(nested)]`** models the sub-sections (`highlight`,
//!   `goldmark.parser.attribute`, ...).
//!
//! The same metadata drives key matching and type coercion during decoding,
//! so adding a field to a struct is all it takes for it to be read, coerced,
//! listed, documented, and exported.
//!
//! # Resolution
//!
//! ```text
//! Default Profile        #[config(default = ...)]
//!        ↑ overridden by
//! Legacy top-level       [blackfriday], footnoteAnchorPrefix, pygments*
//!        ↑ overridden by
//! Markup section         [markup]
//! ```
//!
//! Every layer is **sparse**. Only keys that are present override anything.
//! Legacy top-level settings never overwrite a value set in the markup
//! section. They only fill in what the section leaves unset.
//!
//! Before decoding, values in an outdated shape are rewritten to the current
//! one. Today that is `goldmark.parser.attribute`, which used to be a single
//! boolean and is now a table with `title` and `block` flags; a boolean `b`
//! becomes `{ title = b }`.
//!
//! # Permissive decoding
//!
//! Keys match schema fields ignoring ASCII case and underscores
//! (`defaultMarkdownHandler`, `defaultmarkdownhandler` and
//! `default_markdown_handler` are the same key). Scalars are weakly coerced to
//! the declared type: `"true"` and `1` become booleans, numbers become
//! strings, a single string becomes a one-element list. A value that can't be
//! coerced (a table where a boolean is expected, `"two"` where an integer is
//! expected) fails with [`MarkupConfigError::Decode`].
//!
//! Unknown keys are logged and ignored. Turn on
//! [`.strict(true)`](MarkupResolverBuilder::strict) to reject them with
//! [`MarkupConfigError::UnknownKeys`] instead.
//!
//! # Documentation export
//!
//! [`DocRegistry`] gathers named JSON fragments into one documentation tree;
//! [`docs::register`] adds the Default Profile under `config.markup` with keys
//! in lower camel case.
//!
//! # Core library, no CLI framework required
//!
//! Inspection runs through [`MarkupAction`] and
//! [`MarkupResolverBuilder::handle()`]. For [clap](https://docs.rs/clap) users,
//! the `cli` module (behind the default `clap` feature) provides
//! `markup list|get|template|docs` subcommands.
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` and
//! `trace` level for each resolution step and `warn` for malformed legacy
//! values. It never installs a subscriber.

pub mod docs;
pub mod error;
pub mod highlight;
pub mod profile;
pub mod provider;
pub mod renderers;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod coerce;
mod decode;
mod legacy;
pub(crate) mod merge;
mod normalize;
mod ops;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use builder::{MarkupResolver, MarkupResolverBuilder};
#[cfg(feature = "clap")]
pub use cli::{MarkupArgs, MarkupSubcommand};
pub use docs::DocRegistry;
pub use error::MarkupConfigError;
pub use ops::ConfigResult;
pub use profile::{MarkupConfig, default_profile};
pub use provider::{ConfigProvider, from_toml_str};
pub use resolve::ResolveOptions;
pub use types::MarkupAction;

/// Resolve the markup configuration from `provider` with default options.
pub fn decode<P: ConfigProvider + ?Sized>(provider: &P) -> Result<MarkupConfig, MarkupConfigError> {
    resolve::resolve(provider, &ResolveOptions::default())
}
