//! Documentation export.
//!
//! A [`DocRegistry`] collects named providers, each contributing a JSON
//! fragment. [`DocRegistry::collect`] deep-merges the fragments into one
//! documentation tree. This crate contributes the Default Profile under
//! `config.markup`, with keys in lower camel case.

use confique::toml::FormatOptions;
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

use crate::error::MarkupConfigError;
use crate::merge::merge_json;
use crate::profile::{MarkupConfig, SECTION, default_profile_ref};

/// Produces one fragment of the documentation tree.
pub type DocProvider = fn() -> Result<JsonMap<String, JsonValue>, MarkupConfigError>;

/// Name under which [`register`] adds the markup provider.
pub const PROVIDER_NAME: &str = "markup_config";

/// Append-only set of named documentation providers.
#[derive(Debug, Default)]
pub struct DocRegistry {
    providers: Vec<(&'static str, DocProvider)>,
}

impl DocRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider. Returns `false` (and keeps the existing one) if `name`
    /// is already registered.
    pub fn register(&mut self, name: &'static str, provider: DocProvider) -> bool {
        if self.providers.iter().any(|(n, _)| *n == name) {
            debug!(name, "documentation provider already registered");
            return false;
        }
        self.providers.push((name, provider));
        true
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Run every provider in registration order and merge the fragments.
    /// Later fragments win on conflicting leaves.
    pub fn collect(&self) -> Result<JsonValue, MarkupConfigError> {
        let mut root = JsonMap::new();
        for (name, provider) in &self.providers {
            debug!(name, "collecting documentation");
            merge_json(&mut root, provider()?);
        }
        Ok(JsonValue::Object(root))
    }
}

/// Register the markup documentation provider with `registry`.
pub fn register(registry: &mut DocRegistry) -> bool {
    registry.register(PROVIDER_NAME, markup_docs)
}

/// `{"config": {"markup": <Default Profile>}}`
pub fn markup_docs() -> Result<JsonMap<String, JsonValue>, MarkupConfigError> {
    let markup = serde_json::to_value(default_profile_ref())?;

    let mut config = JsonMap::new();
    config.insert(SECTION.to_string(), markup);
    let mut root = JsonMap::new();
    root.insert("config".to_string(), JsonValue::Object(config));
    Ok(root)
}

/// A commented TOML template of the markup section with every default.
pub fn template() -> String {
    confique::toml::template::<MarkupConfig>(FormatOptions::default())
}
