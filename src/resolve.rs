//! Core resolution pipeline: turn a configuration store into a typed
//! [`MarkupConfig`].
//!
//! Operates on an in-memory store with no I/O. Steps:
//!
//! 1. Extract the section; if absent, return the Default Profile
//! 2. Rewrite legacy value shapes in place
//! 3. Canonicalize keys and coerce scalars against the schema
//! 4. Lay relocated legacy top-level tables underneath
//! 5. Decode onto the declared defaults
//! 6. Fill still-empty fields from legacy top-level scalars

use confique::Config;
use toml::{Table, Value};
use tracing::debug;

use crate::decode;
use crate::error::MarkupConfigError;
use crate::legacy;
use crate::normalize;
use crate::profile::{MarkupConfig, SECTION, default_profile};
use crate::provider::ConfigProvider;

/// Knobs for a single resolution. See [`MarkupResolverBuilder`](crate::MarkupResolverBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Top-level section holding the markup settings.
    pub section: String,
    /// Reject keys the schema doesn't know.
    pub strict: bool,
    /// Honor legacy top-level keys.
    pub legacy: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            section: SECTION.to_string(),
            strict: false,
            legacy: true,
        }
    }
}

/// Look up the section. `None` if absent; a non-table value is a decode error.
pub fn extract_section<P: ConfigProvider + ?Sized>(
    provider: &P,
    name: &str,
) -> Result<Option<Table>, MarkupConfigError> {
    match provider.lookup(name) {
        None => Ok(None),
        Some(Value::Table(t)) => Ok(Some(t.clone())),
        Some(other) => Err(MarkupConfigError::Decode {
            section: name.into(),
            reason: format!("expected a table, found {}", other.type_str()),
        }),
    }
}

/// Resolve the markup configuration from `provider`.
pub fn resolve<P: ConfigProvider + ?Sized>(
    provider: &P,
    options: &ResolveOptions,
) -> Result<MarkupConfig, MarkupConfigError> {
    // 1: Extract
    let Some(mut section) = extract_section(provider, &options.section)? else {
        debug!(section = %options.section, "section absent, using default profile");
        return Ok(default_profile());
    };

    // 2: Legacy shapes
    normalize::normalize(&mut section);

    // 3: Canonical keys, weak coercion
    decode::conform(&MarkupConfig::META, &mut section);

    // 4: Legacy top-level tables underneath the section
    if options.legacy {
        legacy::relocate_sections(provider, &mut section);
    }

    // 5: Decode onto defaults
    let mut config: MarkupConfig = decode::decode(section, &options.section, options.strict)?;

    // 6: Legacy top-level scalars
    if options.legacy {
        legacy::apply_scalars(provider, &mut config);
        legacy::apply_highlight(provider, &mut config.highlight);
    }

    Ok(config)
}
