//! Settings that used to live at the top level of the configuration tree.
//!
//! Older configurations set renderer options outside the `markup` section.
//! They are still honored, but never over an explicit modern setting:
//!
//! - [`SECTION_RELOCATIONS`]: a whole legacy table is laid underneath its
//!   modern counterpart before decoding, so modern keys win key-by-key.
//! - [`SCALAR_RELOCATIONS`]: a legacy string fills a modern field after
//!   decoding, only if that field is still empty.
//! - [`apply_highlight`]: the `pygments*` keys fill highlight fields that still
//!   hold their default value.
//!
//! Nothing here fails. A missing or wrong-typed legacy value means there is
//! nothing to migrate.

use confique::Config;
use serde::Deserialize;
use toml::{Table, Value};
use tracing::{debug, trace, warn};

use crate::decode::{conform, decode, nested_meta};
use crate::highlight::{HighlightConfig, parse_options};
use crate::merge::underlay;
use crate::profile::{MarkupConfig, default_profile_ref};
use crate::provider::ConfigProvider;
use crate::renderers::BlackFridayConfig;

/// A top-level table that moved under the markup section.
pub struct SectionRelocation {
    /// Top-level key in the store.
    pub key: &'static str,
    /// Schema path of the modern table, relative to the section.
    pub target: &'static str,
    /// Whether a single conformed entry decodes on its own against the
    /// modern table's schema.
    pub accepts: fn(&str, Value) -> bool,
}

pub const SECTION_RELOCATIONS: &[SectionRelocation] = &[SectionRelocation {
    key: "blackfriday",
    target: "blackfriday",
    accepts: entry_decodes::<BlackFridayConfig>,
}];

fn entry_decodes<C: Config>(key: &str, value: Value) -> bool
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let mut entry = Table::new();
    entry.insert(key.to_string(), value);
    decode::<C>(entry, key, true).is_ok()
}

/// A top-level string that moved under the markup section.
pub struct ScalarRelocation {
    /// Top-level key in the store.
    pub key: &'static str,
    /// The modern field it populates.
    pub target: fn(&mut MarkupConfig) -> &mut String,
}

pub const SCALAR_RELOCATIONS: &[ScalarRelocation] = &[
    ScalarRelocation {
        key: "footnoteAnchorPrefix",
        target: footnote_anchor_prefix,
    },
    ScalarRelocation {
        key: "footnoteReturnLinkContents",
        target: footnote_return_link_contents,
    },
];

fn footnote_anchor_prefix(config: &mut MarkupConfig) -> &mut String {
    &mut config.blackfriday.footnote_anchor_prefix
}

fn footnote_return_link_contents(config: &mut MarkupConfig) -> &mut String {
    &mut config.blackfriday.footnote_return_link_contents
}

/// Lay legacy top-level tables underneath their modern counterparts in an
/// already conformed section.
///
/// Legacy entries that are unknown to the modern schema or don't decode are
/// skipped, so they can neither fail the decode nor trip strict mode.
pub fn relocate_sections<P: ConfigProvider + ?Sized>(provider: &P, section: &mut Table) {
    for rule in SECTION_RELOCATIONS {
        let Some(mut legacy) = provider.get_table(rule.key) else {
            continue;
        };
        let Some(meta) = nested_meta(&MarkupConfig::META, rule.target) else {
            continue;
        };
        conform(meta, &mut legacy);
        let legacy = accepted_entries(rule, legacy);

        let Some(target) = table_at_or_insert(section, rule.target) else {
            trace!(key = rule.key, "modern target is not a table, skipping relocation");
            continue;
        };
        debug!(key = rule.key, target = rule.target, "relocating legacy section");
        underlay(target, legacy);
    }
}

fn accepted_entries(rule: &SectionRelocation, legacy: Table) -> Table {
    legacy
        .into_iter()
        .filter(|(key, value)| {
            let accepted = (rule.accepts)(key, value.clone());
            if !accepted {
                warn!(section = rule.key, %key, "skipping legacy value that does not fit the schema");
            }
            accepted
        })
        .collect()
}

/// Fill empty modern fields from legacy top-level strings.
pub fn apply_scalars<P: ConfigProvider + ?Sized>(provider: &P, config: &mut MarkupConfig) {
    for rule in SCALAR_RELOCATIONS {
        let field = (rule.target)(config);
        if !field.is_empty() {
            continue;
        }
        let Some(value) = provider.get_string(rule.key).filter(|v| !v.is_empty()) else {
            continue;
        };
        debug!(key = rule.key, "applying legacy top-level value");
        *field = value;
    }
}

/// Fill highlight fields still at their default from the `pygments*` keys.
pub fn apply_highlight<P: ConfigProvider + ?Sized>(provider: &P, highlight: &mut HighlightConfig) {
    let defaults = &default_profile_ref().highlight;
    let mut candidate = defaults.clone();

    if let Some(style) = provider.get_string("pygmentsStyle").filter(|s| !s.is_empty()) {
        candidate.style = style;
    }
    if let Some(use_classes) = legacy_bool(provider, "pygmentsUseClasses") {
        candidate.no_classes = !use_classes;
    }
    if let Some(code_fences) = legacy_bool(provider, "pygmentsCodeFences") {
        candidate.code_fences = code_fences;
    }
    if let Some(guess) = legacy_bool(provider, "pygmentsCodefencesGuessSyntax") {
        candidate.guess_syntax = guess;
    }
    if let Some(options) = provider.get_string("pygmentsOptions") {
        for (key, value) in parse_options(&options) {
            if let Err(err) = candidate.apply_option(&key, &value) {
                warn!(%err, "skipping malformed pygmentsOptions entry");
            }
        }
    }

    if candidate != *defaults {
        debug!("applying legacy highlight settings");
        highlight.fill_unset(defaults, &candidate);
    }
}

fn legacy_bool<P: ConfigProvider + ?Sized>(provider: &P, key: &str) -> Option<bool> {
    let value = provider.get_bool(key);
    if value.is_none() && provider.is_set(key) {
        warn!(key, "ignoring legacy key that is not a boolean");
    }
    value
}

fn table_at_or_insert<'a>(table: &'a mut Table, dotted: &str) -> Option<&'a mut Table> {
    let mut current = table;
    for segment in dotted.split('.') {
        current = current
            .entry(segment)
            .or_insert_with(|| Value::Table(Table::new()))
            .as_table_mut()?;
    }
    Some(current)
}
