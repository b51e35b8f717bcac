//! Permissive structural decoding of a raw section onto the Default Profile.
//!
//! Two steps:
//!
//! 1. [`conform`] walks confique's `Meta` tree next to the raw table. Each raw
//!    key is renamed to the schema field it matches (ignoring case and
//!    underscores) and every leaf is passed through the weak coercion table.
//! 2. [`decode`] deserializes the conformed table into the all-optional
//!    `Layer` and lets confique load it on top of the declared defaults. Only
//!    keys present in the table override a default.
//!
//! Keys the schema doesn't know are collected with `serde_ignored`; they are
//! logged in lenient mode and rejected in strict mode.

use confique::Config;
use confique::meta::{Field, FieldKind, Meta};
use serde::Deserialize;
use toml::{Table, Value};
use tracing::{debug, warn};

use crate::coerce::{self, Target};
use crate::error::MarkupConfigError;
use crate::merge::underlay;
use crate::provider::matches_key;

/// Canonicalize keys and coerce leaf values of `table` against `meta`.
///
/// Unknown keys are kept as-is so the decoder can report them. Values whose
/// shape doesn't fit (e.g. a scalar where a nested table is expected) are also
/// kept as-is and fail during [`decode`].
///
/// When several raw keys spell the same field, the one spelled exactly like
/// the field comes first, then the rest in key order. Tables are merged with
/// the earlier spelling winning per key; for any other pair the earlier value
/// is kept.
pub fn conform(meta: &Meta, table: &mut Table) {
    for field in meta.fields {
        let mut spellings: Vec<String> = table
            .keys()
            .filter(|k| matches_key(field.name, k))
            .cloned()
            .collect();
        spellings.sort_by_key(|k| k != field.name);

        let mut conformed: Option<Value> = None;
        for raw in spellings {
            let Some(value) = table.remove(&raw) else {
                continue;
            };
            let value = conform_value(field, value);
            conformed = Some(match conformed {
                None => value,
                Some(earlier) => combine(field.name, &raw, earlier, value),
            });
        }
        if let Some(value) = conformed {
            table.insert(field.name.to_string(), value);
        }
    }
}

fn conform_value(field: &Field, value: Value) -> Value {
    match &field.kind {
        FieldKind::Nested { meta } => match value {
            Value::Table(mut nested) => {
                conform(meta, &mut nested);
                Value::Table(nested)
            }
            other => other,
        },
        FieldKind::Leaf { kind, .. } => match Target::of_leaf(kind) {
            Some(target) => coerce::coerce(value, target),
            None => value,
        },
    }
}

fn combine(field: &str, raw: &str, earlier: Value, later: Value) -> Value {
    match (earlier, later) {
        (Value::Table(mut kept), Value::Table(extra)) => {
            debug!(field, key = raw, "merging tables spelled differently");
            underlay(&mut kept, extra);
            Value::Table(kept)
        }
        (kept, _) => {
            warn!(field, key = raw, "ignoring duplicate spelling of a key");
            kept
        }
    }
}

/// Find the metadata of the nested section at `dotted` (schema field names).
pub fn nested_meta(meta: &'static Meta, dotted: &str) -> Option<&'static Meta> {
    let mut current = meta;
    for segment in dotted.split('.') {
        let field = current.fields.iter().find(|f| f.name == segment)?;
        match &field.kind {
            FieldKind::Nested { meta } => current = *meta,
            FieldKind::Leaf { .. } => return None,
        }
    }
    Some(current)
}

/// Decode a conformed section into `C`, on top of `C`'s declared defaults.
///
/// `section_name` only labels errors.
pub fn decode<C: Config>(
    section: Table,
    section_name: &str,
    strict: bool,
) -> Result<C, MarkupConfigError>
where
    C::Layer: for<'de> Deserialize<'de>,
{
    let mut unknown: Vec<String> = Vec::new();
    let layer: C::Layer = serde_ignored::deserialize(Value::Table(section), |path| {
        unknown.push(path.to_string());
    })
    .map_err(|e: toml::de::Error| MarkupConfigError::Decode {
        section: section_name.into(),
        reason: e.to_string(),
    })?;

    if !unknown.is_empty() {
        if strict {
            return Err(MarkupConfigError::UnknownKeys {
                section: section_name.into(),
                keys: unknown,
            });
        }
        for key in &unknown {
            debug!(section = section_name, %key, "ignoring unknown key");
        }
    }

    C::builder()
        .preloaded(layer)
        .load()
        .map_err(|e| MarkupConfigError::Decode {
            section: section_name.into(),
            reason: e.to_string(),
        })
}
