//! Code highlighting settings.
//!
//! Besides the schema, this module understands the compact option string
//! (`"linenos=table,hl_lines=2 4-5,style=dracula"`) that older configurations
//! used to set several highlighting options at once.

use confique::Config;
use serde::Serialize;
use tracing::trace;

use crate::coerce::parse_bool;
use crate::error::MarkupConfigError;

#[derive(Config, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    /// Name of the highlighting style.
    #[config(default = "monokai")]
    pub style: String,

    /// Highlight fenced code blocks.
    #[config(default = true)]
    pub code_fences: bool,

    /// Use inline styles instead of CSS classes.
    #[config(default = true)]
    pub no_classes: bool,

    /// Render line numbers.
    #[config(default = false)]
    pub line_nos: bool,

    /// Render line numbers in a separate table column.
    #[config(default = true)]
    pub line_numbers_in_table: bool,

    /// First line number.
    #[config(default = 1)]
    pub line_no_start: u32,

    /// Lines to emphasize, e.g. "1 3-4".
    #[config(default = "")]
    pub hl_lines: String,

    /// Tab width in spaces.
    #[config(default = 4)]
    pub tab_width: u32,

    /// Guess the language of code blocks without a language tag.
    #[config(default = false)]
    pub guess_syntax: bool,
}

impl HighlightConfig {
    /// Apply a single option from a compact option string.
    ///
    /// Unknown option names are ignored.
    pub fn apply_option(&mut self, key: &str, value: &str) -> Result<(), MarkupConfigError> {
        match key.to_ascii_lowercase().as_str() {
            "style" => self.style = value.to_string(),
            "noclasses" => self.no_classes = option_bool(key, value)?,
            "linenos" => match value {
                "table" => {
                    self.line_nos = true;
                    self.line_numbers_in_table = true;
                }
                "inline" => {
                    self.line_nos = true;
                    self.line_numbers_in_table = false;
                }
                other => self.line_nos = option_bool(key, other)?,
            },
            "linenostart" => self.line_no_start = option_number(key, value)?,
            "hl_lines" => self.hl_lines = value.to_string(),
            "tabwidth" => self.tab_width = option_number(key, value)?,
            "guesssyntax" => self.guess_syntax = option_bool(key, value)?,
            _ => trace!(option = key, "ignoring unknown highlight option"),
        }
        Ok(())
    }

    /// Copy every field of `candidate` into `self` where `self` still holds the
    /// value from `defaults`.
    pub fn fill_unset(&mut self, defaults: &Self, candidate: &Self) {
        fn fill<T: PartialEq + Clone>(field: &mut T, default: &T, candidate: &T) {
            if field == default {
                *field = candidate.clone();
            }
        }

        fill(&mut self.style, &defaults.style, &candidate.style);
        fill(&mut self.code_fences, &defaults.code_fences, &candidate.code_fences);
        fill(&mut self.no_classes, &defaults.no_classes, &candidate.no_classes);
        fill(&mut self.line_nos, &defaults.line_nos, &candidate.line_nos);
        fill(
            &mut self.line_numbers_in_table,
            &defaults.line_numbers_in_table,
            &candidate.line_numbers_in_table,
        );
        fill(&mut self.line_no_start, &defaults.line_no_start, &candidate.line_no_start);
        fill(&mut self.hl_lines, &defaults.hl_lines, &candidate.hl_lines);
        fill(&mut self.tab_width, &defaults.tab_width, &candidate.tab_width);
        fill(&mut self.guess_syntax, &defaults.guess_syntax, &candidate.guess_syntax);
    }
}

/// Split a compact option string into `(key, value)` pairs.
///
/// Options are comma-separated `key=value` pairs. Whitespace around keys and
/// values is trimmed; entries without `=` are skipped.
pub fn parse_options(options: &str) -> Vec<(String, String)> {
    options
        .split(',')
        .filter_map(|entry| {
            let (key, value) = entry.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn option_bool(key: &str, value: &str) -> Result<bool, MarkupConfigError> {
    parse_bool(value).ok_or_else(|| MarkupConfigError::InvalidValue {
        key: key.into(),
        reason: format!("expected a boolean, got '{value}'"),
    })
}

fn option_number(key: &str, value: &str) -> Result<u32, MarkupConfigError> {
    value.parse().map_err(|_| MarkupConfigError::InvalidValue {
        key: key.into(),
        reason: format!("expected a non-negative integer, got '{value}'"),
    })
}
