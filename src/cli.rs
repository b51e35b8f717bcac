//! Clap adapter.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`MarkupArgs`] in an application's clap derive to get
//! `markup list|get|template|docs` subcommands. [`MarkupArgs::into_action()`]
//! is the only bridge to the core: it produces a
//! [`MarkupAction`](crate::MarkupAction) for
//! [`MarkupResolverBuilder::handle()`](crate::MarkupResolverBuilder::handle).

use clap::{Args, Subcommand};

use crate::types::MarkupAction;

/// Clap-derived args for the `markup` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Markup(MarkupArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct MarkupArgs {
    #[command(subcommand)]
    pub action: Option<MarkupSubcommand>,
}

/// Available markup subcommands.
#[derive(Debug, Subcommand)]
pub enum MarkupSubcommand {
    /// Show all resolved markup settings.
    List,
    /// Show the resolved value and documentation for a key.
    Get {
        /// Dotted key path (e.g. "highlight.style").
        key: String,
    },
    /// Print a commented TOML template with every default.
    Template,
    /// Print the documentation tree as JSON.
    Docs,
}

impl MarkupArgs {
    /// Bare `markup` (no subcommand) and explicit `markup list` both map to
    /// `MarkupAction::List`.
    pub fn into_action(self) -> MarkupAction {
        match self.action {
            None | Some(MarkupSubcommand::List) => MarkupAction::List,
            Some(MarkupSubcommand::Get { key }) => MarkupAction::Get { key },
            Some(MarkupSubcommand::Template) => MarkupAction::Template,
            Some(MarkupSubcommand::Docs) => MarkupAction::Docs,
        }
    }
}
