use crate::docs::{self, DocRegistry};
use crate::error::MarkupConfigError;
use crate::ops::{self, ConfigResult};
use crate::profile::MarkupConfig;
use crate::provider::ConfigProvider;
use crate::resolve::{self, ResolveOptions};
use crate::types::MarkupAction;

/// Entry point for resolving markup configuration.
pub struct MarkupResolver;

impl MarkupResolver {
    pub fn builder() -> MarkupResolverBuilder {
        MarkupResolverBuilder::new()
    }
}

/// Builder for a markup resolution.
///
/// The builder holds no store. The same builder can resolve any number of
/// providers and always produces the same result for the same store.
#[derive(Debug, Clone, Default)]
pub struct MarkupResolverBuilder {
    options: ResolveOptions,
}

impl MarkupResolverBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Read settings from a different top-level section (default: `"markup"`).
    pub fn section(mut self, name: &str) -> Self {
        self.options.section = name.to_string();
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, unknown keys in the section produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Ignore legacy top-level keys such as `pygmentsStyle` or a top-level
    /// `[blackfriday]` table.
    pub fn no_legacy(mut self) -> Self {
        self.options.legacy = false;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve the markup configuration from `provider`.
    pub fn resolve<P: ConfigProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<MarkupConfig, MarkupConfigError> {
        resolve::resolve(provider, &self.options)
    }

    /// Handle a `MarkupAction` and print the result to stdout.
    pub fn handle_and_print<P: ConfigProvider + ?Sized>(
        &self,
        provider: &P,
        action: &MarkupAction,
    ) -> Result<(), MarkupConfigError> {
        let result = self.handle(provider, action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `MarkupAction` (list / get / template / docs).
    pub fn handle<P: ConfigProvider + ?Sized>(
        &self,
        provider: &P,
        action: &MarkupAction,
    ) -> Result<ConfigResult, MarkupConfigError> {
        match action {
            MarkupAction::List => {
                let config = self.resolve(provider)?;
                ops::list_values(&config)
            }
            MarkupAction::Get { key } => {
                let config = self.resolve(provider)?;
                ops::get_value(&config, key)
            }
            MarkupAction::Template => Ok(ConfigResult::Template(docs::template())),
            MarkupAction::Docs => {
                let mut registry = DocRegistry::new();
                docs::register(&mut registry);
                let tree = registry.collect()?;
                Ok(ConfigResult::Docs(serde_json::to_string_pretty(&tree)?))
            }
        }
    }
}
