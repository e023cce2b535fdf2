//! Configuration for [`Ice::init`](crate::Ice::init).
//!
//! ```rust,ignore
//! let config = IceConfig::new()
//!     .with_prefix("ice")
//!     .with_default_binding("focus", "input[data-ice]")
//!     .prevent_default(true);
//! ```

use ice_core::{ConfigError, EventBinding, Hook, IceError, Selector};
use ice_std::{AttributeNames, LoggingHook, Syntax, default_bindings};
use std::fmt;

/// Builder for the delegation layer.
pub struct IceConfig {
    prefix: String,
    syntax: Syntax,
    builtin_bindings: bool,
    extra_bindings: Vec<(String, String)>,
    prevent_default: bool,
    hooks: Vec<Box<dyn Hook>>,
}

impl Default for IceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl IceConfig {
    /// The `ice` prefix, attribute syntax, built-in default bindings.
    pub fn new() -> Self {
        Self {
            prefix: "ice".to_string(),
            syntax: Syntax::default(),
            builtin_bindings: true,
            extra_bindings: Vec::new(),
            prevent_default: false,
            hooks: Vec::new(),
        }
    }

    /// Set the attribute prefix: `act` reads `data-act`, `data-act-params`...
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the declaration syntax.
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Add a default binding. The selector is parsed in `Ice::init`.
    ///
    /// Bindings added here take precedence over the built-in table.
    pub fn with_default_binding(
        mut self,
        event: impl Into<String>,
        selector: impl Into<String>,
    ) -> Self {
        self.extra_bindings.push((event.into(), selector.into()));
        self
    }

    /// Drop the built-in default table; only configured and discovered
    /// bindings remain.
    pub fn without_builtin_bindings(mut self) -> Self {
        self.builtin_bindings = false;
        self
    }

    /// Cancel the default action of every event a declared handler is
    /// dispatched for.
    pub fn prevent_default(mut self, enabled: bool) -> Self {
        self.prevent_default = enabled;
        self
    }

    /// Add a hook run before every invocation.
    pub fn with_hook<H: Hook>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Log every invocation through [`LoggingHook`].
    pub fn with_logging(self) -> Self {
        self.with_hook(LoggingHook::named("ice"))
    }

    /// The attribute prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The declaration syntax.
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Whether default actions get canceled.
    pub fn prevents_default(&self) -> bool {
        self.prevent_default
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_prefix = !self.prefix.is_empty()
            && !self.prefix.starts_with('-')
            && !self.prefix.ends_with('-')
            && self
                .prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_prefix {
            return Err(ConfigError::InvalidPrefix(self.prefix.clone()));
        }
        if self.extra_bindings.iter().any(|(event, _)| event.trim().is_empty()) {
            return Err(ConfigError::EmptyEventName);
        }
        Ok(())
    }

    /// The attribute names for the configured prefix.
    pub fn attribute_names(&self) -> AttributeNames {
        AttributeNames::new(&self.prefix)
    }

    /// The default bindings: configured ones first, then the built-in table.
    pub fn default_bindings(&self) -> Result<Vec<EventBinding>, IceError> {
        let mut bindings = self
            .extra_bindings
            .iter()
            .map(|(event, selector)| -> Result<EventBinding, IceError> {
                let selector = selector.parse::<Selector>()?;
                Ok(EventBinding::new(event.trim(), selector))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if self.builtin_bindings {
            bindings.extend(default_bindings(&self.attribute_names(), self.syntax));
        }
        Ok(bindings)
    }

    pub(crate) fn take_hooks(&mut self) -> Vec<Box<dyn Hook>> {
        std::mem::take(&mut self.hooks)
    }
}

impl fmt::Debug for IceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IceConfig")
            .field("prefix", &self.prefix)
            .field("syntax", &self.syntax)
            .field("builtin_bindings", &self.builtin_bindings)
            .field("extra_bindings", &self.extra_bindings)
            .field("prevent_default", &self.prevent_default)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
