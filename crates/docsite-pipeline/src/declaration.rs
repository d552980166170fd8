//! Extension declarations.

use serde::Serialize;

use crate::hook::{Capability, Hook};

/// Capability record for one build-time extension.
///
/// Built once at configuration time with the `with_*` builder methods and
/// never mutated after it is handed to [`compose`](crate::compose).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExtensionDeclaration {
    name: String,
    hooks: Vec<Hook>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    exclusive: Vec<Capability>,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    options: serde_json::Value,
}

impl ExtensionDeclaration {
    /// Create a declaration without hooks, capabilities or options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Vec::new(),
            exclusive: Vec::new(),
            options: serde_json::Value::Null,
        }
    }

    /// Bind the extension to a hook.
    ///
    /// Binding the same hook twice keeps the first binding.
    #[must_use]
    pub fn with_hook(mut self, hook: Hook) -> Self {
        if !self.hooks.contains(&hook) {
            self.hooks.push(hook);
        }
        self
    }

    /// Claim an exclusive capability.
    #[must_use]
    pub fn with_exclusive(mut self, capability: impl Into<Capability>) -> Self {
        let capability = capability.into();
        if !self.exclusive.contains(&capability) {
            self.exclusive.push(capability);
        }
        self
    }

    /// Attach extension-specific options.
    #[must_use]
    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }

    /// Extension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hook bindings in declared order.
    #[must_use]
    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    /// Exclusive capabilities claimed by this extension.
    #[must_use]
    pub fn exclusive(&self) -> &[Capability] {
        &self.exclusive
    }

    /// Extension-specific options (`Null` when none were given).
    #[must_use]
    pub fn options(&self) -> &serde_json::Value {
        &self.options
    }
}
