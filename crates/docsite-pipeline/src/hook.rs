//! Lifecycle hooks and exclusive capabilities.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Named extension point invoked at a specific build phase.
///
/// Variants are declared in phase order; the derived `Ord` is the order in
/// which pipeline stages run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Hook {
    /// Extensions adjust the generator configuration.
    ConfigSetup,
    /// Final configuration is available (read-only).
    ConfigDone,
    /// Page content passes through extension transforms.
    ContentTransform,
    /// Extensions contribute routes.
    RouteGeneration,
    /// Build is about to start.
    BuildStart,
    /// Build has finished.
    BuildDone,
}

impl Hook {
    /// All hooks in phase order.
    pub const ALL: [Self; 6] = [
        Self::ConfigSetup,
        Self::ConfigDone,
        Self::ContentTransform,
        Self::RouteGeneration,
        Self::BuildStart,
        Self::BuildDone,
    ];

    /// Hook name as written in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConfigSetup => "config:setup",
            Self::ConfigDone => "config:done",
            Self::ContentTransform => "content:transform",
            Self::RouteGeneration => "route:generation",
            Self::BuildStart => "build:start",
            Self::BuildDone => "build:done",
        }
    }
}

impl From<Hook> for &'static str {
    fn from(hook: Hook) -> Self {
        hook.as_str()
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a hook name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hook: {0}")]
pub struct ParseHookError(pub String);

impl FromStr for Hook {
    type Err = ParseHookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| ParseHookError(s.to_owned()))
    }
}

/// Resource that at most one extension may provide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Capability {
    /// Sole documentation theme provider.
    DocsTheme,
    /// Sole diagram renderer.
    DiagramRenderer,
    /// Any other named capability.
    Other(String),
}

impl Capability {
    /// Capability name as written in configuration.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DocsTheme => "docs-theme",
            Self::DiagramRenderer => "diagram-renderer",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Capability {
    fn from(s: &str) -> Self {
        match s {
            "docs-theme" => Self::DocsTheme,
            "diagram-renderer" => Self::DiagramRenderer,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<Capability> for String {
    fn from(capability: Capability) -> Self {
        capability.as_str().to_owned()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
