//! Composition errors.

use crate::hook::Capability;

/// Error returned when a pipeline cannot be composed.
///
/// Every variant is fatal: no partial pipeline is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// Two extensions claim the same exclusive capability.
    #[error(
        "Extensions '{first}' and '{second}' both provide exclusive capability '{capability}'"
    )]
    DuplicateExclusiveCapability {
        /// Contested capability.
        capability: Capability,
        /// Extension declared first.
        first: String,
        /// Extension declared later.
        second: String,
    },
    /// Extension references a hook name that does not exist.
    #[error("Extension '{extension}' binds unknown hook '{hook}'")]
    UnknownHook {
        /// Extension name.
        extension: String,
        /// Offending hook name.
        hook: String,
    },
    /// Extension declared without a name.
    #[error("Extension at position {position} has an empty name")]
    EmptyName {
        /// Zero-based position in the declaration list.
        position: usize,
    },
}
