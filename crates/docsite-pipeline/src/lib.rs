//! Integration pipeline composer for docsite.
//!
//! Turns the ordered `integrations` list from configuration into a
//! [`Pipeline`]: one [`Stage`] per lifecycle [`Hook`], each listing its
//! extensions in declaration order. Composition is a pure fold with a
//! conflict check on exclusive capabilities; hooks are never invoked here.
//! The build orchestrator drives each phase later through
//! [`Pipeline::dispatch`].
//!
//! # Example
//!
//! ```
//! use docsite_pipeline::{Capability, ExtensionDeclaration, Hook, compose};
//!
//! let theme = ExtensionDeclaration::new("docs-theme")
//!     .with_hook(Hook::ConfigSetup)
//!     .with_exclusive(Capability::DocsTheme);
//! let diagrams = ExtensionDeclaration::new("diagrams")
//!     .with_hook(Hook::ConfigSetup)
//!     .with_hook(Hook::ContentTransform);
//!
//! let pipeline = compose(vec![theme, diagrams]).unwrap();
//! let setup: Vec<_> = pipeline.stage(Hook::ConfigSetup).unwrap().names().collect();
//! assert_eq!(setup, ["docs-theme", "diagrams"]);
//! ```

pub mod builtin;
mod declaration;
mod error;
mod hook;
mod pipeline;

pub use declaration::ExtensionDeclaration;
pub use error::ComposeError;
pub use hook::{Capability, Hook, ParseHookError};
pub use pipeline::{Pipeline, Stage, compose};
