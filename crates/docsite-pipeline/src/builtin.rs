//! Preset declarations for the bundled extensions.
//!
//! A documentation site usually attaches a theme extension and a diagram
//! extension. Configuration can name them without listing hooks; [`declare`]
//! fills in the preset bindings and capabilities.

use crate::declaration::ExtensionDeclaration;
use crate::error::ComposeError;
use crate::hook::{Capability, Hook};

/// Documentation theme extension.
pub const DOCS_THEME: &str = "docs-theme";

/// Diagram rendering extension.
pub const DIAGRAMS: &str = "diagrams";

struct Preset {
    hooks: &'static [Hook],
    exclusive: Capability,
}

fn preset(name: &str) -> Option<Preset> {
    match name {
        DOCS_THEME | "starlight" => Some(Preset {
            hooks: &[Hook::ConfigSetup, Hook::RouteGeneration],
            exclusive: Capability::DocsTheme,
        }),
        DIAGRAMS | "mermaid" => Some(Preset {
            hooks: &[Hook::ConfigSetup, Hook::ContentTransform],
            exclusive: Capability::DiagramRenderer,
        }),
        _ => None,
    }
}

/// Check whether `name` refers to a bundled extension.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    preset(name).is_some()
}

/// Build a declaration from configuration values.
///
/// Explicit `hooks` and `exclusive` lists replace the preset for bundled
/// extensions. An unknown extension without hooks is a no-op extension.
///
/// # Errors
///
/// Returns [`ComposeError::UnknownHook`] if a hook name is not recognised.
pub fn declare(
    name: &str,
    hooks: Option<&[String]>,
    exclusive: Option<&[String]>,
    options: serde_json::Value,
) -> Result<ExtensionDeclaration, ComposeError> {
    let preset = preset(name);
    let mut decl = ExtensionDeclaration::new(name).with_options(options);

    match hooks {
        Some(hooks) => {
            for hook in hooks {
                let hook = hook.parse::<Hook>().map_err(|_| ComposeError::UnknownHook {
                    extension: name.to_owned(),
                    hook: hook.clone(),
                })?;
                decl = decl.with_hook(hook);
            }
        }
        None => {
            for hook in preset.iter().flat_map(|p| p.hooks) {
                decl = decl.with_hook(*hook);
            }
        }
    }

    match exclusive {
        Some(names) => {
            for capability in names {
                decl = decl.with_exclusive(capability.as_str());
            }
        }
        None => {
            if let Some(preset) = preset {
                decl = decl.with_exclusive(preset.exclusive);
            }
        }
    }

    Ok(decl)
}
