//! Pipeline composition.
//!
//! [`compose`] folds an ordered list of [`ExtensionDeclaration`]s into a
//! [`Pipeline`] with one [`Stage`] per bound hook. Stages run in hook phase
//! order; within a stage, extensions keep their declaration order.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::declaration::ExtensionDeclaration;
use crate::error::ComposeError;
use crate::hook::{Capability, Hook};

/// Extensions bound to one hook, in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stage {
    /// Hook this stage runs at.
    pub hook: Hook,
    /// Bound extensions.
    #[serde(serialize_with = "serialize_names")]
    pub extensions: Vec<Arc<ExtensionDeclaration>>,
}

impl Stage {
    /// Names of the bound extensions in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|ext| ext.name())
    }
}

/// Ordered execution plan produced by [`compose`].
///
/// Read-only after composition. Hooks with no bound extensions have no stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Pipeline {
    #[serde(serialize_with = "serialize_names")]
    extensions: Vec<Arc<ExtensionDeclaration>>,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// All declared extensions, including those without hooks.
    #[must_use]
    pub fn extensions(&self) -> &[Arc<ExtensionDeclaration>] {
        &self.extensions
    }

    /// Stages in hook phase order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Stage for a hook, if any extension is bound to it.
    #[must_use]
    pub fn stage(&self, hook: Hook) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.hook == hook)
    }

    /// True when no extension binds any hook.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Invoke `f` for every extension bound to `hook`, in order.
    ///
    /// Stops at the first error. Does nothing when the hook has no stage.
    pub fn dispatch<E, F>(&self, hook: Hook, mut f: F) -> Result<(), E>
    where
        F: FnMut(&ExtensionDeclaration) -> Result<(), E>,
    {
        let Some(stage) = self.stage(hook) else {
            return Ok(());
        };
        for ext in &stage.extensions {
            tracing::debug!(hook = %hook, extension = ext.name(), "Dispatching hook");
            f(ext)?;
        }
        Ok(())
    }
}

/// Compose declarations into a pipeline.
///
/// Declarations without hooks are accepted and contribute no stage. No hook
/// is invoked during composition.
///
/// # Errors
///
/// Returns [`ComposeError::DuplicateExclusiveCapability`] when two extensions
/// claim the same exclusive capability, and [`ComposeError::EmptyName`] for an
/// unnamed extension.
pub fn compose(declarations: Vec<ExtensionDeclaration>) -> Result<Pipeline, ComposeError> {
    let mut claims: HashMap<&Capability, &str> = HashMap::new();
    for (position, decl) in declarations.iter().enumerate() {
        if decl.name().is_empty() {
            return Err(ComposeError::EmptyName { position });
        }
        for capability in decl.exclusive() {
            if let Some(first) = claims.insert(capability, decl.name()) {
                return Err(ComposeError::DuplicateExclusiveCapability {
                    capability: capability.clone(),
                    first: first.to_owned(),
                    second: decl.name().to_owned(),
                });
            }
        }
    }

    let extensions: Vec<Arc<ExtensionDeclaration>> =
        declarations.into_iter().map(Arc::new).collect();

    let stages = Hook::ALL
        .into_iter()
        .filter_map(|hook| {
            let bound: Vec<_> = extensions
                .iter()
                .filter(|ext| ext.hooks().contains(&hook))
                .map(Arc::clone)
                .collect();
            (!bound.is_empty()).then_some(Stage {
                hook,
                extensions: bound,
            })
        })
        .collect();

    let pipeline = Pipeline { extensions, stages };
    tracing::debug!(
        extensions = pipeline.extensions.len(),
        stages = pipeline.stages.len(),
        "Composed pipeline"
    );
    Ok(pipeline)
}

fn serialize_names<S: Serializer>(
    extensions: &[Arc<ExtensionDeclaration>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(extensions.iter().map(|ext| ext.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn theme() -> ExtensionDeclaration {
        ExtensionDeclaration::new("theme")
            .with_hook(Hook::ConfigSetup)
            .with_hook(Hook::RouteGeneration)
            .with_exclusive(Capability::DocsTheme)
    }

    fn diagrams() -> ExtensionDeclaration {
        ExtensionDeclaration::new("diagrams")
            .with_hook(Hook::ContentTransform)
            .with_hook(Hook::ConfigSetup)
    }

    fn stage_names(pipeline: &Pipeline, hook: Hook) -> Vec<String> {
        pipeline
            .stage(hook)
            .map(|stage| stage.names().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_compose_empty_list() {
        let pipeline = compose(Vec::new()).unwrap();
        assert!(pipeline.is_empty());
        assert!(pipeline.extensions().is_empty());
    }

    #[test]
    fn test_compose_orders_stages_by_phase() {
        let pipeline = compose(vec![theme(), diagrams()]).unwrap();

        let hooks: Vec<_> = pipeline.stages().iter().map(|s| s.hook).collect();
        assert_eq!(
            hooks,
            vec![
                Hook::ConfigSetup,
                Hook::ContentTransform,
                Hook::RouteGeneration
            ]
        );
    }

    #[test]
    fn test_compose_preserves_declaration_order_within_hook() {
        let pipeline = compose(vec![theme(), diagrams()]).unwrap();
        assert_eq!(
            stage_names(&pipeline, Hook::ConfigSetup),
            vec!["theme", "diagrams"]
        );

        let reversed = compose(vec![diagrams(), theme()]).unwrap();
        assert_eq!(
            stage_names(&reversed, Hook::ConfigSetup),
            vec!["diagrams", "theme"]
        );
    }

    #[test]
    fn test_compose_preserves_order_for_many_extensions() {
        let decls: Vec<_> = (0..20)
            .map(|i| {
                let decl = ExtensionDeclaration::new(format!("ext-{i:02}"));
                if i % 3 == 0 {
                    decl.with_hook(Hook::BuildDone)
                } else {
                    decl.with_hook(Hook::BuildStart).with_hook(Hook::BuildDone)
                }
            })
            .collect();

        let pipeline = compose(decls).unwrap();

        let expected: Vec<_> = (0..20).map(|i| format!("ext-{i:02}")).collect();
        assert_eq!(stage_names(&pipeline, Hook::BuildDone), expected);
        let expected_start: Vec<_> = (0..20)
            .filter(|i| i % 3 != 0)
            .map(|i| format!("ext-{i:02}"))
            .collect();
        assert_eq!(stage_names(&pipeline, Hook::BuildStart), expected_start);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let first = compose(vec![theme(), diagrams()]).unwrap();
        let second = compose(vec![theme(), diagrams()]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extension_without_hooks_adds_no_stage() {
        let assets = ExtensionDeclaration::new("assets");
        let pipeline = compose(vec![assets, diagrams()]).unwrap();

        assert_eq!(pipeline.extensions().len(), 2);
        assert!(
            pipeline
                .stages()
                .iter()
                .all(|stage| stage.names().all(|name| name != "assets"))
        );
    }

    #[test]
    fn test_duplicate_theme_provider_fails() {
        let other = ExtensionDeclaration::new("other-theme")
            .with_hook(Hook::ConfigSetup)
            .with_exclusive(Capability::DocsTheme);

        let err = compose(vec![theme(), diagrams(), other]).unwrap_err();

        assert_eq!(
            err,
            ComposeError::DuplicateExclusiveCapability {
                capability: Capability::DocsTheme,
                first: "theme".to_owned(),
                second: "other-theme".to_owned(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("theme"));
        assert!(message.contains("other-theme"));
    }

    #[test]
    fn test_distinct_capabilities_do_not_conflict() {
        let renderer = ExtensionDeclaration::new("diagrams")
            .with_hook(Hook::ContentTransform)
            .with_exclusive(Capability::DiagramRenderer);
        assert!(compose(vec![theme(), renderer]).is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = compose(vec![theme(), ExtensionDeclaration::new("")]).unwrap_err();
        assert_eq!(err, ComposeError::EmptyName { position: 1 });
    }

    #[test]
    fn test_dispatch_runs_stage_in_order() {
        let pipeline = compose(vec![theme(), diagrams()]).unwrap();
        let mut seen = Vec::new();

        pipeline
            .dispatch(Hook::ConfigSetup, |ext| {
                seen.push(ext.name().to_owned());
                Ok::<_, ()>(())
            })
            .unwrap();

        assert_eq!(seen, vec!["theme", "diagrams"]);
    }

    #[test]
    fn test_dispatch_stops_at_first_error() {
        let pipeline = compose(vec![theme(), diagrams()]).unwrap();
        let mut calls = 0;

        let result = pipeline.dispatch(Hook::ConfigSetup, |ext| {
            calls += 1;
            if ext.name() == "theme" {
                Err("boom")
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_dispatch_unbound_hook_is_noop() {
        let pipeline = compose(vec![diagrams()]).unwrap();
        let mut calls = 0;
        pipeline
            .dispatch(Hook::BuildDone, |_| {
                calls += 1;
                Ok::<_, ()>(())
            })
            .unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_pipeline_serializes_names() {
        let pipeline = compose(vec![theme(), diagrams()]).unwrap();
        let json = serde_json::to_value(&pipeline).unwrap();

        assert_eq!(json["extensions"], serde_json::json!(["theme", "diagrams"]));
        assert_eq!(json["stages"][0]["hook"], "config:setup");
        assert_eq!(
            json["stages"][0]["extensions"],
            serde_json::json!(["theme", "diagrams"])
        );
    }
}
