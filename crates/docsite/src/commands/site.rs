//! Shared site loading: config, extension pipeline, content and navigation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config, SidebarContent};
use docsite_content::Scanner;
use docsite_nav::{BasePath, ContentIndex, LinkItem, Resolution, SidebarGroup, SidebarSpec};
use docsite_pipeline::{ComposeError, Pipeline, builtin, compose};

use crate::error::CliError;

/// Arguments shared by commands that read the site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    pub(crate) source_dir: Option<PathBuf>,

    /// URL base path (overrides config).
    #[arg(long, env = "DOCSITE_BASE")]
    pub(crate) base: Option<String>,
}

impl SiteArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            base: self.base.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load everything a build needs.
    pub(crate) fn load(&self) -> Result<Site, CliError> {
        let config = self.load_config()?;
        let pipeline = compose_pipeline(&config)?;
        let index: ContentIndex = Scanner::new(config.docs_resolved.source_dir.clone())
            .scan()
            .into_iter()
            .collect();
        let base = BasePath::new(&config.base);
        let resolution = docsite_nav::resolve(&sidebar_spec(&config), &index, &base);
        Ok(Site {
            config,
            pipeline,
            index,
            base,
            resolution,
        })
    }
}

/// Loaded site state.
pub(crate) struct Site {
    pub(crate) config: Config,
    pub(crate) pipeline: Pipeline,
    pub(crate) index: ContentIndex,
    pub(crate) base: BasePath,
    pub(crate) resolution: Resolution,
}

/// Compose the pipeline from `[[integrations]]` in declaration order.
pub(crate) fn compose_pipeline(config: &Config) -> Result<Pipeline, ComposeError> {
    let declarations = config
        .integrations
        .iter()
        .map(|integration| {
            builtin::declare(
                &integration.name,
                integration.hooks.as_deref(),
                integration.exclusive.as_deref(),
                integration.options.clone(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    compose(declarations)
}

/// Build the sidebar declaration from `[[theme.sidebar]]`.
pub(crate) fn sidebar_spec(config: &Config) -> SidebarSpec {
    let groups = config
        .theme
        .sidebar
        .iter()
        .filter_map(|entry| match entry.content() {
            Some(SidebarContent::Items(items)) => Some(SidebarGroup::items(
                entry.label.clone(),
                items
                    .iter()
                    .map(|item| LinkItem::new(item.label.clone(), item.link.clone()))
                    .collect(),
            )),
            Some(SidebarContent::Autogenerate(auto)) => Some(SidebarGroup::autogenerate(
                entry.label.clone(),
                auto.directory.clone(),
            )),
            None => {
                tracing::warn!(group = %entry.label, "Skipping sidebar group without content");
                None
            }
        })
        .collect();
    SidebarSpec::new(groups)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use docsite_nav::{GroupContent, NavLink};
    use docsite_pipeline::Hook;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"
site = "https://apollogeddon.github.io"
base = "/ignition-tfpl"

[[integrations]]
name = "docs-theme"

[[integrations]]
name = "diagrams"

[theme]
title = "Ignition TF Plugin"

[[theme.sidebar]]
label = "Guides"
items = [
    { label = "Installation", link = "/guides/installation/" },
    { label = "Architecture", link = "/guides/architecture/" },
]

[[theme.sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }
"#;

    fn config(toml: &str) -> Config {
        Config::from_toml(toml, Path::new("/project")).unwrap()
    }

    #[test]
    fn test_compose_pipeline_from_integrations() {
        let pipeline = compose_pipeline(&config(CONFIG)).unwrap();

        let setup: Vec<_> = pipeline.stage(Hook::ConfigSetup).unwrap().names().collect();
        assert_eq!(setup, vec!["docs-theme", "diagrams"]);
        let routes: Vec<_> = pipeline
            .stage(Hook::RouteGeneration)
            .unwrap()
            .names()
            .collect();
        assert_eq!(routes, vec!["docs-theme"]);
        let transform: Vec<_> = pipeline
            .stage(Hook::ContentTransform)
            .unwrap()
            .names()
            .collect();
        assert_eq!(transform, vec!["diagrams"]);
    }

    #[test]
    fn test_compose_pipeline_duplicate_theme_fails() {
        let toml = r#"
[[integrations]]
name = "docs-theme"

[[integrations]]
name = "starlight"
"#;
        let err = compose_pipeline(&config(toml)).unwrap_err();
        assert!(matches!(
            err,
            ComposeError::DuplicateExclusiveCapability { .. }
        ));
    }

    #[test]
    fn test_compose_pipeline_unknown_hook_fails() {
        let toml = r#"
[[integrations]]
name = "search"
hooks = ["page:render"]
"#;
        let err = compose_pipeline(&config(toml)).unwrap_err();
        assert!(matches!(err, ComposeError::UnknownHook { .. }));
    }

    #[test]
    fn test_sidebar_spec_keeps_group_order() {
        let spec = sidebar_spec(&config(CONFIG));

        assert_eq!(spec.groups.len(), 2);
        assert_eq!(spec.groups[0].label, "Guides");
        assert_eq!(
            spec.groups[0].content,
            GroupContent::Items(vec![
                LinkItem::new("Installation", "/guides/installation/"),
                LinkItem::new("Architecture", "/guides/architecture/"),
            ])
        );
        assert_eq!(
            spec.groups[1],
            SidebarGroup::autogenerate("Reference", "reference")
        );
    }

    #[test]
    fn test_load_site_resolves_navigation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("docsite.toml"), CONFIG).unwrap();
        let docs = root.join("src/content/docs");
        std::fs::create_dir_all(docs.join("guides")).unwrap();
        std::fs::create_dir_all(docs.join("reference")).unwrap();
        std::fs::write(docs.join("guides/installation.md"), "# Installation").unwrap();
        std::fs::write(
            docs.join("reference/provider.md"),
            "---\ntitle: Provider\nsidebar:\n  order: 1\n---\n",
        )
        .unwrap();

        let args = SiteArgs {
            config: Some(root.join("docsite.toml")),
            source_dir: None,
            base: None,
        };
        let site = args.load().unwrap();

        assert_eq!(site.index.len(), 2);
        assert_eq!(site.base.as_str(), "/ignition-tfpl");
        assert_eq!(
            site.resolution.tree.groups[1].items,
            vec![NavLink {
                label: "Provider".to_owned(),
                href: "/ignition-tfpl/reference/provider/".to_owned(),
                external: false,
            }]
        );
        assert_eq!(site.resolution.problems.len(), 1);
        assert_eq!(site.resolution.problems[0].target, "/guides/architecture/");
    }

    #[test]
    fn test_load_site_autogenerate_includes_section_index() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("docsite.toml"), CONFIG).unwrap();
        let reference = root.join("src/content/docs/reference");
        std::fs::create_dir_all(&reference).unwrap();
        std::fs::write(
            reference.join("index.md"),
            "---\ntitle: Overview\nsidebar:\n  order: 0\n---\n",
        )
        .unwrap();
        std::fs::write(reference.join("provider.md"), "# Provider").unwrap();

        let args = SiteArgs {
            config: Some(root.join("docsite.toml")),
            source_dir: None,
            base: None,
        };
        let site = args.load().unwrap();

        let labels: Vec<_> = site.resolution.tree.groups[1]
            .items
            .iter()
            .map(|link| link.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Overview", "Provider"]);
        assert_eq!(
            site.resolution.tree.groups[1].items[0].href,
            "/ignition-tfpl/reference/"
        );
    }

    #[test]
    fn test_load_site_base_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("docsite.toml"), CONFIG).unwrap();

        let args = SiteArgs {
            config: Some(temp_dir.path().join("docsite.toml")),
            source_dir: Some(temp_dir.path().join("missing")),
            base: Some("/preview".to_owned()),
        };
        let site = args.load().unwrap();

        assert_eq!(site.base.as_str(), "/preview");
        assert!(site.index.is_empty());
        assert_eq!(site.resolution.problems.len(), 2);
    }
}
