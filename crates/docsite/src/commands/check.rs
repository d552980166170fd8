//! `docsite check` command implementation.

use clap::Args;
use docsite_pipeline::Hook;

use super::site::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Fail on navigation warnings.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        if let Some(path) = &site.config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Source: {}",
            site.config.docs_resolved.source_dir.display()
        ));
        if !site.base.is_root() {
            output.info(&format!("Base: {}", site.base));
        }

        for hook in Hook::ALL {
            site.pipeline.dispatch(hook, |ext| -> Result<(), CliError> {
                tracing::info!(hook = %hook, extension = ext.name(), "Running extension");
                Ok(())
            })?;
        }

        output.info(&format!(
            "{} extension(s), {} stage(s), {} page(s), {} sidebar link(s)",
            site.pipeline.extensions().len(),
            site.pipeline.stages().len(),
            site.index.len(),
            site.resolution.tree.link_count(),
        ));

        for problem in &site.resolution.problems {
            output.warning(&format!("Warning: {problem}"));
        }

        if self.strict {
            site.resolution.into_result()?;
        }

        output.success("Site configuration is valid");
        Ok(())
    }
}
