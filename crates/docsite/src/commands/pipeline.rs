//! `docsite pipeline` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::Config;
use docsite_pipeline::Pipeline;

use super::site::compose_pipeline;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pipeline command.
#[derive(Args)]
pub(crate) struct PipelineArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the pipeline as JSON.
    #[arg(long)]
    json: bool,
}

impl PipelineArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let pipeline = compose_pipeline(&config)?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&pipeline)?)?;
            return Ok(());
        }

        for line in describe(&pipeline) {
            output.data(&line)?;
        }
        Ok(())
    }
}

/// Human-readable stage listing.
fn describe(pipeline: &Pipeline) -> Vec<String> {
    if pipeline.extensions().is_empty() {
        return vec!["No integrations configured".to_owned()];
    }

    let mut lines: Vec<String> = pipeline
        .stages()
        .iter()
        .map(|stage| {
            let names: Vec<_> = stage.names().collect();
            format!("{}: {}", stage.hook, names.join(", "))
        })
        .collect();

    let idle: Vec<_> = pipeline
        .extensions()
        .iter()
        .filter(|ext| ext.hooks().is_empty())
        .map(|ext| ext.name())
        .collect();
    if !idle.is_empty() {
        lines.push(format!("(no hooks): {}", idle.join(", ")));
    }
    lines
}
