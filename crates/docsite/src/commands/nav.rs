//! `docsite nav` command implementation.

use clap::Args;

use super::site::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        for problem in &site.resolution.problems {
            output.warning(&format!("Warning: {problem}"));
        }

        let json = serde_json::to_string_pretty(&site.resolution.tree)?;
        output.data(&json)?;
        Ok(())
    }
}
