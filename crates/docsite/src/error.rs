//! CLI error types.

use docsite_config::ConfigError;
use docsite_nav::NavigationResolutionError;
use docsite_pipeline::ComposeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Compose(#[from] ComposeError),

    #[error("{0}")]
    Navigation(#[from] NavigationResolutionError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
