//! Subcommand implementations

mod check;
mod inspect;
mod render;

pub use check::run_check;
pub use inspect::run_inspect;
pub use render::run_render;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use treeform_core::TransformConfig;

use crate::cli::Cli;

/// Loads the config named by `--config`, or the one found in the
/// current directory.
pub fn load_config(cli: &Cli) -> Result<TransformConfig> {
    match cli.config {
        Some(ref path) => TransformConfig::from_file(path).into_diagnostic(),
        None => find_config(),
    }
}

pub fn find_config() -> Result<TransformConfig> {
    if let Some(path) = TransformConfig::discover(".") {
        info!("Using config: {}", path.display());
        return TransformConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(TransformConfig::new())
}
