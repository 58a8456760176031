//! Render command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::error;
use treeform_ast::AstArena;
use treeform_core::{Renderer, TraversalMode, UnknownNodePolicy};

use super::load_config;
use crate::cli::{Cli, OutputFormat};
use crate::output::output_view;

pub fn run_render(
    cli: &Cli,
    file: &Path,
    format: OutputFormat,
    mode: Option<TraversalMode>,
    max_depth: Option<usize>,
    placeholders: bool,
) -> Result<bool> {
    let mut config = load_config(cli)?;

    // Command line flags win over the config file
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if max_depth.is_some() {
        config.max_depth = max_depth;
    }
    if placeholders {
        config.unknown_nodes = UnknownNodePolicy::Placeholder;
    }

    let renderer = Renderer::new(config);
    let arena = AstArena::new();
    let root = renderer.load(&arena, file).into_diagnostic()?;

    match renderer.render(&root) {
        Ok(view) => {
            output_view(&view, format)?;
            Ok(false)
        }
        Err(e) => {
            error!("{}: {}", file.display(), e);
            Ok(true)
        }
    }
}
