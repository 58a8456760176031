//! Check command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use treeform_ast::{AstArena, TreeStats};
use treeform_core::Renderer;

use super::load_config;
use crate::cli::Cli;

pub fn run_check(cli: &Cli, file: &Path) -> Result<bool> {
    let renderer = Renderer::new(load_config(cli)?);
    let arena = AstArena::new();
    let root = renderer.load(&arena, file).into_diagnostic()?;

    match renderer.render(&root) {
        Ok(_) => {
            let stats = TreeStats::collect(&root);
            println!("ok: {} nodes", stats.nodes);
            Ok(false)
        }
        Err(e) => {
            println!("error: {}", e);
            Ok(true)
        }
    }
}
