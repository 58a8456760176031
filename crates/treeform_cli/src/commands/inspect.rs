//! Inspect command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use treeform_ast::{AstArena, TreeStats};
use treeform_core::Renderer;

use crate::cli::OutputFormat;
use crate::output::output_stats;

pub fn run_inspect(file: &Path, format: OutputFormat) -> Result<()> {
    let arena = AstArena::new();
    let root = Renderer::default().load(&arena, file).into_diagnostic()?;

    output_stats(&TreeStats::collect(&root), format)
}
