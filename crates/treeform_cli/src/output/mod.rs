//! Output formatting module

mod json;
mod text;

use miette::Result;
use treeform_ast::TreeStats;
use treeform_core::View;

use crate::cli::OutputFormat;

pub fn output_view(view: &View, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(view)?,
        OutputFormat::Text => text::output_view(view),
    }
    Ok(())
}

pub fn output_stats(stats: &TreeStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(stats)?,
        OutputFormat::Text => text::output_stats(stats),
    }
    Ok(())
}
