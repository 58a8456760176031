//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use treeform_core::TraversalMode;

/// treeform - Render server-driven UI documents
#[derive(Parser)]
#[command(name = "treeform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a document and print the resulting view
    Render {
        /// Document to render (.json, .jsonc, .json5)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Traversal mode (recursive, stack, parallel)
        #[arg(long)]
        mode: Option<TraversalMode>,

        /// Reject nodes deeper than this (root is 1)
        #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        max_depth: Option<usize>,

        /// Render unknown node types as placeholders instead of failing
        #[arg(long)]
        placeholders: bool,
    },

    /// Convert a document and report whether it succeeds
    Check {
        /// Document to check
        file: PathBuf,
    },

    /// Print statistics about a document tree
    Inspect {
        /// Document to inspect
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
