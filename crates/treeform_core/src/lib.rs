//! # treeform_core
//!
//! Strategy-driven tree transformation for treeform.
//!
//! This crate provides:
//! - The `ConversionStrategy` contract and the `Transformer` that drives it
//! - Recursive, work-stack and parallel traversals with identical results
//! - Cooperative cancellation (`Cancellable`)
//! - `ViewStrategy`, which turns layout documents into `View` trees
//! - Configuration loading and the file-to-view `Renderer`
//!
//! ## Example
//!
//! ```rust,ignore
//! use treeform_core::{Renderer, TransformConfig};
//!
//! let config = TransformConfig::from_file(".treeform.jsonc")?;
//! let view = Renderer::new(config).render_file("screen.json".as_ref())?;
//! print!("{}", view.outline());
//! ```

mod config;
mod error;
mod render;
mod strategy;
pub mod transform;
mod view;
mod view_strategy;

pub use config::{CONFIG_FILES, TransformConfig};
pub use error::{ConversionError, ConversionResult, ErrorKind, TreeformError};
pub use render::Renderer;
pub use strategy::{Cancellable, CancellationToken, ConversionStrategy};
pub use transform::{TransformOptions, Transformer, TraversalMode};
pub use view::View;
pub use view_strategy::{UnknownNodePolicy, ViewStrategy};
