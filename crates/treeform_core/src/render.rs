//! End-to-end pipeline: document file to [`View`].

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};
use treeform_ast::{AstArena, NodeId, UiNode};
use treeform_parser::{ParseError, parser_for_path};

use crate::config::TransformConfig;
use crate::error::{ConversionError, TreeformError};
use crate::transform::Transformer;
use crate::view::View;
use crate::view_strategy::ViewStrategy;

/// Loads layout documents and renders them with a configured
/// [`ViewStrategy`].
#[derive(Debug, Clone)]
pub struct Renderer {
    config: TransformConfig,
    transformer: Transformer<ViewStrategy>,
}

impl Renderer {
    pub fn new(config: TransformConfig) -> Self {
        let transformer = Transformer::with_options(config.strategy(), config.options());
        Self {
            config,
            transformer,
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn transformer(&self) -> &Transformer<ViewStrategy> {
        &self.transformer
    }

    /// Reads and parses a document, choosing the parser by extension.
    pub fn load<'a>(&self, arena: &'a AstArena, path: &Path) -> Result<UiNode<'a>, TreeformError> {
        let parser = parser_for_path(path).ok_or_else(|| {
            ParseError::invalid_source(format!("no parser for {}", path.display()))
        })?;
        let source = fs::read_to_string(path)?;

        debug!("load: {} with {} parser", path.display(), parser.name());
        Ok(parser.parse(arena, &source)?)
    }

    /// Converts a parsed document.
    pub fn render(&self, root: &UiNode<'_>) -> Result<View, ConversionError<NodeId>> {
        self.transformer.transform_parallel(root)
    }

    /// Loads and converts a document file.
    pub fn render_file(&self, path: &Path) -> Result<View, TreeformError> {
        let start = Instant::now();
        let arena = AstArena::new();
        let root = self.load(&arena, path)?;
        let view = self.render(&root)?;

        info!(
            "Rendered {} ({} views) in {:?}",
            path.display(),
            view.count(),
            start.elapsed()
        );
        Ok(view)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}
