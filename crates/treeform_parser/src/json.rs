//! Strict JSON document parser.

use tracing::debug;
use treeform_ast::{AstArena, UiNode};

use crate::builder::DocumentBuilder;
use crate::{DocumentParser, ParseError};

/// Parses documents with `serde_json`.
///
/// Nesting is bounded by `serde_json`'s recursion limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for JsonParser {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<UiNode<'a>, ParseError> {
        let value: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| ParseError::invalid_source(e.to_string()))?;
        debug!("json: parsed {} bytes", source.len());

        DocumentBuilder::new(arena).build(&value)
    }
}
