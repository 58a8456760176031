//! Lenient JSON parser: comments and trailing commas.

use jsonc_parser::ParseOptions;
use tracing::debug;
use treeform_ast::{AstArena, UiNode};

use crate::builder::DocumentBuilder;
use crate::nesting::check_nesting;
use crate::{DocumentParser, ParseError};

/// Parses hand-written documents with `jsonc-parser`.
///
/// Accepts `//` and `/* */` comments and trailing commas, which is the
/// subset of JSON5 layout authors reach for most. Sources nested deeper
/// than [`MAX_NESTING`](crate::MAX_NESTING) brackets are rejected before
/// parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsoncParser;

impl JsoncParser {
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for JsoncParser {
    fn name(&self) -> &str {
        "jsonc"
    }

    fn extensions(&self) -> &[&str] {
        &["jsonc", "json5"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<UiNode<'a>, ParseError> {
        check_nesting(source)?;

        let parse_options = ParseOptions::default();
        let value = jsonc_parser::parse_to_serde_value(source, &parse_options)
            .map_err(|e| ParseError::invalid_source(e.to_string()))?
            .ok_or_else(|| ParseError::invalid_source("document is empty"))?;
        debug!("jsonc: parsed {} bytes", source.len());

        DocumentBuilder::new(arena).build(&value)
    }
}
