//! Parser trait definition.

use std::path::Path;

use treeform_ast::{AstArena, UiNode};

use crate::{JsonParser, JsoncParser, ParseError};

static JSON: JsonParser = JsonParser;
static JSONC: JsoncParser = JsoncParser;

/// Trait for parsing a document into a [`UiNode`] tree.
///
/// # Example
///
/// ```rust,ignore
/// use treeform_parser::{DocumentParser, ParseError};
/// use treeform_ast::{AstArena, UiNode};
///
/// struct YamlParser;
///
/// impl DocumentParser for YamlParser {
///     fn name(&self) -> &str {
///         "yaml"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["yaml", "yml"]
///     }
///
///     fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<UiNode<'a>, ParseError> {
///         todo!()
///     }
/// }
/// ```
pub trait DocumentParser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles, without the dot.
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a tree allocated in `arena`.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<UiNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// Returns the built-in parser registered for `extension`.
pub fn parser_for_extension(extension: &str) -> Option<&'static dyn DocumentParser> {
    let parsers: [&'static dyn DocumentParser; 2] = [&JSON, &JSONC];
    parsers.into_iter().find(|p| p.can_parse(extension))
}

/// Returns the built-in parser for the file at `path`, chosen by extension.
pub fn parser_for_path(path: &Path) -> Option<&'static dyn DocumentParser> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(parser_for_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::json("layout.json", Some("json"))]
    #[case::uppercase("LAYOUT.JSON", Some("json"))]
    #[case::jsonc("layout.jsonc", Some("jsonc"))]
    #[case::json5("layout.json5", Some("jsonc"))]
    #[case::unknown("layout.yaml", None)]
    #[case::no_extension("layout", None)]
    fn test_parser_for_path(#[case] path: &str, #[case] expected: Option<&str>) {
        let parser = parser_for_path(Path::new(path));
        assert_eq!(parser.map(|p| p.name()), expected);
    }
}
