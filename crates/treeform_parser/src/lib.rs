//! # treeform_parser
//!
//! Input adapters for treeform.
//!
//! This crate provides:
//! - A `DocumentParser` trait for document formats
//! - `JsonParser` for strict JSON documents (`serde_json`)
//! - `JsoncParser` for JSON with comments and trailing commas (`jsonc-parser`)
//!
//! Both reject documents nested deeper than [`MAX_NESTING`] brackets.
//!
//! ## Document shape
//!
//! Every node is an object with a string `type`. An optional string `id`
//! becomes the node's key, `children` (an array) makes it a composite, and
//! every other scalar member becomes a prop.
//!
//! ```json
//! { "type": "hStack", "spacing": 8, "children": [ { "type": "text", "text": "A" } ] }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use treeform_ast::{AstArena, TreeNode};
//! use treeform_parser::{DocumentParser, JsonParser};
//!
//! let arena = AstArena::new();
//! let source = r#"{ "type": "vStack", "children": [ { "type": "spacer" } ] }"#;
//!
//! let root = JsonParser::new().parse(&arena, source).unwrap();
//! assert_eq!(root.kind, "vStack");
//! assert!(root.children.is_some_and(|c| c[0].is_leaf()));
//! ```

mod builder;
mod error;
mod json;
mod jsonc;
mod nesting;
mod traits;

pub use error::ParseError;
pub use json::JsonParser;
pub use jsonc::JsoncParser;
pub use nesting::MAX_NESTING;
pub use traits::{DocumentParser, parser_for_extension, parser_for_path};
