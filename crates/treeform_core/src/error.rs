//! Error types.

use std::fmt;

use thiserror::Error;
use treeform_ast::{NodeId, TreeNode};
use treeform_parser::ParseError;

/// Result of converting a node of type `N`.
pub type ConversionResult<T, N> = Result<T, ConversionError<<N as TreeNode>::Id>>;

/// Why a conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The strategy has no rule for this node's kind.
    UnsupportedNode,
    /// The node is inconsistent for conversion, e.g. a container without
    /// children or a leaf kind with children.
    InvalidNodeState,
    /// The transform was cancelled before this node was converted.
    Cancelled,
    /// The node lies deeper than the configured maximum depth.
    DepthLimitExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnsupportedNode => "unsupported node",
            ErrorKind::InvalidNodeState => "invalid node state",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::DepthLimitExceeded => "depth limit exceeded",
        };
        f.write_str(name)
    }
}

/// A failed conversion, naming the node it failed on.
///
/// When a descendant fails, the transformer hands this value up unchanged,
/// so `node` is always the node that actually failed, never an ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {node:?}: {reason}")]
pub struct ConversionError<I> {
    pub kind: ErrorKind,
    pub node: I,
    pub reason: String,
}

impl<I> ConversionError<I> {
    pub fn new(kind: ErrorKind, node: I, reason: impl Into<String>) -> Self {
        Self {
            kind,
            node,
            reason: reason.into(),
        }
    }

    /// Creates an unsupported node error.
    pub fn unsupported(node: I, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedNode, node, reason)
    }

    /// Creates an invalid node state error.
    pub fn invalid_state(node: I, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNodeState, node, reason)
    }

    /// Creates a cancellation error.
    pub fn cancelled(node: I) -> Self {
        Self::new(ErrorKind::Cancelled, node, "transform was cancelled")
    }

    /// Creates a depth limit error.
    pub fn depth_exceeded(node: I, depth: usize, max_depth: usize) -> Self {
        Self::new(
            ErrorKind::DepthLimitExceeded,
            node,
            format!("depth {depth} exceeds the maximum of {max_depth}"),
        )
    }
}

/// Errors from the end-to-end pipeline: config, I/O, parsing, conversion.
#[derive(Debug, Error)]
pub enum TreeformError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Conversion error.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError<NodeId>),
}

impl TreeformError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_message() {
        let err = ConversionError::unsupported(NodeId(4), "unknown node type \"carousel\"");

        assert_eq!(err.kind, ErrorKind::UnsupportedNode);
        assert_eq!(err.node, NodeId(4));
        assert_eq!(
            err.to_string(),
            "unsupported node at NodeId(4): unknown node type \"carousel\""
        );
    }

    #[test]
    fn test_depth_exceeded_message() {
        let err = ConversionError::depth_exceeded("deep", 5, 4);

        assert_eq!(err.kind, ErrorKind::DepthLimitExceeded);
        assert_eq!(
            err.to_string(),
            "depth limit exceeded at \"deep\": depth 5 exceeds the maximum of 4"
        );
    }

    #[test]
    fn test_treeform_error_wraps_conversion() {
        let err: TreeformError = ConversionError::cancelled(NodeId(0)).into();

        assert!(matches!(err, TreeformError::Conversion(ref e) if e.kind == ErrorKind::Cancelled));
        assert_eq!(
            err.to_string(),
            "Conversion error: cancelled at NodeId(0): transform was cancelled"
        );
    }
}
