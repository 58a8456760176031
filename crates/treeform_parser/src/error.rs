//! Parse error types.

use thiserror::Error;

/// Errors that can occur while turning a document into a node tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text is not well-formed.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// The source is well-formed but a node object is malformed.
    #[error("Invalid node at {path}: {message}")]
    InvalidNode {
        /// JSON path of the offending value, e.g. `$.children[1]`.
        path: String,
        /// Error message.
        message: String,
    },

    /// The document uses a construct the node model cannot represent.
    #[error("Unsupported value at {path}: {feature}")]
    Unsupported {
        /// JSON path of the offending value.
        path: String,
        /// What was found.
        feature: String,
    },

    /// An internal parser error occurred.
    #[error("Internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource(message.into())
    }

    /// Creates a new invalid node error.
    pub fn invalid_node(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new unsupported value error.
    pub fn unsupported(path: impl Into<String>, feature: impl Into<String>) -> Self {
        Self::Unsupported {
            path: path.into(),
            feature: feature.into(),
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
