//! # treeform_ast
//!
//! Tree definitions for treeform.
//!
//! This crate provides the node contract the transformer is generic over,
//! plus one concrete document tree for server-driven UI layouts.
//!
//! ## Architecture
//!
//! - [`TreeNode`] is the only thing the transformer knows about its input:
//!   an identity and an optional ordered slice of children
//! - [`UiNode`] is the built-in implementation, allocated in an [`AstArena`]
//!   (`bumpalo`) so a whole document is freed at once
//! - [`visitor`] walks any [`TreeNode`] read-only with early termination
//!
//! ## Example
//!
//! ```rust
//! use treeform_ast::{AstArena, NodeId, TreeNode, UiNode};
//!
//! let arena = AstArena::new();
//!
//! let label = UiNode::leaf(NodeId(1), "text");
//! let children = arena.alloc_slice_copy(&[label]);
//! let row = UiNode::composite(NodeId(0), "hStack", children);
//!
//! assert!(!row.is_leaf());
//! assert_eq!(row.child_position(&NodeId(1)), Some(0));
//! ```

mod arena;
mod node;
mod stats;
mod ui_node;
pub mod visitor;

pub use arena::AstArena;
pub use node::{NodeId, TreeNode};
pub use stats::TreeStats;
pub use ui_node::{Prop, PropValue, UiNode};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, find_node};
