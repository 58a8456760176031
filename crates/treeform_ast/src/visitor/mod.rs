//! Read-only traversal over any [`TreeNode`](crate::TreeNode).
//!
//! # Overview
//!
//! - [`Visitor`] - hook trait, every method has a default
//! - [`walk_node`] - enter, dispatch on leaf/composite, exit
//! - [`walk_children`] - walk each child in order
//! - [`find_node`] - depth-first lookup by identity
//!
//! Traversal is pre-order. Returning `ControlFlow::Break(())` from any hook
//! stops the walk.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use treeform_ast::visitor::{Visitor, VisitResult, walk_node};
//! use treeform_ast::{AstArena, NodeId, UiNode};
//!
//! struct KindCollector<'a> {
//!     kinds: Vec<&'a str>,
//! }
//!
//! impl<'t, 'a: 't> Visitor<'t, UiNode<'a>> for KindCollector<'a> {
//!     fn enter_node(&mut self, node: &'t UiNode<'a>) -> VisitResult {
//!         self.kinds.push(node.kind);
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let children = arena.alloc_slice_copy(&[UiNode::leaf(NodeId(1), "text")]);
//! let root = UiNode::composite(NodeId(0), "vStack", children);
//!
//! let mut collector = KindCollector { kinds: Vec::new() };
//! let _ = walk_node(&mut collector, &root);
//! assert_eq!(collector.kinds, vec!["vStack", "text"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{find_node, walk_children, walk_node};
