//! Visitor trait.

use std::ops::ControlFlow;

use crate::TreeNode;

use super::walk::walk_children;

/// Result type for visitor hooks.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop the whole traversal
pub type VisitResult = ControlFlow<()>;

/// Read-only visitor over a tree of `N`.
///
/// The `'t` lifetime is the borrow of the tree, so a visitor may keep
/// references to the nodes it sees.
pub trait Visitor<'t, N: TreeNode + 't>: Sized {
    /// Called before a node is dispatched.
    #[inline]
    fn enter_node(&mut self, _node: &'t N) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a node and all its descendants were visited.
    #[inline]
    fn exit_node(&mut self, _node: &'t N) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits a node that reports no children sequence.
    #[inline]
    fn visit_leaf(&mut self, _node: &'t N) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits a node that reports a children sequence, possibly empty.
    ///
    /// The default walks the children; overriding without calling
    /// [`walk_children`] prunes the subtree.
    #[inline]
    fn visit_composite(&mut self, node: &'t N) -> VisitResult {
        walk_children(self, node)
    }
}
