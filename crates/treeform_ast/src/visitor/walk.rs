//! Walk functions driving a [`Visitor`].

use std::ops::ControlFlow;

use crate::TreeNode;

use super::visit::{VisitResult, Visitor};

/// Walks a node: `enter_node`, then `visit_leaf` or `visit_composite`
/// depending on the node's shape, then `exit_node`.
pub fn walk_node<'t, N, V>(visitor: &mut V, node: &'t N) -> VisitResult
where
    N: TreeNode + 't,
    V: Visitor<'t, N>,
{
    visitor.enter_node(node)?;

    match node.children() {
        None => visitor.visit_leaf(node)?,
        Some(_) => visitor.visit_composite(node)?,
    }

    visitor.exit_node(node)
}

/// Walks every child of `node` in order. Does nothing for a leaf.
#[inline]
pub fn walk_children<'t, N, V>(visitor: &mut V, node: &'t N) -> VisitResult
where
    N: TreeNode + 't,
    V: Visitor<'t, N>,
{
    for child in node.children().unwrap_or_default() {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}

/// Returns the first node, in pre-order, whose identity equals `id`.
///
/// `root` itself is included in the search.
pub fn find_node<'t, N>(root: &'t N, id: &N::Id) -> Option<&'t N>
where
    N: TreeNode + 't,
{
    struct Finder<'t, 'i, N: TreeNode> {
        target: &'i N::Id,
        found: Option<&'t N>,
    }

    impl<'t, N: TreeNode + 't> Visitor<'t, N> for Finder<'t, '_, N> {
        fn enter_node(&mut self, node: &'t N) -> VisitResult {
            if &node.id() == self.target {
                self.found = Some(node);
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        }
    }

    let mut finder = Finder {
        target: id,
        found: None,
    };
    let _ = walk_node(&mut finder, root);
    finder.found
}
