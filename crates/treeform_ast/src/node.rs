//! The node contract.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Identity of a [`UiNode`](crate::UiNode) within one document.
///
/// The parser assigns ids in pre-order starting at `0` for the root, so
/// ids are unique per document even when authored `"id"` keys repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in a hierarchical document.
///
/// This is the whole contract the transformer relies on. It distinguishes
/// two shapes:
///
/// - `children()` returns `None`: the node is a *leaf*
/// - `children()` returns `Some(slice)`: the node is a *composite*, even
///   when the slice is empty
///
/// Implementations must describe a finite, acyclic tree. Nothing here
/// detects cycles.
///
/// # Example
///
/// ```rust
/// use treeform_ast::TreeNode;
///
/// struct Dir {
///     name: &'static str,
///     entries: Option<Vec<Dir>>,
/// }
///
/// impl TreeNode for Dir {
///     type Id = &'static str;
///
///     fn id(&self) -> Self::Id {
///         self.name
///     }
///
///     fn children(&self) -> Option<&[Self]> {
///         self.entries.as_deref()
///     }
/// }
///
/// let root = Dir { name: "/", entries: Some(vec![Dir { name: "etc", entries: None }]) };
/// assert!(root.child_by_id(&"etc").is_some_and(TreeNode::is_leaf));
/// ```
pub trait TreeNode: Sized {
    /// Identity used to compare and look up nodes.
    type Id: Clone + Eq + Hash + fmt::Debug;

    /// Returns this node's identity.
    fn id(&self) -> Self::Id;

    /// Returns the ordered children, or `None` for a leaf.
    fn children(&self) -> Option<&[Self]>;

    /// Returns true if this node reports no children sequence at all.
    #[inline]
    fn is_leaf(&self) -> bool {
        self.children().is_none()
    }

    /// Returns the first direct child with the given identity.
    fn child_by_id(&self, id: &Self::Id) -> Option<&Self> {
        self.children()?.iter().find(|child| &child.id() == id)
    }

    /// Returns the index of the first direct child with the given identity.
    ///
    /// Strategies use this to pair a converted child with its source node:
    /// the converted output at that index belongs to the child.
    fn child_position(&self, id: &Self::Id) -> Option<usize> {
        self.children()?.iter().position(|child| &child.id() == id)
    }
}
