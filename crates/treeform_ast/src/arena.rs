//! Arena allocator for document nodes.
//!
//! Uses `bumpalo` for bump allocation. All nodes of one document live in
//! the same arena and are freed together when the arena is dropped.

use bumpalo::Bump;

/// Arena allocator for [`UiNode`](crate::UiNode) trees.
///
/// # Example
///
/// ```rust
/// use treeform_ast::{AstArena, NodeId, UiNode};
///
/// let arena = AstArena::new();
///
/// let kind = arena.alloc_str("spacer");
/// let children = arena.alloc_slice_copy(&[UiNode::leaf(NodeId(1), kind)]);
/// assert_eq!(children[0].kind, "spacer");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Copies a string into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Copies a slice of nodes or props into the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
