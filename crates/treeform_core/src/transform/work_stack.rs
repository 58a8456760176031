//! Traversal on an explicit stack of frames.
//!
//! Memory grows with depth on the heap instead of the thread stack, so
//! arbitrarily deep chains convert without overflowing.

use std::mem;

use tracing::trace;
use treeform_ast::TreeNode;

use super::{TransformOptions, check_depth};
use crate::error::ConversionResult;
use crate::strategy::ConversionStrategy;

/// A composite whose children are still being converted.
struct Frame<'t, N, O> {
    node: &'t N,
    children: &'t [N],
    /// Index of the next child to visit.
    next: usize,
    /// Outputs of `children[..next]`, in order.
    outputs: Vec<O>,
    depth: usize,
}

impl<'t, N: TreeNode, O> Frame<'t, N, O> {
    fn new(node: &'t N, children: &'t [N], depth: usize) -> Self {
        Self {
            node,
            children,
            next: 0,
            outputs: Vec::with_capacity(children.len()),
            depth,
        }
    }
}

pub(super) fn transform<N, S>(
    strategy: &S,
    options: &TransformOptions,
    root: &N,
) -> ConversionResult<S::Output, N>
where
    N: TreeNode,
    S: ConversionStrategy<N> + ?Sized,
{
    check_depth(options, root, 1)?;

    let Some(children) = root.children() else {
        return strategy.convert_leaf(root);
    };

    let mut parents: Vec<Frame<'_, N, S::Output>> = Vec::new();
    let mut current = Frame::new(root, children, 1);

    loop {
        if let Some(child) = current.children.get(current.next) {
            current.next += 1;
            let depth = current.depth + 1;
            check_depth(options, child, depth)?;

            match child.children() {
                None => current.outputs.push(strategy.convert_leaf(child)?),
                Some(grandchildren) => {
                    let frame = Frame::new(child, grandchildren, depth);
                    parents.push(mem::replace(&mut current, frame));
                }
            }
            continue;
        }

        // Every child is done; fold this composite into its parent.
        trace!(
            "fold {:?} with {} children",
            current.node.id(),
            current.outputs.len()
        );
        let output = strategy.convert_composite(current.node, mem::take(&mut current.outputs))?;

        match parents.pop() {
            Some(parent) => {
                current = parent;
                current.outputs.push(output);
            }
            None => return Ok(output),
        }
    }
}
