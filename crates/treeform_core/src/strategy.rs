//! The conversion strategy contract and strategy wrappers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use treeform_ast::TreeNode;

use crate::error::{ConversionError, ConversionResult};

/// Policy that turns nodes of type `N` into `Self::Output`.
///
/// The transformer calls `convert_leaf` for every node whose `children()`
/// is `None`, and `convert_composite` for every other node once all of its
/// children have been converted. `children[i]` is always the output for
/// `node.children()[i]`; use [`TreeNode::child_position`] or iterate the
/// node's children alongside to recover per-child metadata.
///
/// Methods take `&self` so a single strategy can serve parallel sibling
/// conversions. Strategies that keep caches or counters need interior
/// mutability.
///
/// # Example
///
/// ```rust
/// use treeform_ast::{NodeId, UiNode};
/// use treeform_core::{ConversionResult, ConversionStrategy, Transformer};
///
/// /// Counts the leaves of a tree.
/// struct LeafCount;
///
/// impl<'a> ConversionStrategy<UiNode<'a>> for LeafCount {
///     type Output = usize;
///
///     fn convert_leaf(&self, _node: &UiNode<'a>) -> ConversionResult<usize, UiNode<'a>> {
///         Ok(1)
///     }
///
///     fn convert_composite(
///         &self,
///         _node: &UiNode<'a>,
///         children: Vec<usize>,
///     ) -> ConversionResult<usize, UiNode<'a>> {
///         Ok(children.into_iter().sum())
///     }
/// }
///
/// let root = UiNode::leaf(NodeId(0), "spacer");
/// assert_eq!(Transformer::new(LeafCount).transform(&root), Ok(1));
/// ```
pub trait ConversionStrategy<N: TreeNode> {
    /// Value produced per node.
    type Output;

    /// Converts a node that reports no children sequence.
    fn convert_leaf(&self, node: &N) -> ConversionResult<Self::Output, N>;

    /// Folds a node and its converted children, in child order.
    fn convert_composite(
        &self,
        node: &N,
        children: Vec<Self::Output>,
    ) -> ConversionResult<Self::Output, N>;
}

impl<N, S> ConversionStrategy<N> for &S
where
    N: TreeNode,
    S: ConversionStrategy<N> + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn convert_leaf(&self, node: &N) -> ConversionResult<Self::Output, N> {
        (**self).convert_leaf(node)
    }

    #[inline]
    fn convert_composite(
        &self,
        node: &N,
        children: Vec<Self::Output>,
    ) -> ConversionResult<Self::Output, N> {
        (**self).convert_composite(node, children)
    }
}

/// Shared flag used to cancel a running transform.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Takes effect at the next node visited.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Wraps a strategy so a [`CancellationToken`] can stop the transform.
///
/// Once the token is cancelled, the next leaf or composite conversion
/// fails with [`ErrorKind::Cancelled`](crate::ErrorKind::Cancelled) for
/// that node instead of reaching the inner strategy.
#[derive(Debug, Clone)]
pub struct Cancellable<S> {
    inner: S,
    token: CancellationToken,
}

impl<S> Cancellable<S> {
    pub fn new(inner: S, token: CancellationToken) -> Self {
        Self { inner, token }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn check<N: TreeNode>(&self, node: &N) -> Result<(), ConversionError<N::Id>> {
        if self.token.is_cancelled() {
            return Err(ConversionError::cancelled(node.id()));
        }
        Ok(())
    }
}

impl<N, S> ConversionStrategy<N> for Cancellable<S>
where
    N: TreeNode,
    S: ConversionStrategy<N>,
{
    type Output = S::Output;

    fn convert_leaf(&self, node: &N) -> ConversionResult<Self::Output, N> {
        self.check(node)?;
        self.inner.convert_leaf(node)
    }

    fn convert_composite(
        &self,
        node: &N,
        children: Vec<Self::Output>,
    ) -> ConversionResult<Self::Output, N> {
        self.check(node)?;
        self.inner.convert_composite(node, children)
    }
}
