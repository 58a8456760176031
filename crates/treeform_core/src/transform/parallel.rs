use rayon::prelude::*;
use tracing::trace;
use treeform_ast::TreeNode;

use super::{TransformOptions, check_depth};
use crate::error::ConversionResult;
use crate::strategy::ConversionStrategy;

/// Recursive traversal that fans wide sibling lists out to `rayon`.
///
/// Narrow composites (fewer than `parallel_threshold` children) stay on the
/// current thread. Wide ones convert every child in parallel, then report
/// the first failure by child index.
pub(super) fn transform<N, S>(
    strategy: &S,
    options: &TransformOptions,
    node: &N,
    depth: usize,
) -> ConversionResult<S::Output, N>
where
    N: TreeNode + Sync,
    N::Id: Send,
    S: ConversionStrategy<N> + Sync + ?Sized,
    S::Output: Send,
{
    check_depth(options, node, depth)?;

    let Some(children) = node.children() else {
        return strategy.convert_leaf(node);
    };

    let outputs = if children.len() >= options.parallel_threshold.max(1) {
        trace!("fan out {} children of {:?}", children.len(), node.id());
        children
            .par_iter()
            .map(|child| transform(strategy, options, child, depth + 1))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
    } else {
        children
            .iter()
            .map(|child| transform(strategy, options, child, depth + 1))
            .collect::<Result<Vec<_>, _>>()?
    };

    strategy.convert_composite(node, outputs)
}
