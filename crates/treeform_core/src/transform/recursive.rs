use tracing::trace;
use treeform_ast::TreeNode;

use super::{TransformOptions, check_depth};
use crate::error::ConversionResult;
use crate::strategy::ConversionStrategy;

/// Converts `node`, lying at `depth`, and everything below it.
pub(super) fn transform<N, S>(
    strategy: &S,
    options: &TransformOptions,
    node: &N,
    depth: usize,
) -> ConversionResult<S::Output, N>
where
    N: TreeNode,
    S: ConversionStrategy<N> + ?Sized,
{
    check_depth(options, node, depth)?;

    match node.children() {
        None => strategy.convert_leaf(node),
        Some(children) => {
            let outputs = children
                .iter()
                .map(|child| transform(strategy, options, child, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;

            trace!("fold {:?} with {} children", node.id(), outputs.len());
            strategy.convert_composite(node, outputs)
        }
    }
}
