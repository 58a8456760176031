//! Shape statistics for a tree.

use std::ops::ControlFlow;

use serde::Serialize;

use crate::TreeNode;
use crate::visitor::{VisitResult, Visitor, walk_children, walk_node};

/// Node counts and depth of a tree. The root is at depth 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub composites: usize,
    /// Composites reporting an empty children sequence.
    pub empty_composites: usize,
    pub max_depth: usize,
}

impl TreeStats {
    /// Walks `root` and collects its statistics.
    pub fn collect<N: TreeNode>(root: &N) -> Self {
        let mut collector = StatsCollector {
            stats: TreeStats::default(),
            depth: 0,
        };
        let _ = walk_node(&mut collector, root);
        collector.stats
    }
}

struct StatsCollector {
    stats: TreeStats,
    depth: usize,
}

impl<'t, N: TreeNode + 't> Visitor<'t, N> for StatsCollector {
    fn enter_node(&mut self, _node: &'t N) -> VisitResult {
        self.depth += 1;
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        ControlFlow::Continue(())
    }

    fn exit_node(&mut self, _node: &'t N) -> VisitResult {
        self.depth -= 1;
        ControlFlow::Continue(())
    }

    fn visit_leaf(&mut self, _node: &'t N) -> VisitResult {
        self.stats.leaves += 1;
        ControlFlow::Continue(())
    }

    fn visit_composite(&mut self, node: &'t N) -> VisitResult {
        self.stats.composites += 1;
        if node.children().is_some_and(<[N]>::is_empty) {
            self.stats.empty_composites += 1;
        }
        walk_children(self, node)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{AstArena, NodeId, UiNode};

    #[test]
    fn test_stats_single_leaf() {
        let stats = TreeStats::collect(&UiNode::leaf(NodeId(0), "text"));

        assert_eq!(
            stats,
            TreeStats {
                nodes: 1,
                leaves: 1,
                composites: 0,
                empty_composites: 0,
                max_depth: 1,
            }
        );
    }

    #[test]
    fn test_stats_nested_tree() {
        let arena = AstArena::new();
        let empty = UiNode::composite(NodeId(2), "zStack", &[]);
        let inner = arena.alloc_slice_copy(&[empty, UiNode::leaf(NodeId(3), "text")]);
        let row = UiNode::composite(NodeId(1), "hStack", inner);
        let outer = arena.alloc_slice_copy(&[row, UiNode::leaf(NodeId(4), "spacer")]);
        let root = UiNode::composite(NodeId(0), "vStack", outer);

        let stats = TreeStats::collect(&root);

        assert_eq!(
            stats,
            TreeStats {
                nodes: 5,
                leaves: 2,
                composites: 3,
                empty_composites: 1,
                max_depth: 3,
            }
        );
    }
}
