//! The tree transformer.
//!
//! Converts a whole tree into one value with a [`ConversionStrategy`],
//! depth-first and post-order: every child is converted, left to right,
//! before its parent is folded. The first failure aborts the transform and
//! is returned unchanged.
//!
//! Three interchangeable traversals produce identical results:
//!
//! - [`TraversalMode::Recursive`] - call-stack recursion
//! - [`TraversalMode::WorkStack`] - explicit heap stack, for documents
//!   deeper than the thread stack allows
//! - [`TraversalMode::Parallel`] - siblings converted on the `rayon` pool
//!   (see [`Transformer::transform_parallel`])

mod parallel;
mod recursive;
mod work_stack;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use treeform_ast::TreeNode;

use crate::error::{ConversionError, ConversionResult};
use crate::strategy::ConversionStrategy;

/// How the transformer walks the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    #[default]
    Recursive,
    #[serde(rename = "stack")]
    WorkStack,
    Parallel,
}

impl TraversalMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TraversalMode::Recursive => "recursive",
            TraversalMode::WorkStack => "stack",
            TraversalMode::Parallel => "parallel",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(TraversalMode::Recursive),
            "stack" => Ok(TraversalMode::WorkStack),
            "parallel" => Ok(TraversalMode::Parallel),
            other => Err(format!(
                "unknown traversal mode '{other}' (expected recursive, stack or parallel)"
            )),
        }
    }
}

/// Options for a [`Transformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Traversal to use.
    /// Default: `Recursive`
    pub mode: TraversalMode,
    /// Deepest allowed node, counting the root as depth 1.
    /// Default: None (no limit)
    pub max_depth: Option<usize>,
    /// Minimum number of children before siblings are converted in
    /// parallel. Only used by `Parallel` mode.
    /// Default: 8
    pub parallel_threshold: usize,
}

pub(crate) const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            mode: TraversalMode::default(),
            max_depth: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the traversal mode.
    pub fn mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the maximum depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sets the parallel fan-out threshold.
    pub fn parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }
}

/// Converts trees with a fixed strategy.
///
/// The transformer holds no per-tree state; one instance can transform any
/// number of trees, from several threads if the strategy allows it.
///
/// # Example
///
/// ```rust
/// use treeform_ast::{AstArena, NodeId, UiNode};
/// use treeform_core::{TransformOptions, Transformer, TraversalMode, View, ViewStrategy};
///
/// let arena = AstArena::new();
/// let label = UiNode::leaf(NodeId(1), "widget").with_key("A");
/// let children = arena.alloc_slice_copy(&[label]);
/// let root = UiNode::composite(NodeId(0), "hStack", children);
///
/// let options = TransformOptions::new().mode(TraversalMode::WorkStack);
/// let view = Transformer::with_options(ViewStrategy::new(), options).transform(&root);
///
/// assert_eq!(
///     view,
///     Ok(View::HStack {
///         spacing: None,
///         children: vec![View::Text { content: "A".to_string() }],
///     })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Transformer<S> {
    strategy: S,
    options: TransformOptions,
}

impl<S> Transformer<S> {
    /// Creates a transformer with default options.
    pub fn new(strategy: S) -> Self {
        Self::with_options(strategy, TransformOptions::default())
    }

    pub fn with_options(strategy: S, options: TransformOptions) -> Self {
        Self { strategy, options }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn into_strategy(self) -> S {
        self.strategy
    }

    /// Converts the tree rooted at `root`.
    ///
    /// Returns the root's output, or the first failure in depth-first,
    /// left-to-right order. `Parallel` mode needs thread-safe types, so
    /// here it runs the recursive traversal; use
    /// [`transform_parallel`](Self::transform_parallel) to fan out.
    pub fn transform<N>(&self, root: &N) -> ConversionResult<S::Output, N>
    where
        N: TreeNode,
        S: ConversionStrategy<N>,
    {
        debug!("transform: mode={} root={:?}", self.options.mode, root.id());

        let result = match self.options.mode {
            TraversalMode::Recursive | TraversalMode::Parallel => {
                recursive::transform(&self.strategy, &self.options, root, 1)
            }
            TraversalMode::WorkStack => work_stack::transform(&self.strategy, &self.options, root),
        };

        log_outcome(&result);
        result
    }

    /// Like [`transform`](Self::transform), but in `Parallel` mode converts
    /// siblings concurrently on the `rayon` pool.
    ///
    /// Outputs reach `convert_composite` in child order. When several
    /// siblings fail, the lowest-index failure is returned, so the reported
    /// error matches the sequential traversals. Siblings after a failing
    /// one may still have been converted.
    pub fn transform_parallel<N>(&self, root: &N) -> ConversionResult<S::Output, N>
    where
        N: TreeNode + Sync,
        N::Id: Send,
        S: ConversionStrategy<N> + Sync,
        S::Output: Send,
    {
        if self.options.mode != TraversalMode::Parallel {
            return self.transform(root);
        }

        debug!(
            "transform: mode=parallel threshold={} root={:?}",
            self.options.parallel_threshold,
            root.id()
        );

        let result = parallel::transform(&self.strategy, &self.options, root, 1);

        log_outcome(&result);
        result
    }
}

fn log_outcome<T, I: fmt::Debug>(result: &Result<T, ConversionError<I>>) {
    match result {
        Ok(_) => debug!("transform: done"),
        Err(e) => debug!("transform: failed: {}", e),
    }
}

/// Fails if `depth` exceeds the configured maximum.
fn check_depth<N: TreeNode>(
    options: &TransformOptions,
    node: &N,
    depth: usize,
) -> Result<(), ConversionError<N::Id>> {
    match options.max_depth {
        Some(max_depth) if depth > max_depth => Err(ConversionError::depth_exceeded(
            node.id(),
            depth,
            max_depth,
        )),
        _ => Ok(()),
    }
}
