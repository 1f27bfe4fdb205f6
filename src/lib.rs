//! # Instrumented binary search tree
//!
//! A plain, unbalanced BST whose operations narrate themselves. Every
//! search, insert, delete, traversal and neighbour query returns an ordered
//! log of discrete steps (visits, comparisons, mutations, outcomes) that a
//! renderer can play back frame by frame.
//!
//! ## Preview and commit
//!
//! The [`BstEngine`] owns the authoritative tree and never changes it while
//! an animation is being prepared:
//!
//! 1. **Preview**: deep-copy the tree, run the operation on the copy, keep
//!    only the step log.
//! 2. **Commit**: once playback reaches the mutating step, run the same
//!    operation on the real tree.
//!
//! Cancelling an animation is simply never committing.
//!
//! ## Usage Example
//!
//! ```
//! use treestep::{BstEngine, EngineConfig, Operation, StepKind};
//!
//! let mut engine = BstEngine::new(EngineConfig::empty().with_seed_keys(vec![50, 25, 75]));
//! let steps = engine.preview(Operation::Insert, Some(60))?;
//! assert!(steps.contains_kind(StepKind::Insert));
//! assert_eq!(engine.count(), 3);
//!
//! engine.commit(Operation::Insert, Some(60))?;
//! assert_eq!(engine.count(), 4);
//! # Ok::<(), treestep::EngineError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod key; // Key bound and float keys
pub mod listing; // Pseudocode listings
pub mod ops; // Instrumented algorithms
pub mod playback; // Step-by-step driver
pub mod step; // Step log types
pub mod tree; // Node/tree model
/// Python bindings for driving the engine from a Python front end.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use key::{NumericKey, TreeKey};
pub use ops::{Operation, TreeStats};
pub use playback::Playback;
pub use step::{Edge, NodeState, Step, StepKind, StepSequence};
pub use tree::{Node, Tree, TreeSnapshot};

use thiserror::Error;
use tracing::{debug, trace};

/// Keys of the demonstration tree: a complete tree of depth 3 plus a
/// partial fourth level
pub const STARTER_KEYS: [i32; 25] = [
    50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43, 56, 68, 81, 93, 3, 9, 15, 21, 28, 34, 40, 46, 53, 59,
];

/// Engine construction parameters
#[derive(Debug, Clone)]
pub struct EngineConfig<K> {
    /// Keys inserted silently, in order, when the engine is built
    pub seed_keys: Vec<K>,

    /// Log every step of every preview at `trace` level
    pub trace_steps: bool,
}

impl<K> EngineConfig<K> {
    /// Start from an empty tree
    pub fn empty() -> Self {
        Self {
            seed_keys: Vec::new(),
            trace_steps: false,
        }
    }

    /// Seed the tree with `keys`
    pub fn with_seed_keys(mut self, keys: Vec<K>) -> Self {
        self.seed_keys = keys;
        self
    }

    /// Enable per-step tracing
    pub fn with_step_tracing(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }
}

impl<K: From<i32>> EngineConfig<K> {
    /// Start from the 25-key demonstration tree
    pub fn starter() -> Self {
        Self::empty().with_seed_keys(STARTER_KEYS.into_iter().map(K::from).collect())
    }
}

impl<K> Default for EngineConfig<K> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Programmer errors surfaced by the engine
///
/// Missing keys, empty trees and duplicates are not errors; they show up
/// as steps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Operation name not recognised
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Keyed operation called without a key
    #[error("operation {0} requires a key")]
    MissingKey(Operation),

    /// Key passed to an operation that takes none
    #[error("operation {0} does not take a key")]
    UnexpectedKey(Operation),

    /// Commit requested for an operation that never mutates
    #[error("operation {0} does not change the tree and cannot be committed")]
    NotCommittable(Operation),

    /// Key has no place in a total order (NaN)
    #[error("key {0} is not totally ordered")]
    UnorderedKey(String),

    /// Key text could not be parsed
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
}

/// Facade over the authoritative tree
///
/// Previews never touch the tree; only [`commit`](Self::commit) and
/// [`insert_silent`](Self::insert_silent) do.
#[derive(Debug, Clone)]
pub struct BstEngine<K> {
    tree: Tree<K>,
    trace_steps: bool,
    revision: u64,
}

impl<K: TreeKey> BstEngine<K> {
    /// Build the engine and plant the seed keys
    pub fn new(config: EngineConfig<K>) -> Self {
        let mut engine = Self {
            tree: Tree::new(),
            trace_steps: config.trace_steps,
            revision: 0,
        };
        let seeded = config.seed_keys.len();
        for key in config.seed_keys {
            engine.insert_silent(key);
        }
        debug!(seeded, count = engine.count(), "engine seeded");
        engine
    }

    /// Engine over an empty tree
    pub fn empty() -> Self {
        Self::new(EngineConfig::empty())
    }

    /// Step log `op` would produce, without changing the tree
    pub fn preview(&self, op: Operation, key: Option<K>) -> Result<StepSequence<K>, EngineError> {
        let key = check_key(op, key)?;
        let root = self.tree.root();
        let steps = match (op, key) {
            (Operation::Insert, Some(key)) => ops::insert(self.tree.clone().take_root(), key).steps,
            (Operation::Delete, Some(key)) => {
                ops::delete(self.tree.clone().take_root(), &key).steps
            }
            (Operation::Search, Some(key)) => ops::search(root, &key),
            (Operation::Successor, Some(key)) => ops::find_successor(root, &key),
            (Operation::Predecessor, Some(key)) => ops::find_predecessor(root, &key),
            (Operation::Inorder, _) => ops::inorder(root),
            (Operation::Preorder, _) => ops::preorder(root),
            (Operation::Postorder, _) => ops::postorder(root),
            (Operation::Min, _) => ops::find_min(root),
            (Operation::Max, _) => ops::find_max(root),
            (op, None) => return Err(EngineError::MissingKey(op)),
        };

        debug!(operation = %op, steps = steps.len(), "previewed operation");
        if self.trace_steps {
            for (index, step) in steps.iter().enumerate() {
                trace!(index, kind = %step.kind, value = ?step.node_value, "{}", step.description);
            }
        }
        Ok(steps)
    }

    /// Apply `op` to the authoritative tree
    ///
    /// Only insert and delete have a commit path.
    pub fn commit(&mut self, op: Operation, key: Option<K>) -> Result<(), EngineError> {
        if !op.is_mutating() {
            return Err(EngineError::NotCommittable(op));
        }
        let key = check_key(op, key)?.ok_or(EngineError::MissingKey(op))?;
        let root = self.tree.take_root();
        let mutation = match op {
            Operation::Delete => ops::delete(root, &key),
            _ => ops::insert(root, key),
        };
        self.tree.set_root(mutation.root);
        self.revision += 1;
        debug!(
            operation = %op,
            revision = self.revision,
            count = self.count(),
            "committed operation"
        );
        Ok(())
    }

    /// Insert without handing out a step log (seeding)
    pub fn insert_silent(&mut self, key: K) {
        let root = self.tree.take_root();
        self.tree.set_root(ops::insert(root, key).root);
        self.revision += 1;
    }

    /// Height, -1 for an empty tree
    pub fn height(&self) -> isize {
        ops::height(self.tree.root())
    }

    /// Number of keys
    pub fn count(&self) -> usize {
        ops::count(self.tree.root())
    }

    /// Smallest key
    pub fn min(&self) -> Option<K> {
        ops::min_value(self.tree.root()).cloned()
    }

    /// Largest key
    pub fn max(&self) -> Option<K> {
        ops::max_value(self.tree.root()).cloned()
    }

    /// All four aggregates
    pub fn stats(&self) -> TreeStats<K> {
        TreeStats::of(self.tree.root())
    }

    /// Shape export for layout
    pub fn snapshot(&self) -> TreeSnapshot<K> {
        self.tree.snapshot()
    }

    /// Read-only view of the tree
    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }

    /// Bumped by every commit
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<K: TreeKey> Default for BstEngine<K> {
    fn default() -> Self {
        Self::empty()
    }
}

fn check_key<K>(op: Operation, key: Option<K>) -> Result<Option<K>, EngineError> {
    match (op.takes_key(), key) {
        (true, None) => Err(EngineError::MissingKey(op)),
        (false, Some(_)) => Err(EngineError::UnexpectedKey(op)),
        (_, key) => Ok(key),
    }
}
