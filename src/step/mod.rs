//! Step log primitives
//!
//! A step is one atomic event of an operation: a visit, a comparison, a
//! structural change or an outcome. Operations append steps while they run,
//! so the log order is the real execution order.

mod sequence;

pub use sequence::{StepRecorder, StepSequence};

use std::fmt;

/// What happened at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepKind {
    /// Walk entered or passed through a node
    Visit,
    /// Target key compared against a node key
    Compare,
    /// Node created
    Insert,
    /// Node located for removal
    Delete,
    /// Walk succeeded
    Found,
    /// Walk fell off the tree, or the tree was empty
    NotFound,
    /// Traversal emitted a node
    Traverse,
}

impl StepKind {
    /// Wire name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Visit => "visit",
            StepKind::Compare => "compare",
            StepKind::Insert => "insert",
            StepKind::Delete => "delete",
            StepKind::Found => "found",
            StepKind::NotFound => "not_found",
            StepKind::Traverse => "traverse",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry/exit animation hint for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeState {
    /// Node was just created
    Appearing,
    /// Node is about to be removed
    Disappearing,
    /// Node has settled
    Normal,
}

impl NodeState {
    /// Wire name of the state
    pub fn as_str(self) -> &'static str {
        match self {
            NodeState::Appearing => "appearing",
            NodeState::Disappearing => "disappearing",
            NodeState::Normal => "normal",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parent → child edge, named by the two keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge<K> {
    /// Parent key
    pub from: K,
    /// Child key
    pub to: K,
}

/// One event in a step log
///
/// Only `kind` and `node_value` carry meaning; the rest are display hints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step<K> {
    /// Event kind
    pub kind: StepKind,
    /// Key the event is about, `None` for empty-tree or no-answer reports
    pub node_value: Option<K>,
    /// Human-readable narration
    pub description: String,
    /// Index into the operation's pseudocode listing
    pub algorithm_line: Option<usize>,
    /// Rendering of the comparison just performed
    pub comparison: Option<String>,
    /// Edge just traversed
    pub highlight_edge: Option<Edge<K>>,
    /// Entry/exit animation hint
    pub node_state: Option<NodeState>,
}

impl<K> Step<K> {
    /// Bare step with no display hints
    pub fn new(kind: StepKind, node_value: Option<K>, description: impl Into<String>) -> Self {
        Self {
            kind,
            node_value,
            description: description.into(),
            algorithm_line: None,
            comparison: None,
            highlight_edge: None,
            node_state: None,
        }
    }

    /// Set the pseudocode line
    pub fn with_line(mut self, line: usize) -> Self {
        self.algorithm_line = Some(line);
        self
    }

    /// Set the comparison text
    pub fn with_comparison(mut self, comparison: impl Into<String>) -> Self {
        self.comparison = Some(comparison.into());
        self
    }

    /// Set the highlighted edge
    pub fn with_edge(mut self, from: K, to: K) -> Self {
        self.highlight_edge = Some(Edge { from, to });
        self
    }

    /// Set the node animation state
    pub fn with_state(mut self, state: NodeState) -> Self {
        self.node_state = Some(state);
        self
    }

    /// Whether a driver should apply the mutation when playback reaches this step
    pub fn is_commit_trigger(&self) -> bool {
        match self.kind {
            StepKind::Insert => self.node_state == Some(NodeState::Appearing),
            StepKind::Delete => true,
            _ => false,
        }
    }
}
