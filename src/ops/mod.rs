//! Instrumented BST algorithms
//!
//! Each function computes its answer and narrates the computation at the
//! same time, appending to a [`StepRecorder`](crate::step::StepRecorder) as
//! it walks. Mutating operations take the subtree by value and hand back
//! the new root next to the log; queries only borrow.

mod delete;
mod insert;
mod query;
mod search;
mod stats;
mod traversal;

pub use delete::delete;
pub use insert::insert;
pub use query::{find_max, find_min, find_predecessor, find_successor};
pub use search::search;
pub use stats::{count, height, max_value, min_value, TreeStats};
pub use traversal::{inorder, postorder, preorder};

use std::fmt;
use std::str::FromStr;

use crate::step::StepSequence;
use crate::tree::Link;
use crate::EngineError;

/// Result of a mutating operation
#[derive(Debug)]
pub struct Mutation<K> {
    /// Root after the operation
    pub root: Link<K>,
    /// What happened, in order
    pub steps: StepSequence<K>,
}

/// Operations a driver can request by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// Insert a key
    Insert,
    /// Delete a key
    Delete,
    /// Look a key up
    Search,
    /// Left, self, right
    Inorder,
    /// Self, left, right
    Preorder,
    /// Left, right, self
    Postorder,
    /// Smallest key
    Min,
    /// Largest key
    Max,
    /// Next larger key
    Successor,
    /// Next smaller key
    Predecessor,
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Operation; 10] = [
        Operation::Insert,
        Operation::Delete,
        Operation::Search,
        Operation::Inorder,
        Operation::Preorder,
        Operation::Postorder,
        Operation::Min,
        Operation::Max,
        Operation::Successor,
        Operation::Predecessor,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::Inorder => "inorder",
            Operation::Preorder => "preorder",
            Operation::Postorder => "postorder",
            Operation::Min => "min",
            Operation::Max => "max",
            Operation::Successor => "successor",
            Operation::Predecessor => "predecessor",
        }
    }

    /// Whether the operation needs a key argument
    pub fn takes_key(self) -> bool {
        matches!(
            self,
            Operation::Insert
                | Operation::Delete
                | Operation::Search
                | Operation::Successor
                | Operation::Predecessor
        )
    }

    /// Whether the operation changes the tree and so has a commit path
    pub fn is_mutating(self) -> bool {
        matches!(self, Operation::Insert | Operation::Delete)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        let op = match normalized.as_str() {
            "insert" => Operation::Insert,
            "delete" | "remove" => Operation::Delete,
            "search" | "find" => Operation::Search,
            "inorder" => Operation::Inorder,
            "preorder" => Operation::Preorder,
            "postorder" => Operation::Postorder,
            "min" | "minimum" => Operation::Min,
            "max" | "maximum" => Operation::Max,
            "successor" => Operation::Successor,
            "predecessor" => Operation::Predecessor,
            _ => return Err(EngineError::UnknownOperation(s.to_string())),
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("in-order".parse::<Operation>().unwrap(), Operation::Inorder);
        assert_eq!("Post_Order".parse::<Operation>().unwrap(), Operation::Postorder);
        assert_eq!("minimum".parse::<Operation>().unwrap(), Operation::Min);
    }

    #[test]
    fn test_unknown_name() {
        let err = "rotate".parse::<Operation>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownOperation(ref name) if name == "rotate"));
    }

    #[test]
    fn test_only_insert_and_delete_mutate() {
        let mutating: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| op.is_mutating())
            .collect();
        assert_eq!(mutating, vec![Operation::Insert, Operation::Delete]);
        assert!(!Operation::Min.takes_key());
        assert!(Operation::Successor.takes_key());
    }
}
