//! Pseudocode listings
//!
//! `Step::algorithm_line` indexes into the listing of the operation that
//! produced the step. Renderers highlight that line; nothing else reads it.

use crate::ops::Operation;

const INSERT: &[&str] = &[
    "if insertion point is found",
    "  create new vertex",
    "  if value to be inserted < this key",
    "    go left",
    "  else if value to be inserted > this key",
    "    go right",
    "  else value already present, stop",
];

const SEARCH: &[&str] = &[
    "if current vertex is null",
    "  return NOT_FOUND",
    "if value == current key",
    "  return FOUND",
    "if value < current key",
    "  go left",
    "else",
    "  go right",
];

const DELETE: &[&str] = &[
    "search for vertex to delete",
    "if vertex has no children",
    "  remove vertex",
    "else if vertex has one child",
    "  bypass vertex",
    "else",
    "  find successor",
    "  replace with successor",
];

const INORDER: &[&str] = &[
    "if current vertex is null",
    "  return",
    "traverse left subtree",
    "visit current vertex",
    "traverse right subtree",
];

const PREORDER: &[&str] = &[
    "if current vertex is null",
    "  return",
    "visit current vertex",
    "traverse left subtree",
    "traverse right subtree",
];

const POSTORDER: &[&str] = &[
    "if current vertex is null",
    "  return",
    "traverse left subtree",
    "traverse right subtree",
    "visit current vertex",
];

const SUCCESSOR: &[&str] = &[
    "search for vertex",
    "if right subtree exists",
    "  find leftmost in right subtree",
    "else",
    "  find lowest ancestor",
];

const PREDECESSOR: &[&str] = &[
    "search for vertex",
    "if left subtree exists",
    "  find rightmost in left subtree",
    "else",
    "  find lowest ancestor",
];

const MIN: &[&str] = &[
    "start at root",
    "while left child exists",
    "  go left",
    "return current vertex",
];

const MAX: &[&str] = &[
    "start at root",
    "while right child exists",
    "  go right",
    "return current vertex",
];

/// Listing for `op`
pub fn pseudocode(op: Operation) -> &'static [&'static str] {
    match op {
        Operation::Insert => INSERT,
        Operation::Delete => DELETE,
        Operation::Search => SEARCH,
        Operation::Inorder => INORDER,
        Operation::Preorder => PREORDER,
        Operation::Postorder => POSTORDER,
        Operation::Min => MIN,
        Operation::Max => MAX,
        Operation::Successor => SUCCESSOR,
        Operation::Predecessor => PREDECESSOR,
    }
}

/// Line `line` of the listing for `op`
pub fn line(op: Operation, line: usize) -> Option<&'static str> {
    pseudocode(op).get(line).copied()
}
