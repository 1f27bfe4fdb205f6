//! Node/tree ownership model
//!
//! A tree is one optional owned root. Order is the only invariant: every
//! key in a left subtree is smaller than its parent's key and every key in
//! a right subtree is larger. There is no balancing.

mod node;
mod snapshot;

pub use node::{Link, Node};
pub use snapshot::{SnapshotNode, TreeSnapshot};

use crate::key::TreeKey;

/// Binary search tree
///
/// `Clone` produces a fully independent deep copy, which is what lets a
/// preview run on a throwaway tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<K> {
    pub(crate) root: Link<K>,
}

impl<K> Tree<K> {
    /// Empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Detach the root, leaving the tree empty
    pub(crate) fn take_root(&mut self) -> Link<K> {
        self.root.take()
    }

    /// Install a new root
    pub(crate) fn set_root(&mut self, root: Link<K>) {
        self.root = root;
    }
}

impl<K: TreeKey> Tree<K> {
    /// Shape export for layout
    pub fn snapshot(&self) -> TreeSnapshot<K> {
        TreeSnapshot::capture(self.root())
    }

    /// Keys in ascending order
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::new();
        collect_inorder(self.root(), &mut out);
        out
    }

    /// Whether every node respects strict BST order
    pub fn is_ordered(&self) -> bool {
        self.keys().windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_inorder<K: Clone>(node: Option<&Node<K>>, out: &mut Vec<K>) {
    if let Some(node) = node {
        collect_inorder(node.left(), out);
        out.push(node.key.clone());
        collect_inorder(node.right(), out);
    }
}
