//! Read-only export of the tree shape
//!
//! Drivers lay the tree out themselves; this hands them keys and child
//! links only. Keys are unique, so a key doubles as node identity.

use std::fmt;

use super::Node;

/// One node of a snapshot with its children named by key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SnapshotNode<K> {
    /// Node key
    pub key: K,
    /// Key of the left child
    pub left: Option<K>,
    /// Key of the right child
    pub right: Option<K>,
}

/// Detached copy of a tree shape, nodes in pre-order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeSnapshot<K> {
    /// Root key
    pub root: Option<K>,
    /// Every node, parents before children
    pub nodes: Vec<SnapshotNode<K>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    serial: String,
}

impl<K: Clone + fmt::Display> TreeSnapshot<K> {
    pub(crate) fn capture(root: Option<&Node<K>>) -> Self {
        let mut nodes = Vec::new();
        collect(root, &mut nodes);
        Self {
            root: root.map(|node| node.key.clone()),
            nodes,
            serial: root.map(ToString::to_string).unwrap_or_default(),
        }
    }
}

impl<K> TreeSnapshot<K> {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree was empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parenthesised serial form, e.g. `50(25,75)`
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Hash of the serial form
    ///
    /// Two snapshots have the same fingerprint exactly when they have the
    /// same shape and keys.
    pub fn fingerprint(&self) -> blake3::Hash {
        blake3::hash(self.serial.as_bytes())
    }
}

impl<K> fmt::Display for TreeSnapshot<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serial)
    }
}

fn collect<K: Clone>(node: Option<&Node<K>>, out: &mut Vec<SnapshotNode<K>>) {
    let Some(node) = node else {
        return;
    };
    out.push(SnapshotNode {
        key: node.key.clone(),
        left: node.left().map(|child| child.key.clone()),
        right: node.right().map(|child| child.key.clone()),
    });
    collect(node.left(), out);
    collect(node.right(), out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Node<i32> {
        let mut root = Node::new(10);
        let mut mid = Node::new(20);
        mid.right = Some(Node::boxed(30));
        root.right = Some(Box::new(mid));
        root
    }

    #[test]
    fn test_preorder_nodes() {
        let root = chain();
        let snapshot = TreeSnapshot::capture(Some(&root));
        let keys: Vec<i32> = snapshot.nodes.iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![10, 20, 30]);
        assert_eq!(snapshot.root, Some(10));
        assert_eq!(snapshot.nodes[0].left, None);
        assert_eq!(snapshot.nodes[0].right, Some(20));
        assert_eq!(snapshot.serial(), "10(-,20(-,30))");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = TreeSnapshot::<i32>::capture(None);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_string(), "");
        assert_eq!(snapshot.root, None);
    }

    #[test]
    fn test_fingerprint_tracks_shape() {
        let a = chain();
        let mut b = chain();
        assert_eq!(
            TreeSnapshot::capture(Some(&a)).fingerprint(),
            TreeSnapshot::capture(Some(&b)).fingerprint()
        );

        b.left = Some(Node::boxed(5));
        assert_ne!(
            TreeSnapshot::capture(Some(&a)).fingerprint(),
            TreeSnapshot::capture(Some(&b)).fingerprint()
        );
    }
}
