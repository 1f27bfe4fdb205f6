//! Aggregate queries
//!
//! Plain structural facts with no step log. Height of an empty tree is -1,
//! so a single node has height 0.

use crate::key::TreeKey;
use crate::tree::Node;

/// Height in edges, -1 when empty
pub fn height<K>(root: Option<&Node<K>>) -> isize {
    match root {
        None => -1,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

/// Number of nodes
pub fn count<K>(root: Option<&Node<K>>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count(node.left()) + count(node.right()),
    }
}

/// Smallest key
pub fn min_value<K>(root: Option<&Node<K>>) -> Option<&K> {
    root.map(|node| node.leftmost().key())
}

/// Largest key
pub fn max_value<K>(root: Option<&Node<K>>) -> Option<&K> {
    root.map(|node| node.rightmost().key())
}

/// The four aggregates together
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeStats<K> {
    /// See [`height`]
    pub height: isize,
    /// See [`count`]
    pub count: usize,
    /// See [`min_value`]
    pub min: Option<K>,
    /// See [`max_value`]
    pub max: Option<K>,
}

impl<K: TreeKey> TreeStats<K> {
    /// Gather all aggregates of a tree
    pub fn of(root: Option<&Node<K>>) -> Self {
        Self {
            height: height(root),
            count: count(root),
            min: min_value(root).cloned(),
            max: max_value(root).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::insert;
    use crate::tree::Link;

    fn build(keys: &[i32]) -> Link<i32> {
        keys.iter().fold(None, |root, &key| insert(root, key).root)
    }

    #[test]
    fn test_empty() {
        let stats = TreeStats::<i32>::of(None);
        assert_eq!(
            stats,
            TreeStats {
                height: -1,
                count: 0,
                min: None,
                max: None
            }
        );
    }

    #[test]
    fn test_single_node_height_zero() {
        let root = build(&[9]);
        assert_eq!(height(root.as_deref()), 0);
        assert_eq!(count(root.as_deref()), 1);
    }

    #[test]
    fn test_degenerate_chain() {
        let root = build(&[1, 2, 3, 4, 5]);
        assert_eq!(height(root.as_deref()), 4);
        assert_eq!(min_value(root.as_deref()), Some(&1));
        assert_eq!(max_value(root.as_deref()), Some(&5));
    }

    #[test]
    fn test_balanced_sample() {
        let stats = TreeStats::of(build(&[50, 25, 75, 12, 37, 62, 87]).as_deref());
        assert_eq!(stats.height, 2);
        assert_eq!(stats.count, 7);
        assert_eq!(stats.min, Some(12));
        assert_eq!(stats.max, Some(87));
    }
}
