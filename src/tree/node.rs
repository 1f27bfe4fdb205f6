//! Owning tree node
//!
//! A node owns both children outright; there are no parent links. Walks
//! that need ancestor context carry it in a local while descending.

use std::fmt;

/// Owned, possibly absent subtree
pub type Link<K> = Option<Box<Node<K>>>;

/// Key-holding tree node
///
/// `Clone` is a deep copy: the clone shares no node with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Leaf holding `key`
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Boxed leaf, ready to hang off a parent
    pub(crate) fn boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// Key stored here
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Left child
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right child
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// No children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Leftmost node of this subtree
    pub fn leftmost(&self) -> &Node<K> {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// Rightmost node of this subtree
    pub fn rightmost(&self) -> &Node<K> {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if self.is_leaf() {
            return Ok(());
        }
        f.write_str("(")?;
        match self.left() {
            Some(left) => write!(f, "{left}")?,
            None => f.write_str("-")?,
        }
        f.write_str(",")?;
        match self.right() {
            Some(right) => write!(f, "{right}")?,
            None => f.write_str("-")?,
        }
        f.write_str(")")
    }
}
