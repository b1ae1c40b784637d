//! A mutable, unbalanced BST of `i32` keys. Each node owns its children through `Box`, so the
//! tree is a strict hierarchy and every node has exactly one owner.
//!
//! None of the operations recurse per level of the tree. A tree built from sorted keys is as
//! deep as it is long, so descents are loops and traversals keep their own stacks.
//!
//! # Examples
//!
//! ```
//! use int_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! tree.insert(1);
//! assert!(tree.contains(1));
//!
//! // Inserting a key that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! tree.delete(1);
//! assert!(!tree.contains(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::iter::{InOrder, PreOrder};

/// The owning pointer from a parent (or the tree itself) to a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// An unbalanced Binary Search Tree of `i32` keys. This can be used for inserting, searching
/// for, and deleting keys, and for visiting them in sorted order.
///
/// Equal keys are never stored twice: inserting a key that is already present leaves the tree
/// unchanged.
pub struct BinarySearchTree {
    root: Link,
    len: usize,
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinarySearchTree {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of keys stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(7);
    /// tree.insert(7);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts `key` into the tree. Returns `true` if the key was not already present. If it
    /// was, the tree is left untouched and `false` is returned.
    ///
    /// The new key always becomes a leaf at the first empty slot found while descending from
    /// the root. Nothing is rebalanced afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(1));
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Returns whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Same as [`contains`][Self::contains].
    pub fn search(&self, key: i32) -> bool {
        self.contains(key)
    }

    /// Deletes `key` from the tree. Returns `true` if the key was present. If the tree does not
    /// contain the key, nothing happens.
    ///
    /// A node with two children is not unlinked. Its key is overwritten with its in-order
    /// successor (the smallest key of its right subtree) and the successor's node is removed
    /// from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree = [50, 30, 70, 20, 40].iter().copied().collect();
    ///
    /// assert!(tree.delete(30));
    /// assert!(!tree.delete(30));
    ///
    /// // 30's successor, 40, took its place.
    /// assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![50, 40, 20, 70]);
    /// ```
    pub fn delete(&mut self, key: i32) -> bool {
        let deleted = Self::delete_from(&mut self.root, key);
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Returns an iterator over the keys in ascending order. Each call walks the tree as it is
    /// now, so calling it again after mutating the tree reflects the changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec![3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// Same as [`in_order`][Self::in_order].
    pub fn iter(&self) -> InOrder<'_> {
        self.in_order()
    }

    /// Collects [`in_order`][Self::in_order] into a `Vec`.
    pub fn in_order_vec(&self) -> Vec<i32> {
        self.in_order().collect()
    }

    /// Returns an iterator over the keys visiting each node before its left subtree and then
    /// its right subtree. Unlike the in-order sequence this depends on the shape of the tree.
    ///
    /// Inserting this sequence into an empty tree rebuilds a tree of exactly the same shape.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree with a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use int_bst::BinarySearchTree;
    ///
    /// let balanced: BinarySearchTree = vec![2, 1, 3].into_iter().collect();
    /// let sorted: BinarySearchTree = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(sorted.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Deletes `key` from the subtree owned by `link`. See [`BinarySearchTree::delete`].
    fn delete_from(link: &mut Link, key: i32) -> bool {
        let link = Self::link_to(link, key);
        let Some(node) = link else {
            return false;
        };

        match (node.left(), node.right()) {
            (None, _) => *link = node.right.take(),
            (_, None) => *link = node.left.take(),
            (Some(_), Some(right)) => {
                // The successor has no left child, so removing it below takes one of the two
                // cases above.
                let successor = find_minimum(right);
                node.key = successor;
                let removed = Self::delete_from(&mut node.right, successor);
                debug_assert!(removed, "successor {} vanished from the right subtree", successor);

                if cfg!(debug_assertions) {
                    node.assert_ordered_children();
                }
            }
        }

        true
    }

    /// Descends from `link` to the link that owns `key`'s node, or to the empty link where
    /// `key` would be attached.
    fn link_to(mut link: &mut Link, key: i32) -> &mut Link {
        while let Some(ordering) = link.as_ref().map(|node| key.cmp(&node.key)) {
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
        link
    }
}

/// Returns the smallest key in the subtree rooted at `node` by walking left children until
/// none remain.
fn find_minimum(mut node: &Node) -> i32 {
    while let Some(left) = node.left() {
        node = left;
    }
    node.key
}

impl Clone for BinarySearchTree {
    // Copies node by node with a heap stack of (source, empty destination link) pairs, so the
    // clone has the same shape and a deep chain doesn't overflow.
    fn clone(&self) -> Self {
        let mut root: Link = None;
        {
            let mut stack: Vec<(&Node, &mut Link)> = Vec::new();
            if let Some(source) = self.root() {
                stack.push((source, &mut root));
            }

            while let Some((source, link)) = stack.pop() {
                let node: &mut Node = link.insert(Node::new_boxed(source.key));
                let Node { left, right, .. } = node;
                if let Some(source_left) = source.left() {
                    stack.push((source_left, left));
                }
                if let Some(source_right) = source.right() {
                    stack.push((source_right, right));
                }
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

/// Two trees are equal when they hold the same keys, however they are shaped.
impl PartialEq for BinarySearchTree {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order().eq(other.in_order())
    }
}

impl Eq for BinarySearchTree {}

impl fmt::Debug for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// Writes the keys in ascending order separated by single spaces.
impl fmt::Display for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.in_order();
        if let Some(first) = keys.next() {
            write!(f, "{}", first)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
        }
        Ok(())
    }
}

impl Extend<i32> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = i32;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

pub(crate) struct Node {
    key: i32,
    left: Link,
    right: Link,
}

impl Drop for Node {
    // Children are moved onto a heap stack before they drop so a long chain of nodes doesn't
    // overflow the call stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Node {
    fn new_boxed(key: i32) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn key(&self) -> i32 {
        self.key
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn assert_ordered_children(&self) {
        if let Some(left) = self.left() {
            assert!(self.key > left.key);
        }
        if let Some(right) = self.right() {
            assert!(self.key < right.key);
        }
    }
}
