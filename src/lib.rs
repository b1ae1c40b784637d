//! This crate exposes an unbalanced Binary Search Tree (BST) of integer keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. This tree does not rebalance itself, so its height
//! depends on insertion order: inserting keys in sorted order produces a tree that is
//! really a linked list. BSTs naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use int_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.in_order_vec(), vec![20, 30, 40, 50, 60, 70, 80]);
//! assert!(tree.contains(40));
//! assert!(!tree.contains(25));
//!
//! tree.delete(30);
//! assert_eq!(tree.in_order_vec(), vec![20, 40, 50, 60, 70, 80]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod tree;

pub use iter::{InOrder, PreOrder};
pub use tree::BinarySearchTree;
