//! Traversals over a [`BinarySearchTree`][crate::BinarySearchTree]. Both keep their pending
//! nodes on a `Vec` rather than recursing, so they work on trees of any height.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Yields the keys of a tree in ascending order: left subtree, then the node, then the right
/// subtree.
///
/// Created by [`BinarySearchTree::in_order`][crate::BinarySearchTree::in_order].
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants. The top of the stack ends up being the
    /// smallest key not yet yielded.
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a> FusedIterator for InOrder<'a> {}

/// Yields the keys of a tree visiting each node, then its left subtree, then its right
/// subtree.
///
/// Created by [`BinarySearchTree::pre_order`][crate::BinarySearchTree::pre_order].
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

impl<'a> FusedIterator for PreOrder<'a> {}
