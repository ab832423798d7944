/*! Lazy iterators over the arena: an explicit-stack depth-first walk and a
queue-driven breadth-first walk. These are the loop-shaped counterparts to the
recursive collectors in [crate::traverse] and yield node references instead of
cloned payloads. */

use std::collections::VecDeque;

use super::arena::{BinaryTree, Node, NodeId};

/// Iterator for a depth-first iteration in preorder, driven by an explicit
/// stack instead of the call stack.
pub struct DepthFirstIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> DepthFirstIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, root: Option<NodeId>) -> Self {
        DepthFirstIter {
            tree,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for DepthFirstIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.stack.pop()?);
        // Right goes on the stack first so that the left subtree is
        // exhausted first.
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Iterator for a breadth-first iteration, yielding each level left to right
/// before descending to the next.
pub struct BreadthFirstIter<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> BreadthFirstIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, root: Option<NodeId>) -> Self {
        BreadthFirstIter {
            tree,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirstIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.queue.pop_front()?);
        if let Some(left) = node.left() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right() {
            self.queue.push_back(right);
        }
        Some(node)
    }
}

impl<T> BinaryTree<T> {
    /// Lazy depth-first (preorder) iteration over node references.
    pub fn iter_depth(&self) -> DepthFirstIter<'_, T> {
        DepthFirstIter::new(self, self.root())
    }

    /// Lazy breadth-first iteration over node references.
    pub fn iter_breadth(&self) -> BreadthFirstIter<'_, T> {
        BreadthFirstIter::new(self, self.root())
    }
}
