//! The four canonical traversal orders.
//!
//! The three depth-first orders differ only in when the node itself is
//! recorded relative to its subtrees: before both (preorder), between them
//! (inorder), or after both (postorder). Each is a single recursive walk that
//! appends into one result vector passed down as `&mut`, so no intermediate
//! vectors are allocated and the cost stays linear in the number of nodes.
//!
//! Level order is the breadth-first counterpart. It is driven by a queue, and
//! the queue length at the start of each round gives the width of the current
//! level, which yields the values grouped level by level rather than as one
//! flat sequence.
//!
//! The recursive collectors spend call stack proportional to the tree height.
//! For degenerate chains too deep for that, the iterators in
//! [crate::tree::iter] cover the preorder and level-order walks without
//! recursion.

use std::collections::VecDeque;

use crate::tree::{BinaryTree, NodeId};

impl<T> BinaryTree<T>
where
    T: Clone,
{
    /// Preorder traversal: each node before its left subtree, the left
    /// subtree before the right.
    pub fn preorder(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        self.walk_preorder(self.root(), &mut values);
        values
    }

    fn walk_preorder(&self, node: Option<NodeId>, values: &mut Vec<T>) {
        let Some(id) = node else { return };
        let node = self.node(id);
        values.push(node.value().clone());
        self.walk_preorder(node.left(), values);
        self.walk_preorder(node.right(), values);
    }

    /// Inorder traversal: the left subtree, then the node, then the right
    /// subtree.
    pub fn inorder(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        self.walk_inorder(self.root(), &mut values);
        values
    }

    fn walk_inorder(&self, node: Option<NodeId>, values: &mut Vec<T>) {
        let Some(id) = node else { return };
        let node = self.node(id);
        self.walk_inorder(node.left(), values);
        values.push(node.value().clone());
        self.walk_inorder(node.right(), values);
    }

    /// Postorder traversal: both subtrees before the node itself.
    pub fn postorder(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        self.walk_postorder(self.root(), &mut values);
        values
    }

    fn walk_postorder(&self, node: Option<NodeId>, values: &mut Vec<T>) {
        let Some(id) = node else { return };
        let node = self.node(id);
        self.walk_postorder(node.left(), values);
        self.walk_postorder(node.right(), values);
        values.push(node.value().clone());
    }

    /// Level-order traversal: one row per depth, left to right within a row.
    /// The empty tree yields no rows.
    pub fn level_order(&self) -> Vec<Vec<T>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<NodeId> = self.root().into_iter().collect();

        while !queue.is_empty() {
            // Everything queued at this point belongs to one level.
            let width = queue.len();
            let mut row = Vec::with_capacity(width);
            for _ in 0..width {
                let Some(id) = queue.pop_front() else { break };
                let node = self.node(id);
                row.push(node.value().clone());
                queue.extend(node.left());
                queue.extend(node.right());
            }
            levels.push(row);
        }
        levels
    }
}
