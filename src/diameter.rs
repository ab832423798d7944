//! Longest-path measurement.
//!
//! The diameter of a binary tree is the largest number of edges on a path
//! between any two of its nodes. The path does not have to pass through the
//! root, but it always curves through exactly one topmost node, where it is
//! the left subtree height plus the right subtree height.
//!
//! Two renditions live side by side. [diameter](BinaryTree::diameter) folds
//! that observation into a single postorder walk: the recursion reports each
//! subtree's height upward and lifts a shared accumulator whenever the two
//! heights meeting at a node beat the best path seen so far, visiting every
//! node once. [diameter_naive](BinaryTree::diameter_naive) recomputes both
//! subtree heights from scratch at every node, which walks each subtree once
//! per ancestor and is quadratic on degenerate chains.

use tracing::{instrument, trace};

use crate::tree::{BinaryTree, NodeId};

impl<T> BinaryTree<T> {
    /// Diameter in edges, computed in one postorder walk. The empty tree and
    /// a lone root both measure 0.
    #[instrument(level = "trace", skip(self))]
    pub fn diameter(&self) -> usize {
        let mut best = 0;
        self.walk_diameter(self.root(), &mut best);
        trace!(diameter = best, "postorder walk complete");
        best
    }

    /// Postorder helper. Returns the height of the subtree below `node` and
    /// lifts `best` to any longer path curving through it.
    fn walk_diameter(&self, node: Option<NodeId>, best: &mut usize) -> usize {
        let Some(id) = node else { return 0 };
        let node = self.node(id);
        let left = self.walk_diameter(node.left(), best);
        let right = self.walk_diameter(node.right(), best);
        // A path curving through this node spans `left` edges down one side
        // and `right` edges down the other.
        *best = (*best).max(left + right);
        1 + left.max(right)
    }

    /// Quadratic baseline that measures both subtree heights independently at
    /// every node. Kept for comparison against the single-pass walk.
    pub fn diameter_naive(&self) -> usize {
        self.iter_depth()
            .map(|node| self.height_below(node.left()) + self.height_below(node.right()))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::{BinaryTree, Side};

    #[test]
    fn empty_and_single_node_trees_have_diameter_zero() {
        let mut tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.diameter(), 0);
        assert_eq!(tree.diameter_naive(), 0);

        tree.set_root(1);
        assert_eq!(tree.diameter(), 0);
        assert_eq!(tree.diameter_naive(), 0);
    }

    #[test]
    fn two_nodes_are_one_edge_apart() {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(1);
        tree.attach(root, Side::Left, 2).unwrap();
        assert_eq!(tree.diameter(), 1);
    }

    /// Tree structure:
    ///
    /// ```text
    ///         1
    ///        / \
    ///       2   3
    ///      / \
    ///     4   5
    ///          \
    ///           6
    ///            \
    ///             7
    /// ```
    ///
    /// The longest path is 7-6-5-2-1-3 with 5 edges, longer than any path
    /// staying below node 2.
    #[test_log::test]
    fn longest_path_passes_through_the_root() {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(1);
        let n2 = tree.attach(root, Side::Left, 2).unwrap();
        tree.attach(root, Side::Right, 3).unwrap();
        tree.attach(n2, Side::Left, 4).unwrap();
        let n5 = tree.attach(n2, Side::Right, 5).unwrap();
        let n6 = tree.attach(n5, Side::Right, 6).unwrap();
        tree.attach(n6, Side::Right, 7).unwrap();

        assert_eq!(tree.height(), 5);
        assert_eq!(tree.diameter(), 5);
        assert_eq!(tree.diameter_naive(), 5);
    }

    /// Same shape as above but without node 3. The longest path 4-2-5-6-7
    /// now curves through node 2 and never touches the root.
    #[test_log::test]
    fn longest_path_avoids_the_root() {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(1);
        let n2 = tree.attach(root, Side::Left, 2).unwrap();
        tree.attach(n2, Side::Left, 4).unwrap();
        let n5 = tree.attach(n2, Side::Right, 5).unwrap();
        let n6 = tree.attach(n5, Side::Right, 6).unwrap();
        tree.attach(n6, Side::Right, 7).unwrap();

        assert_eq!(tree.height(), 5);
        assert_eq!(tree.diameter(), 4);
        assert_eq!(tree.diameter_naive(), 4);
    }

    #[test]
    fn a_chain_measures_its_edge_count() {
        let mut tree = BinaryTree::new();
        let mut parent = tree.set_root(0);
        for value in 1..10 {
            parent = tree.attach(parent, Side::Left, value).unwrap();
        }

        assert_eq!(tree.diameter(), 9);
        assert_eq!(tree.diameter_naive(), 9);
    }
}
