//! Side views.
//!
//! A side view lists, top to bottom, the first node visible at every depth
//! when the tree is looked at from the left or from the right. Each view
//! holds exactly one value per level, so its length always equals the tree
//! height.
//!
//! [left_view](BinaryTree::left_view) and
//! [right_view](BinaryTree::right_view) share one depth-carrying walk that
//! descends the favored side first and records a value whenever it reaches a
//! depth for the first time. Recording and descending are independent: a node
//! whose depth is already taken can still be the only way down to deeper
//! levels, so the walk continues below it unconditionally. The naive variants
//! reuse [level_order](BinaryTree::level_order) and read one end off every
//! row, paying for a full level grouping first.

use itertools::Itertools;
use tracing::instrument;

use crate::tree::{BinaryTree, NodeId, Side};

impl<T> BinaryTree<T>
where
    T: Clone,
{
    /// Values visible from the left: the first node of every level when left
    /// children are walked first.
    #[instrument(level = "trace", skip(self))]
    pub fn left_view(&self) -> Vec<T> {
        self.side_view(Side::Left)
    }

    /// Values visible from the right: the first node of every level when
    /// right children are walked first.
    #[instrument(level = "trace", skip(self))]
    pub fn right_view(&self) -> Vec<T> {
        self.side_view(Side::Right)
    }

    fn side_view(&self, side: Side) -> Vec<T> {
        let mut seen = Vec::new();
        self.descend_view(self.root(), side, 0, &mut seen);
        seen
    }

    /// Depth-first walk favoring `side`. One value per level has been
    /// recorded exactly when `seen.len()` has caught up with `depth`.
    fn descend_view(&self, node: Option<NodeId>, side: Side, depth: usize, seen: &mut Vec<T>) {
        let Some(id) = node else { return };
        let node = self.node(id);
        if seen.len() == depth {
            seen.push(node.value().clone());
        }
        self.descend_view(node.child(side), side, depth + 1, seen);
        self.descend_view(node.child(side.opposite()), side, depth + 1, seen);
    }

    /// Level-order baseline for the left view: the first entry of every row.
    pub fn left_view_naive(&self) -> Vec<T> {
        self.level_order()
            .into_iter()
            .filter_map(|row| row.into_iter().next())
            .collect_vec()
    }

    /// Level-order baseline for the right view: the last entry of every row.
    pub fn right_view_naive(&self) -> Vec<T> {
        self.level_order()
            .into_iter()
            .filter_map(|row| row.into_iter().last())
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::{BinaryTree, Side};

    /// Tree structure:
    ///
    /// ```text
    ///           1
    ///         /   \
    ///        2     3
    ///       / \   / \
    ///      4  10 9  10
    ///       \
    ///        5
    ///         \
    ///          6
    /// ```
    fn make_tree() -> BinaryTree<i32> {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(1);
        let n2 = tree.attach(root, Side::Left, 2).unwrap();
        let n3 = tree.attach(root, Side::Right, 3).unwrap();
        let n4 = tree.attach(n2, Side::Left, 4).unwrap();
        tree.attach(n2, Side::Right, 10).unwrap();
        let n5 = tree.attach(n4, Side::Right, 5).unwrap();
        tree.attach(n5, Side::Right, 6).unwrap();
        tree.attach(n3, Side::Left, 9).unwrap();
        tree.attach(n3, Side::Right, 10).unwrap();
        tree
    }

    #[test_log::test]
    fn left_view_of_the_reference_tree() {
        let tree = make_tree();
        assert_eq!(tree.left_view(), [1, 2, 4, 5, 6]);
        assert_eq!(tree.left_view_naive(), [1, 2, 4, 5, 6]);
    }

    #[test_log::test]
    fn right_view_of_the_reference_tree() {
        // Levels 3 and 4 exist only below node 4, which sits on the far
        // left; the right view still has to show them.
        let tree = make_tree();
        assert_eq!(tree.right_view(), [1, 3, 10, 5, 6]);
        assert_eq!(tree.right_view_naive(), [1, 3, 10, 5, 6]);
    }

    /// Tree structure:
    ///
    /// ```text
    ///         1
    ///        / \
    ///       2   3
    ///      /
    ///     4
    /// ```
    ///
    /// Node 3 fills level 1 before node 2 is reached, but only node 2 leads
    /// down to level 2. A walk that stops descending below already-recorded
    /// levels would truncate the view to [1, 3].
    #[test]
    fn right_view_reaches_levels_below_recorded_branches() {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(1);
        let n2 = tree.attach(root, Side::Left, 2).unwrap();
        tree.attach(root, Side::Right, 3).unwrap();
        tree.attach(n2, Side::Left, 4).unwrap();

        assert_eq!(tree.right_view(), [1, 3, 4]);
        assert_eq!(tree.right_view_naive(), [1, 3, 4]);
    }

    #[test]
    fn views_of_the_empty_tree_are_empty() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert!(tree.left_view().is_empty());
        assert!(tree.right_view().is_empty());
        assert!(tree.left_view_naive().is_empty());
        assert!(tree.right_view_naive().is_empty());
    }

    #[test]
    fn views_of_a_lone_root_show_the_root() {
        let mut tree = BinaryTree::new();
        tree.set_root(5);
        assert_eq!(tree.left_view(), [5]);
        assert_eq!(tree.right_view(), [5]);
    }

    #[test]
    fn view_length_equals_the_height() {
        let tree = make_tree();
        assert_eq!(tree.left_view().len(), tree.height());
        assert_eq!(tree.right_view().len(), tree.height());
    }
}
