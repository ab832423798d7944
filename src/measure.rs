//! Height measurement.
//!
//! Height counts nodes, not edges: the empty tree measures 0, a lone root 1.
//! The recursion is the template every divide-and-combine walk in this crate
//! follows, so it reads best as `1 + max(left, right)` with the empty subtree
//! as the base case.

use tracing::instrument;

use crate::tree::{BinaryTree, NodeId};

impl<T> BinaryTree<T> {
    /// Number of nodes on the longest root-to-leaf path.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> usize {
        self.height_below(self.root())
    }

    /// Height of the subtree hanging off `node`, with the empty subtree
    /// measuring 0. Also drives the quadratic diameter baseline.
    pub(crate) fn height_below(&self, node: Option<NodeId>) -> usize {
        let Some(id) = node else { return 0 };
        let node = self.node(id);
        1 + self.height_below(node.left()).max(self.height_below(node.right()))
    }
}
