//! [Arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary-tree storage and the lazy iterators over it.
//!
//! The arena owns every node in a flat `Vec`; algorithms address nodes through
//! small copyable [NodeId] indices rather than owning pointers, so a whole
//! walk only ever takes a shared borrow of the tree.

pub mod arena;
pub mod iter;

pub use arena::{BinaryTree, Node, NodeId, Side};
pub use iter::{BreadthFirstIter, DepthFirstIter};
