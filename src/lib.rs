//! ## About
//!
//! This crate contains the canonical binary-tree walking algorithms in their
//! textbook recursive form alongside the optimized single-pass variants that
//! motivate them: the depth-first orders (preorder, inorder, postorder) and
//! breadth-first level order, height measurement, the tree diameter (one
//! postorder walk instead of a height computation per node), and the left and
//! right side views (one depth-carrying descent instead of a full level-order
//! pass). The naive renditions stay in the crate on purpose, as comparing them
//! against the single-pass ones is what the crate is for.
//!
//! Trees live in an arena: a flat allocation addressed by [NodeId] indices,
//! with no parent-to-child pointers to chase and no lifetimes tangled into the
//! node type. See the [BinaryTree] struct to get started.
//!
//! ## Reading list
//!
//! * [Tree traversal](https://en.wikipedia.org/wiki/Tree_traversal)
//! * [Arena allocation](https://en.wikipedia.org/wiki/Region-based_memory_management)
//!
//! ## Naming conventions
//! * Structs – substantives that indicate the entity (the tree, its nodes, the
//!             lazy iterators)
//! * Methods – imperative forms with the exception of getters, which use
//!             substantives (i.e., omit a `get_` prefix) much like the standard
//!             library. Recursive helpers carry a `walk_` or `descend_` prefix

pub mod diameter;
pub mod errors;
pub mod measure;
pub mod traverse;
pub mod tree;
pub mod view;

pub use errors::TreeError;
pub use tree::{
    BinaryTree, BreadthFirstIter, DepthFirstIter, Node, NodeId, Side,
    Side::{Left, Right},
};
