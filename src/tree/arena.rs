//! Implementation of the [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary tree that every algorithm in this crate walks. Nodes live in a flat
//! `Vec` and reference their children by index, so the shape can be traversed
//! without chasing heap pointers and without any lifetime parameter on the
//! node type.

use core::fmt;
use tracing::instrument;

use crate::errors::TreeError;

/// Index of a node in the arena allocation.
///
/// Ids are handed out by [BinaryTree::set_root] and [BinaryTree::attach] and
/// stay valid until the next call to `set_root`, which resets the tree.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena allocation.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// Selects one of the two child slots of a [Node], and likewise the direction
/// a side view looks from.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A node of a [BinaryTree]. Besides the payload it carries the links that
/// make up the shape and its depth, which is maintained on insertion.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The user-defined payload that the node owns
    value: T,
    /// Index in the arena allocation
    id: NodeId,
    /// Reference to the left child, if any
    left: Option<NodeId>,
    /// Reference to the right child, if any
    right: Option<NodeId>,
    /// Number of nodes on the path from the root to this node, root excluded
    depth: usize,
}

impl<T> Node<T> {
    fn new(value: T, id: NodeId, depth: usize) -> Self {
        Node {
            value,
            id,
            left: None,
            right: None,
            depth,
        }
    }

    /// Borrow of the payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Reference to the left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Reference to the right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Child reference on the given side.
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Distance to the root in edges. The root itself has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether both child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {}, left: {:?}, right: {:?}, payload: {}",
            self.id.0,
            self.left.map(|id| id.0),
            self.right.map(|id| id.0),
            self.value
        )
    }
}

/// Binary tree that uses arena allocation and hands out read-only node access
/// to the walking algorithms.
///
/// The tree is grown by [set_root](BinaryTree::set_root) followed by
/// [attach](BinaryTree::attach) calls and never rebalanced or pruned
/// afterwards, so every [NodeId] keeps pointing at the same node and the
/// walks can rely on the shape being acyclic with a single parent per node.
///
/// # Examples
///
/// ```
/// use treewalk::{BinaryTree, Side};
///
/// //     1
/// //    / \
/// //   2   3
/// let mut tree = BinaryTree::new();
/// let root = tree.set_root(1);
/// tree.attach(root, Side::Left, 2)?;
/// tree.attach(root, Side::Right, 3)?;
///
/// assert_eq!(tree.preorder(), vec![1, 2, 3]);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.diameter(), 2);
/// # Ok::<(), treewalk::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    /// Memory allocated area for nodes
    nodes: Vec<Node<T>>,
    /// Index of the root node, `None` while the tree is empty
    root: Option<NodeId>,
}

impl<T> BinaryTree<T> {
    /// Constructor. The empty tree is a valid input to every algorithm in
    /// this crate.
    pub fn new() -> Self {
        BinaryTree { nodes: vec![], root: None }
    }

    /// Constructor that preallocates the arena for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTree {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the root node, `None` while the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node by its id. Returns `None` for ids the tree never
    /// issued, e.g. after a reset via [set_root](BinaryTree::set_root).
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Deletes all nodes and starts the tree over with a new root. Any
    /// previously issued [NodeId] must be considered invalid afterwards.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_root(&mut self, value: T) -> NodeId {
        self.nodes.clear();
        self.nodes.push(Node::new(value, NodeId(0), 0));
        self.root = Some(NodeId(0));
        NodeId(0)
    }

    /// Attach a new node below `parent` on the given `side` and return its
    /// id. Child slots are write-once; attaching to an occupied slot fails,
    /// which together with the absence of any detach operation keeps every
    /// node single-parented and the shape free of cycles.
    #[instrument(level = "trace", skip(self, value))]
    pub fn attach(&mut self, parent: NodeId, side: Side, value: T) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent.0)
            .ok_or(TreeError::ReferenceOutOfBound(parent.0))?;

        let slot = match side {
            Side::Left => &mut parent_node.left,
            Side::Right => &mut parent_node.right,
        };
        if slot.is_some() {
            return Err(TreeError::ChildOccupied(side, parent));
        }
        *slot = Some(id);

        let depth = parent_node.depth + 1;
        self.nodes.push(Node::new(value, id, depth));
        Ok(id)
    }

    /// Internal resolve without the bounds check. Child references and the
    /// root id always point into the arena, hence walks may index directly.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
