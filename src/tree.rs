use serde::Serialize;

use crate::{
    config::{Order, TreeConfig},
    error::{Result, TreeError},
    node::{Branch, InsertOutcome, Leaf, Node, NodeId},
};

/// A key and every value inserted under it, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<'a, K, V> {
    pub key: &'a K,
    pub values: &'a [V],
}

/// An in-memory B+ tree mapping each key to the list of values inserted under
/// it. Leaves are chained left to right for ordered traversal.
///
/// Nodes live in an arena and refer to each other (parent, children, next
/// leaf) by index.
#[derive(Debug)]
pub struct BPlusTree<K, V> {
    pub(crate) nodes: Vec<Node<K, V>>,
    pub(crate) root: NodeId,
    pub(crate) order: Order,
    len: usize,
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Creates an empty tree. Fails with [`TreeError::InvalidOrder`] when
    /// `order` is below [`MIN_ORDER`](crate::MIN_ORDER); odd orders are rounded
    /// up to the next even value.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_config(TreeConfig::new(order))
    }

    pub fn with_config(config: TreeConfig) -> Result<Self> {
        let order = config.validate()?;
        Ok(BPlusTree {
            nodes: vec![Node::Leaf(Leaf::new())],
            root: 0,
            order,
            len: 0,
        })
    }

    pub fn order(&self) -> usize {
        self.order.get()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, counting the leaves.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut id = self.root;
        while let Node::Branch(branch) = &self.nodes[id] {
            id = branch.children[0];
            height += 1;
        }
        height
    }

    pub fn insert(&mut self, key: K, value: V) {
        let leaf_id = self.find_leaf(&key);
        let leaf = self.leaf_mut(leaf_id);
        if leaf.insert(key, value) == InsertOutcome::NewKey {
            self.len += 1;
        }
        if self.order.leaf_overflows(self.leaf(leaf_id).keys.len()) {
            self.split_leaf(leaf_id);
        }
    }

    pub fn search(&self, key: &K) -> Option<Entry<'_, K, V>> {
        self.leaf(self.find_leaf(key))
            .get(key)
            .map(|(key, values)| Entry { key, values })
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Deletion is not implemented. Always fails with
    /// [`TreeError::Unsupported`] and leaves the tree untouched.
    pub fn remove(&mut self, _key: &K) -> Result<()> {
        Err(TreeError::Unsupported("remove"))
    }

    /// Descends from the root to the leaf that holds, or would hold, `key`.
    pub(crate) fn find_leaf(&self, key: &K) -> NodeId {
        let mut id = self.root;
        loop {
            match &self.nodes[id] {
                Node::Leaf(_) => return id,
                Node::Branch(branch) => id = branch.children[branch.route(key)],
            }
        }
    }
}

impl<K, V> BPlusTree<K, V> {
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn leaf(&self, id: NodeId) -> &Leaf<K, V> {
        match &self.nodes[id] {
            Node::Leaf(leaf) => leaf,
            Node::Branch(_) => unreachable!("node {id} is a branch, expected a leaf"),
        }
    }

    pub(crate) fn leaf_mut(&mut self, id: NodeId) -> &mut Leaf<K, V> {
        match &mut self.nodes[id] {
            Node::Leaf(leaf) => leaf,
            Node::Branch(_) => unreachable!("node {id} is a branch, expected a leaf"),
        }
    }

    pub(crate) fn branch(&self, id: NodeId) -> &Branch<K> {
        match &self.nodes[id] {
            Node::Branch(branch) => branch,
            Node::Leaf(_) => unreachable!("node {id} is a leaf, expected a branch"),
        }
    }

    pub(crate) fn branch_mut(&mut self, id: NodeId) -> &mut Branch<K> {
        match &mut self.nodes[id] {
            Node::Branch(branch) => branch,
            Node::Leaf(_) => unreachable!("node {id} is a leaf, expected a branch"),
        }
    }

    /// Follows first children down to a leaf.
    pub(crate) fn leftmost_leaf(&self, mut id: NodeId) -> NodeId {
        while let Node::Branch(branch) = &self.nodes[id] {
            id = branch.children[0];
        }
        id
    }

    /// Follows last children down to a leaf.
    pub(crate) fn rightmost_leaf(&self, mut id: NodeId) -> NodeId {
        while let Node::Branch(branch) = &self.nodes[id] {
            id = branch.children[branch.children.len() - 1];
        }
        id
    }
}

impl<K: Ord + Clone, V> Extend<(K, V)> for BPlusTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
