/// Index of a node in the tree's arena. Ids are never reused since nodes are
/// never freed.
pub type NodeId = usize;

#[derive(Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new and took a fresh slot.
    NewKey,
    /// The key was already present; the value went onto its list.
    Appended,
}

#[derive(Debug)]
pub enum Node<K, V> {
    Leaf(Leaf<K, V>),
    Branch(Branch<K>),
}
impl<K, V> Node<K, V> {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Leaf(leaf) => leaf.parent,
            Node::Branch(branch) => branch.parent,
        }
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::Leaf(leaf) => leaf.parent = parent,
            Node::Branch(branch) => branch.parent = parent,
        }
    }

    #[cfg(test)]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

#[derive(Debug)]
pub struct Leaf<K, V> {
    pub keys: Vec<K>,
    pub values: Vec<Vec<V>>,
    pub next: Option<NodeId>,
    pub parent: Option<NodeId>,
}
impl<K: Ord, V> Leaf<K, V> {
    pub fn new() -> Self {
        Leaf {
            keys: Vec::new(),
            values: Vec::new(),
            next: None,
            parent: None,
        }
    }

    /// Sorted positional insert. An equal key gets the value appended to its
    /// list, otherwise a new slot goes in front of the first greater key.
    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome {
        match self.keys.binary_search(&key) {
            Ok(pos) => {
                self.values[pos].push(value);
                InsertOutcome::Appended
            }
            Err(pos) => {
                self.keys.insert(pos, key);
                self.values.insert(pos, vec![value]);
                InsertOutcome::NewKey
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<(&K, &[V])> {
        self.keys
            .binary_search(key)
            .ok()
            .map(|pos| (&self.keys[pos], self.values[pos].as_slice()))
    }

    /// Moves `[at, len)` out into a new right sibling that inherits this
    /// leaf's `next`. The caller links `self.next` to the sibling once it has
    /// an id.
    pub fn split_off(&mut self, at: usize) -> Leaf<K, V> {
        Leaf {
            keys: self.keys.split_off(at),
            values: self.values.split_off(at),
            next: self.next,
            parent: self.parent,
        }
    }
}

#[derive(Debug)]
pub struct Branch<K> {
    pub keys: Vec<K>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}
impl<K: Ord> Branch<K> {
    pub fn new(key: K, left: NodeId, right: NodeId) -> Self {
        Branch {
            keys: vec![key],
            children: vec![left, right],
            parent: None,
        }
    }

    /// Picks the child covering `key`: the first separator strictly greater
    /// than `key` selects the child at its position, and keys at or past the
    /// last separator go to the last child.
    pub fn route(&self, key: &K) -> usize {
        self.keys.partition_point(|sep| sep <= key)
    }

    pub fn position_of(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }

    /// Places `key` and its right-hand child directly after the child at `pos`.
    pub fn insert_split(&mut self, pos: usize, key: K, right: NodeId) {
        self.keys.insert(pos, key);
        self.children.insert(pos + 1, right);
    }

    /// Cuts this branch at `at`. The right half takes keys and children from
    /// `at` onward; the boundary key `keys[at - 1]` is popped off the left
    /// half and returned for promotion.
    pub fn split_off(&mut self, at: usize) -> (K, Branch<K>) {
        let right = Branch {
            keys: self.keys.split_off(at),
            children: self.children.split_off(at),
            parent: self.parent,
        };
        let Some(promoted) = self.keys.pop() else {
            unreachable!("splitting a branch with no separator keys");
        };
        (promoted, right)
    }
}
