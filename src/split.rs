use crate::{
    node::{Branch, Node, NodeId},
    tree::BPlusTree,
};

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Splits a leaf that has reached the order. The leaf keeps the lower half
    /// in place and a new right sibling takes the rest. The sibling's first key
    /// is copied up as the separator and stays stored in the leaf.
    pub(crate) fn split_leaf(&mut self, leaf_id: NodeId) {
        let at = self.order.separator_index();
        let right = self.leaf_mut(leaf_id).split_off(at);
        let separator = right.keys[0].clone();
        let right_id = self.alloc(Node::Leaf(right));
        self.leaf_mut(leaf_id).next = Some(right_id);
        tracing::trace!(leaf = leaf_id, sibling = right_id, at, "split leaf");

        self.promote(leaf_id, separator, right_id);
    }

    /// Hangs `right` next to `left` under their shared parent with `separator`
    /// between them, splitting parents upward for as long as they overflow.
    fn promote(&mut self, mut left: NodeId, mut separator: K, mut right: NodeId) {
        loop {
            let Some(parent) = self.nodes[left].parent() else {
                self.grow_root(left, separator, right);
                return;
            };
            let Some(pos) = self.branch(parent).position_of(left) else {
                unreachable!("node {left} is missing from its parent {parent}");
            };

            // left kept its id, so this only re-asserts the predecessor's link
            self.set_next(parent, pos, left);
            self.branch_mut(parent).insert_split(pos, separator, right);
            self.nodes[right].set_parent(Some(parent));

            if !self.order.branch_overflows(self.branch(parent).children.len()) {
                return;
            }

            let at = self.order.separator_index();
            let (promoted, sibling) = self.branch_mut(parent).split_off(at);
            let sibling_id = self.alloc(Node::Branch(sibling));
            let moved = self.branch(sibling_id).children.clone();
            for child in moved {
                self.nodes[child].set_parent(Some(sibling_id));
            }
            tracing::debug!(branch = parent, sibling = sibling_id, "split branch");

            left = parent;
            separator = promoted;
            right = sibling_id;
        }
    }

    fn grow_root(&mut self, left: NodeId, separator: K, right: NodeId) {
        let root = self.alloc(Node::Branch(Branch::new(separator, left, right)));
        self.nodes[left].set_parent(Some(root));
        self.nodes[right].set_parent(Some(root));
        self.root = root;
        tracing::debug!(root, height = self.height(), "grew new root");
    }

    /// Points the leaf just before `children[index]` of `branch` at the
    /// leftmost leaf under `target`. With `index == 0` the predecessor lives
    /// under an earlier sibling of `branch`, so this climbs until a left
    /// neighbour exists. Nothing precedes the leftmost leaf of the tree.
    pub(crate) fn set_next(&mut self, mut branch: NodeId, mut index: usize, target: NodeId) {
        let first = self.leftmost_leaf(target);
        loop {
            if index > 0 {
                let prev = self.branch(branch).children[index - 1];
                let last = self.rightmost_leaf(prev);
                self.leaf_mut(last).next = Some(first);
                return;
            }
            let Some(parent) = self.branch(branch).parent else {
                return;
            };
            let Some(pos) = self.branch(parent).position_of(branch) else {
                unreachable!("node {branch} is missing from its parent {parent}");
            };
            branch = parent;
            index = pos;
        }
    }
}
