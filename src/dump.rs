use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{
    node::{Node, NodeId},
    tree::BPlusTree,
};

const INDENT: &str = "    ";

/// Human-readable rendering of a tree's shape, for debugging only. The format
/// may change at any time.
///
/// Each leaf prints as `[k1, k2, ...]` indented one step per level. Branch
/// separators print between the children they divide, at the branch's own
/// depth.
pub struct TreeDump<'a, K, V> {
    tree: &'a BPlusTree<K, V>,
}

impl<K, V> BPlusTree<K, V> {
    pub fn dump(&self) -> TreeDump<'_, K, V> {
        TreeDump { tree: self }
    }
}

impl<K: Display, V> TreeDump<'_, K, V> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        match &self.tree.nodes[id] {
            Node::Leaf(leaf) => writeln!(f, "{indent}[{}]", leaf.keys.iter().join(", ")),
            Node::Branch(branch) => {
                for (idx, &child) in branch.children.iter().enumerate() {
                    self.write_node(f, child, depth + 1)?;
                    if let Some(key) = branch.keys.get(idx) {
                        writeln!(f, "{indent}{key}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl<K: Display, V> Display for TreeDump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree.root, 0)
    }
}
