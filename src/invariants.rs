use crate::{
    node::{Node, NodeId},
    tree::BPlusTree,
};

fn is_strictly_ascending<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|w| w[0] < w[1])
}

pub fn all_nodes_within_order<K, V>(tree: &BPlusTree<K, V>) -> bool {
    let order = tree.order.get();
    reachable(tree).into_iter().all(|id| match &tree.nodes[id] {
        Node::Leaf(leaf) => leaf.keys.len() < order,
        Node::Branch(branch) => branch.children.len() < order,
    })
}

pub fn all_nodes_properly_structured<K: Ord, V>(tree: &BPlusTree<K, V>) -> bool {
    reachable(tree).into_iter().all(|id| match &tree.nodes[id] {
        Node::Leaf(leaf) => {
            leaf.keys.len() == leaf.values.len()
                && leaf.values.iter().all(|vals| !vals.is_empty())
                && is_strictly_ascending(&leaf.keys)
        }
        Node::Branch(branch) => {
            branch.keys.len() + 1 == branch.children.len() && is_strictly_ascending(&branch.keys)
        }
    })
}

/// Every key under child `i` of a branch lies in `[keys[i - 1], keys[i])`.
pub fn subtree_keys_within_separators<K: Ord, V>(tree: &BPlusTree<K, V>) -> bool {
    fn within<K: Ord, V>(
        tree: &BPlusTree<K, V>,
        id: NodeId,
        low: Option<&K>,
        high: Option<&K>,
    ) -> bool {
        let in_range =
            |k: &K| low.map_or(true, |low| low <= k) && high.map_or(true, |high| k < high);
        match &tree.nodes[id] {
            Node::Leaf(leaf) => leaf.keys.iter().all(in_range),
            Node::Branch(branch) => {
                branch.keys.iter().all(in_range)
                    && branch.children.iter().enumerate().all(|(idx, &child)| {
                        let child_low = if idx == 0 {
                            low
                        } else {
                            Some(&branch.keys[idx - 1])
                        };
                        let child_high = branch.keys.get(idx).or(high);
                        within(tree, child, child_low, child_high)
                    })
            }
        }
    }
    within(tree, tree.root, None, None)
}

pub fn parent_links_consistent<K, V>(tree: &BPlusTree<K, V>) -> bool {
    tree.nodes[tree.root].parent().is_none()
        && reachable(tree).into_iter().all(|id| match &tree.nodes[id] {
            Node::Leaf(_) => true,
            Node::Branch(branch) => branch
                .children
                .iter()
                .all(|&child| tree.nodes[child].parent() == Some(id)),
        })
}

pub fn all_leaves_at_same_depth<K, V>(tree: &BPlusTree<K, V>) -> bool {
    fn depths<K, V>(tree: &BPlusTree<K, V>, id: NodeId, depth: usize, out: &mut Vec<usize>) {
        match &tree.nodes[id] {
            Node::Leaf(_) => out.push(depth),
            Node::Branch(branch) => {
                for &child in branch.children.iter() {
                    depths(tree, child, depth + 1, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    depths(tree, tree.root, 1, &mut out);
    out.iter().all(|&d| d == out[0])
}

/// Keys in the order the `next` pointers visit them. Also asserts that the
/// chain visits exactly the leaves a depth-first walk finds, in that order.
pub fn leaf_chain_keys<K: Clone, V>(tree: &BPlusTree<K, V>) -> Vec<K> {
    let dfs_leaves: Vec<NodeId> = reachable(tree)
        .into_iter()
        .filter(|&id| tree.nodes[id].is_leaf())
        .collect();

    let mut chain = Vec::new();
    let mut next = dfs_leaves.first().copied();
    while let Some(id) = next {
        assert!(chain.len() <= dfs_leaves.len(), "leaf chain has a cycle");
        chain.push(id);
        next = tree.leaf(id).next;
    }
    assert_eq!(chain, dfs_leaves, "leaf chain disagrees with tree order");

    chain
        .into_iter()
        .flat_map(|id| tree.leaf(id).keys.iter().cloned())
        .collect()
}

/// Node ids reachable from the root, depth-first, children left to right.
fn reachable<K, V>(tree: &BPlusTree<K, V>) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![tree.root];
    while let Some(id) = stack.pop() {
        out.push(id);
        if let Node::Branch(branch) = &tree.nodes[id] {
            stack.extend(branch.children.iter().rev());
        }
    }
    out
}
