use std::iter::FusedIterator;

use crate::{node::NodeId, tree::BPlusTree};

impl<K, V> BPlusTree<K, V> {
    /// Walks the leaf chain, yielding every key with its values in ascending
    /// key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            leaves: self.leaves(),
            current: None,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Yields the keys of each leaf in chain order, one slice per leaf.
    pub fn leaves(&self) -> Leaves<'_, K, V> {
        Leaves {
            tree: self,
            next: Some(self.leftmost_leaf(self.root)),
        }
    }
}

pub struct Leaves<'a, K, V> {
    tree: &'a BPlusTree<K, V>,
    next: Option<NodeId>,
}
impl<'a, K, V> Leaves<'a, K, V> {
    fn next_leaf(&mut self) -> Option<(&'a [K], &'a [Vec<V>])> {
        let tree = self.tree;
        let leaf = tree.leaf(self.next?);
        self.next = leaf.next;
        Some((&leaf.keys, &leaf.values))
    }
}
impl<'a, K, V> Iterator for Leaves<'a, K, V> {
    type Item = &'a [K];

    fn next(&mut self) -> Option<Self::Item> {
        // an empty tree still has its (empty) root leaf
        self.next_leaf()
            .map(|(keys, _)| keys)
            .filter(|keys| !keys.is_empty())
    }
}
impl<K, V> FusedIterator for Leaves<'_, K, V> {}

type LeafEntries<'a, K, V> = std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, Vec<V>>>;

pub struct Iter<'a, K, V> {
    leaves: Leaves<'a, K, V>,
    current: Option<LeafEntries<'a, K, V>>,
}
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = self.current.as_mut().and_then(|entries| entries.next()) {
                return Some((key, values.as_slice()));
            }
            let (keys, values) = self.leaves.next_leaf()?;
            self.current = Some(keys.iter().zip(values.iter()));
        }
    }
}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}
impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a BPlusTree<K, V> {
    type Item = (&'a K, &'a [V]);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
