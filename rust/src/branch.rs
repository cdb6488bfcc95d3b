//! The internal routing node: separator keys plus fixed-fanout child links.

use crate::types::NodeRef;

pub(crate) struct BranchNode<K, V> {
    keys: Vec<K>,
    children: Vec<NodeRef<K, V>>,
}

impl<K, V> BranchNode<K, V>
where
    K: Ord + Clone,
{
    /// A fresh root created when a previous root (leaf or branch) splits:
    /// one separator, two children.
    pub(crate) fn new_root(left: NodeRef<K, V>, separator: K, right: NodeRef<K, V>) -> Self {
        BranchNode {
            keys: vec![separator],
            children: vec![left, right],
        }
    }

    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    pub(crate) fn children_len(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn child_at(&self, idx: usize) -> NodeRef<K, V> {
        self.children[idx]
    }

    /// Largest `i` with `keys[i] <= x`, descend to `children[i+1]`; with no
    /// such `i`, descend to `children[0]`. Both cases reduce to "the number
    /// of keys that are `<= x`".
    pub(crate) fn find_child_index(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    /// Insert `separator`/`new_child` immediately after the child that just
    /// split (`at` is that child's index), splitting this node in turn if it
    /// now exceeds `order` children.
    pub(crate) fn insert_and_maybe_split(
        &mut self,
        at: usize,
        separator: K,
        new_child: NodeRef<K, V>,
        order: usize,
    ) -> Option<(K, BranchNode<K, V>)> {
        self.keys.insert(at, separator);
        self.children.insert(at + 1, new_child);

        if self.children.len() > order {
            let left_children_count = (order + 1) / 2; // ceil(order / 2)
            let left_keys_count = left_children_count - 1;

            let mut tail_keys = self.keys.split_off(left_keys_count);
            let middle_key = tail_keys.remove(0);
            let right_children = self.children.split_off(left_children_count);

            Some((
                middle_key,
                BranchNode {
                    keys: tail_keys,
                    children: right_children,
                },
            ))
        } else {
            None
        }
    }
}
