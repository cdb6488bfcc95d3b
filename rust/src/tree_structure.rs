//! Arena accessors and whole-tree structural queries (size, height, leaf
//! lookup by key). Sizes and stats are computed by walking the leaf chain
//! rather than maintained as shadow counters.

use crate::branch::BranchNode;
use crate::leaf::LeafNode;
use crate::predictor::PredictorKey;
use crate::types::{BppTreeMap, NodeId, NodeRef};

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    pub(crate) fn get_leaf(&self, id: NodeId) -> &LeafNode<K, V> {
        self.leaves.get(id).expect("dangling leaf id in tree structure")
    }

    pub(crate) fn get_leaf_mut(&mut self, id: NodeId) -> &mut LeafNode<K, V> {
        self.leaves.get_mut(id).expect("dangling leaf id in tree structure")
    }

    pub(crate) fn get_branch(&self, id: NodeId) -> &BranchNode<K, V> {
        self.branches.get(id).expect("dangling branch id in tree structure")
    }

    pub(crate) fn get_branch_mut(&mut self, id: NodeId) -> &mut BranchNode<K, V> {
        self.branches.get_mut(id).expect("dangling branch id in tree structure")
    }

    /// Descend routing nodes to find the leaf that owns (or would own) `key`.
    pub(crate) fn find_leaf_for_key(&self, key: &K) -> NodeId {
        let mut current = self.root;
        loop {
            match current {
                NodeRef::Leaf(id, _) => return id,
                NodeRef::Branch(id, _) => {
                    let branch = self.get_branch(id);
                    let idx = branch.find_child_index(key);
                    current = branch.child_at(idx);
                }
            }
        }
    }

    /// Number of live entries across every leaf in the chain.
    pub fn len(&self) -> usize {
        self.leaf_ids_in_order().map(|id| self.get_leaf(id).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_ids_in_order().all(|id| self.get_leaf(id).is_empty())
    }

    /// Number of leaves reachable via the chain from `head`.
    pub(crate) fn leaf_count(&self) -> usize {
        self.leaf_ids_in_order().count()
    }

    /// Depth of the tree: 1 for a leaf-only tree, +1 per branch level above.
    pub(crate) fn height(&self) -> usize {
        let mut depth = 1;
        let mut current = self.root;
        while let NodeRef::Branch(id, _) = current {
            depth += 1;
            let branch = self.get_branch(id);
            current = branch.child_at(0);
        }
        depth
    }

    /// Walk the leaf chain from `head`, yielding each leaf's arena id in
    /// ascending key order. The only traversal used by `len`, `stats`, and
    /// the iterators — this is "the ONLY arena access during iteration" in
    /// spirit, one id at a time rather than materializing a list.
    pub(crate) fn leaf_ids_in_order(&self) -> LeafIdIter<'_, K, V> {
        LeafIdIter {
            tree: self,
            current: self.head,
        }
    }
}

pub(crate) struct LeafIdIter<'a, K, V> {
    tree: &'a BppTreeMap<K, V>,
    current: NodeId,
}

impl<'a, K, V> Iterator for LeafIdIter<'a, K, V>
where
    K: Ord + Clone + PredictorKey,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        use crate::types::NULL_NODE;
        if self.current == NULL_NODE {
            return None;
        }
        let id = self.current;
        self.current = self.tree.get_leaf(id).next();
        Some(id)
    }
}
