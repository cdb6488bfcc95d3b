//! Debug-mode invariant checking. Not on the hot path — intended for tests
//! and for callers who want to assert consistency after a batch of
//! mutations. A failure here means the tree should be considered poisoned.

use crate::error::{BppResult, BppTreeError};
use crate::predictor::PredictorKey;
use crate::types::{BppTreeMap, NodeId, NodeRef};

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    /// Checks the global invariants: leaf sortedness and capacity bounds,
    /// branch key/child arity and key ordering, separator bounds, and leaf
    /// chain completeness/ordering.
    pub fn check_invariants(&self) -> BppResult<()> {
        self.check_node(self.root, None, None)?;
        self.check_leaf_chain()?;
        Ok(())
    }

    fn check_node(&self, node: NodeRef<K, V>, min: Option<&K>, max: Option<&K>) -> BppResult<()> {
        match node {
            NodeRef::Leaf(id, _) => {
                let leaf = self.get_leaf(id);
                if leaf.len() > leaf.cap() {
                    return Err(BppTreeError::invariant("leaf live_count exceeds cap"));
                }
                let mut prev: Option<&K> = None;
                for (k, _) in leaf.iter_live() {
                    if let Some(p) = prev {
                        if p >= k {
                            return Err(BppTreeError::invariant("leaf slots not strictly ascending"));
                        }
                    }
                    if let Some(mn) = min {
                        if k < mn {
                            return Err(BppTreeError::invariant("leaf key below routed lower bound"));
                        }
                    }
                    if let Some(mx) = max {
                        if k >= mx {
                            return Err(BppTreeError::invariant("leaf key at or above routed upper bound"));
                        }
                    }
                    prev = Some(k);
                }
                Ok(())
            }
            NodeRef::Branch(id, _) => {
                let branch = self.get_branch(id);
                if branch.keys().len() + 1 != branch.children_len() {
                    return Err(BppTreeError::invariant("branch key/child arity mismatch"));
                }
                for w in branch.keys().windows(2) {
                    if w[0] >= w[1] {
                        return Err(BppTreeError::invariant("branch separators not strictly ascending"));
                    }
                }
                for i in 0..branch.children_len() {
                    let child_min = if i == 0 { min } else { Some(&branch.keys()[i - 1]) };
                    let child_max = if i == branch.keys().len() { max } else { Some(&branch.keys()[i]) };
                    self.check_node(branch.child_at(i), child_min, child_max)?;
                }
                // Separator equals the minimum key of its right subtree, when that
                // subtree is non-empty. A subtree can be empty under the
                // non-merging delete policy, in which case the check is vacuous.
                for (i, sep) in branch.keys().iter().enumerate() {
                    if let Some(actual_min) = self.subtree_min_key(branch.child_at(i + 1)) {
                        if actual_min != sep {
                            return Err(BppTreeError::invariant(
                                "separator does not equal minimum key of right subtree",
                            ));
                        }
                    }
                }
                Ok(())
            }
        }
    }

    fn subtree_min_key(&self, node: NodeRef<K, V>) -> Option<&K> {
        match node {
            NodeRef::Leaf(id, _) => self.get_leaf(id).first_live_key(),
            NodeRef::Branch(id, _) => self.subtree_min_key(self.get_branch(id).child_at(0)),
        }
    }

    fn collect_leaf_ids(&self, node: NodeRef<K, V>, out: &mut Vec<NodeId>) {
        match node {
            NodeRef::Leaf(id, _) => out.push(id),
            NodeRef::Branch(id, _) => {
                let branch = self.get_branch(id);
                for i in 0..branch.children_len() {
                    self.collect_leaf_ids(branch.child_at(i), out);
                }
            }
        }
    }

    fn check_leaf_chain(&self) -> BppResult<()> {
        let mut tree_leaf_ids = Vec::new();
        self.collect_leaf_ids(self.root, &mut tree_leaf_ids);
        let chain_ids: Vec<NodeId> = self.leaf_ids_in_order().collect();

        let mut sorted_tree = tree_leaf_ids.clone();
        sorted_tree.sort();
        let mut sorted_chain = chain_ids.clone();
        sorted_chain.sort();
        if sorted_tree != sorted_chain {
            return Err(BppTreeError::invariant(
                "leaf chain does not visit exactly the leaves reachable from root",
            ));
        }

        let mut prev_last: Option<K> = None;
        for id in chain_ids {
            let leaf = self.get_leaf(id);
            if let Some((first, _)) = leaf.iter_live().next() {
                if let Some(prev) = &prev_last {
                    if prev >= first {
                        return Err(BppTreeError::invariant("leaf chain keys not strictly ascending"));
                    }
                }
            }
            if let Some((last, _)) = leaf.iter_live().last() {
                prev_last = Some(last.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BppTreeMap;

    #[test]
    fn freshly_built_tree_passes_invariants() {
        let mut tree = BppTreeMap::<i64, i64>::new(4, 16).unwrap();
        for k in [50, 10, 30, 70, 20, 60, 40, 80, 5, 15, 25, 35, 45, 55, 65, 75, 85] {
            tree.insert(k, k);
        }
        tree.check_invariants().expect("freshly inserted tree must be consistent");
    }

    #[test]
    fn tree_stays_consistent_across_interleaved_mutation() {
        let mut tree = BppTreeMap::<i64, i64>::new(4, 16).unwrap();
        for k in 1..=500 {
            tree.insert(k, k);
        }
        for k in (2..=500).step_by(2) {
            tree.delete(&k);
        }
        tree.check_invariants().expect("tree must stay consistent after heavy delete load");
    }
}
