//! Tree-level insert: descent to a leaf, then split propagation back up
//! the recursion stack via `InsertOutcome::Split` rather than parent
//! back-pointers.

use crate::branch::BranchNode;
use crate::leaf::LeafInsert;
use crate::predictor::PredictorKey;
use crate::types::{BppTreeMap, InsertOutcome, NodeRef};

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    /// Insert `key`/`value`, returning the prior value if `key` was already
    /// present (re-inserting an existing key overwrites it; size is
    /// unchanged in that case).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.insert_into(self.root, key, value) {
            InsertOutcome::Done(prior) => prior,
            InsertOutcome::Split {
                prior,
                separator,
                new_child,
            } => {
                let new_root = BranchNode::new_root(self.root, separator, new_child);
                let new_root_id = self.branches.allocate(new_root);
                self.root = NodeRef::branch(new_root_id);
                prior
            }
        }
    }

    fn insert_into(&mut self, node: NodeRef<K, V>, key: K, value: V) -> InsertOutcome<K, V> {
        match node {
            NodeRef::Leaf(id, _) => {
                let config = self.config;
                match self.get_leaf_mut(id).insert(key, value, &config) {
                    LeafInsert::Replaced(old) => InsertOutcome::Done(Some(old)),
                    LeafInsert::Inserted => InsertOutcome::Done(None),
                    LeafInsert::Split { separator, new_leaf } => {
                        let new_id = self.leaves.allocate(new_leaf);
                        self.get_leaf_mut(id).set_next(new_id);
                        InsertOutcome::Split {
                            prior: None,
                            separator,
                            new_child: NodeRef::leaf(new_id),
                        }
                    }
                }
            }
            NodeRef::Branch(id, _) => {
                let idx = self.get_branch(id).find_child_index(&key);
                let child = self.get_branch(id).child_at(idx);
                match self.insert_into(child, key, value) {
                    InsertOutcome::Done(prior) => InsertOutcome::Done(prior),
                    InsertOutcome::Split {
                        prior,
                        separator,
                        new_child,
                    } => {
                        let order = self.config.order;
                        let split = self
                            .get_branch_mut(id)
                            .insert_and_maybe_split(idx, separator, new_child, order);
                        match split {
                            None => InsertOutcome::Done(prior),
                            Some((middle_key, right_branch)) => {
                                let right_id = self.branches.allocate(right_branch);
                                InsertOutcome::Split {
                                    prior,
                                    separator: middle_key,
                                    new_child: NodeRef::branch(right_id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
