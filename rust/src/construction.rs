//! Constructors. Configuration is validated exactly once, here.

use crate::arena::Arena;
use crate::error::BppResult;
use crate::leaf::LeafNode;
use crate::predictor::PredictorKey;
use crate::types::{BppTreeMap, NodeRef, TreeConfig};

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    /// `order` is the fanout cap for internal nodes, `initial_leaf_capacity`
    /// the starting slot count for every leaf. The remaining knobs
    /// (`training_interval`, `probe_radius`, `growth_trigger`,
    /// `growth_factor`) take their defaults; use [`Self::with_config`] to
    /// override them.
    pub fn new(order: usize, initial_leaf_capacity: usize) -> BppResult<Self> {
        Self::with_config(TreeConfig::new(order, initial_leaf_capacity))
    }

    pub fn with_config(config: TreeConfig) -> BppResult<Self> {
        config.validate()?;
        let mut leaves = Arena::new();
        let root_leaf = LeafNode::new(config.initial_leaf_capacity);
        let root_id = leaves.allocate(root_leaf);

        Ok(BppTreeMap {
            config,
            root: NodeRef::leaf(root_id),
            head: root_id,
            leaves,
            branches: Arena::new(),
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}
