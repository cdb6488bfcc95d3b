//! Point delete. Never rebalances or merges underfull leaves — a leaf may
//! become arbitrarily sparse under heavy delete load, by design (see the
//! non-merging design note).

use crate::predictor::PredictorKey;
use crate::types::BppTreeMap;

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    /// Removes `key` if present. Returns whether a key was actually removed;
    /// deleting an absent key is not an error.
    pub fn delete(&mut self, key: &K) -> bool {
        let leaf_id = self.find_leaf_for_key(key);
        let config = self.config;
        self.get_leaf_mut(leaf_id).delete(key, &config)
    }
}
