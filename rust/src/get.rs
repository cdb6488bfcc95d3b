//! Point lookup: descent to the owning leaf, then predictor probe / binary
//! search fallback.

use crate::error::{BppResult, BppTreeError};
use crate::predictor::PredictorKey;
use crate::types::BppTreeMap;

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    /// Returns the most recently inserted value for `key`, or `None` if
    /// absent. Absence is never an error.
    pub fn search(&self, key: &K) -> Option<&V> {
        let leaf_id = self.find_leaf_for_key(key);
        self.get_leaf(leaf_id).get(key, self.config.probe_radius)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Strict variant of [`Self::search`] for callers who want a hard error
    /// on a missing key instead of `None`. `search` remains the default,
    /// infallible lookup.
    pub fn try_get(&self, key: &K) -> BppResult<&V> {
        self.search(key).ok_or(BppTreeError::KeyNotFound)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BppTreeMap;

    #[test]
    fn search_absent_key_is_none_not_error() {
        let tree = BppTreeMap::<i64, i64>::new(4, 8).unwrap();
        assert_eq!(tree.search(&1), None);
    }

    #[test]
    fn try_get_reports_key_not_found() {
        let tree = BppTreeMap::<i64, i64>::new(4, 8).unwrap();
        assert!(matches!(
            tree.try_get(&1),
            Err(crate::error::BppTreeError::KeyNotFound)
        ));
    }

    #[test]
    fn search_finds_inserted_values_across_many_leaves() {
        let mut tree = BppTreeMap::<i64, i64>::new(4, 16).unwrap();
        for k in 1..=200 {
            tree.insert(k, k * 2);
        }
        for k in 1..=200 {
            assert_eq!(tree.search(&k), Some(&(k * 2)));
        }
        assert_eq!(tree.search(&201), None);
    }
}
