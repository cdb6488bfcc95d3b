//! Tree-wide statistics, computed by a single walk of the leaf chain.

use crate::predictor::PredictorKey;
use crate::types::BppTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub size: usize,
    pub leaves: usize,
    pub height: usize,
    pub avg_utilization: f64,
    pub leaves_with_models: usize,
    /// Lifetime predictor hit rate (`hits / probes`), or `None` if no
    /// trained predictor has ever been probed.
    pub model_hit_rate: Option<f64>,
}

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    pub fn stats(&self) -> Stats {
        let mut size = 0usize;
        let mut leaves = 0usize;
        let mut utilization_sum = 0.0;
        let mut leaves_with_models = 0usize;
        let mut total_hits = 0u64;
        let mut total_probes = 0u64;

        for leaf_id in self.leaf_ids_in_order() {
            let leaf = self.get_leaf(leaf_id);
            size += leaf.len();
            leaves += 1;
            utilization_sum += leaf.utilization();
            if leaf.model_trained() {
                leaves_with_models += 1;
            }
            let (hits, probes) = leaf.hit_counts();
            total_hits += hits;
            total_probes += probes;
        }

        let avg_utilization = if leaves > 0 { utilization_sum / leaves as f64 } else { 0.0 };
        let model_hit_rate = if total_probes > 0 {
            Some(total_hits as f64 / total_probes as f64)
        } else {
            None
        };

        Stats {
            size,
            leaves,
            height: self.height(),
            avg_utilization,
            leaves_with_models,
            model_hit_rate,
        }
    }
}
