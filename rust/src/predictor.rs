//! The per-leaf learned linear position predictor.
//!
//! Holds `(a, b, trained)` and predicts `p(x) = clamp(round(a*x + b), 0, cap-1)`.
//! Always advisory: every leaf operation must stay correct with `trained =
//! false`, falling back to binary search over the live keys.

/// Keys usable by the predictor must admit a lossy cast to `f64` for the
/// regression. Implemented here for the common fixed-width integer types;
/// a caller with a custom ordered numeric key type can implement this too.
pub trait PredictorKey {
    fn as_predictor_f64(&self) -> f64;
}

macro_rules! impl_predictor_key_int {
    ($($t:ty),*) => {
        $(
            impl PredictorKey for $t {
                fn as_predictor_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_predictor_key_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// `(a, b, trained)`. Default is untrained, so every leaf starts out
/// falling back to binary search until enough inserts accumulate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearModel {
    a: f64,
    b: f64,
    trained: bool,
}

impl LinearModel {
    pub fn trained(&self) -> bool {
        self.trained
    }

    /// `p(x) = clamp(round(a*x + b), 0, cap-1)`. Returns `None` if untrained
    /// or `cap == 0`.
    pub fn predict(&self, key_as_f64: f64, cap: usize) -> Option<usize> {
        if !self.trained || cap == 0 {
            return None;
        }
        let raw = (self.a * key_as_f64 + self.b).round();
        let max_index = (cap - 1) as f64;
        let clamped = raw.clamp(0.0, max_index);
        Some(clamped as usize)
    }

    /// Ordinary least squares over `(key_as_f64, physical_index)` samples,
    /// where `samples` is the ascending-by-key live sequence of a leaf
    /// (so `samples[i].1` is the physical slot index of the i-th live key).
    ///
    /// Caller is responsible for only calling this when `samples.len() >= 2`
    /// (the retraining trigger in `LeafNode::maybe_retrain`); a degenerate
    /// single-sample fit would divide by zero in the variance check.
    pub fn fit(samples: &[(f64, usize)]) -> Self {
        debug_assert!(samples.len() >= 2, "OLS fit requires at least two samples");
        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|(_, y)| *y as f64).sum::<f64>() / n;

        let mut s_xx = 0.0;
        let mut s_xy = 0.0;
        for &(x, y) in samples {
            let dx = x - mean_x;
            let dy = y as f64 - mean_y;
            s_xx += dx * dx;
            s_xy += dx * dy;
        }

        if s_xx == 0.0 {
            // All keys identical as f64 (or a single distinct value repeated);
            // the spec's degenerate case collapses to a constant predictor.
            return LinearModel {
                a: 0.0,
                b: samples[0].1 as f64,
                trained: true,
            };
        }

        let a = s_xy / s_xx;
        let b = mean_y - a * mean_x;
        LinearModel { a, b, trained: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untrained_model_never_predicts() {
        let model = LinearModel::default();
        assert!(!model.trained());
        assert_eq!(model.predict(5.0, 16), None);
    }

    #[test]
    fn fit_recovers_exact_linear_layout() {
        // Keys 0,2,4,...,18 laid out at physical indices 0..10 exactly.
        let samples: Vec<(f64, usize)> = (0..10).map(|i| ((i * 2) as f64, i)).collect();
        let model = LinearModel::fit(&samples);
        assert!(model.trained());
        for (x, y) in samples {
            assert_eq!(model.predict(x, 20), Some(y));
        }
    }

    #[test]
    fn fit_handles_zero_variance() {
        let samples = vec![(7.0, 0usize), (7.0, 1usize)];
        let model = LinearModel::fit(&samples);
        assert!(model.trained());
        // Degenerate case: constant predictor at the last fitted position.
        assert_eq!(model.predict(7.0, 4), Some(1));
    }

    #[test]
    fn predict_clamps_to_capacity() {
        let model = LinearModel { a: 1.0, b: 0.0, trained: true };
        assert_eq!(model.predict(1000.0, 16), Some(15));
        assert_eq!(model.predict(-1000.0, 16), Some(0));
    }
}
