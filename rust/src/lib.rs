//! An in-memory ordered map backed by a gapped-array B+ tree with a
//! per-leaf learned linear position predictor.
//!
//! ```
//! use bpptree::BppTreeMap;
//!
//! let mut tree = BppTreeMap::new(4, 16).unwrap();
//! tree.insert(1, "one");
//! tree.insert(2, "two");
//! assert_eq!(tree.search(&1), Some(&"one"));
//! assert_eq!(tree.delete(&2), true);
//! assert_eq!(tree.search(&2), None);
//! ```

mod arena;
mod branch;
mod construction;
mod delete;
mod error;
mod get;
mod insert;
mod iter;
mod leaf;
mod predictor;
mod stats;
mod tree_structure;
mod types;
mod validation;

pub use error::{BppResult, BppTreeError};
pub use iter::{Iter, Keys, Range, Values};
pub use predictor::PredictorKey;
pub use stats::Stats;
pub use types::{BppTreeMap, TreeConfig};
