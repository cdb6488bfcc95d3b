//! Single-pass, non-restartable iteration. Implemented as a stateful
//! cursor — a cached leaf reference plus a physical slot index — rather
//! than a generator, so normal iteration touches the arena only when
//! crossing into a new leaf.

use crate::leaf::{LeafNode, Locate};
use crate::predictor::PredictorKey;
use crate::types::{BppTreeMap, NodeId, NULL_NODE};

pub struct Iter<'a, K, V> {
    tree: &'a BppTreeMap<K, V>,
    current_leaf: Option<&'a LeafNode<K, V>>,
    index: usize,
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: Ord + Clone + PredictorKey,
{
    pub(crate) fn new(tree: &'a BppTreeMap<K, V>) -> Self {
        let current_leaf = Self::leaf_ref(tree, tree.head);
        Iter {
            tree,
            current_leaf,
            index: 0,
        }
    }

    fn leaf_ref(tree: &'a BppTreeMap<K, V>, id: NodeId) -> Option<&'a LeafNode<K, V>> {
        if id == NULL_NODE {
            None
        } else {
            Some(tree.get_leaf(id))
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Ord + Clone + PredictorKey,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.current_leaf?;
            if self.index >= leaf.cap() {
                self.current_leaf = Self::leaf_ref(self.tree, leaf.next());
                self.index = 0;
                continue;
            }
            let slot = leaf.slot_at(self.index);
            self.index += 1;
            if let Some((k, v)) = slot {
                return Some((k, v));
            }
        }
    }
}

pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V>
where
    K: Ord + Clone + PredictorKey,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
}

pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V>
where
    K: Ord + Clone + PredictorKey,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }
}

/// A finite, single-pass, non-restartable cursor over `[lo, hi]` (both
/// bounds inclusive).
pub struct Range<'a, K, V> {
    tree: &'a BppTreeMap<K, V>,
    current_leaf: Option<&'a LeafNode<K, V>>,
    index: usize,
    hi: K,
}

impl<'a, K, V> Iterator for Range<'a, K, V>
where
    K: Ord + Clone + PredictorKey,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.current_leaf?;
            if self.index >= leaf.cap() {
                self.current_leaf = Iter::leaf_ref(self.tree, leaf.next());
                self.index = 0;
                continue;
            }
            let slot = leaf.slot_at(self.index);
            self.index += 1;
            if let Some((k, v)) = slot {
                if *k > self.hi {
                    self.current_leaf = None;
                    return None;
                }
                return Some((k, v));
            }
        }
    }
}

impl<K, V> BppTreeMap<K, V>
where
    K: Ord + Clone + PredictorKey,
{
    /// All entries in ascending key order. Single-pass, not restartable.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(Iter::new(self))
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(Iter::new(self))
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.iter().last()
    }

    /// Entries with `lo <= key <= hi`, in ascending order. `lo > hi` yields
    /// an empty sequence.
    pub fn range(&self, lo: K, hi: K) -> Range<'_, K, V> {
        if lo > hi {
            return Range {
                tree: self,
                current_leaf: None,
                index: 0,
                hi,
            };
        }

        let leaf_id = self.find_leaf_for_key(&lo);
        let leaf = self.get_leaf(leaf_id);
        let start_index = match leaf.locate(&lo, self.config.probe_radius) {
            Locate::Found(idx) => idx,
            Locate::Interval { pred, .. } => pred.map(|p| p + 1).unwrap_or(0),
        };

        Range {
            tree: self,
            current_leaf: Some(leaf),
            index: start_index,
            hi,
        }
    }
}
