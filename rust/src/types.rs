//! Core type definitions shared across the tree: node identity, the tagged
//! child reference, the validated configuration surface, and the map
//! struct itself.

use std::marker::PhantomData;

use crate::arena::{Arena, ArenaId, NULL_ID};
use crate::branch::BranchNode;
use crate::error::{BppResult, BppTreeError};
use crate::leaf::LeafNode;

pub(crate) type NodeId = ArenaId;
pub(crate) const NULL_NODE: NodeId = NULL_ID;

pub(crate) const MIN_ORDER: usize = 3;
pub(crate) const MIN_LEAF_CAPACITY: usize = 4;

/// A reference to a child node, tagged by kind so dispatch never needs
/// dynamic typing or an inheritance hierarchy — just a match.
pub(crate) enum NodeRef<K, V> {
    Leaf(NodeId, PhantomData<(K, V)>),
    Branch(NodeId, PhantomData<(K, V)>),
}

impl<K, V> NodeRef<K, V> {
    pub(crate) fn leaf(id: NodeId) -> Self {
        NodeRef::Leaf(id, PhantomData)
    }

    pub(crate) fn branch(id: NodeId) -> Self {
        NodeRef::Branch(id, PhantomData)
    }
}

impl<K, V> Clone for NodeRef<K, V> {
    fn clone(&self) -> Self {
        match self {
            NodeRef::Leaf(id, _) => NodeRef::leaf(*id),
            NodeRef::Branch(id, _) => NodeRef::branch(*id),
        }
    }
}

impl<K, V> Copy for NodeRef<K, V> {}

/// The value produced when a child's insert propagates a split up to its
/// parent (see the descent/ascent recursion in `insert.rs`). Carried as a
/// return value instead of a parent back-pointer.
pub(crate) enum InsertOutcome<K, V> {
    /// No split. Carries the prior value if this was an overwrite.
    Done(Option<V>),
    /// The child split. `separator` is the smallest key reachable through
    /// `new_child`, which must be inserted immediately to the right of the
    /// child that split.
    Split {
        prior: Option<V>,
        separator: K,
        new_child: NodeRef<K, V>,
    },
}

/// Validated construction-time configuration. See the configuration table.
#[derive(Debug, Clone, Copy)]
pub struct TreeConfig {
    pub order: usize,
    pub initial_leaf_capacity: usize,
    pub training_interval: usize,
    pub probe_radius: usize,
    pub growth_trigger: f64,
    pub growth_factor: f64,
}

impl TreeConfig {
    pub fn new(order: usize, initial_leaf_capacity: usize) -> Self {
        TreeConfig {
            order,
            initial_leaf_capacity,
            ..TreeConfig::default()
        }
    }

    pub(crate) fn validate(&self) -> BppResult<()> {
        if self.order < MIN_ORDER {
            return Err(BppTreeError::configuration(
                "order",
                format!("must be >= {MIN_ORDER}, got {}", self.order),
            ));
        }
        if self.initial_leaf_capacity < MIN_LEAF_CAPACITY {
            return Err(BppTreeError::configuration(
                "initial_leaf_capacity",
                format!("must be >= {MIN_LEAF_CAPACITY}, got {}", self.initial_leaf_capacity),
            ));
        }
        if self.training_interval == 0 {
            return Err(BppTreeError::configuration(
                "training_interval",
                "must be >= 1",
            ));
        }
        if self.probe_radius == 0 {
            return Err(BppTreeError::configuration("probe_radius", "must be >= 1"));
        }
        if !(self.growth_trigger > 0.0 && self.growth_trigger <= 1.0) {
            return Err(BppTreeError::configuration(
                "growth_trigger",
                format!("must be in (0.0, 1.0], got {}", self.growth_trigger),
            ));
        }
        if !(self.growth_factor > 1.0) {
            return Err(BppTreeError::configuration(
                "growth_factor",
                format!("must be > 1.0, got {}", self.growth_factor),
            ));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            order: 16,
            initial_leaf_capacity: 16,
            training_interval: 10,
            probe_radius: 3,
            growth_trigger: 0.30,
            growth_factor: 1.5,
        }
    }
}

/// An in-memory ordered map backed by a gapped-array B+ tree with a learned
/// per-leaf position predictor.
///
/// Single-owner, single-thread: `BppTreeMap` holds no interior synchronization
/// beyond the lifetime hit-rate counters in each leaf, and all public
/// operations assume the caller serializes access externally.
pub struct BppTreeMap<K, V> {
    pub(crate) config: TreeConfig,
    pub(crate) root: NodeRef<K, V>,
    pub(crate) head: NodeId,
    pub(crate) leaves: Arena<LeafNode<K, V>>,
    pub(crate) branches: Arena<BranchNode<K, V>>,
}
