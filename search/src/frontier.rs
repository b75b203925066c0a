//! Best-first frontier: open set, open index and closed set for A*.
//!
//! The open set is a `BinaryHeap` of node ids keyed by [`FrontierKey`]. The
//! open index maps each state resident in the heap to the best `f` queued for
//! it, so "is this state open, and at what f" never scans the heap. The
//! closed set holds states whose successors have been generated.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use crate::contract::Cost;
use crate::node::{FrontierKey, NodeId};

/// A heap entry: a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the lowest `f` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    key: Reverse<FrontierKey>,
    /// Arena id of the queued node.
    pub node_id: NodeId,
}

impl FrontierEntry {
    /// The ordering key this entry was queued with.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        self.key.0
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A `HashMap<S, Cost>` open index of the best `f` queued per state
/// - A `HashSet<S>` of closed (fully expanded) states
pub struct BestFirstFrontier<S> {
    heap: BinaryHeap<FrontierEntry>,
    open_index: HashMap<S, Cost>,
    closed: HashSet<S>,
    next_creation_order: u64,
    high_water: u64,
}

impl<S: Clone + Eq + Hash> BestFirstFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            open_index: HashMap::new(),
            closed: HashSet::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Whether a successor with state `state` and score `f` may be queued.
    ///
    /// Returns `false` if the open index already holds the state at an `f`
    /// less than or equal to `f`: the new entry cannot improve on it.
    #[must_use]
    pub fn admits(&self, state: &S, f: Cost) -> bool {
        match self.open_index.get(state) {
            Some(&best) => f < best,
            None => true,
        }
    }

    /// Queue `node_id` under `state` and record `f` in the open index.
    ///
    /// A previously queued entry for the same state stays in the heap; it
    /// is skipped as stale once the state is closed.
    pub fn push(&mut self, node_id: NodeId, state: &S, f: Cost, h: Cost) {
        let key = FrontierKey {
            f,
            h,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        match self.open_index.entry(state.clone()) {
            Entry::Occupied(mut slot) => {
                if f < *slot.get() {
                    slot.insert(f);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(f);
            }
        }
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest `f`) entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Drop `state` from the open index once its best entry has been popped.
    pub fn leave_open(&mut self, state: &S) {
        self.open_index.remove(state);
    }

    /// Mark `state` as fully expanded.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self, state: S) -> bool {
        self.closed.insert(state)
    }

    /// Whether `state` has been fully expanded.
    #[must_use]
    pub fn is_closed(&self, state: &S) -> bool {
        self.closed.contains(state)
    }

    /// Best `f` currently queued for `state`, if any.
    #[must_use]
    pub fn open_f(&self, state: &S) -> Option<Cost> {
        self.open_index.get(state).copied()
    }

    /// Current heap size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of closed states.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// High-water mark of heap size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash> Default for BestFirstFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
