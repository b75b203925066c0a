//! Engine-owned node records and the frontier ordering key.

use std::hash::{Hash, Hasher};

use crate::contract::{Cost, SearchNode};

/// Index of a node in the arena of one search invocation.
pub type NodeId = usize;

/// A problem node plus the scores and parent link the engine assigns to it.
///
/// Identity (`PartialEq`, `Eq`, `Hash`) is the wrapped node's state only.
/// `g`, `h`, `f` and `parent` never take part in equality or hashing, so a
/// rediscovered state dedups against earlier copies whatever its scores.
///
/// Records are never re-parented: a cheaper route to a known state is a new
/// record with its own parent.
#[derive(Debug, Clone)]
pub struct ScoredNode<N> {
    /// The problem node.
    pub node: N,
    /// Accumulated path cost from the initial node.
    pub g: Cost,
    /// Heuristic estimate to the goal; `None` until computed.
    pub h: Option<Cost>,
    /// `g + h`, maintained by [`ScoredNode::score`].
    pub f: Cost,
    /// Predecessor on the best path known when this record was created.
    pub parent: Option<NodeId>,
    /// Edges from the initial node (root = 0).
    pub depth: u32,
}

impl<N: SearchNode> ScoredNode<N> {
    /// Wrap the initial node: no parent, `g = 0`, no estimate yet.
    #[must_use]
    pub fn root(node: N) -> Self {
        Self {
            node,
            g: 0,
            h: None,
            f: 0,
            parent: None,
            depth: 0,
        }
    }

    /// Wrap a successor of `parent`; scores are left for the engine to assign.
    #[must_use]
    pub fn child(node: N, parent: NodeId, parent_depth: u32) -> Self {
        Self {
            node,
            g: 0,
            h: None,
            f: 0,
            parent: Some(parent),
            depth: parent_depth.saturating_add(1),
        }
    }

    /// Assign `g`, then `h`, then `f = g + h`.
    pub fn score(&mut self, g: Cost, h: Cost) {
        self.g = g;
        self.h = Some(h);
        self.f = g.saturating_add(h);
    }

    /// The wrapped node's state.
    #[must_use]
    pub fn state(&self) -> &N::State {
        self.node.state()
    }

    /// `true` once `h` (and therefore `f`) has been computed.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.h.is_some()
    }

    /// Frontier key for this record.
    #[must_use]
    pub fn frontier_key(&self, creation_order: u64) -> FrontierKey {
        FrontierKey {
            f: self.f,
            h: self.h.unwrap_or(0),
            creation_order,
        }
    }
}

impl<N: SearchNode> PartialEq for ScoredNode<N> {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl<N: SearchNode> Eq for ScoredNode<N> {}

impl<N: SearchNode> Hash for ScoredNode<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state().hash(state);
    }
}

/// The open-set ordering key: `(f, h, creation_order)`.
///
/// Lower `f` first; on ties the node with the smaller estimate (closer to
/// the goal) wins, then the older insertion. Only total path cost is
/// guaranteed across tie orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: Cost,
    pub h: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .cmp(&other.f)
            .then(self.h.cmp(&other.h))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
