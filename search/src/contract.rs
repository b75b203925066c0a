//! Search node and heuristic contracts.

use std::fmt::Debug;
use std::hash::Hash;

/// Path cost unit. Edge costs and heuristic estimates are non-negative
/// integers; accumulation saturates instead of wrapping.
pub type Cost = u64;

/// Trait for problem domains that can be searched.
///
/// A node carries one state of the problem. The engine wraps every node it
/// discovers in a [`crate::node::ScoredNode`], which owns the `g`/`h`/`f`
/// scores and the parent link; implementors only describe the state space.
///
/// # Contract
///
/// - Identity is `state()` alone. Two nodes with equal states are the same
///   search state regardless of how they were reached.
/// - `successors` returns every node reachable in one transition. It must be
///   finite and terminate.
/// - `dist_from_parent` is the cost of the edge that produced this node. It is
///   only read on nodes returned by `successors`.
/// - Problem input is validated when the node is constructed; the engine
///   never re-validates node content.
pub trait SearchNode: Sized {
    /// Opaque problem state; the sole basis of node identity.
    type State: Clone + Eq + Hash + Debug;

    /// The state this node represents.
    fn state(&self) -> &Self::State;

    /// All nodes reachable in one transition from this node.
    fn successors(&self) -> Vec<Self>;

    /// Edge cost from the node that generated this one.
    fn dist_from_parent(&self) -> Cost;

    /// State-based identity check.
    fn same_state(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

/// Estimate of the remaining cost from a node to the goal.
///
/// Implementations must be pure functions of the two states and must never
/// overestimate the true optimal remaining cost. A* and IDA* only return
/// optimal paths under an admissible heuristic.
pub trait Heuristic<N: SearchNode> {
    /// Estimated cost from `node` to `goal`.
    fn estimate(&self, node: &N, goal: &N) -> Cost;
}

impl<N, F> Heuristic<N> for F
where
    N: SearchNode,
    F: Fn(&N, &N) -> Cost,
{
    fn estimate(&self, node: &N, goal: &N) -> Cost {
        self(node, goal)
    }
}

/// Adapter for heuristics that already hold their goal.
///
/// The wrapped function receives only the node; the goal passed by the
/// engine is ignored.
#[derive(Debug, Clone, Copy)]
pub struct BoundGoal<F>(pub F);

impl<N, F> Heuristic<N> for BoundGoal<F>
where
    N: SearchNode,
    F: Fn(&N) -> Cost,
{
    fn estimate(&self, node: &N, _goal: &N) -> Cost {
        (self.0)(node)
    }
}

/// Heuristic that always estimates zero. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N: SearchNode> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> Cost {
        0
    }
}
