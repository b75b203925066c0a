//! Search entry point, outcomes and counters shared by both strategies.

use crate::astar;
use crate::contract::{Cost, Heuristic, SearchNode};
use crate::error::SearchError;
use crate::idastar;
use crate::node::{NodeId, ScoredNode};
use crate::path::{path_nodes, reconstruct_path};
use crate::policy::SearchPolicy;
use crate::report::SearchReport;

/// Which engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Best-first graph search with open and closed sets.
    AStar,
    /// Iterative-deepening depth-first search under an `f` bound.
    IdaStar,
}

impl Strategy {
    /// Both strategies, A* first.
    pub const ALL: [Strategy; 2] = [Strategy::AStar, Strategy::IdaStar];

    /// Stable lowercase name (`"astar"`, `"idastar"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::IdaStar => "idastar",
        }
    }

    /// Parse a strategy name. Accepts `astar`/`a*` and `idastar`/`ida*`,
    /// case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Some(Self::AStar),
            "idastar" | "ida*" => Some(Self::IdaStar),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The goal state was reached; `node_id` is the terminal node.
    GoalReached { node_id: NodeId },
    /// No path exists: the open set emptied (A*) or no `f` value exceeded
    /// the bound (IDA*).
    Exhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// `max_iterations` budget was hit (IDA* only).
    IterationBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::Exhausted => "exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::IterationBudgetExceeded => "iteration_budget_exceeded",
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Successors produced by `SearchNode::successors`.
    pub generated: u64,
    /// Successors discarded because the open set already held their state
    /// at an equal or better `f` (A*).
    pub duplicates_suppressed: u64,
    /// Successors discarded because their state was already closed (A*).
    pub closed_skipped: u64,
    /// Popped entries skipped because their state was closed meanwhile (A*).
    pub stale_skipped: u64,
    /// Successors discarded because their state was already on the current
    /// path (IDA*).
    pub path_skipped: u64,
    /// Peak open-set size (A*) or peak path length (IDA*).
    pub frontier_high_water: u64,
    /// Bounded probes run (IDA*); 0 for A*.
    pub iterations: u64,
    /// `f` bound of every IDA* probe, in order.
    pub bounds: Vec<Cost>,
}

/// Result of a search execution.
///
/// Owns every node record the search retained. For A* that is every node
/// ever queued; for IDA* it is the path stack at termination. Parent links
/// are indices into [`SearchResult::nodes`].
#[derive(Debug)]
pub struct SearchResult<N> {
    /// The strategy that produced this result.
    pub strategy: Strategy,
    /// Retained node records, indexed by [`NodeId`].
    pub nodes: Vec<ScoredNode<N>>,
    /// Why the search stopped.
    pub termination: TerminationReason,
    /// Counters collected during the search.
    pub stats: SearchStats,
    /// The policy the search ran under.
    pub policy: SearchPolicy,
}

impl<N: SearchNode> SearchResult<N> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Arena id of the terminal node, if the goal was reached.
    #[must_use]
    pub fn goal_id(&self) -> Option<NodeId> {
        match self.termination {
            TerminationReason::GoalReached { node_id } => Some(node_id),
            _ => None,
        }
    }

    /// The terminal node, if the goal was reached.
    #[must_use]
    pub fn goal(&self) -> Option<&ScoredNode<N>> {
        self.goal_id().map(|id| &self.nodes[id])
    }

    /// Node ids from the initial node to the terminal node.
    #[must_use]
    pub fn path_ids(&self) -> Option<Vec<NodeId>> {
        self.goal_id().map(|id| reconstruct_path(&self.nodes, id))
    }

    /// Nodes from the initial node to the terminal node.
    #[must_use]
    pub fn path(&self) -> Option<Vec<&ScoredNode<N>>> {
        self.goal_id().map(|id| path_nodes(&self.nodes, id))
    }

    /// Total cost of the solution path (`g` of the terminal node).
    #[must_use]
    pub fn solution_cost(&self) -> Option<Cost> {
        self.goal().map(|node| node.g)
    }

    /// Build the serializable report for this result.
    #[must_use]
    pub fn report(&self) -> SearchReport {
        SearchReport::from_result(self)
    }
}

/// Run `strategy` from `initial` towards `goal` under `policy`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
/// Not finding a path is reported through [`TerminationReason::Exhausted`].
pub fn run<N, H>(
    strategy: Strategy,
    initial: N,
    goal: &N,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<N>, SearchError>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    match strategy {
        Strategy::AStar => astar::search_with_policy(initial, goal, heuristic, policy),
        Strategy::IdaStar => idastar::search_with_policy(initial, goal, heuristic, policy),
    }
}
