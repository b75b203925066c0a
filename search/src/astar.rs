//! A*: best-first graph search over the [`SearchNode`] contract.
//!
//! # Algorithm
//!
//! 1. Score the initial node (`g = 0`, `f = h`) and queue it.
//! 2. Pop the lowest-`f` entry. If its state equals the goal, stop: the goal
//!    test happens at pop time, so the first goal popped has minimal `f`.
//! 3. Otherwise close the state and generate its successors. A successor is
//!    dropped if its state is closed, or if the open index already holds the
//!    state at an `f` no worse than the successor's. Survivors are scored
//!    and queued as new records with their own parent link.
//! 4. An empty open set means no path exists.
//!
//! Closed states are never reopened. With a consistent heuristic this keeps
//! the result optimal; with a merely admissible one the first goal popped is
//! still the best reachable through the explored tree.

use log::{debug, info, trace};

use crate::contract::{Heuristic, SearchNode};
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::ScoredNode;
use crate::policy::SearchPolicy;
use crate::search::{SearchResult, SearchStats, Strategy, TerminationReason};

/// Run A* without budgets.
///
/// Always runs to completion: the result is either
/// [`TerminationReason::GoalReached`] or [`TerminationReason::Exhausted`].
pub fn search<N, H>(initial: N, goal: &N, heuristic: &H) -> SearchResult<N>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    run_validated(initial, goal, heuristic, SearchPolicy::unbounded())
}

/// Run A* under `policy`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn search_with_policy<N, H>(
    initial: N,
    goal: &N,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<N>, SearchError>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    policy.validate()?;
    Ok(run_validated(initial, goal, heuristic, *policy))
}

fn run_validated<N, H>(initial: N, goal: &N, heuristic: &H, policy: SearchPolicy) -> SearchResult<N>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<ScoredNode<N>> = Vec::new();
    let mut stats = SearchStats::default();

    let mut root = ScoredNode::root(initial);
    let root_h = heuristic.estimate(&root.node, goal);
    root.score(0, root_h);
    frontier.push(0, root.state(), root.f, root_h);
    nodes.push(root);

    let termination = loop {
        let Some(entry) = frontier.pop() else {
            break TerminationReason::Exhausted;
        };
        let current_id = entry.node_id;
        let current = &nodes[current_id];

        // An older, worse entry for a state that has since been expanded.
        if frontier.is_closed(current.state()) {
            stats.stale_skipped += 1;
            continue;
        }

        if current.node.same_state(goal) {
            break TerminationReason::GoalReached {
                node_id: current_id,
            };
        }

        if policy.expansions_exhausted(stats.expansions) {
            debug!(
                "A* stopped by expansion budget after {} expansions",
                stats.expansions
            );
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let state = current.state().clone();
        let (current_g, current_depth) = (current.g, current.depth);
        let successors = current.node.successors();
        trace!(
            "A* expanding {state:?} (g={current_g}, f={}) into {} successors",
            current.f,
            successors.len()
        );
        frontier.leave_open(&state);
        frontier.close(state);
        stats.expansions += 1;

        for successor in successors {
            stats.generated += 1;
            if frontier.is_closed(successor.state()) {
                stats.closed_skipped += 1;
                continue;
            }

            let mut child = ScoredNode::child(successor, current_id, current_depth);
            let g = current_g.saturating_add(child.node.dist_from_parent());
            let h = heuristic.estimate(&child.node, goal);
            child.score(g, h);

            if !frontier.admits(child.state(), child.f) {
                stats.duplicates_suppressed += 1;
                continue;
            }

            let child_id = nodes.len();
            frontier.push(child_id, child.state(), child.f, h);
            nodes.push(child);
        }
    };

    stats.frontier_high_water = frontier.high_water();
    info!(
        "A* finished: {} after {} expansions, {} nodes retained, {} states closed",
        termination.as_str(),
        stats.expansions,
        nodes.len(),
        frontier.closed_len()
    );

    SearchResult {
        strategy: Strategy::AStar,
        nodes,
        termination,
        stats,
        policy,
    }
}
