//! IDA*: iterative-deepening depth-first search under an `f` bound.
//!
//! Each iteration is a depth-first probe from the initial node that prunes
//! every node with `f > bound` and remembers the smallest pruned `f`. That
//! value becomes the next bound. A probe that prunes nothing proves there is
//! no path. Memory is the current path plus one successor iterator per
//! level; the probe runs on an explicit stack, so depth is not limited by
//! the call stack.
//!
//! There is no closed set. A successor whose state is already on the
//! current path is skipped, which keeps cyclic state spaces finite.

use std::vec;

use log::{debug, info, trace};

use crate::contract::{Cost, Heuristic, SearchNode};
use crate::error::SearchError;
use crate::node::ScoredNode;
use crate::policy::SearchPolicy;
use crate::search::{SearchResult, SearchStats, Strategy, TerminationReason};

/// Run IDA* without budgets.
pub fn search<N, H>(initial: N, goal: &N, heuristic: &H) -> SearchResult<N>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    run_validated(initial, goal, heuristic, SearchPolicy::unbounded())
}

/// Run IDA* under `policy`.
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

/// Outcome of one bounded probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The goal is the top of the path.
    Found,
    /// Smallest `f` that exceeded the bound.
    Exceeded(Cost),
    /// Nothing was pruned: every reachable state was explored.
    Exhausted,
    BudgetExceeded,
}

/// Result of entering the node on top of the path.
enum Enter {
    Goal,
    Pruned(Cost),
    Expanded,
    BudgetExceeded,
}

/// Successors of one path node still to be tried.
struct Frame<N> {
    successors: vec::IntoIter<N>,
    min_exceeded: Option<Cost>,
}

struct Prober<'a, N, H: ?Sized> {
    goal: &'a N,
    heuristic: &'a H,
    policy: SearchPolicy,
    path: Vec<ScoredNode<N>>,
    frames: Vec<Frame<N>>,
    stats: SearchStats,
}

impl<N, H> Prober<'_, N, H>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    /// Depth-first probe from the root. On return other than `Found` or
    /// `BudgetExceeded` the path is back to the root alone.
    fn probe(&mut self, bound: Cost) -> Probe {
        self.frames.clear();
        match self.enter(bound) {
            Enter::Goal => return Probe::Found,
            Enter::Pruned(f) => return Probe::Exceeded(f),
            Enter::BudgetExceeded => return Probe::BudgetExceeded,
            Enter::Expanded => {}
        }

        while let Some(frame) = self.frames.last_mut() {
            let Some(successor) = frame.successors.next() else {
                let min_exceeded = self.frames.pop().and_then(|done| done.min_exceeded);
                if self.frames.is_empty() {
                    return min_exceeded.map_or(Probe::Exhausted, Probe::Exceeded);
                }
                self.path.pop();
                if let Some(f) = min_exceeded {
                    self.fold(f);
                }
                continue;
            };

            self.stats.generated += 1;
            if self.path.iter().any(|on_path| on_path.node.same_state(&successor)) {
                self.stats.path_skipped += 1;
                continue;
            }

            let parent_id = self.path.len() - 1;
            let parent = &self.path[parent_id];
            let mut child = ScoredNode::child(successor, parent_id, parent.depth);
            let g = parent.g.saturating_add(child.node.dist_from_parent());
            let h = self.heuristic.estimate(&child.node, self.goal);
            child.score(g, h);
            self.path.push(child);
            self.stats.frontier_high_water =
                self.stats.frontier_high_water.max(self.path.len() as u64);

            match self.enter(bound) {
                Enter::Goal => return Probe::Found,
                Enter::BudgetExceeded => return Probe::BudgetExceeded,
                Enter::Pruned(f) => {
                    self.path.pop();
                    self.fold(f);
                }
                Enter::Expanded => {}
            }
        }

        Probe::Exhausted
    }

    /// Bound test, then goal test, then expansion of the top of the path.
    fn enter(&mut self, bound: Cost) -> Enter {
        let top = &self.path[self.path.len() - 1];
        if top.f > bound {
            return Enter::Pruned(top.f);
        }
        if top.node.same_state(self.goal) {
            return Enter::Goal;
        }
        if self.policy.expansions_exhausted(self.stats.expansions) {
            return Enter::BudgetExceeded;
        }

        let successors = top.node.successors();
        trace!(
            "IDA* expanding {:?} (g={}, f={}, depth={}) into {} successors",
            top.state(),
            top.g,
            top.f,
            top.depth,
            successors.len()
        );
        self.stats.expansions += 1;
        self.frames.push(Frame {
            successors: successors.into_iter(),
            min_exceeded: None,
        });
        Enter::Expanded
    }

    /// Record a pruned `f` against the node now on top of the path.
    fn fold(&mut self, f: Cost) {
        if let Some(frame) = self.frames.last_mut() {
            frame.min_exceeded = Some(frame.min_exceeded.map_or(f, |min| min.min(f)));
        }
    }
}

fn run_validated<N, H>(initial: N, goal: &N, heuristic: &H, policy: SearchPolicy) -> SearchResult<N>
where
    N: SearchNode,
    H: Heuristic<N> + ?Sized,
{
    let mut root = ScoredNode::root(initial);
    let root_h = heuristic.estimate(&root.node, goal);
    root.score(0, root_h);
    let mut bound = root.f;

    let mut prober = Prober {
        goal,
        heuristic,
        policy,
        path: vec![root],
        frames: Vec::new(),
        stats: SearchStats {
            frontier_high_water: 1,
            ..SearchStats::default()
        },
    };

    let termination = loop {
        if policy.iterations_exhausted(prober.stats.iterations) {
            debug!(
                "IDA* stopped by iteration budget after {} iterations",
                prober.stats.iterations
            );
            break TerminationReason::IterationBudgetExceeded;
        }
        prober.stats.iterations += 1;
        prober.stats.bounds.push(bound);
        debug!(
            "IDA* iteration {} with bound {bound} ({} expansions so far)",
            prober.stats.iterations, prober.stats.expansions
        );

        match prober.probe(bound) {
            Probe::Found => {
                break TerminationReason::GoalReached {
                    node_id: prober.path.len() - 1,
                }
            }
            Probe::Exceeded(next) => bound = next,
            Probe::Exhausted => break TerminationReason::Exhausted,
            Probe::BudgetExceeded => {
                debug!(
                    "IDA* stopped by expansion budget after {} expansions",
                    prober.stats.expansions
                );
                break TerminationReason::ExpansionBudgetExceeded;
            }
        }
    };

    info!(
        "IDA* finished: {} after {} iterations and {} expansions",
        termination.as_str(),
        prober.stats.iterations,
        prober.stats.expansions
    );

    SearchResult {
        strategy: Strategy::IdaStar,
        nodes: prober.path,
        termination,
        stats: prober.stats,
        policy,
    }
}
