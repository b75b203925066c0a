//! Harness runner: drives one strategy over a world and renders the result.
//!
//! The runner uses ONLY the engine entry point `lodestar_search::run` and the
//! result's report. It does not implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! WorldInstance → pick heuristic → search::run(strategy, policy)
//!   → SearchResult → SearchReport + rendered path
//! ```

use log::{info, warn};

use lodestar_search::{run as run_search, Heuristic, SearchError, SearchPolicy, SearchReport, Strategy};

use crate::contract::SearchWorld;
use crate::instance::WorldInstance;
use crate::worlds::navigation::NavigationManhattan;
use crate::worlds::npuzzle::NPuzzleManhattan;

/// Runner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub policy: SearchPolicy,
}

impl RunConfig {
    /// Unbounded run of `strategy`.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            policy: SearchPolicy::unbounded(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Strategy::AStar)
    }
}

/// Everything a harness run produces.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// World identifier of the searched instance.
    pub world_id: &'static str,
    pub report: SearchReport,
    /// `Display` rendering of every node on the solution path, root first.
    /// Empty when no path was found.
    pub rendered_path: Vec<String>,
}

impl RunOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.report.solution_cost.is_some()
    }
}

/// Run `config.strategy` on `instance` with the world's Manhattan heuristic.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `config.policy` is invalid.
pub fn run(instance: &WorldInstance, config: &RunConfig) -> Result<RunOutcome, SearchError> {
    match instance {
        WorldInstance::NPuzzle { initial, goal } => {
            if !initial.is_solvable_towards(goal) {
                warn!("puzzle parity says the goal is unreachable; the search will exhaust");
            }
            run_world(initial.clone(), goal, &NPuzzleManhattan::new(goal), config)
        }
        WorldInstance::Navigation { initial, goal } => {
            run_world(initial.clone(), goal, &NavigationManhattan::new(goal), config)
        }
    }
}

/// Run `config.strategy` on any world with any heuristic.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `config.policy` is invalid.
pub fn run_world<W, H>(
    initial: W,
    goal: &W,
    heuristic: &H,
    config: &RunConfig,
) -> Result<RunOutcome, SearchError>
where
    W: SearchWorld,
    H: Heuristic<W> + ?Sized,
{
    let world_id = initial.world_id();
    info!("running {} on {world_id}", config.strategy);

    let result = run_search(config.strategy, initial, goal, heuristic, &config.policy)?;
    let rendered_path = result
        .path()
        .map(|path| path.iter().map(|n| n.node.to_string()).collect())
        .unwrap_or_default();

    Ok(RunOutcome {
        world_id,
        report: result.report(),
        rendered_path,
    })
}
