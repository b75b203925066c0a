//! Shared helpers for lodestar benchmark suites.
//!
//! A regime is a named instance chosen to stress one side of the engines:
//! shallow and deep puzzles for bound growth, weighted terrain for the open
//! set, a maze for long corridors, and an unreachable puzzle for exhaustion.

use lodestar_harness::instance::{InstanceSpec, WorldInstance};
use lodestar_harness::runner::{run, RunConfig, RunOutcome};
use lodestar_search::Strategy;

/// A named benchmark instance.
pub struct Regime {
    pub name: &'static str,
    pub instance: WorldInstance,
}

fn regime(name: &'static str, spec: InstanceSpec) -> Regime {
    let instance = WorldInstance::from_spec(spec).expect("benchmark regime is a valid instance");
    Regime { name, instance }
}

/// 8-puzzle, 7 moves from its goal.
///
/// # Panics
///
/// Never in practice: the instance is a fixed valid board.
#[must_use]
pub fn regime_eight_puzzle_shallow() -> Regime {
    regime(
        "eight_puzzle_shallow",
        InstanceSpec::NPuzzle {
            initial: vec![2, 8, 3, 1, 6, 4, 7, 0, 5],
            goal: vec![1, 2, 3, 8, 6, 4, 7, 5, 0],
        },
    )
}

/// 8-puzzle, 22 moves from its goal.
///
/// # Panics
///
/// Never in practice: the instance is a fixed valid board.
#[must_use]
pub fn regime_eight_puzzle_deep() -> Regime {
    regime(
        "eight_puzzle_deep",
        InstanceSpec::NPuzzle {
            initial: vec![5, 4, 0, 6, 1, 8, 7, 3, 2],
            goal: vec![1, 2, 3, 4, 0, 5, 6, 7, 8],
        },
    )
}

/// 2x2 puzzle whose goal has the wrong parity: both engines must exhaust.
///
/// # Panics
///
/// Never in practice: the instance is a fixed valid board.
#[must_use]
pub fn regime_three_puzzle_unsolvable() -> Regime {
    regime(
        "three_puzzle_unsolvable",
        InstanceSpec::NPuzzle {
            initial: vec![3, 0, 2, 1],
            goal: vec![0, 1, 2, 3],
        },
    )
}

/// Maze whose only route runs down, across the bottom and back up.
///
/// # Panics
///
/// Never in practice: the grid is fixed and rectangular.
#[must_use]
pub fn regime_maze_corridor() -> Regime {
    regime(
        "maze_corridor",
        InstanceSpec::Maze {
            grid: vec![
                vec![1, 0, 0, 0, 1],
                vec![1, 0, 1, 0, 1],
                vec![1, 0, 1, 0, 1],
                vec![1, 0, 1, 0, 1],
                vec![1, 1, 1, 1, 1],
            ],
            start: [0, 0],
            goal: [0, 4],
        },
    )
}

/// Terrain where the cost-2 top row beats the long cost-1 detour.
///
/// # Panics
///
/// Never in practice: the grid is fixed and rectangular.
#[must_use]
pub fn regime_terrain_ring() -> Regime {
    let mut grid = vec![vec![1, 2, 2, 2, 2, 2, 2, 2, 2, 1]];
    for _ in 0..6 {
        grid.push(vec![1, 0, 2, 2, 2, 2, 2, 2, 0, 1]);
    }
    grid.push(vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    grid.push(vec![1; 10]);
    regime(
        "terrain_ring",
        InstanceSpec::Terrain {
            grid,
            start: [0, 0],
            goal: [0, 9],
        },
    )
}

/// Every regime, cheapest first.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_three_puzzle_unsolvable(),
        regime_maze_corridor(),
        regime_eight_puzzle_shallow(),
        regime_terrain_ring(),
        regime_eight_puzzle_deep(),
    ]
}

/// Run `strategy` on `regime` through the harness runner, unbounded.
///
/// # Panics
///
/// Panics if the runner rejects the configuration. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn run_regime(regime: &Regime, strategy: Strategy) -> RunOutcome {
    run(&regime.instance, &RunConfig::new(strategy)).expect("unbounded run config is valid")
}
