//! Lodestar Search: generic A* and IDA* over a node and heuristic contract.
//!
//! Problem domains implement [`SearchNode`] (state identity, successor
//! generation, edge cost) and supply a [`Heuristic`]. The engine owns the
//! scoring fields and parent links in [`ScoredNode`] records, so domains
//! stay free of search bookkeeping.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestar_search  ←  lodestar_harness
//! (engines, report)   (puzzles, navigation, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] / [`Heuristic`]: the two contracts a domain implements
//! - [`ScoredNode`]: engine-owned `g`/`h`/`f` and parent link
//! - [`SearchPolicy`]: optional expansion and iteration budgets
//! - [`SearchResult`]: node arena, termination reason and counters
//! - [`SearchReport`]: canonical JSON summary with a digest

#![forbid(unsafe_code)]

pub mod astar;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod idastar;
pub mod node;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;

#[cfg(test)]
mod testkit;

pub use contract::{BoundGoal, Cost, Heuristic, SearchNode, ZeroHeuristic};
pub use error::SearchError;
pub use node::{NodeId, ScoredNode};
pub use policy::SearchPolicy;
pub use report::SearchReport;
pub use search::{run, SearchResult, SearchStats, Strategy, TerminationReason};
