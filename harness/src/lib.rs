//! Lodestar Harness: concrete worlds and run orchestration for the engine.
//!
//! The harness turns an instance file into a start/goal pair, runs either
//! strategy through `lodestar_search::run`, and persists the resulting
//! report. It does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]

pub mod contract;
pub mod instance;
pub mod report_dir;
pub mod runner;
pub mod worlds;
