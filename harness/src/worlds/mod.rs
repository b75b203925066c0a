//! World implementations for the harness runner.

pub mod navigation;
pub mod npuzzle;
