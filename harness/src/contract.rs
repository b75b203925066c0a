//! World contract: what a search domain must provide to be run by the
//! harness runner, and the errors raised while building one.
//!
//! Worlds describe a state space through `SearchNode` and render themselves
//! for humans through `Display`. They do NOT run searches, persist reports,
//! or compute digests (runner and `report_dir` concerns).

use lodestar_search::SearchNode;

/// A search domain the runner can drive and render.
pub trait SearchWorld: SearchNode + Clone + std::fmt::Display {
    /// Stable world identifier (e.g. `"npuzzle"`).
    fn world_id(&self) -> &'static str;
}

/// Typed failure for world construction.
///
/// Raised by constructors only. Once a world value exists it is valid, and
/// the engines never see these errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Board has fewer than 4 cells.
    BoardTooSmall { len: usize },
    /// Board length is not a perfect square.
    BoardNotSquare { len: usize },
    /// Board length differs from what the constructor or goal requires.
    BoardSizeMismatch { expected: usize, found: usize },
    /// A tile value is not in `0..len`.
    TileOutOfRange { tile: u16, len: usize },
    /// A tile value appears more than once.
    DuplicateTile { tile: u16 },
    /// Grid has no rows or no columns.
    EmptyGrid,
    /// A grid row has a different width than the first row.
    JaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A maze cell holds something other than 0 (wall) or 1 (open).
    InvalidMazeCell { row: usize, col: usize, value: u32 },
    /// A position lies outside the grid.
    PositionOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardTooSmall { len } => {
                write!(f, "puzzle board has {len} cells, needs at least 4")
            }
            Self::BoardNotSquare { len } => {
                write!(f, "puzzle board length {len} is not a perfect square")
            }
            Self::BoardSizeMismatch { expected, found } => {
                write!(f, "puzzle board has {found} cells, expected {expected}")
            }
            Self::TileOutOfRange { tile, len } => {
                write!(f, "tile {tile} is outside 0..{len}")
            }
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::JaggedGrid {
                row,
                expected,
                found,
            } => write!(f, "grid row {row} has {found} columns, expected {expected}"),
            Self::InvalidMazeCell { row, col, value } => {
                write!(f, "maze cell ({row}, {col}) is {value}, must be 0 or 1")
            }
            Self::PositionOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "position ({row}, {col}) is outside a {rows}x{cols} grid"),
        }
    }
}

impl std::error::Error for WorldError {}
