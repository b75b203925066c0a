//! Grid navigation: mazes and weighted terrain.
//!
//! A [`Grid`] is a rectangle of non-negative cell values where `0` is
//! impassable. A [`Navigator`] is a position on a shared grid; it moves up,
//! down, left or right into any passable cell. In a maze every step costs 1
//! and cells are restricted to 0/1. On terrain the cost of a step is the
//! value of the cell entered.

use std::fmt;
use std::rc::Rc;

use lodestar_search::{Cost, Heuristic, SearchNode};

use crate::contract::{SearchWorld, WorldError};

/// Cell value of an impassable cell.
pub const WALL: u32 = 0;

/// Immutable rectangular grid shared by every navigator on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<u32>>,
    cols: usize,
}

impl Grid {
    /// Wrap `cells` after checking it is a non-empty rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyGrid`] or [`WorldError::JaggedGrid`].
    pub fn new(cells: Vec<Vec<u32>>) -> Result<Rc<Self>, WorldError> {
        let cols = cells.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(WorldError::EmptyGrid);
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(WorldError::JaggedGrid {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Rc::new(Self { cells, cols }))
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// First cell that is neither 0 nor 1.
    fn check_maze_cells(&self) -> Result<(), WorldError> {
        for (row, cells) in self.cells.iter().enumerate() {
            if let Some((col, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > 1) {
                return Err(WorldError::InvalidMazeCell { row, col, value });
            }
        }
        Ok(())
    }

    fn check_position(&self, row: usize, col: usize) -> Result<(), WorldError> {
        if row < self.rows() && col < self.cols {
            Ok(())
        } else {
            Err(WorldError::PositionOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols,
            })
        }
    }
}

/// How step costs are read from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Unit step cost, 0/1 cells.
    Maze,
    /// Step cost is the value of the cell entered.
    Terrain,
}

impl NavigationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Maze => "maze",
            Self::Terrain => "terrain",
        }
    }
}

/// A position on a grid. Identity is the `(row, col)` pair alone.
#[derive(Debug, Clone)]
pub struct Navigator {
    grid: Rc<Grid>,
    kind: NavigationKind,
    position: (usize, usize),
}

impl Navigator {
    /// Place a navigator at `(row, col)`.
    ///
    /// The start cell itself may be a wall; only moves are restricted to
    /// passable cells.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PositionOutOfBounds`] if the position is
    /// outside the grid, or [`WorldError::InvalidMazeCell`] if `kind` is
    /// [`NavigationKind::Maze`] and the grid holds a value above 1.
    pub fn new(
        grid: &Rc<Grid>,
        kind: NavigationKind,
        row: usize,
        col: usize,
    ) -> Result<Self, WorldError> {
        grid.check_position(row, col)?;
        if kind == NavigationKind::Maze {
            grid.check_maze_cells()?;
        }
        Ok(Self {
            grid: Rc::clone(grid),
            kind,
            position: (row, col),
        })
    }

    /// Shorthand for [`Navigator::new`] with [`NavigationKind::Maze`].
    ///
    /// # Errors
    ///
    /// See [`Navigator::new`].
    pub fn maze(grid: &Rc<Grid>, row: usize, col: usize) -> Result<Self, WorldError> {
        Self::new(grid, NavigationKind::Maze, row, col)
    }

    /// Shorthand for [`Navigator::new`] with [`NavigationKind::Terrain`].
    ///
    /// # Errors
    ///
    /// See [`Navigator::new`].
    pub fn terrain(grid: &Rc<Grid>, row: usize, col: usize) -> Result<Self, WorldError> {
        Self::new(grid, NavigationKind::Terrain, row, col)
    }

    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> NavigationKind {
        self.kind
    }

    #[must_use]
    pub fn grid(&self) -> &Rc<Grid> {
        &self.grid
    }

    fn moved_to(&self, row: usize, col: usize) -> Self {
        Self {
            grid: Rc::clone(&self.grid),
            kind: self.kind,
            position: (row, col),
        }
    }

    fn passable(&self, row: usize, col: usize) -> bool {
        self.grid.cell(row, col).is_some_and(|value| value != WALL)
    }
}

impl SearchNode for Navigator {
    type State = (usize, usize);

    fn state(&self) -> &(usize, usize) {
        &self.position
    }

    /// Moves in the order up, down, left, right.
    fn successors(&self) -> Vec<Self> {
        let (row, col) = self.position;
        let mut moves = Vec::with_capacity(4);
        if let Some(up) = row.checked_sub(1) {
            moves.push((up, col));
        }
        moves.push((row + 1, col));
        if let Some(left) = col.checked_sub(1) {
            moves.push((row, left));
        }
        moves.push((row, col + 1));

        moves
            .into_iter()
            .filter(|&(r, c)| self.passable(r, c))
            .map(|(r, c)| self.moved_to(r, c))
            .collect()
    }

    fn dist_from_parent(&self) -> Cost {
        match self.kind {
            NavigationKind::Maze => 1,
            NavigationKind::Terrain => {
                let (row, col) = self.position;
                Cost::from(self.grid.cell(row, col).unwrap_or(WALL))
            }
        }
    }
}

impl SearchWorld for Navigator {
    fn world_id(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// The grid with `*` at the current position, cells separated by spaces.
impl fmt::Display for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if (row, col) == self.position {
                    f.write_str("*")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

/// `|Δrow| + |Δcol|` to a bound goal position.
#[derive(Debug, Clone, Copy)]
pub struct NavigationManhattan {
    goal: (usize, usize),
}

impl NavigationManhattan {
    #[must_use]
    pub fn new(goal: &Navigator) -> Self {
        Self {
            goal: goal.position,
        }
    }
}

impl Heuristic<Navigator> for NavigationManhattan {
    fn estimate(&self, node: &Navigator, _goal: &Navigator) -> Cost {
        let (row, col) = node.position;
        (row.abs_diff(self.goal.0) + col.abs_diff(self.goal.1)) as Cost
    }
}
