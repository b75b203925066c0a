//! `NPuzzle`: square sliding-tile puzzle with `0` as the blank.
//!
//! The board is stored row-major. A move slides the blank one cell left,
//! right, up or down; every move costs 1. Two boards are the same search
//! state when their tile sequences are equal.

use std::fmt;

use lodestar_search::{Cost, Heuristic, SearchNode};

use crate::contract::{SearchWorld, WorldError};

/// Tile value of the blank.
pub const BLANK: u16 = 0;

/// A sliding-tile board of side `width` (board length `width * width`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NPuzzle {
    board: Vec<u16>,
    width: usize,
    blank: usize,
}

impl NPuzzle {
    /// Build a board of any square size from at least 4 cells.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the length is below 4 or not a perfect
    /// square, or if the board is not a permutation of `0..len`.
    pub fn new(board: Vec<u16>) -> Result<Self, WorldError> {
        let len = board.len();
        if len < 4 {
            return Err(WorldError::BoardTooSmall { len });
        }
        let width = integer_sqrt(len);
        if width * width != len {
            return Err(WorldError::BoardNotSquare { len });
        }

        let mut seen = vec![false; len];
        let mut blank = 0;
        for (index, &tile) in board.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(WorldError::TileOutOfRange { tile, len })?;
            if *slot {
                return Err(WorldError::DuplicateTile { tile });
            }
            *slot = true;
            if tile == BLANK {
                blank = index;
            }
        }

        Ok(Self {
            board,
            width,
            blank,
        })
    }

    /// 2x2 board.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BoardSizeMismatch`] unless `board` has 4 cells,
    /// or any error of [`NPuzzle::new`].
    pub fn three_puzzle(board: &[u16]) -> Result<Self, WorldError> {
        Self::with_len(board, 4)
    }

    /// 3x3 board.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BoardSizeMismatch`] unless `board` has 9 cells,
    /// or any error of [`NPuzzle::new`].
    pub fn eight_puzzle(board: &[u16]) -> Result<Self, WorldError> {
        Self::with_len(board, 9)
    }

    fn with_len(board: &[u16], expected: usize) -> Result<Self, WorldError> {
        if board.len() != expected {
            return Err(WorldError::BoardSizeMismatch {
                expected,
                found: board.len(),
            });
        }
        Self::new(board.to_vec())
    }

    /// Tiles in row-major order.
    #[must_use]
    pub fn board(&self) -> &[u16] {
        &self.board
    }

    /// Side length.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Index of the blank in [`NPuzzle::board`].
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Check that `other` has the same board size.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BoardSizeMismatch`] otherwise.
    pub fn check_same_size(&self, other: &Self) -> Result<(), WorldError> {
        if self.board.len() == other.board.len() {
            Ok(())
        } else {
            Err(WorldError::BoardSizeMismatch {
                expected: self.board.len(),
                found: other.board.len(),
            })
        }
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// Every move swaps the blank with a neighbour: it flips the parity of
    /// the board permutation and shifts the blank by one cell. A board can
    /// therefore reach `goal` exactly when the parity of the permutation
    /// between them equals the parity of the blank's Manhattan distance.
    /// Boards of different sizes are never reachable.
    #[must_use]
    pub fn is_solvable_towards(&self, goal: &Self) -> bool {
        if self.check_same_size(goal).is_err() {
            return false;
        }

        let mut goal_index = vec![0; self.board.len()];
        for (index, &tile) in goal.board.iter().enumerate() {
            goal_index[usize::from(tile)] = index;
        }
        let permutation: Vec<usize> = self
            .board
            .iter()
            .map(|&tile| goal_index[usize::from(tile)])
            .collect();

        let odd_permutation = (permutation.len() - cycle_count(&permutation)) % 2 == 1;
        let (row, col) = self.coordinates(self.blank);
        let (goal_row, goal_col) = self.coordinates(goal.blank);
        let odd_blank_distance = (row.abs_diff(goal_row) + col.abs_diff(goal_col)) % 2 == 1;

        odd_permutation == odd_blank_distance
    }

    fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Board with the blank swapped into `target`.
    fn slide(&self, target: usize) -> Self {
        let mut board = self.board.clone();
        board.swap(self.blank, target);
        Self {
            board,
            width: self.width,
            blank: target,
        }
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

fn cycle_count(permutation: &[usize]) -> usize {
    let mut visited = vec![false; permutation.len()];
    let mut cycles = 0;
    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            current = permutation[current];
        }
    }
    cycles
}

impl SearchNode for NPuzzle {
    type State = Vec<u16>;

    fn state(&self) -> &Vec<u16> {
        &self.board
    }

    /// Blank moves in the order left, right, up, down.
    fn successors(&self) -> Vec<Self> {
        let (row, col) = self.coordinates(self.blank);
        let mut targets = Vec::with_capacity(4);
        if col > 0 {
            targets.push(self.blank - 1);
        }
        if col + 1 < self.width {
            targets.push(self.blank + 1);
        }
        if row > 0 {
            targets.push(self.blank - self.width);
        }
        if row + 1 < self.width {
            targets.push(self.blank + self.width);
        }
        targets.into_iter().map(|target| self.slide(target)).collect()
    }

    fn dist_from_parent(&self) -> Cost {
        1
    }
}

impl SearchWorld for NPuzzle {
    fn world_id(&self) -> &'static str {
        "npuzzle"
    }
}

/// Rows of tiles separated by spaces, `*` for the blank, one line per row.
impl fmt::Display for NPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(self.width) {
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if tile == BLANK {
                    f.write_str("*")?;
                } else {
                    write!(f, "{tile}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Sum of Manhattan distances of every non-blank tile to its goal cell.
///
/// Bound to its goal at construction; the goal passed by the engine is
/// ignored. Admissible: each move shifts one tile by one cell.
#[derive(Debug, Clone)]
pub struct NPuzzleManhattan {
    goal_cell: Vec<(usize, usize)>,
}

impl NPuzzleManhattan {
    #[must_use]
    pub fn new(goal: &NPuzzle) -> Self {
        let mut goal_cell = vec![(0, 0); goal.board.len()];
        for (index, &tile) in goal.board.iter().enumerate() {
            goal_cell[usize::from(tile)] = goal.coordinates(index);
        }
        Self { goal_cell }
    }

    /// Distance of `board` from the bound goal.
    ///
    /// # Panics
    ///
    /// Panics if `board` is larger than the goal board.
    #[must_use]
    pub fn distance(&self, board: &NPuzzle) -> Cost {
        board
            .board
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let (row, col) = board.coordinates(index);
                let (goal_row, goal_col) = self.goal_cell[usize::from(tile)];
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as Cost
            })
            .sum()
    }
}

impl Heuristic<NPuzzle> for NPuzzleManhattan {
    fn estimate(&self, node: &NPuzzle, _goal: &NPuzzle) -> Cost {
        self.distance(node)
    }
}
