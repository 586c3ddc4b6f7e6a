//! Grid model: the three boolean matrices behind a maze
//!
//! A cell is just a `(row, col)` index into the matrices; there is no cell
//! entity. `visited` is monotonic (set once, never cleared) and each opening
//! entry is written at most once, so a finished grid is effectively frozen.

use serde::{Deserialize, Serialize};

use super::MazeError;

/// A cell address as `(row, col)`.
pub type Cell = (usize, usize);

/// The four neighbor moves out of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row/column delta of a single step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// The maze state: `rows x cols` visited flags plus the two opening
/// matrices between adjacent cells.
///
/// `vertical[r][c] == true` means the wall between `(r, c)` and `(r, c+1)`
/// is removed; `horizontal[r][c] == true` means the wall between `(r, c)`
/// and `(r+1, c)` is removed. Both are indexed by the lower-numbered cell
/// of the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    /// rows x cols, row-major
    visited: Vec<bool>,
    /// rows x (cols - 1), row-major
    vertical: Vec<bool>,
    /// (rows - 1) x cols, row-major
    horizontal: Vec<bool>,
}

impl MazeGrid {
    /// Allocate an all-closed, all-unvisited grid. Rejects zero dimensions
    /// before allocating anything.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            visited: vec![false; rows * cols],
            vertical: vec![false; rows * (cols - 1)],
            horizontal: vec![false; (rows - 1) * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_visited(&self, (row, col): Cell) -> bool {
        self.visited[row * self.cols + col]
    }

    /// Monotonic: cells are never un-visited.
    pub fn mark_visited(&mut self, (row, col): Cell) {
        self.visited[row * self.cols + col] = true;
    }

    /// True if the wall between `(row, col)` and `(row, col + 1)` is removed.
    pub fn vertical_open(&self, row: usize, col: usize) -> bool {
        self.vertical[row * (self.cols - 1) + col]
    }

    /// True if the wall between `(row, col)` and `(row + 1, col)` is removed.
    pub fn horizontal_open(&self, row: usize, col: usize) -> bool {
        self.horizontal[row * self.cols + col]
    }

    /// The neighbor of `cell` one step in `dir`, or `None` at the grid edge.
    pub fn neighbor(&self, (row, col): Cell, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        (nr < self.rows && nc < self.cols).then_some((nr, nc))
    }

    /// Remove the wall between `cell` and its neighbor in `dir`.
    ///
    /// The caller must have bounds-checked the move (via [`Self::neighbor`]);
    /// opening toward the grid edge would underflow the opening index.
    pub fn open(&mut self, (row, col): Cell, dir: Direction) {
        let vcols = self.cols - 1;
        match dir {
            Direction::Left => self.vertical[row * vcols + (col - 1)] = true,
            Direction::Right => self.vertical[row * vcols + col] = true,
            Direction::Up => self.horizontal[(row - 1) * self.cols + col] = true,
            Direction::Down => self.horizontal[row * self.cols + col] = true,
        }
    }

    /// True if `cell` connects to its neighbor in `dir` through an opening.
    /// Moves off the grid edge are closed by definition.
    pub fn is_open(&self, (row, col): Cell, dir: Direction) -> bool {
        if self.neighbor((row, col), dir).is_none() {
            return false;
        }
        match dir {
            Direction::Left => self.vertical_open(row, col - 1),
            Direction::Right => self.vertical_open(row, col),
            Direction::Up => self.horizontal_open(row - 1, col),
            Direction::Down => self.horizontal_open(row, col),
        }
    }

    /// Total removed walls. Exactly `rows * cols - 1` for a finished maze.
    pub fn open_edge_count(&self) -> usize {
        let v = self.vertical.iter().filter(|&&open| open).count();
        let h = self.horizontal.iter().filter(|&&open| open).count();
        v + h
    }
}
