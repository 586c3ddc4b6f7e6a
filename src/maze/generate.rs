//! Randomized-backtracker maze generation
//!
//! A randomized depth-first spanning-tree search over the implicit grid
//! graph: nodes are cells, edges connect 4-neighbors. The visited guard is
//! what turns plain DFS into backtracking - a cell reached a second way is
//! skipped and its incoming edge stays closed, so the opened edges can never
//! form a cycle.
//!
//! The traversal runs on an explicit stack rather than recursion. Worst-case
//! depth is `rows * cols` (a fully serpentine path), which would overflow the
//! call stack on large grids.

use rand::Rng;

use super::grid::{Cell, Direction, MazeGrid};
use super::shuffle::fisher_yates;
use super::MazeError;

/// One suspended `visit`: a cell, its shuffled moves, and how many have
/// been tried. Pushing a frame stands in for the recursive call; popping
/// stands in for its return.
struct Frame {
    cell: Cell,
    moves: [Direction; 4],
    cursor: usize,
}

impl Frame {
    fn new<R: Rng>(cell: Cell, rng: &mut R) -> Self {
        let mut moves = Direction::ALL;
        fisher_yates(&mut moves, rng);
        Self {
            cell,
            moves,
            cursor: 0,
        }
    }
}

/// Carve a perfect maze over a `rows x cols` grid.
///
/// Picks a uniformly random start cell, then walks the grid depth-first in
/// shuffled neighbor order, opening the edge into each newly visited cell.
/// The returned grid is a spanning tree: every cell visited, exactly
/// `rows * cols - 1` edges open, all cells mutually reachable.
///
/// The caller owns the RNG, so replaying a seeded generator reproduces the
/// maze bit for bit. Fails only on zero dimensions, before any allocation.
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<MazeGrid, MazeError> {
    let mut grid = MazeGrid::new(rows, cols)?;

    let start = (rng.random_range(0..rows), rng.random_range(0..cols));
    grid.mark_visited(start);

    let mut stack = vec![Frame::new(start, rng)];
    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.moves.get(frame.cursor) else {
            // Every move tried: this branch dead-ends, resume the parent.
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        let cell = frame.cell;
        let Some(next) = grid.neighbor(cell, dir) else {
            continue;
        };
        if grid.is_visited(next) {
            continue;
        }

        grid.open(cell, dir);
        grid.mark_visited(next);
        stack.push(Frame::new(next, rng));
    }

    debug_assert_eq!(grid.open_edge_count(), rows * cols - 1);
    Ok(grid)
}
