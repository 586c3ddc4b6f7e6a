//! Board and layout configuration
//!
//! The fractions here (goal size, spawn radius) are deliberately tunable
//! rather than fixed constants; different builds of the original game used
//! different ratios and none is canonical.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::maze::MazeError;

/// Everything the maze core needs to know about the board: grid shape,
/// world-space size, and the wall/goal/spawn sizing knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeSettings {
    /// Vertical cell count
    pub rows: usize,
    /// Horizontal cell count
    pub cols: usize,
    /// Play area width in world units
    pub width: f32,
    /// Play area height in world units
    pub height: f32,
    /// Thickness of every emitted wall, interior and border
    pub wall_thickness: f32,
    /// Goal rectangle size as a fraction of one cell (kept below 1.0 so
    /// the goal never touches the surrounding walls)
    pub goal_fraction: f32,
    /// Ball radius = smaller cell dimension / this divisor (kept above 2.0
    /// so the ball always fits through a corridor)
    pub spawn_radius_divisor: f32,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_CELLS,
            cols: DEFAULT_CELLS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            goal_fraction: DEFAULT_GOAL_FRACTION,
            spawn_radius_divisor: DEFAULT_SPAWN_RADIUS_DIVISOR,
        }
    }
}

impl MazeSettings {
    /// Board with the given grid shape and the default world size and knobs.
    pub fn with_cells(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Width of one cell in world units.
    pub fn unit_width(&self) -> f32 {
        self.width / self.cols as f32
    }

    /// Height of one cell in world units.
    pub fn unit_height(&self) -> f32 {
        self.height / self.rows as f32
    }

    /// Fail fast on configurations the core cannot lay out.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
            ("goal_fraction", self.goal_fraction),
        ] {
            if value <= 0.0 {
                return Err(MazeError::InvalidExtent { name, value });
            }
        }
        // The goal must stay strictly inside its cell
        if self.goal_fraction >= 1.0 {
            return Err(MazeError::InvalidExtent {
                name: "goal_fraction",
                value: self.goal_fraction,
            });
        }
        // Divisor must leave the ball strictly inside half a cell
        if self.spawn_radius_divisor <= 2.0 {
            return Err(MazeError::InvalidExtent {
                name: "spawn_radius_divisor",
                value: self.spawn_radius_divisor,
            });
        }
        Ok(())
    }
}
