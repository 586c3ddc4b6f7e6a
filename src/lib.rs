//! Mazeball - perfect-maze generation for a top-down navigation game
//!
//! Core modules:
//! - `maze`: Deterministic maze core (grid model, generator, wall layout)
//! - `session`: Host-facing boundary (geometry hand-off, win signal)
//! - `settings`: Board configuration and sizing knobs

pub mod maze;
pub mod session;
pub mod settings;

pub use maze::{BallSpawn, MazeError, MazeGrid, MazeLayout, Rect, RectKind, generate, layout};
pub use session::{GoalObserver, Session};
pub use settings::MazeSettings;

/// Board configuration constants
pub mod consts {
    /// Default cells per side of the board
    pub const DEFAULT_CELLS: usize = 10;

    /// Play area dimensions in world units
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Wall thickness in world units
    pub const DEFAULT_WALL_THICKNESS: f32 = 3.0;

    /// Goal rectangle size as a fraction of one cell
    pub const DEFAULT_GOAL_FRACTION: f32 = 0.7;

    /// Ball radius = smaller cell dimension / this
    pub const DEFAULT_SPAWN_RADIUS_DIVISOR: f32 = 4.0;
}
