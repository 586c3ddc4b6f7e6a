//! Deterministic maze core
//!
//! All maze logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, threaded in by the caller
//! - The grid model is owned by one generation run and immutable afterwards
//! - No rendering or platform dependencies

pub mod generate;
pub mod grid;
pub mod layout;
pub mod shuffle;

pub use generate::generate;
pub use grid::{Cell, Direction, MazeGrid};
pub use layout::{BallSpawn, MazeLayout, Rect, RectKind, layout};
pub use shuffle::fisher_yates;

use thiserror::Error;

/// Errors surfaced by maze construction. All are caller configuration
/// mistakes, reported before any grid allocation and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MazeError {
    /// Zero rows or columns requested
    #[error("maze dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    /// A world-space extent (width, height, wall thickness) was not positive
    #[error("{name} must be positive, got {value}")]
    InvalidExtent { name: &'static str, value: f32 },
}
