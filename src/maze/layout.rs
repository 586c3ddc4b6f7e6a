//! Geometry translation: maze topology to placeable rectangles
//!
//! Pure and deterministic: the same grid and settings always produce the
//! same placement list. The host engine turns these rectangles into static
//! bodies; nothing here knows about physics or rendering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::MazeGrid;
use crate::settings::MazeSettings;

/// What a placed rectangle is for. The host's collision observer matches
/// on this tag to detect the ball reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectKind {
    /// Interior maze wall (a closed edge between two cells)
    Wall,
    /// One of the four perimeter walls
    Border,
    /// The goal marker in the far corner cell
    Goal,
}

/// An axis-aligned rectangle in world coordinates, center + full size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
    pub kind: RectKind,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2, kind: RectKind) -> Self {
        Self { center, size, kind }
    }

    /// Lower-left corner.
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Upper-right corner.
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    /// Axis-aligned overlap test, touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }
}

/// Where the ball enters the world: the near-corner cell center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub pos: Vec2,
    pub radius: f32,
}

/// The full placement list handed to the host once generation finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeLayout {
    /// Interior walls followed by the four borders
    pub walls: Vec<Rect>,
    pub goal: Rect,
    pub ball: BallSpawn,
}

/// Translate a finished maze into wall geometry.
///
/// Every closed edge becomes exactly one wall rectangle sitting on the
/// boundary between its two cells; the perimeter gets four border walls of
/// its own since the outer boundary has no grid entry. The goal lands in
/// the far corner cell and the ball spawns in the near corner.
pub fn layout(maze: &MazeGrid, settings: &MazeSettings) -> MazeLayout {
    let unit_w = settings.unit_width();
    let unit_h = settings.unit_height();
    let thickness = settings.wall_thickness;

    let mut walls = Vec::new();

    // Closed horizontal edges: walls between row r and row r + 1
    for row in 0..maze.rows() - 1 {
        for col in 0..maze.cols() {
            if maze.horizontal_open(row, col) {
                continue;
            }
            walls.push(Rect::new(
                Vec2::new(
                    unit_w * col as f32 + unit_w / 2.0,
                    unit_h * row as f32 + unit_h,
                ),
                Vec2::new(unit_w, thickness),
                RectKind::Wall,
            ));
        }
    }

    // Closed vertical edges: walls between column c and column c + 1
    for row in 0..maze.rows() {
        for col in 0..maze.cols() - 1 {
            if maze.vertical_open(row, col) {
                continue;
            }
            walls.push(Rect::new(
                Vec2::new(
                    unit_w * col as f32 + unit_w,
                    unit_h * row as f32 + unit_h / 2.0,
                ),
                Vec2::new(thickness, unit_h),
                RectKind::Wall,
            ));
        }
    }

    let (w, h) = (settings.width, settings.height);
    walls.extend([
        Rect::new(Vec2::new(w / 2.0, 0.0), Vec2::new(w, thickness), RectKind::Border), // top
        Rect::new(Vec2::new(w / 2.0, h), Vec2::new(w, thickness), RectKind::Border), // bottom
        Rect::new(Vec2::new(0.0, h / 2.0), Vec2::new(thickness, h), RectKind::Border), // left
        Rect::new(Vec2::new(w, h / 2.0), Vec2::new(thickness, h), RectKind::Border), // right
    ]);

    let goal = Rect::new(
        Vec2::new(
            unit_w * (maze.cols() - 1) as f32 + unit_w / 2.0,
            unit_h * (maze.rows() - 1) as f32 + unit_h / 2.0,
        ),
        Vec2::new(unit_w, unit_h) * settings.goal_fraction,
        RectKind::Goal,
    );

    let ball = BallSpawn {
        pos: Vec2::new(unit_w / 2.0, unit_h / 2.0),
        radius: unit_w.min(unit_h) / settings.spawn_radius_divisor,
    };

    MazeLayout { walls, goal, ball }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generate;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn default_layout(rows: usize, cols: usize, seed: u64) -> (MazeSettings, MazeLayout) {
        let settings = MazeSettings::with_cells(rows, cols);
        let maze = generate(rows, cols, &mut Pcg32::seed_from_u64(seed)).unwrap();
        let layout = layout(&maze, &settings);
        (settings, layout)
    }

    #[test]
    fn test_interior_wall_count_matches_closed_edges() {
        let (rows, cols) = (6, 8);
        let (_, layout) = default_layout(rows, cols, 42);

        let interior = layout
            .walls
            .iter()
            .filter(|w| w.kind == RectKind::Wall)
            .count();
        let total_edges = rows * (cols - 1) + (rows - 1) * cols;
        let opened = rows * cols - 1;
        assert_eq!(interior, total_edges - opened);

        let borders = layout
            .walls
            .iter()
            .filter(|w| w.kind == RectKind::Border)
            .count();
        assert_eq!(borders, 4);
    }

    #[test]
    fn test_goal_and_spawn_placement() {
        let (settings, layout) = default_layout(10, 10, 7);
        let (unit_w, unit_h) = (settings.unit_width(), settings.unit_height());

        // Goal centered in the far corner cell, smaller than the cell
        assert_eq!(
            layout.goal.center,
            Vec2::new(settings.width - unit_w / 2.0, settings.height - unit_h / 2.0)
        );
        assert!(layout.goal.size.x < unit_w);
        assert!(layout.goal.size.y < unit_h);
        assert_eq!(layout.goal.kind, RectKind::Goal);

        // Ball in the near corner cell, strictly smaller than half a cell
        assert_eq!(layout.ball.pos, Vec2::new(unit_w / 2.0, unit_h / 2.0));
        assert!(layout.ball.radius < unit_w.min(unit_h) / 2.0);
    }

    #[test]
    fn test_wall_positions_sit_on_cell_boundaries() {
        let (settings, layout) = default_layout(4, 4, 3);
        let (unit_w, unit_h) = (settings.unit_width(), settings.unit_height());

        for wall in layout.walls.iter().filter(|w| w.kind == RectKind::Wall) {
            if wall.size.x > wall.size.y {
                // Horizontal wall: centered in a column, on a row boundary
                let col = (wall.center.x - unit_w / 2.0) / unit_w;
                let row = wall.center.y / unit_h;
                assert!((col - col.round()).abs() < 1e-4);
                assert!((row - row.round()).abs() < 1e-4);
                assert!(row.round() >= 1.0 && row.round() <= 3.0);
            } else {
                // Vertical wall: on a column boundary, centered in a row
                let col = wall.center.x / unit_w;
                let row = (wall.center.y - unit_h / 2.0) / unit_h;
                assert!((col - col.round()).abs() < 1e-4);
                assert!((row - row.round()).abs() < 1e-4);
                assert!(col.round() >= 1.0 && col.round() <= 3.0);
            }
        }
    }

    #[test]
    fn test_single_cell_layout() {
        let (settings, layout) = default_layout(1, 1, 0);

        let interior = layout
            .walls
            .iter()
            .filter(|w| w.kind == RectKind::Wall)
            .count();
        assert_eq!(interior, 0);
        assert_eq!(layout.walls.len(), 4); // borders only

        // Goal and spawn share the single cell's center
        let center = Vec2::new(settings.width / 2.0, settings.height / 2.0);
        assert_eq!(layout.goal.center, center);
        assert_eq!(layout.ball.pos, center);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0), RectKind::Wall);
        let b = Rect::new(Vec2::new(8.0, 0.0), Vec2::splat(10.0), RectKind::Goal);
        let c = Rect::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0), RectKind::Goal);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));

        // Touching edges count
        let d = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0), RectKind::Goal);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let (_, a) = default_layout(5, 5, 123);
        let (_, b) = default_layout(5, 5, 123);
        assert_eq!(a, b);
    }
}
