//! Host-facing game session boundary
//!
//! The host engine owns bodies, rendering, and input; this side owns the
//! immutable layout and the win signal. The host reports the ball's bounding
//! rectangle whenever it moves and registers a [`GoalObserver`] to hear
//! about the win, which fires exactly once per session.

use glam::Vec2;

use crate::maze::MazeLayout;

/// Callback interface for the win condition. Registered once by the host;
/// what happens on a win (gravity flip, wall release, fanfare) is the
/// host's business.
pub trait GoalObserver {
    fn on_goal_reached(&mut self);
}

/// Blanket impl so a closure can serve as the observer.
impl<F: FnMut()> GoalObserver for F {
    fn on_goal_reached(&mut self) {
        self()
    }
}

/// One play-through of a generated maze: the frozen geometry plus the
/// latched win state.
pub struct Session<O: GoalObserver> {
    layout: MazeLayout,
    observer: O,
    won: bool,
}

impl<O: GoalObserver> Session<O> {
    pub fn new(layout: MazeLayout, observer: O) -> Self {
        Self {
            layout,
            observer,
            won: false,
        }
    }

    /// The geometry the host should instantiate. Never changes after
    /// construction.
    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Report the ball's current center. Overlap between the ball's
    /// bounding rectangle and the goal rectangle latches the win and
    /// notifies the observer; later overlaps are ignored.
    pub fn ball_moved(&mut self, center: Vec2) -> bool {
        if self.won {
            return false;
        }
        let half = Vec2::splat(self.layout.ball.radius);
        let goal = &self.layout.goal;
        let hit = (center - half).cmple(goal.max()).all()
            && goal.min().cmple(center + half).all();
        if !hit {
            return false;
        }
        self.won = true;
        log::info!("goal reached at ({:.1}, {:.1})", center.x, center.y);
        self.observer.on_goal_reached();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generate;
    use crate::settings::MazeSettings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::cell::Cell as StdCell;

    fn test_layout() -> MazeLayout {
        let settings = MazeSettings::with_cells(4, 4);
        let maze = generate(4, 4, &mut Pcg32::seed_from_u64(11)).unwrap();
        crate::maze::layout(&maze, &settings)
    }

    #[test]
    fn test_win_fires_exactly_once() {
        let layout = test_layout();
        let goal_center = layout.goal.center;

        let wins = StdCell::new(0u32);
        let mut session = Session::new(layout, || wins.set(wins.get() + 1));

        // Far from the goal: nothing
        assert!(!session.ball_moved(Vec2::new(30.0, 30.0)));
        assert!(!session.won());
        assert_eq!(wins.get(), 0);

        // On the goal: one win
        assert!(session.ball_moved(goal_center));
        assert!(session.won());
        assert_eq!(wins.get(), 1);

        // Lingering on the goal: still one win
        assert!(!session.ball_moved(goal_center));
        assert_eq!(wins.get(), 1);
    }

    #[test]
    fn test_near_miss_does_not_win() {
        let layout = test_layout();
        let goal = layout.goal;
        let radius = layout.ball.radius;

        let mut session = Session::new(layout, || panic!("should not win"));

        // Just outside the goal's left edge, past the ball's own extent
        let miss = Vec2::new(goal.min().x - radius - 1.0, goal.center.y);
        assert!(!session.ball_moved(miss));
        assert!(!session.won());
    }
}
