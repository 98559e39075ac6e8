//! Rover state and its movement primitives.

use crate::position::{Heading, Position};
use serde::{Deserialize, Serialize};

/// The mutable state carried by a rover.
///
/// `position` and `heading` only mean something once the rover has landed.
/// Movement and rotation primitives are unconditional: safety checks and the
/// landed precondition are enforced by [`Rover`](crate::Rover) before it gets
/// here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    landed: bool,
    stopped: bool,
    position: Position,
    heading: Heading,
}

impl RoverState {
    /// Creates an unlanded state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the rover at `position` facing `heading`, clearing `stopped`.
    ///
    /// Landing again re-initialises the state.
    pub fn land(&mut self, position: Position, heading: Heading) {
        self.position = position;
        self.heading = heading;
        self.landed = true;
        self.stopped = false;
    }

    /// True once [`land`](Self::land) has been called.
    pub fn has_landed(&self) -> bool {
        self.landed
    }

    /// True if the most recently processed command failed.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Records the outcome of the last processed command.
    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    /// Current cell. Meaningful only after landing.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading. Meaningful only after landing.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// The cell one step ahead along the current heading, or `None` at the
    /// edge of the grid.
    pub fn forward_target(&self) -> Option<Position> {
        self.position.checked_offset(self.heading.delta())
    }

    /// The cell one step behind the current heading, or `None` at the edge of
    /// the grid.
    pub fn backward_target(&self) -> Option<Position> {
        self.position.checked_offset(-self.heading.delta())
    }

    /// Steps forward. A no-op when the target is past the grid edge.
    pub fn move_forward(&mut self) {
        if let Some(target) = self.forward_target() {
            self.position = target;
        }
    }

    /// Steps backward. A no-op when the target is past the grid edge.
    pub fn move_backward(&mut self) {
        if let Some(target) = self.backward_target() {
            self.position = target;
        }
    }

    /// Quarter turn counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Quarter turn clockwise.
    pub fn rotate_right(&mut self) {
        self.heading = self.heading.right();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landed(x: i64, y: i64, heading: Heading) -> RoverState {
        let mut state = RoverState::new();
        state.land(Position::new(x, y), heading);
        state
    }

    #[test]
    fn starts_unlanded() {
        let state = RoverState::new();
        assert!(!state.has_landed());
        assert!(!state.is_stopped());
    }

    #[test]
    fn lookahead_does_not_move() {
        let state = landed(0, 0, Heading::West);
        assert_eq!(state.forward_target(), Some(Position::new(-1, 0)));
        assert_eq!(state.backward_target(), Some(Position::new(1, 0)));
        assert_eq!(state.position(), Position::ORIGIN);
    }

    #[test]
    fn relanding_resets_stopped_and_pose() {
        let mut state = landed(5, 5, Heading::South);
        state.set_stopped(true);
        state.land(Position::new(-2, 1), Heading::East);
        assert!(state.has_landed());
        assert!(!state.is_stopped());
        assert_eq!(state.position(), Position::new(-2, 1));
        assert_eq!(state.heading(), Heading::East);
    }

    #[test]
    fn edge_of_grid_has_no_target() {
        let mut state = landed(i64::MIN, i64::MAX, Heading::North);
        assert_eq!(state.forward_target(), None);
        assert_eq!(state.backward_target(), Some(Position::new(i64::MIN, i64::MAX - 1)));

        state.move_forward();
        assert_eq!(state.position(), Position::new(i64::MIN, i64::MAX));
    }

    #[test]
    fn backward_mirrors_forward_for_every_heading() {
        for heading in Heading::ALL {
            let mut state = landed(10, -10, heading);
            state.move_backward();
            assert_eq!(Some(state.position()), landed(10, -10, heading).backward_target());
            state.move_forward();
            assert_eq!(state.position(), Position::new(10, -10));
        }
    }
}
