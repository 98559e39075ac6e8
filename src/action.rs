//! Commands a rover can carry out.

use crate::position::Position;
use crate::rover::Rover;
use log::debug;
use serde::{Deserialize, Serialize};

/// A unit of work bound to a command character.
///
/// Actions are stateless and hold no reference to a rover, so one alphabet can
/// drive any number of rovers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Step one cell forward if the target cell is safe.
    MoveForward,
    /// Step one cell backward if the target cell is safe.
    MoveBackward,
    /// Quarter turn counter-clockwise. Never blocked.
    RotateLeft,
    /// Quarter turn clockwise. Never blocked.
    RotateRight,
    /// Run each step in order, stopping at the first one that fails.
    Compose(Vec<Action>),
}

impl Action {
    /// Builds a composite action from a sequence of steps.
    pub fn compose(steps: impl IntoIterator<Item = Action>) -> Self {
        Action::Compose(steps.into_iter().collect())
    }

    /// Attempts the action against `rover`, returning whether it succeeded.
    ///
    /// A blocked move leaves the rover untouched, as does a move off the edge
    /// of the `i64` grid. A composite stops at its first failing step, so later
    /// steps never run; an empty composite succeeds.
    ///
    /// The caller must have checked that the rover has landed.
    pub fn execute(&self, rover: &mut Rover) -> bool {
        match self {
            Action::MoveForward => {
                let target = rover.state().forward_target();
                if !is_clear(rover, target) {
                    return false;
                }
                rover.state_mut().move_forward();
                true
            }
            Action::MoveBackward => {
                let target = rover.state().backward_target();
                if !is_clear(rover, target) {
                    return false;
                }
                rover.state_mut().move_backward();
                true
            }
            Action::RotateLeft => {
                rover.state_mut().rotate_left();
                true
            }
            Action::RotateRight => {
                rover.state_mut().rotate_right();
                true
            }
            Action::Compose(steps) => steps.iter().all(|step| step.execute(rover)),
        }
    }
}

/// A target past the edge of the grid counts as dangerous.
fn is_clear(rover: &Rover, target: Option<Position>) -> bool {
    match target {
        Some(cell) if rover.is_danger(cell) => {
            debug!("move to {cell} blocked");
            false
        }
        Some(_) => true,
        None => {
            debug!("move from {} blocked at grid edge", rover.state().position());
            false
        }
    }
}

/// Shorthand for [`Action::MoveForward`].
pub fn move_forward() -> Action {
    Action::MoveForward
}

/// Shorthand for [`Action::MoveBackward`].
pub fn move_backward() -> Action {
    Action::MoveBackward
}

/// Shorthand for [`Action::RotateLeft`].
pub fn rotate_left() -> Action {
    Action::RotateLeft
}

/// Shorthand for [`Action::RotateRight`].
pub fn rotate_right() -> Action {
    Action::RotateRight
}

/// Shorthand for [`Action::compose`].
pub fn compose(steps: impl IntoIterator<Item = Action>) -> Action {
    Action::compose(steps)
}
