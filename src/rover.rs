//! The rover: a command alphabet, a sensor array and the state they drive.
//!
//! The entry point is [`Rover`], produced by a [`RoverBuilder`](crate::RoverBuilder).
//! Land it with [`Rover::land`], then feed it command strings through
//! [`Rover::execute`].
//!
//! # Execution protocol
//!
//! Each character is looked up in the alphabet and its [`Action`] is run:
//! - A bound command sets `stopped` to the negation of its outcome, so the flag
//!   only ever reflects the most recently processed command. A blocked move
//!   does not abort the rest of the string.
//! - An unbound character sets `stopped` and abandons the remaining input.

use crate::action::Action;
use crate::error::{Result, RoverError};
use crate::position::{Heading, Position};
use crate::sensor::Sensor;
use crate::state::RoverState;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Mapping from command character to the action it triggers.
pub type CommandMap = HashMap<char, Action>;

/// A snapshot of what the rover can report about itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoverStatus {
    /// The rover has never landed.
    Unknown,
    /// The rover is on the ground at `position` facing `heading`; `stopped`
    /// reports whether the last processed command failed.
    Landed {
        position: Position,
        heading: Heading,
        stopped: bool,
    },
}

impl fmt::Display for RoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoverStatus::Unknown => f.write_str("unknown"),
            RoverStatus::Landed {
                position,
                heading,
                stopped,
            } => {
                write!(f, "{position} {heading}")?;
                if *stopped {
                    f.write_str(" stopped")?;
                }
                Ok(())
            }
        }
    }
}

/// A rover with a frozen command alphabet and sensor array.
#[derive(Clone)]
pub struct Rover {
    commands: Arc<CommandMap>,
    sensors: Vec<Arc<dyn Sensor>>,
    state: RoverState,
}

impl Rover {
    pub(crate) fn new(commands: CommandMap, sensors: Vec<Arc<dyn Sensor>>) -> Self {
        Self {
            commands: Arc::new(commands),
            sensors,
            state: RoverState::new(),
        }
    }

    /// Lands (or re-lands) the rover at `position` facing `heading`.
    pub fn land(&mut self, position: Position, heading: Heading) {
        debug!("landing at {position} facing {heading}");
        self.state.land(position, heading);
    }

    /// Runs `commands` one character at a time.
    ///
    /// Fails with [`RoverError::NotLanded`] before touching any state if the
    /// rover has not landed. See the module docs for how `stopped` evolves.
    pub fn execute(&mut self, commands: &str) -> Result<()> {
        if !self.state.has_landed() {
            return Err(RoverError::NotLanded);
        }

        // The alphabet never changes after build; holding our own handle lets
        // actions borrow the rover mutably.
        let alphabet = Arc::clone(&self.commands);
        for c in commands.chars() {
            let Some(action) = alphabet.get(&c) else {
                warn!("unknown command {c:?}, halting at {}", self.state.position());
                self.state.set_stopped(true);
                return Ok(());
            };

            let ok = action.execute(self);
            trace!("command {c:?} -> {}", if ok { "ok" } else { "blocked" });
            self.state.set_stopped(!ok);
        }
        Ok(())
    }

    /// Runs a single action outside of a command string.
    ///
    /// Returns whether the action succeeded. Unlike [`execute`](Self::execute)
    /// this leaves the `stopped` flag alone.
    pub fn apply(&mut self, action: &Action) -> Result<bool> {
        if !self.state.has_landed() {
            return Err(RoverError::NotLanded);
        }
        Ok(action.execute(self))
    }

    /// True if any sensor refuses to certify `position` as safe.
    pub fn is_danger(&self, position: Position) -> bool {
        self.sensors
            .iter()
            .any(|sensor| !sensor.is_safe(position.x, position.y))
    }

    /// Read-only view of the rover's state.
    pub fn state(&self) -> &RoverState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut RoverState {
        &mut self.state
    }

    /// The frozen command alphabet.
    pub fn commands(&self) -> &CommandMap {
        &self.commands
    }

    /// Number of registered sensors.
    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Reports the rover's pose, or [`RoverStatus::Unknown`] before landing.
    pub fn status(&self) -> RoverStatus {
        if !self.state.has_landed() {
            return RoverStatus::Unknown;
        }
        RoverStatus::Landed {
            position: self.state.position(),
            heading: self.state.heading(),
            stopped: self.state.is_stopped(),
        }
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status(), f)
    }
}

impl fmt::Debug for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover")
            .field("commands", &self.commands)
            .field("sensors", &self.sensors.len())
            .field("state", &self.state)
            .finish()
    }
}
