//! # rover-grid
//!
//! A command-execution engine for a planetary rover on an unbounded integer grid.
//!
//! A [`Rover`] is built from a command alphabet (character to [`Action`]) and a set of
//! obstacle [`Sensor`]s. Once landed it consumes command strings one character at a
//! time, refusing any move into a cell a sensor reports as unsafe and recording the
//! outcome of the last command in its `stopped` flag.
//!
//! ```
//! use rover_grid::{Heading, ObstacleSensor, Position, RoverBuilder};
//!
//! let mut rover = RoverBuilder::new()
//!     .with_standard_commands()
//!     .add_sensor(ObstacleSensor::new([(0, 2)]))
//!     .build();
//!
//! rover.land(Position::ORIGIN, Heading::North);
//! rover.execute("ff").unwrap();
//!
//! assert_eq!(rover.state().position(), Position::new(0, 1));
//! assert_eq!(rover.to_string(), "(0, 1) NORTH stopped");
//! ```

pub mod action;
pub mod builder;
pub mod config;
pub mod error;
pub mod position;
pub mod rover;
pub mod sensor;
pub mod state;

pub use action::*;
pub use builder::*;
pub use config::*;
pub use error::RoverError;
pub use position::*;
pub use rover::*;
pub use sensor::*;
pub use state::*;
