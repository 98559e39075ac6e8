//! Error types for rover operations.

use thiserror::Error;

/// Errors surfaced by the rover.
///
/// A move blocked by a sensor is not an error: it is an ordinary outcome that
/// shows up in the rover's `stopped` flag.
#[derive(Debug, Error)]
pub enum RoverError {
    /// A command or action was issued before the rover landed.
    #[error("rover has not landed yet")]
    NotLanded,

    /// A command alphabet could not be parsed.
    #[error("invalid rover config: {0}")]
    Config(String),
}

/// Result alias for rover operations.
pub type Result<T> = std::result::Result<T, RoverError>;
