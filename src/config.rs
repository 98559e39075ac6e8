//! Serializable command alphabets.
//!
//! A [`RoverConfig`] describes which character triggers which [`Action`]. It is
//! usually loaded from JSON:
//!
//! ```
//! use rover_grid::{Action, RoverConfig};
//!
//! let config = RoverConfig::from_json(
//!     r#"{ "commands": { "f": "move_forward", "h": { "compose": ["rotate_left", "rotate_left"] } } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.commands[&'f'], Action::MoveForward);
//! ```

use crate::action::Action;
use crate::error::{Result, RoverError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Command character to action bindings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverConfig {
    #[serde(default)]
    pub commands: BTreeMap<char, Action>,
}

impl Default for RoverConfig {
    /// The conventional alphabet: `f`/`b` move, `l`/`r` rotate.
    fn default() -> Self {
        Self {
            commands: BTreeMap::from([
                ('f', Action::MoveForward),
                ('b', Action::MoveBackward),
                ('l', Action::RotateLeft),
                ('r', Action::RotateRight),
            ]),
        }
    }
}

impl RoverConfig {
    /// A config with no bindings at all.
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Parses a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RoverError::Config(e.to_string()))
    }

    /// Renders the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RoverError::Config(e.to_string()))
    }
}
