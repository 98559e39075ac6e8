//! Assembles a [`Rover`] from command bindings and sensors.

use crate::action::Action;
use crate::config::RoverConfig;
use crate::rover::{CommandMap, Rover};
use crate::sensor::Sensor;
use std::sync::Arc;

/// Collects command bindings and sensors before producing a [`Rover`].
///
/// Binding a character twice keeps the last action. No validation is done: a
/// rover without any commands is valid and halts on the first character it
/// receives.
#[derive(Default)]
pub struct RoverBuilder {
    commands: CommandMap,
    sensors: Vec<Arc<dyn Sensor>>,
}

impl RoverBuilder {
    /// Creates a builder with no commands and no sensors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder with every binding in `config`.
    pub fn from_config(config: &RoverConfig) -> Self {
        Self {
            commands: config
                .commands
                .iter()
                .map(|(c, action)| (*c, action.clone()))
                .collect(),
            sensors: Vec::new(),
        }
    }

    /// Binds `f`, `b`, `l` and `r` to the four primitive actions.
    pub fn with_standard_commands(mut self) -> Self {
        for (c, action) in RoverConfig::default().commands {
            self.commands.insert(c, action);
        }
        self
    }

    /// Binds `c` to `action`, replacing any earlier binding.
    pub fn program_command(mut self, c: char, action: Action) -> Self {
        self.commands.insert(c, action);
        self
    }

    /// Registers a sensor owned by this rover.
    pub fn add_sensor(self, sensor: impl Sensor + 'static) -> Self {
        self.add_shared_sensor(Arc::new(sensor))
    }

    /// Registers a sensor that may also be held by other rovers.
    pub fn add_shared_sensor(mut self, sensor: Arc<dyn Sensor>) -> Self {
        self.sensors.push(sensor);
        self
    }

    /// Produces an unlanded rover with the accumulated bindings frozen.
    pub fn build(self) -> Rover {
        Rover::new(self.commands, self.sensors)
    }
}
