//! Obstacle sensor capability.
//!
//! The rover never inspects terrain itself. Before committing a move it asks
//! every registered [`Sensor`] whether the destination cell is safe; a single
//! refusal is enough to block the move.

use crate::position::Position;
use std::collections::HashSet;

/// Answers whether a grid cell is safe to enter.
///
/// Implementations must be free of observable side effects: one command can
/// query the same sensor several times. Sensors are shared between rovers, so
/// they must be `Send + Sync`.
pub trait Sensor: Send + Sync {
    /// True if the cell at `(x, y)` may be entered. Defaults to `true`.
    fn is_safe(&self, _x: i64, _y: i64) -> bool {
        true
    }
}

/// A sensor that certifies every cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSensor;

impl Sensor for NullSensor {}

impl<F> Sensor for F
where
    F: Fn(i64, i64) -> bool + Send + Sync,
{
    fn is_safe(&self, x: i64, y: i64) -> bool {
        self(x, y)
    }
}

/// Reports a fixed set of cells as unsafe.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSensor {
    blocked: HashSet<Position>,
}

impl ObstacleSensor {
    /// Creates a sensor that refuses every cell in `cells`.
    pub fn new(cells: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self {
            blocked: cells.into_iter().map(Position::from).collect(),
        }
    }

    /// Marks one more cell as unsafe.
    pub fn block(&mut self, cell: Position) {
        self.blocked.insert(cell);
    }

    /// Number of distinct blocked cells.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// True if no cell is blocked.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}

impl Sensor for ObstacleSensor {
    fn is_safe(&self, x: i64, y: i64) -> bool {
        !self.blocked.contains(&Position::new(x, y))
    }
}
