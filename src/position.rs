//! Grid coordinates and compass headings.

use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the unbounded integer grid.
///
/// Positions are plain values: lookahead queries build new ones rather than
/// mutating the rover's current cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// The cell `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a position from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate; grows toward East.
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Vertical coordinate; grows toward North.
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the cell reached by stepping `delta` away from this one, or
    /// `None` if it lies past the edge of the `i64` grid.
    pub fn checked_offset(self, delta: I64Vec2) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
        })
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<I64Vec2> for Position {
    fn from(v: I64Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for I64Vec2 {
    fn from(p: Position) -> Self {
        I64Vec2::new(p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The compass direction the rover is facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Heading {
    #[default]
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Every heading, clockwise from North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit step taken when moving forward along this heading.
    pub const fn delta(self) -> I64Vec2 {
        match self {
            Heading::North => I64Vec2::new(0, 1),
            Heading::South => I64Vec2::new(0, -1),
            Heading::East => I64Vec2::new(1, 0),
            Heading::West => I64Vec2::new(-1, 0),
        }
    }

    /// Quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
            Heading::North => Heading::West,
        }
    }

    /// Quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Heading::West => Heading::North,
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
        }
    }

    /// Upper-case compass name, e.g. `NORTH`.
    pub const fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::South => "SOUTH",
            Heading::East => "EAST",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
