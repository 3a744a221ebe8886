//! Tiling shapes and their canonical offset tables.

use crate::error::SpaceError;
use crate::{square, triangle};
use std::fmt;
use std::str::FromStr;

/// Cell shape of the tessellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Square cells, up to 8 neighbours.
    Square,
    /// Alternating up/down triangles, up to 12 neighbours.
    Triangle,
}

impl Shape {
    /// Number of canonical offsets for this shape.
    pub fn offset_count(self) -> usize {
        match self {
            Shape::Square => square::OFFSETS.len(),
            Shape::Triangle => triangle::UP_OFFSETS.len(),
        }
    }

    /// Canonical `(row, col)` offsets for the cell at `(row, col)`.
    ///
    /// Square cells share one table; triangles select theirs by
    /// [`Orientation`](crate::Orientation).
    pub fn offsets(self, row: u32, col: u32) -> &'static [(i32, i32)] {
        match self {
            Shape::Square => &square::OFFSETS,
            Shape::Triangle => triangle::Orientation::of(row, col).offsets(),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Square" | "square" => Ok(Shape::Square),
            "Triangle" | "triangle" => Ok(Shape::Triangle),
            other => Err(SpaceError::InvalidTopology {
                reason: format!("unknown shape '{other}'"),
            }),
        }
    }
}
