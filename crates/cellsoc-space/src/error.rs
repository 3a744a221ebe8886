//! Error types for topology construction and neighbour lookups.

use std::fmt;

/// Errors arising from topology construction or neighbour queries.
///
/// All variants are configuration-class: they are raised while a grid is
/// being built, before any step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// The shape, edge policy or offset selection cannot form a topology.
    InvalidTopology {
        /// What went wrong.
        reason: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum allowed size.
        max: u32,
    },
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// Row of the offending coordinate.
        row: u32,
        /// Column of the offending coordinate.
        col: u32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTopology { reason } => write!(f, "invalid topology: {reason}"),
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CoordOutOfBounds { row, col, bounds } => {
                write!(f, "coordinate ({row}, {col}) out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
