//! Edge (boundary) policies for neighbour resolution.

use crate::error::SpaceError;
use std::fmt;
use std::str::FromStr;

/// How neighbour offsets that leave the grid are resolved.
///
/// # Examples
///
/// ```
/// use cellsoc_space::{resolve, EdgeBehavior, GridDims, NeighbourSpec};
///
/// let dims = GridDims::new(4, 4).unwrap();
///
/// // Absorb: corner has 2 orthogonal neighbours, interior has 4.
/// let absorb = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
/// assert_eq!(resolve(dims, 0, 0, &absorb).unwrap().len(), 2);
/// assert_eq!(resolve(dims, 1, 1, &absorb).unwrap().len(), 4);
///
/// // Wrap: all cells have exactly 4 (torus).
/// let wrap = NeighbourSpec::orthogonal(EdgeBehavior::Wrap);
/// assert_eq!(resolve(dims, 0, 0, &wrap).unwrap().len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is mirrored back across the border.
    Reflect,
}

impl EdgeBehavior {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            EdgeBehavior::Absorb => "Absorb",
            EdgeBehavior::Wrap => "Wrap",
            EdgeBehavior::Reflect => "Reflect",
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeBehavior {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absorb" | "bounded" | "finite" => Ok(EdgeBehavior::Absorb),
            "wrap" | "toroidal" | "torus" => Ok(EdgeBehavior::Wrap),
            "reflect" | "reflecting" => Ok(EdgeBehavior::Reflect),
            _ => Err(SpaceError::InvalidTopology {
                reason: format!("unknown edge policy '{}'", s.trim()),
            }),
        }
    }
}
