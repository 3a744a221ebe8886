//! Grid dimensions and per-axis edge resolution.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use cellsoc_core::CellPos;

/// Dimensions of a rectangular grid.
///
/// Construction rejects empty grids and axes that do not fit in `i32`,
/// so every coordinate and offset fits in `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    rows: u32,
    cols: u32,
}

impl GridDims {
    /// Maximum dimension size.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create dimensions for a `rows x cols` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Flat row-major index of `pos`, or an error if it lies outside.
    pub fn index_of(self, pos: CellPos) -> Result<usize, SpaceError> {
        if !self.contains(pos.row, pos.col) {
            return Err(SpaceError::CoordOutOfBounds {
                row: pos.row,
                col: pos.col,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            });
        }
        Ok(pos.flat_index(self.cols))
    }

    /// Position of the cell at flat `index`.
    pub fn pos_of(self, index: usize) -> CellPos {
        CellPos::from_flat_index(index, self.cols)
    }

    /// Row-major canonical ordering: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    pub fn canonical_ordering(self) -> impl Iterator<Item = CellPos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| CellPos::new(r, c)))
    }
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` when the slot is omitted.
///
/// Works in `i64` so that mirroring near `MAX_DIM` cannot overflow.
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<u32> {
    let n = i64::from(len);
    let resolved = if (0..n).contains(&val) {
        val
    } else {
        match edge {
            EdgeBehavior::Absorb => return None,
            EdgeBehavior::Wrap => val.rem_euclid(n),
            EdgeBehavior::Reflect => {
                let mirrored = if val < 0 { -val } else { 2 * (n - 1) - val };
                if !(0..n).contains(&mirrored) {
                    return None;
                }
                mirrored
            }
        }
    };
    u32::try_from(resolved).ok()
}
