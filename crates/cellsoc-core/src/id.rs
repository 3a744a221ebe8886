//! Strongly-typed identifiers.

use std::fmt;

/// Grid position of a cell, `(row, col)`.
///
/// Ordering is row-major, which is also the order in which the engine
/// visits cells during both phases of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// Row index, `0 <= row < rows`.
    pub row: u32,
    /// Column index, `0 <= col < cols`.
    pub col: u32,
}

impl CellPos {
    /// Create a position from a row and a column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Flat row-major index of this position in a grid with `cols` columns.
    pub fn flat_index(self, cols: u32) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn from_flat_index(index: usize, cols: u32) -> Self {
        let cols = cols as usize;
        Self {
            row: (index / cols) as u32,
            col: (index % cols) as u32,
        }
    }
}

impl From<(u32, u32)> for CellPos {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Monotonically increasing step counter.
///
/// Zero after a grid is built; incremented once per completed
/// propose/commit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The step that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_is_row_major() {
        assert_eq!(CellPos::new(0, 0).flat_index(4), 0);
        assert_eq!(CellPos::new(1, 2).flat_index(4), 6);
        assert_eq!(CellPos::from_flat_index(6, 4), CellPos::new(1, 2));
    }

    #[test]
    fn positions_order_row_major() {
        let mut v = vec![CellPos::new(1, 0), CellPos::new(0, 3), CellPos::new(0, 1)];
        v.sort();
        assert_eq!(
            v,
            vec![CellPos::new(0, 1), CellPos::new(0, 3), CellPos::new(1, 0)]
        );
    }

    #[test]
    fn step_id_next() {
        assert_eq!(StepId::default().next(), StepId(1));
        assert_eq!(StepId(41).next().to_string(), "42");
    }
}
