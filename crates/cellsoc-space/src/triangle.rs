//! Triangle tiling: alternating up- and down-pointing cells.
//!
//! Each row alternates orientation along its columns and consecutive rows
//! are offset by one, so the orientation of `(row, col)` is the parity of
//! `row + col`: even points up, odd points down.
//!
//! Both orientation tables share the same index semantics so that an
//! offset selection means the same thing for every cell:
//!
//! | Index | Meaning |
//! |-------|---------|
//! | 0, 1 | left and right edge neighbours |
//! | 2 | vertical edge neighbour (across the base) |
//! | 3, 4 | two columns left and right |
//! | 5..=7 | the three cells on the apex side |
//! | 8..=11 | the four remaining cells on the base side |
//!
//! Indices `0..3` select the three edge-sharing neighbours.

/// Offsets for an up-pointing triangle (base at the bottom).
pub const UP_OFFSETS: [(i32, i32); 12] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (0, -2),
    (0, 2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (1, -2),
    (1, -1),
    (1, 1),
    (1, 2),
];

/// Offsets for a down-pointing triangle (base at the top).
pub const DOWN_OFFSETS: [(i32, i32); 12] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (0, -2),
    (0, 2),
    (1, -1),
    (1, 0),
    (1, 1),
    (-1, -2),
    (-1, -1),
    (-1, 1),
    (-1, 2),
];

/// Offset indices of the three edge-sharing neighbours.
pub const EDGE_SHARING: [usize; 3] = [0, 1, 2];

/// Which way a triangle cell points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Apex up, base shared with the row below.
    Up,
    /// Apex down, base shared with the row above.
    Down,
}

impl Orientation {
    /// Orientation of the triangle at `(row, col)`.
    pub fn of(row: u32, col: u32) -> Self {
        if (row as u64 + col as u64) % 2 == 0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }

    /// Canonical offset table for this orientation.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Orientation::Up => &UP_OFFSETS,
            Orientation::Down => &DOWN_OFFSETS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::{resolve, EdgeBehavior, GridDims, NeighbourSpec, NeighbourTable, Shape, SpaceError};

    fn full(edge: EdgeBehavior) -> NeighbourSpec {
        NeighbourSpec::full(Shape::Triangle, edge)
    }

    fn n(dims: GridDims, r: u32, c: u32, spec: &NeighbourSpec) -> Vec<usize> {
        resolve(dims, r, c, spec).unwrap().into_vec()
    }

    #[test]
    fn orientation_follows_parity() {
        assert_eq!(Orientation::of(0, 0), Orientation::Up);
        assert_eq!(Orientation::of(0, 1), Orientation::Down);
        assert_eq!(Orientation::of(1, 0), Orientation::Down);
        assert_eq!(Orientation::of(2, 2), Orientation::Up);
    }

    #[test]
    fn tables_mirror_each_other_vertically() {
        for (up, down) in UP_OFFSETS.iter().zip(DOWN_OFFSETS.iter()) {
            assert_eq!(up.0, -down.0);
            assert_eq!(up.1, down.1);
        }
    }

    #[test]
    fn tables_contain_no_zero_offset_or_duplicates() {
        for table in [&UP_OFFSETS, &DOWN_OFFSETS] {
            for (i, a) in table.iter().enumerate() {
                assert_ne!(*a, (0, 0));
                assert!(!table[i + 1..].contains(a));
            }
        }
    }

    // Hand-computed 4x4 reference. Flat index = row * 4 + col.
    //
    //   row 0:  ^ v ^ v
    //   row 1:  v ^ v ^
    //   row 2:  ^ v ^ v
    //   row 3:  v ^ v ^

    #[test]
    fn reference_4x4_even_corner() {
        let dims = GridDims::new(4, 4).unwrap();
        // (0,0) up: right (0,1), below (1,0), far-right (0,2), base row (1,1) (1,2)
        assert_eq!(n(dims, 0, 0, &full(EdgeBehavior::Absorb)), vec![1, 4, 2, 5, 6]);
    }

    #[test]
    fn reference_4x4_even_interior() {
        let dims = GridDims::new(4, 4).unwrap();
        // (2,2) up: (2,1) (2,3) (3,2) (2,0) | apex row (1,1) (1,2) (1,3)
        //           | base row (3,0) (3,1) (3,3)
        assert_eq!(
            n(dims, 2, 2, &full(EdgeBehavior::Absorb)),
            vec![9, 11, 14, 8, 5, 6, 7, 12, 13, 15]
        );
    }

    #[test]
    fn reference_4x4_odd_interior() {
        let dims = GridDims::new(4, 4).unwrap();
        // (1,2) down: (1,1) (1,3) (0,2) (1,0) | apex row (2,1) (2,2) (2,3)
        //             | base row (0,0) (0,1) (0,3)
        assert_eq!(
            n(dims, 1, 2, &full(EdgeBehavior::Absorb)),
            vec![5, 7, 2, 4, 9, 10, 11, 0, 1, 3]
        );
    }

    #[test]
    fn reference_4x4_edge_sharing_only() {
        let dims = GridDims::new(4, 4).unwrap();
        let spec = NeighbourSpec::new(Shape::Triangle, EdgeBehavior::Absorb, &EDGE_SHARING).unwrap();
        assert_eq!(n(dims, 1, 2, &spec), vec![5, 7, 2]);
        assert_eq!(n(dims, 1, 1, &spec), vec![4, 6, 9]);
        // (0,1) down: its base neighbour would be above the grid.
        assert_eq!(n(dims, 0, 1, &spec), vec![0, 2]);
    }

    #[test]
    fn wrap_gives_full_cardinality() {
        let dims = GridDims::new(4, 6).unwrap();
        let table = NeighbourTable::build(dims, &full(EdgeBehavior::Wrap)).unwrap();
        compliance::assert_full_cardinality(&table, 12);
        compliance::run_full_compliance(dims, &table, true);
    }

    #[test]
    fn wrap_rejects_odd_dimensions() {
        let dims = GridDims::new(4, 5).unwrap();
        assert!(matches!(
            NeighbourTable::build(dims, &full(EdgeBehavior::Wrap)),
            Err(SpaceError::InvalidTopology { .. })
        ));
        let dims = GridDims::new(3, 4).unwrap();
        assert!(NeighbourTable::build(dims, &full(EdgeBehavior::Wrap)).is_err());
        // Bounded grids tolerate odd sizes.
        let dims = GridDims::new(3, 5).unwrap();
        assert!(NeighbourTable::build(dims, &full(EdgeBehavior::Absorb)).is_ok());
    }

    #[test]
    fn compliance_absorb() {
        let dims = GridDims::new(6, 7).unwrap();
        let table = NeighbourTable::build(dims, &full(EdgeBehavior::Absorb)).unwrap();
        compliance::run_full_compliance(dims, &table, true);
    }

    #[test]
    fn compliance_reflect() {
        let dims = GridDims::new(6, 6).unwrap();
        let table = NeighbourTable::build(dims, &full(EdgeBehavior::Reflect)).unwrap();
        compliance::run_full_compliance(dims, &table, false);
    }
}
