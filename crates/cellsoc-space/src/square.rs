//! Square tiling: 4 orthogonal plus 4 diagonal neighbours.

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
///
/// Indices 0..4 are the orthogonal (von Neumann) neighbours; selecting all
/// eight gives the Moore neighbourhood.
pub const OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Offset indices of the orthogonal neighbours.
pub const ORTHOGONAL: [usize; 4] = [0, 1, 2, 3];

#[cfg(test)]
mod tests {
    use crate::compliance;
    use crate::{resolve, EdgeBehavior, GridDims, NeighbourSpec, NeighbourTable, Shape};
    use proptest::prelude::*;

    fn n(dims: GridDims, r: u32, c: u32, spec: &NeighbourSpec) -> Vec<usize> {
        resolve(dims, r, c, spec).unwrap().into_vec()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn orthogonal_absorb_interior() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        // N, S, W, E of (2,2)
        assert_eq!(n(dims, 2, 2, &spec), vec![7, 17, 11, 13]);
    }

    #[test]
    fn orthogonal_absorb_corner() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        assert_eq!(n(dims, 0, 0, &spec), vec![5, 1]);
    }

    #[test]
    fn orthogonal_absorb_edge() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        assert_eq!(n(dims, 0, 2, &spec), vec![7, 1, 3]);
    }

    #[test]
    fn moore_absorb_corner_and_interior() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::moore(EdgeBehavior::Absorb);
        assert_eq!(n(dims, 0, 0, &spec), vec![5, 1, 6]);
        assert_eq!(n(dims, 2, 2, &spec).len(), 8);
        assert_eq!(n(dims, 0, 2, &spec).len(), 5);
    }

    #[test]
    fn moore_wrap_corner() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::moore(EdgeBehavior::Wrap);
        // N=(4,0) S=(1,0) W=(0,4) E=(0,1) NW=(4,4) NE=(4,1) SW=(1,4) SE=(1,1)
        assert_eq!(n(dims, 0, 0, &spec), vec![20, 5, 4, 1, 24, 21, 9, 6]);
    }

    #[test]
    fn orthogonal_wrap_opposite_corner() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Wrap);
        // N=(3,4) S=(0,4) W=(4,3) E=(4,0)
        assert_eq!(n(dims, 4, 4, &spec), vec![19, 4, 23, 20]);
    }

    #[test]
    fn moore_reflect_corner() {
        let dims = GridDims::new(5, 5).unwrap();
        let spec = NeighbourSpec::moore(EdgeBehavior::Reflect);
        // N->(1,0) S=(1,0) W->(0,1) E=(0,1) NW->(1,1) NE->(1,1) SW->(1,1) SE=(1,1)
        assert_eq!(n(dims, 0, 0, &spec), vec![5, 5, 1, 1, 6, 6, 6, 6]);
    }

    #[test]
    fn partial_selection_keeps_canonical_order() {
        let dims = GridDims::new(3, 3).unwrap();
        let spec = NeighbourSpec::new(Shape::Square, EdgeBehavior::Absorb, &[7, 0]).unwrap();
        // Canonical order: N (index 0) before SE (index 7).
        assert_eq!(n(dims, 1, 1, &spec), vec![1, 8]);
    }

    // ── 1×1 edge case ──────────────────────────────────────────

    #[test]
    fn single_cell_absorb() {
        let dims = GridDims::new(1, 1).unwrap();
        assert!(n(dims, 0, 0, &NeighbourSpec::moore(EdgeBehavior::Absorb)).is_empty());
    }

    #[test]
    fn single_cell_wrap_never_lists_self() {
        let dims = GridDims::new(1, 1).unwrap();
        assert!(n(dims, 0, 0, &NeighbourSpec::moore(EdgeBehavior::Wrap)).is_empty());
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_absorb() {
        let dims = GridDims::new(8, 8).unwrap();
        let table = NeighbourTable::build(dims, &NeighbourSpec::moore(EdgeBehavior::Absorb)).unwrap();
        compliance::run_full_compliance(dims, &table, true);
    }

    #[test]
    fn compliance_wrap() {
        let dims = GridDims::new(8, 8).unwrap();
        let table = NeighbourTable::build(dims, &NeighbourSpec::moore(EdgeBehavior::Wrap)).unwrap();
        compliance::run_full_compliance(dims, &table, true);
        compliance::assert_full_cardinality(&table, 8);
    }

    #[test]
    fn compliance_reflect() {
        let dims = GridDims::new(8, 8).unwrap();
        let table =
            NeighbourTable::build(dims, &NeighbourSpec::moore(EdgeBehavior::Reflect)).unwrap();
        compliance::run_full_compliance(dims, &table, false);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![Just(EdgeBehavior::Absorb), Just(EdgeBehavior::Wrap)]
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 3u32..10,
            cols in 3u32..10,
            edge in arb_edge(),
            moore in any::<bool>(),
            r in 0u32..10, c in 0u32..10,
        ) {
            let r = r % rows;
            let c = c % cols;
            let dims = GridDims::new(rows, cols).unwrap();
            let spec = if moore {
                NeighbourSpec::moore(edge)
            } else {
                NeighbourSpec::orthogonal(edge)
            };
            let origin = dims.index_of((r, c).into()).unwrap();
            for nb in resolve(dims, r, c, &spec).unwrap() {
                let p = dims.pos_of(nb);
                let back = resolve(dims, p.row, p.col, &spec).unwrap();
                prop_assert!(
                    back.contains(&origin),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, origin,
                );
            }
        }
    }
}
