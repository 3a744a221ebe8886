//! Neighbour table compliance test helpers.
//!
//! These functions verify that a built [`NeighbourTable`] satisfies the
//! invariants every rule set relies on. Reused across the square and
//! triangle test modules.

use crate::grid2d::GridDims;
use crate::neighbourhood::NeighbourTable;
use indexmap::IndexSet;

/// Assert that no cell lists itself.
pub fn assert_no_self_neighbours(table: &NeighbourTable) {
    for (i, list) in table.iter().enumerate() {
        assert!(!list.contains(&i), "cell {i} lists itself: {list:?}");
    }
}

/// Assert that every neighbour index addresses a cell of `dims`.
pub fn assert_indices_in_bounds(dims: GridDims, table: &NeighbourTable) {
    let n = dims.cell_count();
    for (i, list) in table.iter().enumerate() {
        for &nb in list {
            assert!(nb < n, "cell {i} lists {nb}, grid has {n} cells");
        }
    }
}

/// Assert that the table has one list per cell.
pub fn assert_covers_grid(dims: GridDims, table: &NeighbourTable) {
    assert_eq!(table.len(), dims.cell_count(), "table size != cell_count");
}

/// Assert that rebuilding from the same spec yields identical lists.
pub fn assert_rebuild_deterministic(dims: GridDims, table: &NeighbourTable) {
    let again = NeighbourTable::build(dims, table.spec()).unwrap();
    assert!(
        table.iter().eq(again.iter()),
        "neighbour table is non-deterministic"
    );
}

/// Assert that `b in N(a)` implies `a in N(b)`.
pub fn assert_neighbours_symmetric(table: &NeighbourTable) {
    for (a, list) in table.iter().enumerate() {
        for &b in list {
            let back: IndexSet<usize> = table.of(b).iter().copied().collect();
            assert!(
                back.contains(&a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert that every cell has exactly `expected` neighbours.
pub fn assert_full_cardinality(table: &NeighbourTable, expected: usize) {
    for (i, list) in table.iter().enumerate() {
        assert_eq!(list.len(), expected, "cell {i} has {} neighbours", list.len());
    }
}

/// Run the full compliance suite. `symmetric` is false for edge policies
/// (like `Reflect`) whose neighbour relation is not symmetric at borders.
pub fn run_full_compliance(dims: GridDims, table: &NeighbourTable, symmetric: bool) {
    assert_covers_grid(dims, table);
    assert_no_self_neighbours(table);
    assert_indices_in_bounds(dims, table);
    assert_rebuild_deterministic(dims, table);
    if symmetric {
        assert_neighbours_symmetric(table);
    }
}
