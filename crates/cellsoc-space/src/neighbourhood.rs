//! Neighbourhood selection and resolution.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d::{resolve_axis, GridDims};
use crate::shape::Shape;
use crate::square;
use smallvec::SmallVec;

/// Ordered flat indices of one cell's neighbours.
///
/// Inline capacity covers the largest canonical table (12 triangle
/// offsets), so resolution never allocates.
pub type NeighbourList = SmallVec<[usize; 12]>;

/// Which neighbours a grid uses: shape, edge policy and active offsets.
///
/// Active offset indices are kept sorted so that resolution always visits
/// them in canonical order, whatever order the caller supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourSpec {
    shape: Shape,
    edge: EdgeBehavior,
    active: SmallVec<[usize; 12]>,
}

impl NeighbourSpec {
    /// A spec using the offsets at `active` (indices into the shape's
    /// canonical table). An empty slice selects every offset.
    ///
    /// Returns `Err(SpaceError::InvalidTopology)` for an index past the
    /// end of the table or an index listed twice.
    pub fn new(shape: Shape, edge: EdgeBehavior, active: &[usize]) -> Result<Self, SpaceError> {
        if active.is_empty() {
            return Ok(Self::full(shape, edge));
        }
        let count = shape.offset_count();
        let mut sorted: SmallVec<[usize; 12]> = SmallVec::with_capacity(active.len());
        for &i in active {
            if i >= count {
                return Err(SpaceError::InvalidTopology {
                    reason: format!("offset index {i} out of range for {shape} (0..{count})"),
                });
            }
            if sorted.contains(&i) {
                return Err(SpaceError::InvalidTopology {
                    reason: format!("offset index {i} listed more than once"),
                });
            }
            sorted.push(i);
        }
        sorted.sort_unstable();
        Ok(Self {
            shape,
            edge,
            active: sorted,
        })
    }

    /// Every canonical offset of `shape`.
    pub fn full(shape: Shape, edge: EdgeBehavior) -> Self {
        Self {
            shape,
            edge,
            active: (0..shape.offset_count()).collect(),
        }
    }

    /// Square cells, orthogonal (von Neumann) neighbours only.
    pub fn orthogonal(edge: EdgeBehavior) -> Self {
        Self {
            shape: Shape::Square,
            edge,
            active: square::ORTHOGONAL.iter().copied().collect(),
        }
    }

    /// Square cells, all eight (Moore) neighbours.
    pub fn moore(edge: EdgeBehavior) -> Self {
        Self::full(Shape::Square, edge)
    }

    /// Tiling shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Edge policy.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Active offset indices, ascending.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Check that this spec can tile a grid of `dims`.
    ///
    /// Wrapping triangles must keep every cell's orientation across the
    /// seam, which needs an even number of rows and of columns.
    pub fn validate_for(&self, dims: GridDims) -> Result<(), SpaceError> {
        if self.shape == Shape::Triangle
            && self.edge == EdgeBehavior::Wrap
            && (dims.rows() % 2 != 0 || dims.cols() % 2 != 0)
        {
            return Err(SpaceError::InvalidTopology {
                reason: format!(
                    "wrapping triangles need even dimensions, got {}x{}",
                    dims.rows(),
                    dims.cols()
                ),
            });
        }
        Ok(())
    }
}

/// Resolve the neighbours of `(row, col)` to flat row-major indices.
///
/// Offsets are visited in canonical order. An offset that leaves the grid
/// is handled by the spec's [`EdgeBehavior`]; one that lands back on the
/// cell itself is dropped. Duplicates produced by `Reflect` are kept.
pub fn resolve(
    dims: GridDims,
    row: u32,
    col: u32,
    spec: &NeighbourSpec,
) -> Result<NeighbourList, SpaceError> {
    if !dims.contains(row, col) {
        return Err(SpaceError::CoordOutOfBounds {
            row,
            col,
            bounds: format!("[0, {}) x [0, {})", dims.rows(), dims.cols()),
        });
    }
    let offsets = spec.shape.offsets(row, col);
    let (r, c) = (i64::from(row), i64::from(col));
    let mut out = NeighbourList::new();
    for &i in &spec.active {
        let (dr, dc) = offsets[i];
        let Some(nr) = resolve_axis(r + i64::from(dr), dims.rows(), spec.edge) else {
            continue;
        };
        let Some(nc) = resolve_axis(c + i64::from(dc), dims.cols(), spec.edge) else {
            continue;
        };
        if nr == row && nc == col {
            continue;
        }
        out.push(nr as usize * dims.cols() as usize + nc as usize);
    }
    Ok(out)
}

/// Neighbour lists for every cell of a grid, resolved once.
#[derive(Clone, Debug)]
pub struct NeighbourTable {
    dims: GridDims,
    spec: NeighbourSpec,
    lists: Vec<NeighbourList>,
}

impl NeighbourTable {
    /// Resolve every cell of `dims` under `spec`.
    pub fn build(dims: GridDims, spec: &NeighbourSpec) -> Result<Self, SpaceError> {
        spec.validate_for(dims)?;
        let mut lists = Vec::with_capacity(dims.cell_count());
        for pos in dims.canonical_ordering() {
            lists.push(resolve(dims, pos.row, pos.col, spec)?);
        }
        Ok(Self {
            dims,
            spec: spec.clone(),
            lists,
        })
    }

    /// Neighbours of the cell at flat index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    pub fn of(&self, index: usize) -> &[usize] {
        &self.lists[index]
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the table covers no cells. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Grid dimensions the table was built for.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Spec the table was built from.
    pub fn spec(&self) -> &NeighbourSpec {
        &self.spec
    }

    /// Iterate neighbour lists in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lists.iter().map(|l| l.as_slice())
    }
}
