//! Neighbour topologies for cellsoc grids.
//!
//! This crate turns a grid position plus a [`NeighbourSpec`] (tiling shape,
//! [`EdgeBehavior`], and the active subset of the shape's canonical offsets)
//! into an ordered list of flat neighbour indices. A [`NeighbourTable`]
//! resolves every cell once at grid-construction time; rule sets only ever
//! read the cached lists.
//!
//! # Shapes
//!
//! - [`Shape::Square`]: 8 canonical offsets (4 orthogonal, then 4 diagonal).
//! - [`Shape::Triangle`]: 12 canonical offsets whose table depends on the
//!   orientation of the triangle, see [`Orientation`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid2d;
pub mod neighbourhood;
pub mod shape;
pub mod square;
pub mod triangle;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid2d::GridDims;
pub use neighbourhood::{resolve, NeighbourList, NeighbourSpec, NeighbourTable};
pub use shape::Shape;
pub use triangle::Orientation;
