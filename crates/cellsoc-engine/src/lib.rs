//! Grid construction and the synchronous step for cellsoc.
//!
//! Build a [`Grid`] from a validated [`GridConfig`], then advance it with
//! [`Grid::step`]: every cell proposes its next state in row-major order,
//! then every cell commits. [`Simulation`] wraps a grid with the
//! configuration it came from for reset and model switching.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod metrics;
pub mod simulation;
pub mod snapshot;

pub use config::{ConfigError, GridConfig, InitialAssignment};
pub use grid::{build_grid, Grid};
pub use indexmap::IndexMap;
pub use metrics::StepMetrics;
pub use simulation::{Simulation, StepResult};
pub use snapshot::Snapshot;
