//! cellsoc: a synchronous cellular automaton and agent-based grid engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all cellsoc sub-crates. For most users, adding `cellsoc` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cellsoc::prelude::*;
//!
//! // A horizontal blinker on a 5x5 absorbing grid.
//! let mut placements = IndexMap::new();
//! for col in 1..4 {
//!     placements.insert(CellPos::new(2, col), CellState::Alive);
//! }
//! let config = GridConfig {
//!     rows: 5,
//!     cols: 5,
//!     shape: Shape::Square,
//!     edge: EdgeBehavior::Absorb,
//!     active_offsets: Vec::new(),
//!     model: Model::GameOfLife,
//!     parameters: Vec::new(),
//!     initial: InitialAssignment::Explicit(placements),
//!     seed: 42,
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let result = sim.step();
//! assert_eq!(result.snapshot.step(), StepId(1));
//! assert_eq!(result.snapshot.get(1, 2), Some(CellState::Alive));
//! assert_eq!(result.snapshot.get(2, 1), Some(CellState::Dead));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellsoc-core` | IDs, cell states, models, cells and claims, errors |
//! | [`space`] | `cellsoc-space` | Shapes, edge policies, neighbour resolution |
//! | [`rules`] | `cellsoc-rules` | Propose context and the five rule sets |
//! | [`engine`] | `cellsoc-engine` | Configuration, grids, snapshots, simulations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`cellsoc-core`).
///
/// Contains [`types::CellState`], [`types::Model`], the per-cell
/// [`types::Cell`] record and the shared error types.
pub use cellsoc_core as types;

/// Neighbour resolution (`cellsoc-space`).
///
/// Build a [`space::NeighbourSpec`] and resolve it once per grid into a
/// [`space::NeighbourTable`].
pub use cellsoc_space as space;

/// Transition rules (`cellsoc-rules`).
///
/// [`rules::RuleSet`] dispatches to one rule per [`types::Model`].
pub use cellsoc_rules as rules;

/// Grid engine (`cellsoc-engine`).
///
/// [`engine::Simulation`] owns a grid and its configuration;
/// [`engine::Grid`] is the bare two-phase stepper.
pub use cellsoc_engine as engine;

/// Common imports for typical cellsoc usage.
///
/// ```rust
/// use cellsoc::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cellsoc_core::{CellPos, CellState, Model, StepId};

    // Errors
    pub use cellsoc_core::ParamError;
    pub use cellsoc_engine::ConfigError;
    pub use cellsoc_space::SpaceError;

    // Space
    pub use cellsoc_space::{EdgeBehavior, Shape};

    // Engine
    pub use cellsoc_engine::{
        GridConfig, InitialAssignment, Simulation, Snapshot, StepMetrics, StepResult,
    };

    // Placement maps
    pub use cellsoc_engine::IndexMap;
}
