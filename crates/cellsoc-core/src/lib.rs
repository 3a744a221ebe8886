//! Core types for the cellsoc cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! state alphabet shared by every model, the per-cell storage used by the
//! grid arena, strongly-typed identifiers, and the error types that do not
//! depend on topology.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod state;

pub use cell::{Cell, Claim, Vitals};
pub use error::{ParamError, ParseTagError, StepError};
pub use id::{CellPos, StepId};
pub use state::{CellState, Model};
