//! Benchmark profiles for the cellsoc engine.
//!
//! Each profile is a square grid seeded from a weighted distribution:
//!
//! - [`life_profile`]: Game of Life, 8 neighbours, wrapping
//! - [`wator_profile`]: WaTor, 4 neighbours, wrapping
//! - [`fire_profile`]: Fire, 4 neighbours, absorbing
//! - [`segregation_profile`]: Segregation, 8 neighbours, absorbing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellsoc_core::{CellState, Model};
use cellsoc_engine::{GridConfig, InitialAssignment};
use cellsoc_space::{square, EdgeBehavior, Shape};

fn profile(
    side: u32,
    edge: EdgeBehavior,
    active_offsets: Vec<usize>,
    model: Model,
    parameters: Vec<f64>,
    weights: &[(CellState, f64)],
    seed: u64,
) -> GridConfig {
    GridConfig {
        rows: side,
        cols: side,
        shape: Shape::Square,
        edge,
        active_offsets,
        model,
        parameters,
        initial: InitialAssignment::Distribution(weights.iter().copied().collect()),
        seed,
    }
}

/// Game of Life at 30% density on a `side` x `side` torus.
pub fn life_profile(side: u32, seed: u64) -> GridConfig {
    profile(
        side,
        EdgeBehavior::Wrap,
        Vec::new(),
        Model::GameOfLife,
        Vec::new(),
        &[(CellState::Alive, 30.0), (CellState::Dead, 70.0)],
        seed,
    )
}

/// WaTor with a 50/10/40 fish/shark/empty mix.
pub fn wator_profile(side: u32, seed: u64) -> GridConfig {
    profile(
        side,
        EdgeBehavior::Wrap,
        square::ORTHOGONAL.to_vec(),
        Model::WaTor,
        vec![3.0, 5.0, 2.0, 8.0],
        &[
            (CellState::Fish, 50.0),
            (CellState::Shark, 10.0),
            (CellState::Empty, 40.0),
        ],
        seed,
    )
}

/// Fire with 1% burning seeds in a dense forest.
pub fn fire_profile(side: u32, seed: u64) -> GridConfig {
    profile(
        side,
        EdgeBehavior::Absorb,
        square::ORTHOGONAL.to_vec(),
        Model::Fire,
        vec![0.6],
        &[(CellState::Tree, 99.0), (CellState::Burning, 1.0)],
        seed,
    )
}

/// Segregation with two even groups and 10% vacancy.
pub fn segregation_profile(side: u32, seed: u64) -> GridConfig {
    profile(
        side,
        EdgeBehavior::Absorb,
        Vec::new(),
        Model::Segregation,
        vec![0.5],
        &[
            (CellState::GroupA, 45.0),
            (CellState::GroupB, 45.0),
            (CellState::Empty, 10.0),
        ],
        seed,
    )
}
