//! Read-only views of committed grid state.

use cellsoc_core::{CellPos, CellState, Model, StepId};
use cellsoc_space::GridDims;
use indexmap::IndexMap;

/// Committed states of every cell after some step.
///
/// Owned and detached from the grid: later steps do not change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    dims: GridDims,
    model: Model,
    step: StepId,
    states: Vec<CellState>,
}

impl Snapshot {
    pub(crate) fn new(dims: GridDims, model: Model, step: StepId, states: Vec<CellState>) -> Self {
        debug_assert_eq!(states.len(), dims.cell_count());
        Self {
            dims,
            model,
            step,
            states,
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.dims.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.dims.cols()
    }

    /// Model the grid runs.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Step after which the snapshot was taken (0 = initial state).
    pub fn step(&self) -> StepId {
        self.step
    }

    /// State at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: u32, col: u32) -> Option<CellState> {
        self.dims
            .index_of(CellPos::new(row, col))
            .ok()
            .map(|i| self.states[i])
    }

    /// States in row-major order.
    pub fn states(&self) -> &[CellState] {
        &self.states
    }

    /// `(position, state)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, CellState)> + '_ {
        self.dims.canonical_ordering().zip(self.states.iter().copied())
    }

    /// Position-to-state map in row-major order.
    pub fn to_map(&self) -> IndexMap<CellPos, CellState> {
        self.iter().collect()
    }

    /// Cell count per state of the model's alphabet, in alphabet order.
    /// States with no cells are listed with 0.
    pub fn population(&self) -> IndexMap<CellState, usize> {
        let mut counts: IndexMap<CellState, usize> =
            self.model.alphabet().iter().map(|&s| (s, 0)).collect();
        for &s in &self.states {
            *counts.entry(s).or_insert(0) += 1;
        }
        counts
    }

    /// Fraction of cells per alphabet state, in alphabet order.
    pub fn shares(&self) -> IndexMap<CellState, f64> {
        let total = self.states.len() as f64;
        self.population()
            .into_iter()
            .map(|(s, n)| (s, n as f64 / total))
            .collect()
    }

    /// One string of state glyphs per row.
    pub fn render(&self) -> Vec<String> {
        self.states
            .chunks(self.dims.cols() as usize)
            .map(|row| row.iter().map(|s| s.glyph()).collect())
            .collect()
    }
}
