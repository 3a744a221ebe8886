//! ASCII boards for rule tests.
//!
//! A [`Board`] is a minimal stand-in for the engine's grid: it owns the
//! cells and neighbour table and runs the same propose-then-commit cycle.

use crate::context::{ClaimStats, ProposeContext};
use crate::RuleSet;
use cellsoc_core::{Cell, CellState, Model, Vitals};
use cellsoc_space::{GridDims, NeighbourSpec, NeighbourTable};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

#[derive(Clone)]
pub(crate) struct Board {
    dims: GridDims,
    model: Model,
    cells: Vec<Cell>,
    table: NeighbourTable,
    seed: u64,
    steps: u64,
}

impl Board {
    /// Parse `rows` of glyphs for `model`. Panics on unknown glyphs or
    /// ragged rows.
    pub(crate) fn parse(model: Model, spec: &NeighbourSpec, rows: &[&str]) -> Self {
        let cols = rows[0].chars().count() as u32;
        let dims = GridDims::new(rows.len() as u32, cols).unwrap();
        let mut cells = Vec::with_capacity(dims.cell_count());
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count() as u32, cols, "ragged row {r}");
            for (c, glyph) in row.chars().enumerate() {
                let state = model
                    .state_for_glyph(glyph)
                    .unwrap_or_else(|| panic!("no {model} state for '{glyph}'"));
                cells.push(Cell::new((r as u32, c as u32).into(), state));
            }
        }
        let table = NeighbourTable::build(dims, spec).unwrap();
        Self {
            dims,
            model,
            cells,
            table,
            seed: 0,
            steps: 0,
        }
    }

    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub(crate) fn apply_initial_vitals(&mut self, rules: &RuleSet) {
        for cell in &mut self.cells {
            let state = cell.state();
            cell.overwrite(state, rules.initial_vitals(state));
        }
    }

    pub(crate) fn step(&mut self, rules: &RuleSet) -> ClaimStats {
        self.step_repeating(rules, &[])
    }

    /// Like [`step`](Self::step), but cells in `repeat` are proposed a
    /// second time right after their first proposal.
    pub(crate) fn step_repeating(&mut self, rules: &RuleSet, repeat: &[usize]) -> ClaimStats {
        self.steps += 1;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ self.steps);
        let mut stats = ClaimStats::default();
        {
            let mut ctx = ProposeContext::new(&mut self.cells, &self.table, &mut rng, &mut stats);
            for idx in 0..ctx.len() {
                rules.propose(idx, &mut ctx);
                if repeat.contains(&idx) {
                    rules.propose(idx, &mut ctx);
                }
            }
        }
        for cell in &mut self.cells {
            cell.commit().unwrap();
        }
        stats
    }

    pub(crate) fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.dims.cols() as usize)
            .map(|row| row.iter().map(|c| c.state().glyph()).collect())
            .collect()
    }

    fn at(&self, row: u32, col: u32) -> &Cell {
        &self.cells[self.dims.index_of((row, col).into()).unwrap()]
    }

    pub(crate) fn state_at(&self, row: u32, col: u32) -> CellState {
        self.at(row, col).state()
    }

    pub(crate) fn vitals_at(&self, row: u32, col: u32) -> Vitals {
        self.at(row, col).vitals()
    }

    pub(crate) fn population(&self) -> BTreeMap<CellState, usize> {
        let mut counts = BTreeMap::new();
        for cell in &self.cells {
            assert!(self.model.accepts(cell.state()));
            *counts.entry(cell.state()).or_insert(0) += 1;
        }
        counts
    }

    pub(crate) fn population_of(&self, state: CellState) -> usize {
        self.population().get(&state).copied().unwrap_or(0)
    }
}
