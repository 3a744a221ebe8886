//! The cell arena and the two-phase step.
//!
//! A [`Grid`] owns a flat row-major `Vec<Cell>`, the neighbour table
//! resolved once at build time, and the rule set. Each
//! [`step()`](Grid::step) runs a strict barrier:
//!
//! 1. **Propose**: every cell, in row-major order, asks the rule set for
//!    its next state. Agents may claim other cells through the
//!    [`ProposeContext`] arbitration primitives.
//! 2. **Commit**: every cell moves its claim into its committed state and
//!    clears it.
//!
//! `step` takes `&mut self` and [`Snapshot`]s are owned copies, so a
//! caller can never observe a half-finished step.

use std::time::Instant;

use cellsoc_core::{Cell, CellPos, CellState, Model, ParamError, StepId};
use cellsoc_rules::{ClaimStats, ProposeContext, RuleSet};
use cellsoc_space::{GridDims, NeighbourTable};
use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, GridConfig, InitialAssignment};
use crate::metrics::StepMetrics;
use crate::snapshot::Snapshot;

/// A built grid, ready to step.
#[derive(Clone, Debug)]
pub struct Grid {
    dims: GridDims,
    rules: RuleSet,
    cells: Vec<Cell>,
    neighbours: NeighbourTable,
    seed: u64,
    step: StepId,
}

/// Validate `config` and build a grid from it.
///
/// Shorthand for [`Grid::build`].
pub fn build_grid(config: &GridConfig) -> Result<Grid, ConfigError> {
    Grid::build(config)
}

impl Grid {
    /// Validate `config`, assign initial states, and resolve every
    /// neighbour list.
    pub fn build(config: &GridConfig) -> Result<Self, ConfigError> {
        let resolved = config.resolve()?;
        let dims = resolved.dims;
        let rules = resolved.rules;
        let neighbours = NeighbourTable::build(dims, &resolved.spec)?;
        let states = initial_states(config, dims)?;
        let cells = dims
            .canonical_ordering()
            .zip(states)
            .map(|(pos, state)| Cell::with_vitals(pos, state, rules.initial_vitals(state)))
            .collect();
        log::debug!(
            "built {}x{} {} grid ({}, {}, {} offsets), seed {}",
            dims.rows(),
            dims.cols(),
            config.model,
            resolved.spec.shape(),
            resolved.spec.edge(),
            resolved.spec.active().len(),
            config.seed
        );
        Ok(Self {
            dims,
            rules,
            cells,
            neighbours,
            seed: config.seed,
            step: StepId::default(),
        })
    }

    /// Run one propose/commit cycle.
    ///
    /// Random draws come from a ChaCha8 stream seeded with
    /// `seed XOR step`, so a given grid and seed always replay the same
    /// sequence.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a cell reaches commit without a claim.
    /// Release builds log the violation and keep the cell's state.
    pub fn step(&mut self) -> StepMetrics {
        let step_start = Instant::now();
        let next = self.step.next();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ next.0);
        let mut stats = ClaimStats::default();

        // 1. Propose.
        let propose_start = Instant::now();
        {
            let mut ctx =
                ProposeContext::new(&mut self.cells, &self.neighbours, &mut rng, &mut stats);
            for idx in 0..ctx.len() {
                self.rules.propose(idx, &mut ctx);
            }
        }
        let propose_us = propose_start.elapsed().as_micros() as u64;

        // 2. Commit.
        let commit_start = Instant::now();
        let uncommitted = commit_all(&mut self.cells, next);
        if uncommitted > 0 && cfg!(debug_assertions) {
            panic!("step {next}: {uncommitted} cell(s) reached commit without a claim");
        }
        let commit_us = commit_start.elapsed().as_micros() as u64;

        self.step = next;
        let metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            propose_us,
            commit_us,
            claims_granted: stats.granted,
            claims_refused: stats.refused,
            seizures: stats.seized,
            retractions: stats.retracted,
            uncommitted,
        };
        log::trace!(
            "step {next}: {}us (propose {}us, commit {}us), claims {}/{} refused, {} seized, {} retracted",
            metrics.total_us,
            metrics.propose_us,
            metrics.commit_us,
            metrics.claims_refused,
            metrics.claims_granted + metrics.claims_refused,
            metrics.seizures,
            metrics.retractions,
        );
        metrics
    }

    /// Committed state of every cell.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.dims,
            self.rules.model(),
            self.step,
            self.cells.iter().map(Cell::state).collect(),
        )
    }

    /// Replace rule parameter `index`; takes effect from the next step.
    pub fn set_parameter(&mut self, index: usize, value: f64) -> Result<(), ParamError> {
        self.rules.set_parameter(index, value)
    }

    /// Advance the cell at `(row, col)` to the next state of the model's
    /// alphabet, wrapping around, with fresh vitals. Returns the new state.
    pub fn cycle_state(&mut self, row: u32, col: u32) -> Result<CellState, ConfigError> {
        let idx = self
            .dims
            .index_of(CellPos::new(row, col))
            .map_err(|_| ConfigError::CellOutOfBounds { row, col })?;
        let model = self.rules.model();
        let cell = &mut self.cells[idx];
        let next = model
            .next_in_alphabet(cell.state())
            .unwrap_or_else(|| model.default_state());
        cell.overwrite(next, self.rules.initial_vitals(next));
        log::debug!("cell ({row}, {col}) set to {next}");
        Ok(next)
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Model the grid runs.
    pub fn model(&self) -> Model {
        self.rules.model()
    }

    /// Steps completed since build.
    pub fn current_step(&self) -> StepId {
        self.step
    }

    /// Current rule parameters.
    pub fn parameters(&self) -> Vec<f64> {
        self.rules.parameters()
    }

    /// The rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolved neighbour lists.
    pub fn neighbours(&self) -> &NeighbourTable {
        &self.neighbours
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        let idx = self.dims.index_of(CellPos::new(row, col)).ok()?;
        self.cells.get(idx)
    }
}

/// Commit every cell, then report how many had no claim.
///
/// Cells without a claim keep their committed state; the loop never stops
/// early, so the grid is fully committed even when some cells fail.
fn commit_all(cells: &mut [Cell], step: StepId) -> u64 {
    let mut uncommitted = 0;
    for cell in cells {
        if let Err(e) = cell.commit() {
            uncommitted += 1;
            log::error!("step {step}: {e}; keeping committed state");
        }
    }
    uncommitted
}

/// Initial state per cell, in row-major order.
fn initial_states(config: &GridConfig, dims: GridDims) -> Result<Vec<CellState>, ConfigError> {
    match &config.initial {
        InitialAssignment::Explicit(placements) => {
            let mut states = vec![config.model.default_state(); dims.cell_count()];
            for (&pos, &state) in placements {
                states[dims.index_of(pos)?] = state;
            }
            Ok(states)
        }
        InitialAssignment::Distribution(weights) => {
            let choices: Vec<CellState> = weights.keys().copied().collect();
            let dist = WeightedIndex::new(weights.values().copied())
                .map_err(|_| ConfigError::EmptyDistribution)?;
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            Ok((0..dims.cell_count())
                .map(|_| choices[dist.sample(&mut rng)])
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsoc_space::{EdgeBehavior, Shape};
    use indexmap::IndexMap;

    fn config(model: Model, params: Vec<f64>, initial: InitialAssignment) -> GridConfig {
        GridConfig {
            rows: 6,
            cols: 6,
            shape: Shape::Square,
            edge: EdgeBehavior::Wrap,
            active_offsets: Vec::new(),
            model,
            parameters: params,
            initial,
            seed: 42,
        }
    }

    fn weights(pairs: &[(CellState, f64)]) -> InitialAssignment {
        InitialAssignment::Distribution(pairs.iter().copied().collect())
    }

    #[test]
    fn explicit_fills_missing_positions_with_default() {
        let cfg = config(
            Model::GameOfLife,
            vec![],
            InitialAssignment::Explicit(IndexMap::from([(CellPos::new(1, 2), CellState::Alive)])),
        );
        let grid = Grid::build(&cfg).unwrap();
        let pop = grid.snapshot().population();
        assert_eq!(pop[&CellState::Alive], 1);
        assert_eq!(pop[&CellState::Dead], 35);
        assert_eq!(grid.snapshot().get(1, 2), Some(CellState::Alive));
    }

    #[test]
    fn distribution_is_seeded() {
        let cfg = config(
            Model::Segregation,
            vec![0.5],
            weights(&[
                (CellState::GroupA, 40.0),
                (CellState::GroupB, 40.0),
                (CellState::Empty, 20.0),
            ]),
        );
        let a = Grid::build(&cfg).unwrap().snapshot();
        let b = Grid::build(&cfg).unwrap().snapshot();
        assert_eq!(a, b);
        let mut other = cfg.clone();
        other.seed = 43;
        assert_ne!(a, Grid::build(&other).unwrap().snapshot());
    }

    #[test]
    fn zero_weight_states_never_appear() {
        let cfg = config(
            Model::Fire,
            vec![0.5],
            weights(&[(CellState::Tree, 1.0), (CellState::Burning, 0.0)]),
        );
        let pop = Grid::build(&cfg).unwrap().snapshot().population();
        assert_eq!(pop[&CellState::Tree], 36);
        assert_eq!(pop[&CellState::Burning], 0);
    }

    #[test]
    fn sharks_start_with_configured_energy() {
        let cfg = config(
            Model::WaTor,
            vec![3.0, 7.0, 2.0, 5.0],
            InitialAssignment::Explicit(IndexMap::from([(CellPos::new(0, 0), CellState::Shark)])),
        );
        let grid = Grid::build(&cfg).unwrap();
        assert_eq!(grid.cell(0, 0).unwrap().vitals().energy, 7.0);
    }

    #[test]
    fn step_advances_counter_and_clears_claims() {
        let cfg = config(
            Model::Fire,
            vec![0.7],
            weights(&[(CellState::Tree, 80.0), (CellState::Burning, 20.0)]),
        );
        let mut grid = Grid::build(&cfg).unwrap();
        assert_eq!(grid.current_step(), StepId(0));
        let metrics = grid.step();
        assert_eq!(metrics.uncommitted, 0);
        assert_eq!(grid.current_step(), StepId(1));
        assert_eq!(grid.snapshot().step(), StepId(1));
        assert!(grid.cells().iter().all(|c| c.pending().is_none()));
    }

    #[test]
    fn set_parameter_takes_effect_next_step() {
        let cfg = config(Model::Fire, vec![0.0], weights(&[(CellState::Tree, 1.0)]));
        let mut grid = Grid::build(&cfg).unwrap();
        grid.cycle_state(2, 2).unwrap(); // Tree -> Burning
        grid.step();
        assert_eq!(grid.snapshot().population()[&CellState::Burning], 0);

        grid.cycle_state(2, 2).unwrap(); // Empty -> Tree
        grid.cycle_state(2, 2).unwrap(); // Tree -> Burning
        grid.set_parameter(0, 1.0).unwrap();
        grid.step();
        assert_eq!(grid.snapshot().population()[&CellState::Burning], 8);
        assert!(grid.set_parameter(0, 1.5).is_err());
        assert_eq!(grid.parameters(), vec![1.0]);
    }

    #[test]
    fn cycle_state_wraps_alphabet_and_checks_bounds() {
        let cfg = config(
            Model::Percolation,
            vec![],
            InitialAssignment::Explicit(IndexMap::new()),
        );
        let mut grid = Grid::build(&cfg).unwrap();
        assert_eq!(grid.cycle_state(0, 0).unwrap(), CellState::Open);
        assert_eq!(grid.cycle_state(0, 0).unwrap(), CellState::Percolated);
        assert_eq!(grid.cycle_state(0, 0).unwrap(), CellState::Blocked);
        assert_eq!(
            grid.cycle_state(6, 0),
            Err(ConfigError::CellOutOfBounds { row: 6, col: 0 })
        );
    }

    #[test]
    fn commit_all_finishes_past_missing_claims() {
        use cellsoc_core::Claim;

        let mut cells: Vec<Cell> = (0..3)
            .map(|c| Cell::new(CellPos::new(0, c), CellState::Dead))
            .collect();
        cells[0].set_pending(Claim::new(CellState::Alive));
        cells[2].set_pending(Claim::new(CellState::Alive));

        assert_eq!(commit_all(&mut cells, StepId(1)), 1);
        let states: Vec<CellState> = cells.iter().map(Cell::state).collect();
        assert_eq!(states, [CellState::Alive, CellState::Dead, CellState::Alive]);
        assert!(cells.iter().all(|c| c.pending().is_none()));
    }

    #[test]
    fn build_grid_matches_grid_build() {
        let cfg = config(Model::Percolation, vec![], weights(&[(CellState::Open, 1.0)]));
        assert_eq!(
            build_grid(&cfg).unwrap().snapshot(),
            Grid::build(&cfg).unwrap().snapshot()
        );
    }
}
