//! Lifecycle wrapper around a grid.
//!
//! [`Simulation`] keeps the configuration a grid was built from so that
//! it can be reset with a new seed or switched to another model without
//! the caller rebuilding anything. Each [`step()`](Simulation::step)
//! returns an owned snapshot of the post-step state together with the
//! step's metrics.

use cellsoc_core::{CellState, ParamError, StepId};

use crate::config::{ConfigError, GridConfig};
use crate::grid::Grid;
use crate::metrics::StepMetrics;
use crate::snapshot::Snapshot;

// ── StepResult ──────────────────────────────────────────────────

/// Result of a [`Simulation::step()`] call.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Committed state after this step.
    pub snapshot: Snapshot,
    /// Timing and arbitration metrics for this step.
    pub metrics: StepMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// A grid plus the configuration it was built from.
///
/// # Example
///
/// ```
/// use cellsoc_core::{CellPos, CellState, Model};
/// use cellsoc_engine::{GridConfig, InitialAssignment, Simulation};
/// use cellsoc_space::{EdgeBehavior, Shape};
/// use indexmap::IndexMap;
///
/// let blinker = [(1, 0), (1, 1), (1, 2)]
///     .into_iter()
///     .map(|(r, c)| (CellPos::new(r, c), CellState::Alive))
///     .collect::<IndexMap<_, _>>();
/// let mut sim = Simulation::new(GridConfig {
///     rows: 3,
///     cols: 3,
///     shape: Shape::Square,
///     edge: EdgeBehavior::Absorb,
///     active_offsets: Vec::new(),
///     model: Model::GameOfLife,
///     parameters: Vec::new(),
///     initial: InitialAssignment::Explicit(blinker),
///     seed: 0,
/// })?;
/// let result = sim.step();
/// assert_eq!(result.snapshot.render(), vec![".O.", ".O.", ".O."]);
/// # Ok::<(), cellsoc_engine::ConfigError>(())
/// ```
pub struct Simulation {
    config: GridConfig,
    grid: Grid,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config` and build its grid.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let grid = Grid::build(&config)?;
        Ok(Self {
            config,
            grid,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Run one step and return the resulting snapshot and metrics.
    pub fn step(&mut self) -> StepResult {
        let metrics = self.grid.step();
        self.last_metrics = metrics.clone();
        StepResult {
            snapshot: self.grid.snapshot(),
            metrics,
        }
    }

    /// Committed state after the most recent step.
    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    /// Replace rule parameter `index`, effective from the next step.
    ///
    /// The new value is also recorded in the configuration, so it
    /// survives [`reset`](Self::reset).
    pub fn set_parameter(&mut self, index: usize, value: f64) -> Result<(), ParamError> {
        self.grid.set_parameter(index, value)?;
        self.config.parameters = self.grid.parameters();
        Ok(())
    }

    /// Advance one cell to the next state of the model's alphabet.
    pub fn cycle_state(&mut self, row: u32, col: u32) -> Result<CellState, ConfigError> {
        self.grid.cycle_state(row, col)
    }

    /// Rebuild the grid from the stored configuration with a new seed.
    ///
    /// Returns the initial snapshot. On error the simulation is left as
    /// it was.
    pub fn reset(&mut self, seed: u64) -> Result<Snapshot, ConfigError> {
        let mut config = self.config.clone();
        config.seed = seed;
        self.replace(config)
    }

    /// Rebuild for a different configuration (model, size or topology).
    ///
    /// Returns the initial snapshot. On error the simulation is left as
    /// it was.
    pub fn switch(&mut self, config: GridConfig) -> Result<Snapshot, ConfigError> {
        let from = self.config.model;
        let to = config.model;
        let snapshot = self.replace(config)?;
        log::debug!("switched simulation from {from} to {to}");
        Ok(snapshot)
    }

    fn replace(&mut self, config: GridConfig) -> Result<Snapshot, ConfigError> {
        let grid = Grid::build(&config).map_err(|e| {
            log::warn!("rebuild rejected: {e}");
            e
        })?;
        log::debug!("simulation rebuilt with seed {}", config.seed);
        self.grid = grid;
        self.config = config;
        self.last_metrics = StepMetrics::default();
        Ok(self.grid.snapshot())
    }

    /// Steps completed since the last build, reset or switch.
    pub fn current_step(&self) -> StepId {
        self.grid.current_step()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Current rule parameters.
    pub fn parameters(&self) -> Vec<f64> {
        self.grid.parameters()
    }

    /// The configuration the current grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The current seed.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("model", &self.config.model)
            .field("current_step", &self.grid.current_step())
            .field("seed", &self.config.seed)
            .finish()
    }
}
