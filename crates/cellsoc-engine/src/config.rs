//! Grid configuration, validation, and error types.
//!
//! [`GridConfig`] is the fully resolved input for building a grid. Callers
//! parse documents themselves; [`validate()`](GridConfig::validate) checks
//! every structural invariant before any cell is created.

use std::error::Error;
use std::fmt;

use cellsoc_core::{CellPos, CellState, Model, ParamError};
use cellsoc_rules::RuleSet;
use cellsoc_space::{EdgeBehavior, GridDims, NeighbourSpec, Shape, SpaceError};
use indexmap::IndexMap;

// ── InitialAssignment ──────────────────────────────────────────────

/// Where a freshly built grid gets its states from.
#[derive(Clone, Debug, PartialEq)]
pub enum InitialAssignment {
    /// Relative weight per state; every cell draws independently.
    ///
    /// Weights need not sum to 1 (percentages work as-is). States with
    /// weight 0 never appear.
    Distribution(IndexMap<CellState, f64>),
    /// Explicit state per position. Positions not listed take the
    /// model's [`default_state`](Model::default_state).
    Explicit(IndexMap<CellPos, CellState>),
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`GridConfig`] or editing a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Dimensions, shape, edge policy or offset selection are invalid.
    Space(SpaceError),
    /// Parameter list rejected by the model's rule set.
    Param(ParamError),
    /// The initial assignment uses a state outside the model's alphabet.
    StateNotInAlphabet {
        /// Model being configured.
        model: Model,
        /// The foreign state.
        state: CellState,
    },
    /// An explicit placement lies outside the grid.
    PlacementOutOfBounds {
        /// The offending position.
        pos: CellPos,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// A distribution weight is negative or not finite.
    InvalidWeight {
        /// State carrying the weight.
        state: CellState,
        /// The rejected weight.
        weight: f64,
    },
    /// The distribution is empty or all its weights are zero.
    EmptyDistribution,
    /// The distribution's weights are finite but their sum is not.
    WeightOverflow,
    /// An edit addressed a cell outside the grid.
    CellOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "topology: {e}"),
            Self::Param(e) => write!(f, "parameters: {e}"),
            Self::StateNotInAlphabet { model, state } => {
                write!(f, "state {state} is not part of the {model} alphabet")
            }
            Self::PlacementOutOfBounds { pos, rows, cols } => {
                write!(f, "placement at {pos} outside {rows}x{cols} grid")
            }
            Self::InvalidWeight { state, weight } => {
                write!(f, "weight for {state} must be finite and >= 0, got {weight}")
            }
            Self::EmptyDistribution => write!(f, "initial distribution has no positive weight"),
            Self::WeightOverflow => write!(f, "initial distribution weights overflow when summed"),
            Self::CellOutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the grid")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Param(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for building a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Cell shape.
    pub shape: Shape,
    /// Edge policy.
    pub edge: EdgeBehavior,
    /// Active canonical offset indices; empty selects all of them.
    pub active_offsets: Vec<usize>,
    /// Model family.
    pub model: Model,
    /// Rule parameters, in the model's order.
    pub parameters: Vec<f64>,
    /// Initial state source.
    pub initial: InitialAssignment,
    /// Seed for initial sampling and every step's random draws.
    pub seed: u64,
}

/// Validated pieces of a [`GridConfig`], ready for grid construction.
pub(crate) struct Resolved {
    pub(crate) dims: GridDims,
    pub(crate) spec: NeighbourSpec,
    pub(crate) rules: RuleSet,
}

impl GridConfig {
    /// Check every structural invariant.
    ///
    /// Runs the same checks as grid construction without allocating cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    pub(crate) fn resolve(&self) -> Result<Resolved, ConfigError> {
        // 1. Dimensions and topology.
        let dims = GridDims::new(self.rows, self.cols)?;
        let spec = NeighbourSpec::new(self.shape, self.edge, &self.active_offsets)?;
        spec.validate_for(dims)?;
        // 2. Parameters.
        let rules = RuleSet::new(self.model, &self.parameters)?;
        // 3. Initial assignment.
        match &self.initial {
            InitialAssignment::Distribution(weights) => self.check_distribution(weights)?,
            InitialAssignment::Explicit(placements) => {
                for (&pos, &state) in placements {
                    if !dims.contains(pos.row, pos.col) {
                        return Err(ConfigError::PlacementOutOfBounds {
                            pos,
                            rows: self.rows,
                            cols: self.cols,
                        });
                    }
                    self.check_state(state)?;
                }
            }
        }
        Ok(Resolved { dims, spec, rules })
    }

    fn check_state(&self, state: CellState) -> Result<(), ConfigError> {
        if self.model.accepts(state) {
            Ok(())
        } else {
            Err(ConfigError::StateNotInAlphabet {
                model: self.model,
                state,
            })
        }
    }

    fn check_distribution(&self, weights: &IndexMap<CellState, f64>) -> Result<(), ConfigError> {
        let mut total = 0.0;
        for (&state, &weight) in weights {
            self.check_state(state)?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight { state, weight });
            }
            total += weight;
        }
        if !total.is_finite() {
            return Err(ConfigError::WeightOverflow);
        }
        if total > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::EmptyDistribution)
        }
    }
}
