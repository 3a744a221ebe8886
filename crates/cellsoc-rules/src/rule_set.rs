//! The closed set of rule sets, dispatched by model tag.

use crate::context::ProposeContext;
use crate::fire::Fire;
use crate::life::Life;
use crate::percolation::Percolation;
use crate::segregation::Segregation;
use crate::wator::WaTor;
use cellsoc_core::{CellState, Model, ParamError, Vitals};

/// One rule set per [`Model`], holding that model's parameters.
///
/// Rules are stateless with respect to the grid: everything they read or
/// write goes through the [`ProposeContext`] passed to
/// [`propose`](Self::propose).
#[derive(Clone, Debug, PartialEq)]
pub enum RuleSet {
    /// Conway's Game of Life.
    GameOfLife(Life),
    /// Wa-Tor predator-prey.
    WaTor(WaTor),
    /// Probabilistic fire spread.
    Fire(Fire),
    /// Schelling segregation.
    Segregation(Segregation),
    /// Site percolation.
    Percolation(Percolation),
}

impl RuleSet {
    /// Build the rule set for `model` from its parameter list.
    ///
    /// Returns `Err(ParamError::CountMismatch)` if `params` has the wrong
    /// length for the model, or `Err(ParamError::OutOfRange)` if a value
    /// is outside its legal range.
    pub fn new(model: Model, params: &[f64]) -> Result<Self, ParamError> {
        if params.len() != model.param_count() {
            return Err(ParamError::CountMismatch {
                model,
                expected: model.param_count(),
                got: params.len(),
            });
        }
        Ok(match model {
            Model::GameOfLife => RuleSet::GameOfLife(Life),
            Model::WaTor => RuleSet::WaTor(WaTor::new(params[0], params[1], params[2], params[3])?),
            Model::Fire => RuleSet::Fire(Fire::new(params[0])?),
            Model::Segregation => RuleSet::Segregation(Segregation::new(params[0])?),
            Model::Percolation => RuleSet::Percolation(Percolation),
        })
    }

    /// The model this rule set implements.
    pub fn model(&self) -> Model {
        match self {
            RuleSet::GameOfLife(_) => Model::GameOfLife,
            RuleSet::WaTor(_) => Model::WaTor,
            RuleSet::Fire(_) => Model::Fire,
            RuleSet::Segregation(_) => Model::Segregation,
            RuleSet::Percolation(_) => Model::Percolation,
        }
    }

    /// Current parameter values, in the order [`new`](Self::new) takes them.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            RuleSet::GameOfLife(_) | RuleSet::Percolation(_) => Vec::new(),
            RuleSet::WaTor(w) => w.values().to_vec(),
            RuleSet::Fire(f) => vec![f.catch_probability()],
            RuleSet::Segregation(s) => vec![s.threshold()],
        }
    }

    /// Parameter names, in the order [`new`](Self::new) takes them.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            RuleSet::GameOfLife(_) | RuleSet::Percolation(_) => &[],
            RuleSet::WaTor(_) => &WaTor::PARAMS,
            RuleSet::Fire(_) => &Fire::PARAMS,
            RuleSet::Segregation(_) => &Segregation::PARAMS,
        }
    }

    /// Replace parameter `index` with `value`.
    ///
    /// On error the rule set is unchanged.
    pub fn set_parameter(&mut self, index: usize, value: f64) -> Result<(), ParamError> {
        let model = self.model();
        let count = model.param_count();
        if index >= count {
            return Err(ParamError::IndexOutOfRange {
                model,
                index,
                count,
            });
        }
        let result = match self {
            RuleSet::GameOfLife(_) | RuleSet::Percolation(_) => Ok(()),
            RuleSet::WaTor(w) => w.set(index, value),
            RuleSet::Fire(f) => f.set(index, value),
            RuleSet::Segregation(s) => s.set(index, value),
        };
        match &result {
            Ok(()) => log::debug!("{model} parameter {index} set to {value}"),
            Err(e) => log::warn!("rejected {model} parameter update: {e}"),
        }
        result
    }

    /// Vitals a cell placed in `state` starts with.
    pub fn initial_vitals(&self, state: CellState) -> Vitals {
        match self {
            RuleSet::WaTor(w) => w.newborn(state),
            _ => Vitals::default(),
        }
    }

    /// Propose the next state of cell `idx`, and for agent models, claim
    /// its destination.
    pub fn propose(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        match self {
            RuleSet::GameOfLife(r) => r.propose(idx, ctx),
            RuleSet::WaTor(r) => r.propose(idx, ctx),
            RuleSet::Fire(r) => r.propose(idx, ctx),
            RuleSet::Segregation(r) => r.propose(idx, ctx),
            RuleSet::Percolation(r) => r.propose(idx, ctx),
        }
    }
}
