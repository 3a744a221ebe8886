//! Probabilistic fire spread.

use crate::context::ProposeContext;
use crate::params::check_unit;
use cellsoc_core::{CellState, Claim, ParamError};

/// Trees next to a fire catch with a fixed probability; fires burn out in
/// one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fire {
    catch_probability: f64,
}

impl Fire {
    /// Parameter names, in order.
    pub const PARAMS: [&'static str; 1] = ["catch_probability"];

    /// A fire rule igniting with `catch_probability` in `[0, 1]`.
    pub fn new(catch_probability: f64) -> Result<Self, ParamError> {
        Ok(Self {
            catch_probability: check_unit(Self::PARAMS[0], catch_probability)?,
        })
    }

    /// Probability that a tree next to a fire ignites.
    pub fn catch_probability(&self) -> f64 {
        self.catch_probability
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) -> Result<(), ParamError> {
        debug_assert_eq!(index, 0);
        self.catch_probability = check_unit(Self::PARAMS[0], value)?;
        Ok(())
    }

    /// Propose the next state of cell `idx`.
    pub fn propose(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        // One ignition draw per tree per step.
        if ctx.is_decided(idx) {
            return;
        }
        let next = match ctx.current(idx) {
            CellState::Tree => {
                if ctx.count_neighbours(idx, CellState::Burning) > 0
                    && ctx.chance(self.catch_probability)
                {
                    CellState::Burning
                } else {
                    CellState::Tree
                }
            }
            CellState::Burning => CellState::Empty,
            other => other,
        };
        ctx.propose(idx, Claim::new(next));
    }
}
