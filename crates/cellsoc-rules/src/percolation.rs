//! Site percolation seeded from the top row.

use crate::context::ProposeContext;
use cellsoc_core::{CellState, Claim};

/// Open sites fill when they touch a filled site or lie in row 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Percolation;

impl Percolation {
    /// Propose the next state of cell `idx`.
    pub fn propose(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        let next = match ctx.current(idx) {
            CellState::Open
                if ctx.pos(idx).row == 0
                    || ctx.count_neighbours(idx, CellState::Percolated) > 0 =>
            {
                CellState::Percolated
            }
            other => other,
        };
        ctx.propose(idx, Claim::new(next));
    }
}
