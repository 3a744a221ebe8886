//! Conway's Game of Life.

use crate::context::ProposeContext;
use cellsoc_core::{CellState, Claim};

/// B3/S23 on whatever neighbourhood the grid was built with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Life;

impl Life {
    /// Propose the next state of cell `idx`.
    pub fn propose(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        let live = ctx.count_neighbours(idx, CellState::Alive);
        let next = match (ctx.current(idx), live) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Alive, _) => CellState::Dead,
            (_, 3) => CellState::Alive,
            _ => CellState::Dead,
        };
        ctx.propose(idx, Claim::new(next));
    }
}
