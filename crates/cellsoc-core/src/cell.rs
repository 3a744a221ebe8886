//! Per-cell storage for the grid arena.
//!
//! A [`Cell`] holds its committed state plus at most one [`Claim`] staked
//! during the propose phase. Committing moves the claim into the committed
//! fields and clears it; nothing else writes the committed state while a
//! step runs.

use crate::error::StepError;
use crate::id::CellPos;
use crate::state::CellState;

/// Data that travels with a mobile agent.
///
/// Only the WaTor model reads these; every other model leaves them at
/// their default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vitals {
    /// Turns survived since birth or the last reproduction.
    pub age: u32,
    /// Remaining energy (sharks only).
    pub energy: f64,
}

impl Vitals {
    /// Vitals with the given age and energy.
    pub fn new(age: u32, energy: f64) -> Self {
        Self { age, energy }
    }
}

/// A proposed next state plus the vitals that accompany it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Claim {
    /// Proposed next state.
    pub state: CellState,
    /// Vitals the cell will hold once committed.
    pub vitals: Vitals,
}

impl Claim {
    /// A claim for `state` with default vitals.
    pub fn new(state: CellState) -> Self {
        Self {
            state,
            vitals: Vitals::default(),
        }
    }

    /// A claim for `state` carrying `vitals`.
    pub fn with_vitals(state: CellState, vitals: Vitals) -> Self {
        Self { state, vitals }
    }
}

/// One grid cell.
///
/// `pos` is fixed for the cell's lifetime. `pending` is absent between
/// steps; during the propose phase it is set by the cell itself or by a
/// neighbour that claims it as a destination.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pos: CellPos,
    current: CellState,
    vitals: Vitals,
    pending: Option<Claim>,
    staked: Option<usize>,
}

impl Cell {
    /// A cell at `pos` holding `state` with default vitals.
    pub fn new(pos: CellPos, state: CellState) -> Self {
        Self::with_vitals(pos, state, Vitals::default())
    }

    /// A cell at `pos` holding `state` and `vitals`.
    pub fn with_vitals(pos: CellPos, state: CellState, vitals: Vitals) -> Self {
        Self {
            pos,
            current: state,
            vitals,
            pending: None,
            staked: None,
        }
    }

    /// Grid position.
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    /// Committed state.
    pub fn state(&self) -> CellState {
        self.current
    }

    /// Committed vitals.
    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    /// The claim staked this step, if any.
    pub fn pending(&self) -> Option<&Claim> {
        self.pending.as_ref()
    }

    /// State of the claim staked this step, if any.
    pub fn pending_state(&self) -> Option<CellState> {
        self.pending.map(|c| c.state)
    }

    /// Stake `claim` as this cell's next state, replacing any earlier claim.
    pub fn set_pending(&mut self, claim: Claim) {
        self.pending = Some(claim);
    }

    /// Flat index of the destination this cell's occupant claimed this step.
    pub fn staked(&self) -> Option<usize> {
        self.staked
    }

    /// Record the destination this cell's occupant moved to.
    pub fn set_staked(&mut self, dest: Option<usize>) {
        self.staked = dest;
    }

    /// Overwrite the committed state outside of a step.
    ///
    /// Drops any pending claim. Used for interactive edits between steps.
    pub fn overwrite(&mut self, state: CellState, vitals: Vitals) {
        self.current = state;
        self.vitals = vitals;
        self.pending = None;
        self.staked = None;
    }

    /// Move the pending claim into the committed state.
    ///
    /// The claim and the staked destination are cleared either way. When no
    /// claim was staked the committed state is left untouched and
    /// [`StepError::Uncommitted`] is returned.
    pub fn commit(&mut self) -> Result<(), StepError> {
        self.staked = None;
        match self.pending.take() {
            Some(claim) => {
                self.current = claim.state;
                self.vitals = claim.vitals;
                Ok(())
            }
            None => Err(StepError::Uncommitted { pos: self.pos }),
        }
    }
}
