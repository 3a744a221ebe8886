//! Propose-phase context passed to rule sets.
//!
//! [`ProposeContext`] gives a rule read access to every cell's committed
//! state and in-progress claim, plus the small set of claim primitives
//! agent models use to arbitrate destinations. All cross-cell writes go
//! through [`try_claim`](ProposeContext::try_claim) and
//! [`seize`](ProposeContext::seize), so the vacancy guard is applied in
//! one place.

use cellsoc_core::{Cell, CellPos, CellState, Claim, Vitals};
use cellsoc_space::{NeighbourList, NeighbourTable};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Counters for claim arbitration during one propose phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimStats {
    /// Destination claims that found the cell vacant.
    pub granted: u64,
    /// Destination claims refused because the cell was taken.
    pub refused: u64,
    /// Prey cells overwritten by a predator.
    pub seized: u64,
    /// Staked destinations reset to `Empty` because their mover was eaten.
    pub retracted: u64,
}

/// Execution context for one propose phase.
///
/// Borrowed from the grid for the duration of the phase. Indices are flat
/// row-major positions; neighbour lists come from the grid's
/// [`NeighbourTable`] and are never recomputed here.
pub struct ProposeContext<'a> {
    cells: &'a mut [Cell],
    neighbours: &'a NeighbourTable,
    rng: &'a mut ChaCha8Rng,
    stats: &'a mut ClaimStats,
}

impl<'a> ProposeContext<'a> {
    /// Construct a context over `cells`.
    ///
    /// Typically called by the engine. `neighbours` must cover exactly
    /// `cells.len()` cells.
    pub fn new(
        cells: &'a mut [Cell],
        neighbours: &'a NeighbourTable,
        rng: &'a mut ChaCha8Rng,
        stats: &'a mut ClaimStats,
    ) -> Self {
        debug_assert_eq!(cells.len(), neighbours.len());
        Self {
            cells,
            neighbours,
            rng,
            stats,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Committed state of cell `idx`.
    pub fn current(&self, idx: usize) -> CellState {
        self.cells[idx].state()
    }

    /// Claimed next state of cell `idx`, if decided.
    pub fn pending(&self, idx: usize) -> Option<CellState> {
        self.cells[idx].pending_state()
    }

    /// Committed vitals of cell `idx`.
    pub fn vitals(&self, idx: usize) -> Vitals {
        self.cells[idx].vitals()
    }

    /// Grid position of cell `idx`.
    pub fn pos(&self, idx: usize) -> CellPos {
        self.cells[idx].pos()
    }

    /// Neighbours of cell `idx`, in canonical order.
    pub fn neighbours(&self, idx: usize) -> &'a [usize] {
        let table: &'a NeighbourTable = self.neighbours;
        table.of(idx)
    }

    /// Number of neighbours of `idx` whose committed state is `state`.
    pub fn count_neighbours(&self, idx: usize, state: CellState) -> usize {
        self.neighbours(idx)
            .iter()
            .filter(|&&nb| self.cells[nb].state() == state)
            .count()
    }

    /// Whether cell `idx` already holds a claim this step.
    pub fn is_decided(&self, idx: usize) -> bool {
        self.cells[idx].pending().is_some()
    }

    /// Set cell `idx`'s own claim.
    pub fn propose(&mut self, idx: usize, claim: Claim) {
        self.cells[idx].set_pending(claim);
    }

    /// Claim the committed state and vitals of `idx` unchanged.
    pub fn stay(&mut self, idx: usize) {
        let cell = &self.cells[idx];
        let claim = Claim::with_vitals(cell.state(), cell.vitals());
        self.cells[idx].set_pending(claim);
    }

    /// Whether a mover may claim `idx`: committed `Empty` and either
    /// undecided or itself heading for `Empty`.
    pub fn is_vacant(&self, idx: usize) -> bool {
        let cell = &self.cells[idx];
        cell.state() == CellState::Empty
            && matches!(cell.pending_state(), None | Some(CellState::Empty))
    }

    /// Distinct vacant neighbours of `idx`, in canonical order.
    pub fn vacant_neighbours(&self, idx: usize) -> NeighbourList {
        self.neighbours_where(idx, |ctx, nb| ctx.is_vacant(nb))
    }

    /// Distinct neighbours of `idx` satisfying `pred`, in canonical order.
    ///
    /// Reflecting edges can list the same cell twice; it is kept once so
    /// that [`choose`](Self::choose) stays uniform over cells.
    pub fn neighbours_where<F>(&self, idx: usize, pred: F) -> NeighbourList
    where
        F: Fn(&Self, usize) -> bool,
    {
        let mut out = NeighbourList::new();
        for &nb in self.neighbours(idx) {
            if !out.contains(&nb) && pred(self, nb) {
                out.push(nb);
            }
        }
        out
    }

    /// Claim `dest` for an incoming mover if it is vacant.
    ///
    /// Returns `false` and leaves `dest` untouched when another mover got
    /// there first.
    pub fn try_claim(&mut self, dest: usize, claim: Claim) -> bool {
        if self.is_vacant(dest) {
            self.cells[dest].set_pending(claim);
            self.stats.granted += 1;
            true
        } else {
            self.stats.refused += 1;
            false
        }
    }

    /// Record that the occupant of `origin` moved to `dest` this step.
    pub fn stake(&mut self, origin: usize, dest: usize) {
        self.cells[origin].set_staked(Some(dest));
    }

    /// Overwrite the claim of `prey` with `claim`.
    ///
    /// If the prey had already moved and left its cell `Empty`, its staked
    /// destination is reset to `Empty` so the eaten agent does not also
    /// survive elsewhere. If it left a newborn behind, the newborn is eaten
    /// and the parent's move stands.
    pub fn seize(&mut self, prey: usize, claim: Claim) {
        let left_empty = self.cells[prey].pending_state() == Some(CellState::Empty);
        if let Some(dest) = self.cells[prey].staked() {
            if left_empty {
                self.cells[dest].set_pending(Claim::new(CellState::Empty));
                self.stats.retracted += 1;
            }
            self.cells[prey].set_staked(None);
        }
        self.cells[prey].set_pending(claim);
        self.stats.seized += 1;
    }

    /// Pick one of `candidates` uniformly, or `None` if there are none.
    pub fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.gen_range(0..candidates.len())])
    }

    /// Bernoulli draw with success probability `p`, clamped to `[0, 1]`.
    pub fn chance(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.gen_bool(p)
    }

    /// Counters accumulated so far this phase.
    pub fn stats(&self) -> ClaimStats {
        *self.stats
    }
}
