//! Per-step performance and arbitration metrics.

/// Timing and claim counters collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent in the propose phase, in microseconds.
    pub propose_us: u64,
    /// Time spent in the commit phase, in microseconds.
    pub commit_us: u64,
    /// Destination claims that found their cell vacant.
    pub claims_granted: u64,
    /// Destination claims refused because another mover got there first.
    pub claims_refused: u64,
    /// Prey cells overwritten by a predator.
    pub seizures: u64,
    /// Staked moves undone because the mover was eaten.
    pub retractions: u64,
    /// Cells that reached commit without a claim and kept their state.
    pub uncommitted: u64,
}
