//! Schelling segregation.

use crate::context::ProposeContext;
use crate::params::check_unit;
use cellsoc_core::{CellState, Claim, ParamError};

/// Unsatisfied agents move to a random vacant neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segregation {
    threshold: f64,
}

impl Segregation {
    /// Parameter names, in order.
    pub const PARAMS: [&'static str; 1] = ["satisfaction_threshold"];

    /// A segregation rule with the given like-neighbour `threshold` in `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self, ParamError> {
        Ok(Self {
            threshold: check_unit(Self::PARAMS[0], threshold)?,
        })
    }

    /// Minimum fraction of like neighbours an agent accepts.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) -> Result<(), ParamError> {
        debug_assert_eq!(index, 0);
        self.threshold = check_unit(Self::PARAMS[0], value)?;
        Ok(())
    }

    /// Fraction of occupied neighbours of `idx` that share its group.
    /// An agent with no occupied neighbours counts as fully satisfied.
    pub fn satisfaction(&self, idx: usize, ctx: &ProposeContext<'_>) -> f64 {
        let group = ctx.current(idx);
        let (mut like, mut occupied) = (0usize, 0usize);
        for &nb in ctx.neighbours(idx) {
            match ctx.current(nb) {
                CellState::Empty => {}
                s => {
                    occupied += 1;
                    if s == group {
                        like += 1;
                    }
                }
            }
        }
        if occupied == 0 {
            1.0
        } else {
            like as f64 / occupied as f64
        }
    }

    /// Propose the next state of cell `idx`.
    pub fn propose(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        match ctx.current(idx) {
            CellState::GroupA | CellState::GroupB => {
                if ctx.is_decided(idx) {
                    return;
                }
                if self.satisfaction(idx, ctx) >= self.threshold {
                    ctx.stay(idx);
                    return;
                }
                let group = ctx.current(idx);
                let vacant = ctx.vacant_neighbours(idx);
                let moved = match ctx.choose(&vacant) {
                    Some(dest) => ctx.try_claim(dest, Claim::new(group)).then_some(dest),
                    None => None,
                };
                match moved {
                    Some(dest) => {
                        ctx.stake(idx, dest);
                        ctx.propose(idx, Claim::new(CellState::Empty));
                    }
                    None => ctx.stay(idx),
                }
            }
            _ => {
                if !ctx.is_decided(idx) {
                    ctx.stay(idx);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::RuleSet;
    use cellsoc_core::Model;
    use cellsoc_space::{EdgeBehavior, NeighbourSpec};

    fn seg(t: f64) -> RuleSet {
        RuleSet::new(Model::Segregation, &[t]).unwrap()
    }

    #[test]
    fn unhappy_agent_moves_to_vacant_neighbour() {
        // A at (1,1) sees only B agents (0% like) and one vacancy at (1,2).
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        let mut board = Board::parse(Model::Segregation, &spec, &["BBB", "BA.", "BBB"]);
        board.step(&seg(0.5));
        let rows = board.render();
        assert_eq!(&rows[1][1..2], ".");
        assert_eq!(&rows[1][2..3], "A");
    }

    #[test]
    fn satisfied_agents_stay() {
        let spec = NeighbourSpec::moore(EdgeBehavior::Absorb);
        let rows = ["AA.", "AA.", "..B"];
        let mut board = Board::parse(Model::Segregation, &spec, &rows);
        board.step(&seg(0.5));
        assert_eq!(board.render(), rows.to_vec());
    }

    #[test]
    fn isolated_agent_is_satisfied() {
        let spec = NeighbourSpec::moore(EdgeBehavior::Absorb);
        let rows = ["...", ".B.", "..."];
        let mut board = Board::parse(Model::Segregation, &spec, &rows);
        board.step(&seg(1.0));
        assert_eq!(board.render(), rows.to_vec());
    }

    #[test]
    fn trapped_agent_stays() {
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        let rows = ["BAB", "BBB"];
        let mut board = Board::parse(Model::Segregation, &spec, &rows);
        board.step(&seg(0.5));
        assert_eq!(board.render(), rows.to_vec());
    }

    #[test]
    fn two_movers_never_share_a_vacancy() {
        // Both A agents are unhappy and the single vacancy is adjacent to both.
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        for seed in 0..16 {
            let mut board =
                Board::parse(Model::Segregation, &spec, &["BAB", "B.B", "BAB"]).with_seed(seed);
            board.step(&seg(0.5));
            let counts = board.population();
            assert_eq!(counts.get(&CellState::GroupA), Some(&2), "seed {seed}");
            assert_eq!(counts.get(&CellState::Empty), Some(&1), "seed {seed}");
        }
    }

    #[test]
    fn repeated_proposal_moves_agent_once() {
        let spec = NeighbourSpec::orthogonal(EdgeBehavior::Absorb);
        for seed in 0..8 {
            let mut board =
                Board::parse(Model::Segregation, &spec, &[".A.", "BBB"]).with_seed(seed);
            board.step_repeating(&seg(0.5), &[1]);
            assert_eq!(board.population_of(CellState::GroupA), 1, "seed {seed}");
            assert_eq!(board.state_at(0, 1), CellState::Empty, "seed {seed}");
        }
    }
}
