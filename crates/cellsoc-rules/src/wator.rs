//! Wa-Tor predator-prey.
//!
//! Fish wander and breed; sharks hunt fish, burn one unit of energy per
//! step and starve when it runs out. Every move goes through the claim
//! primitives of [`ProposeContext`], so each destination is taken at most
//! once per step and an eaten fish cannot also survive at the cell it was
//! moving to.
//!
//! Breeding compares the carried age against the breed time before
//! resetting it: a mover whose age after this step exceeds the breed time
//! leaves a newborn behind and starts counting again from zero.

use crate::context::ProposeContext;
use crate::params::{check_finite, check_non_negative};
use cellsoc_core::{CellState, Claim, ParamError, Vitals};

/// Wa-Tor parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaTor {
    fish_breed_time: f64,
    shark_energy: f64,
    energy_per_fish: f64,
    shark_breed_time: f64,
}

impl WaTor {
    /// Parameter names, in order.
    pub const PARAMS: [&'static str; 4] = [
        "fish_breed_time",
        "shark_energy",
        "energy_per_fish",
        "shark_breed_time",
    ];

    /// Build from the four parameters, in [`PARAMS`](Self::PARAMS) order.
    ///
    /// Breed times and the energy gain must be finite and non-negative;
    /// the newborn energy must be finite.
    pub fn new(
        fish_breed_time: f64,
        shark_energy: f64,
        energy_per_fish: f64,
        shark_breed_time: f64,
    ) -> Result<Self, ParamError> {
        Ok(Self {
            fish_breed_time: check_non_negative(Self::PARAMS[0], fish_breed_time)?,
            shark_energy: check_finite(Self::PARAMS[1], shark_energy)?,
            energy_per_fish: check_non_negative(Self::PARAMS[2], energy_per_fish)?,
            shark_breed_time: check_non_negative(Self::PARAMS[3], shark_breed_time)?,
        })
    }

    /// Parameters in [`PARAMS`](Self::PARAMS) order.
    pub fn values(&self) -> [f64; 4] {
        [
            self.fish_breed_time,
            self.shark_energy,
            self.energy_per_fish,
            self.shark_breed_time,
        ]
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) -> Result<(), ParamError> {
        let mut v = self.values();
        v[index] = value;
        *self = Self::new(v[0], v[1], v[2], v[3])?;
        Ok(())
    }

    /// Vitals for a newly placed or newborn agent.
    pub fn newborn(&self, state: CellState) -> Vitals {
        match state {
            CellState::Shark => Vitals::new(0, self.shark_energy),
            _ => Vitals::default(),
        }
    }

    /// Propose the next state of cell `idx`.
    pub fn propose(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        match ctx.current(idx) {
            CellState::Fish => self.fish(idx, ctx),
            CellState::Shark => self.shark(idx, ctx),
            _ => {
                if !ctx.is_decided(idx) {
                    ctx.stay(idx);
                }
            }
        }
    }

    fn fish(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        // Already seized by a shark earlier in the scan.
        if ctx.is_decided(idx) {
            return;
        }
        let age = ctx.vitals(idx).age.saturating_add(1);
        let vacant = ctx.vacant_neighbours(idx);
        let Some(dest) = ctx.choose(&vacant) else {
            ctx.propose(idx, Claim::with_vitals(CellState::Fish, Vitals::new(age, 0.0)));
            return;
        };
        let breeds = f64::from(age) > self.fish_breed_time;
        let carried = Vitals::new(if breeds { 0 } else { age }, 0.0);
        if !ctx.try_claim(dest, Claim::with_vitals(CellState::Fish, carried)) {
            ctx.propose(idx, Claim::with_vitals(CellState::Fish, Vitals::new(age, 0.0)));
            return;
        }
        ctx.stake(idx, dest);
        self.leave_behind(idx, CellState::Fish, breeds, ctx);
    }

    fn shark(&self, idx: usize, ctx: &mut ProposeContext<'_>) {
        // Only the shark itself writes its own cell; a second call is a no-op.
        if ctx.is_decided(idx) {
            return;
        }
        let vitals = ctx.vitals(idx);
        if vitals.energy <= 0.0 {
            log::trace!("shark at {} starved", ctx.pos(idx));
            ctx.propose(idx, Claim::new(CellState::Empty));
            return;
        }
        let age = vitals.age.saturating_add(1);
        let energy = vitals.energy - 1.0;
        let breeds = f64::from(age) > self.shark_breed_time;
        let carried = |energy: f64| {
            if breeds {
                Vitals::new(0, self.shark_energy)
            } else {
                Vitals::new(age, energy)
            }
        };

        let prey = ctx.neighbours_where(idx, |ctx, nb| {
            ctx.current(nb) == CellState::Fish && ctx.pending(nb) != Some(CellState::Shark)
        });
        if let Some(fish) = ctx.choose(&prey) {
            let claim = Claim::with_vitals(CellState::Shark, carried(energy + self.energy_per_fish));
            ctx.seize(fish, claim);
            self.leave_behind(idx, CellState::Shark, breeds, ctx);
            return;
        }

        let vacant = ctx.vacant_neighbours(idx);
        if let Some(dest) = ctx.choose(&vacant) {
            if ctx.try_claim(dest, Claim::with_vitals(CellState::Shark, carried(energy))) {
                ctx.stake(idx, dest);
                self.leave_behind(idx, CellState::Shark, breeds, ctx);
                return;
            }
        }

        ctx.propose(idx, Claim::with_vitals(CellState::Shark, Vitals::new(age, energy)));
    }

    /// Claim the origin of a mover: a newborn when it breeds, else `Empty`.
    fn leave_behind(
        &self,
        origin: usize,
        species: CellState,
        breeds: bool,
        ctx: &mut ProposeContext<'_>,
    ) {
        let claim = if breeds {
            Claim::with_vitals(species, self.newborn(species))
        } else {
            Claim::new(CellState::Empty)
        };
        ctx.propose(origin, claim);
    }
}
