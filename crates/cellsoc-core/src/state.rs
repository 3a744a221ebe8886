//! The cell-state alphabet and the model tags that partition it.
//!
//! Every model draws its states from the single [`CellState`] enum; a
//! [`Model`] declares which subset (its alphabet) is legal, how many tuning
//! parameters it takes, and which state fills positions that an explicit
//! placement map leaves out.

use crate::error::ParseTagError;
use std::fmt;
use std::str::FromStr;

/// A discrete cell state.
///
/// The enum is the union of all model alphabets. `Empty` is shared by the
/// WaTor, Fire and Segregation models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellState {
    /// Game of Life: no organism.
    Dead,
    /// Game of Life: live organism.
    Alive,
    /// WaTor: prey.
    Fish,
    /// WaTor: predator.
    Shark,
    /// Unoccupied cell (WaTor, Fire, Segregation).
    Empty,
    /// Fire: fuel that may ignite.
    Tree,
    /// Fire: burning this step, empty the next.
    Burning,
    /// Segregation: agent of the first group.
    GroupA,
    /// Segregation: agent of the second group.
    GroupB,
    /// Percolation: impassable site.
    Blocked,
    /// Percolation: passable site not yet reached.
    Open,
    /// Percolation: site reached by the flow (absorbing).
    Percolated,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 12] = [
        CellState::Dead,
        CellState::Alive,
        CellState::Fish,
        CellState::Shark,
        CellState::Empty,
        CellState::Tree,
        CellState::Burning,
        CellState::GroupA,
        CellState::GroupB,
        CellState::Blocked,
        CellState::Open,
        CellState::Percolated,
    ];

    /// Display name, as used by configuration documents.
    pub fn name(self) -> &'static str {
        match self {
            CellState::Dead => "Dead",
            CellState::Alive => "Alive",
            CellState::Fish => "Fish",
            CellState::Shark => "Shark",
            CellState::Empty => "Empty",
            CellState::Tree => "Tree",
            CellState::Burning => "Burning",
            CellState::GroupA => "GroupA",
            CellState::GroupB => "GroupB",
            CellState::Blocked => "Blocked",
            CellState::Open => "Open",
            CellState::Percolated => "Percolated",
        }
    }

    /// Single-character glyph for ASCII layouts.
    ///
    /// Glyphs are unique within each model's alphabet but not across
    /// models (`Dead`, `Empty` and `Open` all render as `.`).
    pub fn glyph(self) -> char {
        match self {
            CellState::Dead | CellState::Empty | CellState::Open => '.',
            CellState::Alive => 'O',
            CellState::Fish => 'f',
            CellState::Shark => 'S',
            CellState::Tree => 'T',
            CellState::Burning => '*',
            CellState::GroupA => 'A',
            CellState::GroupB => 'B',
            CellState::Blocked => '#',
            CellState::Percolated => '~',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellState {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CellState::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTagError::UnknownState {
                tag: trimmed.to_string(),
            })
    }
}

/// The closed set of model families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Model {
    /// Conway's Game of Life.
    GameOfLife,
    /// Wa-Tor predator-prey.
    WaTor,
    /// Probabilistic fire spread.
    Fire,
    /// Schelling segregation.
    Segregation,
    /// Site percolation from the top row.
    Percolation,
}

impl Model {
    /// Every model, in declaration order.
    pub const ALL: [Model; 5] = [
        Model::GameOfLife,
        Model::WaTor,
        Model::Fire,
        Model::Segregation,
        Model::Percolation,
    ];

    /// The states this model may hold.
    pub fn alphabet(self) -> &'static [CellState] {
        match self {
            Model::GameOfLife => &[CellState::Dead, CellState::Alive],
            Model::WaTor => &[CellState::Fish, CellState::Shark, CellState::Empty],
            Model::Fire => &[CellState::Empty, CellState::Tree, CellState::Burning],
            Model::Segregation => &[CellState::Empty, CellState::GroupA, CellState::GroupB],
            Model::Percolation => &[CellState::Blocked, CellState::Open, CellState::Percolated],
        }
    }

    /// Whether `state` belongs to this model's alphabet.
    pub fn accepts(self, state: CellState) -> bool {
        self.alphabet().contains(&state)
    }

    /// Number of tuning parameters the model's rule set expects.
    pub fn param_count(self) -> usize {
        match self {
            Model::GameOfLife | Model::Percolation => 0,
            Model::Fire | Model::Segregation => 1,
            Model::WaTor => 4,
        }
    }

    /// Background state for positions an explicit placement map omits.
    pub fn default_state(self) -> CellState {
        match self {
            Model::GameOfLife => CellState::Dead,
            Model::WaTor | Model::Fire | Model::Segregation => CellState::Empty,
            Model::Percolation => CellState::Blocked,
        }
    }

    /// Look up the alphabet state rendered as `glyph`.
    pub fn state_for_glyph(self, glyph: char) -> Option<CellState> {
        self.alphabet().iter().copied().find(|s| s.glyph() == glyph)
    }

    /// The state after `state` in alphabet order, wrapping around.
    ///
    /// Returns `None` when `state` is outside the alphabet.
    pub fn next_in_alphabet(self, state: CellState) -> Option<CellState> {
        let alphabet = self.alphabet();
        let i = alphabet.iter().position(|&s| s == state)?;
        Some(alphabet[(i + 1) % alphabet.len()])
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Model::GameOfLife => "GameOfLife",
            Model::WaTor => "WaTor",
            Model::Fire => "Fire",
            Model::Segregation => "Segregation",
            Model::Percolation => "Percolation",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();
        Model::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseTagError::UnknownModel {
                tag: s.trim().to_string(),
            })
    }
}
