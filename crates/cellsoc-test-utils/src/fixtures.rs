//! Named boards shared by tests and benchmarks.
//!
//! Glyphs follow [`CellState::glyph`](cellsoc_core::CellState::glyph).

/// Game of Life: plus shape centred on a 3x3 grid.
pub const PLUS: [&str; 3] = [".O.", "OOO", ".O."];

/// Game of Life: period-2 oscillator.
pub const BLINKER: [&str; 5] = [".....", ".....", ".OOO.", ".....", "....."];

/// Game of Life: glider heading south-east on a 6x6 torus.
pub const GLIDER: [&str; 6] = [
    ".O....",
    "..O...",
    "OOO...",
    "......",
    "......",
    "......",
];

/// Wa-Tor: mixed population on a 6x6 grid.
pub const REEF: [&str; 6] = [
    "f..S.f",
    ".ff...",
    "..S.f.",
    "f...ff",
    ".S..f.",
    "..f..S",
];

/// Segregation: checkerboard with a vacant column; every agent is unhappy
/// under an orthogonal neighbourhood.
pub const CHECKER: [&str; 4] = ["ABAB.", "BABA.", "ABAB.", "BABA."];

/// Percolation: a single open channel from the top row to the bottom.
pub const CHANNEL: [&str; 4] = ["#.##", "#..#", "##.#", "##.."];
