//! Test utilities for cellsoc development.
//!
//! [`Layout`] turns an ASCII board into the explicit placement map the
//! engine accepts, and renders it back for comparison. [`fixtures`] holds
//! named boards reused across test suites and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cellsoc_core::{CellPos, CellState, Model};
use indexmap::IndexMap;
use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A grid size plus one state per position.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub rows: u32,
    pub cols: u32,
    pub placements: IndexMap<CellPos, CellState>,
}

impl Layout {
    /// Parse rows of glyphs for `model`.
    ///
    /// Panics on ragged rows or on a glyph outside the model's alphabet:
    /// a broken fixture should fail the test that uses it.
    pub fn parse(model: Model, rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "layout needs at least one row");
        let cols = rows[0].chars().count();
        let mut placements = IndexMap::new();
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), cols, "row {r} is ragged: {line:?}");
            for (c, glyph) in line.chars().enumerate() {
                let state = model
                    .state_for_glyph(glyph)
                    .unwrap_or_else(|| panic!("'{glyph}' is not a {model} glyph"));
                placements.insert(CellPos::new(r as u32, c as u32), state);
            }
        }
        Self {
            rows: rows.len() as u32,
            cols: cols as u32,
            placements,
        }
    }

    /// A `rows x cols` layout drawn from `weights` with a seeded RNG.
    pub fn random(rows: u32, cols: u32, weights: &[(CellState, f64)], seed: u64) -> Self {
        let dist = WeightedIndex::new(weights.iter().map(|&(_, w)| w))
            .unwrap_or_else(|e| panic!("bad weights {weights:?}: {e}"));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut placements = IndexMap::new();
        for r in 0..rows {
            for c in 0..cols {
                placements.insert(CellPos::new(r, c), weights[dist.sample(&mut rng)].0);
            }
        }
        Self {
            rows,
            cols,
            placements,
        }
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Number of placements holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.placements.values().filter(|&&s| s == state).count()
    }

    /// Repeat the layout `down` times vertically and `across` times
    /// horizontally.
    pub fn tile(&self, down: u32, across: u32) -> Self {
        let mut placements = IndexMap::new();
        for tr in 0..down {
            for tc in 0..across {
                for (pos, &state) in &self.placements {
                    let pos = CellPos::new(tr * self.rows + pos.row, tc * self.cols + pos.col);
                    placements.insert(pos, state);
                }
            }
        }
        Self {
            rows: self.rows * down,
            cols: self.cols * across,
            placements,
        }
    }

    /// Render back to glyph rows; positions without a placement use the
    /// model's default state.
    pub fn render(&self, model: Model) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        self.placements
                            .get(&CellPos::new(r, c))
                            .copied()
                            .unwrap_or_else(|| model.default_state())
                            .glyph()
                    })
                    .collect()
            })
            .collect()
    }
}
