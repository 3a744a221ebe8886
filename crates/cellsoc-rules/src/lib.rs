//! Rule sets for cellsoc grids.
//!
//! A rule computes one cell's next state from committed neighbour states
//! during the propose phase. Agent models (Wa-Tor, Segregation) may also
//! claim another cell as a destination; every such write is arbitrated by
//! [`ProposeContext`], first writer wins in row-major scan order.
//!
//! [`RuleSet`] is the closed set of rules, one variant per
//! [`Model`](cellsoc_core::Model).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod fire;
pub mod life;
mod params;
pub mod percolation;
pub mod rule_set;
pub mod segregation;
pub mod wator;

#[cfg(test)]
pub(crate) mod board;

pub use context::{ClaimStats, ProposeContext};
pub use fire::Fire;
pub use life::Life;
pub use percolation::Percolation;
pub use rule_set::RuleSet;
pub use segregation::Segregation;
pub use wator::WaTor;
