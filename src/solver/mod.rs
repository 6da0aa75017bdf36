//! Board search engine
//!
//! Trie-pruned depth-first enumeration of every word traceable on the grid,
//! plus the fixed length-to-points table.

mod engine;
mod scoring;

pub use engine::{SolveOutcome, Solver};
pub use scoring::score_for_length;
