//! Word Hunt Solver
//!
//! Finds every dictionary word traceable on a 4×4 letter grid, where each step
//! moves to one of the eight neighboring cells and no cell is reused within a
//! word. The search is a depth-first enumeration pruned by a prefix tree, so
//! runtime is bounded by the dictionary's actual branching rather than the
//! 8^15-order brute force.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhunt::dictionary::Trie;
//! use wordhunt::solver::Solver;
//!
//! let trie = Trie::from_words(["cat", "cats"]);
//! let solver = Solver::new(&trie);
//!
//! let outcome = solver.solve("CATSXXXXXXXXXXXX").unwrap();
//! assert_eq!(outcome.words(), ["CATS", "CAT"]);
//! ```

// Core domain types
pub mod core;

// Prefix-tree dictionary
pub mod dictionary;

// Board search engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
