//! Core domain types for the board
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear geometric properties.

mod cell;
mod grid;

pub use cell::{Cell, DIRECTIONS};
pub use grid::{Grid, GridError};
