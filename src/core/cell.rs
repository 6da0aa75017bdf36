//! Grid cell coordinates
//!
//! A Cell is a (row, column) pair on the 4×4 board. Cells double as path
//! elements: a traced word is an ordered list of cells.

use std::fmt;

/// Board side length. The game is fixed at 4×4.
pub const GRID_SIZE: u8 = 4;

/// The eight neighbor offsets, in search order: E, SE, S, SW, W, NW, N, NE.
///
/// This order is part of the determinism contract: when a word is reachable
/// via several paths, the first path discovered under this offset order (and
/// row-major start order) is the one reported.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// A cell coordinate on the 4×4 board
///
/// Row and column are both in `[0, 3]`. Construction is only possible through
/// [`Cell::new`] or [`Cell::neighbor`], so an existing `Cell` is always in
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Create a cell, returning `None` if either coordinate is out of bounds
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of this cell in row-major order (0..16)
    ///
    /// Used as a bit position in the traversal's visited mask.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.row * GRID_SIZE + self.col
    }

    /// Step to a neighboring cell
    ///
    /// Returns `None` if the step leaves the board.
    #[must_use]
    pub fn neighbor(self, (dr, dc): (i8, i8)) -> Option<Self> {
        let row = u8::try_from(i8::try_from(self.row).ok()?.checked_add(dr)?).ok()?;
        let col = u8::try_from(i8::try_from(self.col).ok()?.checked_add(dc)?).ok()?;
        Self::new(row, col)
    }

    /// Whether two cells touch under 8-directional adjacency
    ///
    /// A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        if self == other {
            return false;
        }
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_in_bounds() {
        let cell = Cell::new(2, 3).unwrap();
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
    }

    #[test]
    fn new_out_of_bounds() {
        assert!(Cell::new(4, 0).is_none());
        assert!(Cell::new(0, 4).is_none());
        assert!(Cell::new(255, 255).is_none());
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(Cell::new(0, 0).unwrap().index(), 0);
        assert_eq!(Cell::new(0, 3).unwrap().index(), 3);
        assert_eq!(Cell::new(1, 0).unwrap().index(), 4);
        assert_eq!(Cell::new(3, 3).unwrap().index(), 15);
    }

    #[test]
    fn neighbor_within_bounds() {
        let cell = Cell::new(1, 1).unwrap();
        assert_eq!(cell.neighbor((0, 1)), Cell::new(1, 2));
        assert_eq!(cell.neighbor((-1, -1)), Cell::new(0, 0));
        assert_eq!(cell.neighbor((1, 0)), Cell::new(2, 1));
    }

    #[test]
    fn neighbor_off_board() {
        let corner = Cell::new(0, 0).unwrap();
        assert!(corner.neighbor((-1, 0)).is_none());
        assert!(corner.neighbor((0, -1)).is_none());
        assert!(corner.neighbor((-1, -1)).is_none());

        let far = Cell::new(3, 3).unwrap();
        assert!(far.neighbor((1, 0)).is_none());
        assert!(far.neighbor((0, 1)).is_none());
    }

    #[test]
    fn corner_has_three_neighbors() {
        let corner = Cell::new(0, 0).unwrap();
        let count = DIRECTIONS
            .iter()
            .filter(|&&d| corner.neighbor(d).is_some())
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn center_has_eight_neighbors() {
        let center = Cell::new(1, 2).unwrap();
        let count = DIRECTIONS
            .iter()
            .filter(|&&d| center.neighbor(d).is_some())
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn direction_order_starts_east() {
        // First offset is E, per the fixed search order
        assert_eq!(DIRECTIONS[0], (0, 1));
        assert_eq!(DIRECTIONS[7], (-1, 1));
    }

    #[test]
    fn adjacency() {
        let cell = Cell::new(1, 1).unwrap();
        assert!(cell.is_adjacent(Cell::new(0, 0).unwrap()));
        assert!(cell.is_adjacent(Cell::new(1, 2).unwrap()));
        assert!(cell.is_adjacent(Cell::new(2, 2).unwrap()));
        assert!(!cell.is_adjacent(cell)); // Not adjacent to itself
        assert!(!cell.is_adjacent(Cell::new(3, 3).unwrap()));
        assert!(!cell.is_adjacent(Cell::new(1, 3).unwrap()));
    }

    #[test]
    fn every_neighbor_is_adjacent() {
        for row in 0..4 {
            for col in 0..4 {
                let cell = Cell::new(row, col).unwrap();
                for dir in DIRECTIONS {
                    if let Some(next) = cell.neighbor(dir) {
                        assert!(cell.is_adjacent(next));
                    }
                }
            }
        }
    }

    #[test]
    fn display_format() {
        let cell = Cell::new(2, 1).unwrap();
        assert_eq!(format!("{cell}"), "(2,1)");
    }
}
