//! The 4×4 letter grid
//!
//! A Grid is built from a 16-character string read left-to-right,
//! top-to-bottom, and is immutable for the duration of one solve.

use super::cell::{Cell, GRID_SIZE};
use std::fmt;

/// A 4×4 grid of uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: [[u8; 4]; 4],
}

/// Error type for malformed grid input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Grid must be exactly 16 letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Grid may only contain ASCII letters, got '{ch}'")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from a 16-character string
    ///
    /// Input is read row by row and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - Length is not exactly 16
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordhunt::core::Grid;
    ///
    /// let grid = Grid::new("abcdefghijklmnop").unwrap();
    /// assert_eq!(grid.letter_at(0, 0), b'A');
    /// assert_eq!(grid.letter_at(3, 3), b'P');
    ///
    /// assert!(Grid::new("short").is_err());
    /// assert!(Grid::new("abcdefghijklmno1").is_err());
    /// ```
    pub fn new(input: &str) -> Result<Self, GridError> {
        if input.chars().count() != 16 {
            return Err(GridError::InvalidLength(input.chars().count()));
        }

        let mut letters = [[0_u8; 4]; 4];
        for (i, ch) in input.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(GridError::InvalidCharacter(ch));
            }
            letters[i / 4][i % 4] = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self { letters })
    }

    /// Get the letter at a cell
    #[inline]
    #[must_use]
    pub const fn letter(&self, cell: Cell) -> u8 {
        self.letters[cell.row() as usize][cell.col() as usize]
    }

    /// Get the letter at explicit coordinates (0..4 each)
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, row: usize, col: usize) -> u8 {
        self.letters[row][col]
    }

    /// Iterate all 16 cells in row-major order
    ///
    /// This is the start-cell order of the board search.
    pub fn cells() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|row| {
            (0..GRID_SIZE).filter_map(move |col| Cell::new(row, col))
        })
    }

    /// The four rows as byte arrays, top to bottom
    #[must_use]
    pub const fn rows(&self) -> &[[u8; 4]; 4] {
        &self.letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_creation_valid() {
        let grid = Grid::new("CATSXXXXXXXXXXXX").unwrap();
        assert_eq!(grid.letter_at(0, 0), b'C');
        assert_eq!(grid.letter_at(0, 1), b'A');
        assert_eq!(grid.letter_at(0, 2), b'T');
        assert_eq!(grid.letter_at(0, 3), b'S');
        assert_eq!(grid.letter_at(1, 0), b'X');
    }

    #[test]
    fn grid_creation_lowercase_normalized() {
        let grid = Grid::new("catsxxxxxxxxxxxx").unwrap();
        assert_eq!(grid.letter_at(0, 0), b'C');
        assert_eq!(grid, Grid::new("CATSXXXXXXXXXXXX").unwrap());
    }

    #[test]
    fn grid_creation_invalid_length() {
        assert!(matches!(Grid::new(""), Err(GridError::InvalidLength(0))));
        assert!(matches!(
            Grid::new("ABC"),
            Err(GridError::InvalidLength(3))
        ));
        assert!(matches!(
            Grid::new("ABCDEFGHIJKLMNOPQ"),
            Err(GridError::InvalidLength(17))
        ));
    }

    #[test]
    fn grid_creation_invalid_characters() {
        assert!(matches!(
            Grid::new("ABCDEFGHIJKLMNO1"),
            Err(GridError::InvalidCharacter('1'))
        ));
        assert!(matches!(
            Grid::new("ABCDEFGH JKLMNOP"),
            Err(GridError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn letter_by_cell() {
        let grid = Grid::new("ABCDEFGHIJKLMNOP").unwrap();
        let cell = Cell::new(2, 1).unwrap();
        assert_eq!(grid.letter(cell), b'J');
    }

    #[test]
    fn cells_row_major_order() {
        let cells: Vec<Cell> = Grid::cells().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Cell::new(0, 0).unwrap());
        assert_eq!(cells[3], Cell::new(0, 3).unwrap());
        assert_eq!(cells[4], Cell::new(1, 0).unwrap());
        assert_eq!(cells[15], Cell::new(3, 3).unwrap());
    }

    #[test]
    fn rows_layout() {
        let grid = Grid::new("ABCDEFGHIJKLMNOP").unwrap();
        assert_eq!(&grid.rows()[0], b"ABCD");
        assert_eq!(&grid.rows()[3], b"MNOP");
    }

    #[test]
    fn error_display() {
        let err = GridError::InvalidLength(5);
        assert_eq!(format!("{err}"), "Grid must be exactly 16 letters, got 5");
    }
}
