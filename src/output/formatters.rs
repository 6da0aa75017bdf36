//! Formatting utilities for terminal output

use crate::core::Cell;

/// Format a traversal path as a readable arrow chain
///
/// # Examples
/// ```
/// use wordhunt::core::Cell;
/// use wordhunt::output::formatters::format_path;
///
/// let path = vec![
///     Cell::new(0, 0).unwrap(),
///     Cell::new(0, 1).unwrap(),
///     Cell::new(1, 2).unwrap(),
/// ];
/// assert_eq!(format_path(&path), "(0,0) → (0,1) → (1,2)");
/// ```
#[must_use]
pub fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Render a 16-letter board as four spaced rows
///
/// The input is assumed to be a valid grid string; characters are shown
/// upper-cased in row-major order.
#[must_use]
pub fn grid_lines(letters: &str) -> Vec<String> {
    let upper = letters.to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();

    chars
        .chunks(4)
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_single_cell() {
        let path = vec![Cell::new(2, 3).unwrap()];
        assert_eq!(format_path(&path), "(2,3)");
    }

    #[test]
    fn path_empty() {
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn path_chain() {
        let path = vec![
            Cell::new(0, 0).unwrap(),
            Cell::new(1, 1).unwrap(),
            Cell::new(2, 2).unwrap(),
        ];
        assert_eq!(format_path(&path), "(0,0) → (1,1) → (2,2)");
    }

    #[test]
    fn grid_lines_layout() {
        let lines = grid_lines("abcdefghijklmnop");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "A B C D");
        assert_eq!(lines[3], "M N O P");
    }
}
