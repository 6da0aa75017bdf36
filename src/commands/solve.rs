//! Board solving command
//!
//! Solves one board and packages the findings with scores and paths for the
//! presentation layer.

use crate::core::Cell;
use crate::dictionary::Trie;
use crate::solver::{score_for_length, Solver};

/// A single found word with its traversal path and point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub text: String,
    pub path: Vec<Cell>,
    pub score: u32,
}

/// Everything found on one board
///
/// Words are in result order: descending length, then ascending
/// lexicographic.
#[derive(Debug, Clone)]
pub struct BoardReport {
    pub letters: String,
    pub words: Vec<FoundWord>,
    pub total_score: u32,
}

impl BoardReport {
    /// Group the found words by length, longest group first
    ///
    /// Words within each group stay in lexicographic order.
    #[must_use]
    pub fn words_by_length(&self) -> Vec<(usize, &[FoundWord])> {
        let mut groups: Vec<(usize, &[FoundWord])> = Vec::new();
        let mut rest = self.words.as_slice();

        while let Some(first) = rest.first() {
            let len = first.text.len();
            let end = rest.partition_point(|w| w.text.len() == len);
            let (group, tail) = rest.split_at(end);
            groups.push((len, group));
            rest = tail;
        }

        groups
    }
}

/// Solve a board against a loaded dictionary
///
/// # Errors
///
/// Returns an error if `letters` is not a valid 16-letter grid.
pub fn solve_board(letters: &str, trie: &Trie) -> Result<BoardReport, String> {
    let solver = Solver::new(trie);
    let outcome = solver
        .solve(letters)
        .map_err(|e| format!("Invalid board: {e}"))?;

    let mut total_score = 0;
    let words: Vec<FoundWord> = outcome
        .iter()
        .map(|(word, path)| {
            let score = score_for_length(word.len());
            total_score += score;
            FoundWord {
                text: word.to_string(),
                path: path.to_vec(),
                score,
            }
        })
        .collect();

    Ok(BoardReport {
        letters: letters.to_ascii_uppercase(),
        words,
        total_score,
    })
}
