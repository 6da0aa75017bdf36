//! Depth-first board search
//!
//! Enumerates every adjacency path on the grid, pruning any branch whose
//! accumulated letters are not a prefix of some dictionary word. The path
//! and visited state are mutated in place and restored on exit from each
//! recursive call, so no per-branch copying happens until a word is found.

use crate::core::{Cell, Grid, GridError, DIRECTIONS};
use crate::dictionary::{Trie, MAX_WORD_LEN, MIN_WORD_LEN};
use rustc_hash::FxHashMap;

/// Board solver over a shared read-only dictionary
///
/// The trie is built once and borrowed here; all mutable search state is
/// created fresh inside [`Solver::solve`], so one solver (or one trie behind
/// several solvers) can serve any number of boards, concurrently if desired.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    trie: &'a Trie,
}

/// The result of solving one board
///
/// Holds the unique words found, sorted by descending length then ascending
/// lexicographic order, and the traversal path each word was first
/// discovered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    words: Vec<String>,
    paths: FxHashMap<String, Vec<Cell>>,
}

impl SolveOutcome {
    /// The found words in result order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The cell path a word was discovered on
    ///
    /// Returns `None` for words not in this outcome.
    #[must_use]
    pub fn path(&self, word: &str) -> Option<&[Cell]> {
        self.paths.get(word).map(Vec::as_slice)
    }

    /// Iterate (word, path) pairs in result order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.words
            .iter()
            .map(|word| (word.as_str(), self.paths[word].as_slice()))
    }

    /// Number of words found
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> Solver<'a> {
    /// Create a solver over a built dictionary
    #[must_use]
    pub const fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// Find every dictionary word traceable on the board
    ///
    /// `letters` is the 16-character grid read left-to-right, top-to-bottom.
    /// The search starts from each of the 16 cells in row-major order and
    /// explores neighbors in the fixed [`DIRECTIONS`] order, which makes the
    /// output (including each word's path) fully deterministic.
    ///
    /// # Errors
    /// Returns `GridError` if `letters` is not exactly 16 ASCII letters.
    pub fn solve(&self, letters: &str) -> Result<SolveOutcome, GridError> {
        let grid = Grid::new(letters)?;

        let mut search = Search {
            grid: &grid,
            trie: self.trie,
            word: String::with_capacity(MAX_WORD_LEN),
            path: Vec::with_capacity(MAX_WORD_LEN),
            visited: 0,
            paths: FxHashMap::default(),
        };

        for cell in Grid::cells() {
            search.dfs(cell);
        }

        let mut words: Vec<String> = search.paths.keys().cloned().collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Ok(SolveOutcome {
            words,
            paths: search.paths,
        })
    }
}

/// Mutable state for one solve invocation
struct Search<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    word: String,
    path: Vec<Cell>,
    // Bit r*4+c is set while cell (r,c) is on the current path
    visited: u16,
    paths: FxHashMap<String, Vec<Cell>>,
}

impl Search<'_> {
    fn dfs(&mut self, cell: Cell) {
        let bit = 1_u16 << cell.index();

        // Guard against malformed calls; the neighbor discipline below
        // never recurses into a visited cell
        if self.visited & bit != 0 {
            return;
        }

        self.word.push(char::from(self.grid.letter(cell)));
        if self.word.len() > MAX_WORD_LEN {
            // No dictionary word is longer; this also bounds recursion depth
            self.word.pop();
            return;
        }

        self.path.push(cell);
        self.visited |= bit;

        if !self.trie.is_prefix(&self.word) {
            // No stored word can extend this string: prune the whole subtree
            self.backtrack(bit);
            return;
        }

        if self.word.len() >= MIN_WORD_LEN
            && self.trie.is_word(&self.word)
            && !self.paths.contains_key(&self.word)
        {
            // First discovery wins. Clone the path: the shared buffer keeps
            // mutating as the search backtracks
            self.paths.insert(self.word.clone(), self.path.clone());
        }

        for direction in DIRECTIONS {
            if let Some(next) = cell.neighbor(direction) {
                self.dfs(next);
            }
        }

        self.backtrack(bit);
    }

    fn backtrack(&mut self, bit: u16) {
        self.path.pop();
        self.visited &= !bit;
        self.word.pop();
    }
}
