//! Prefix tree over the accepted word list
//!
//! Nodes map a single letter to a child node and carry a terminal flag
//! marking complete words. Built once at startup and read-only afterwards,
//! so one trie can back any number of concurrent solves.

use rustc_hash::FxHashMap;

/// Shortest word the dictionary accepts
pub const MIN_WORD_LEN: usize = 3;

/// Longest word the dictionary accepts
///
/// Also the hard depth cutoff of the board search.
pub const MAX_WORD_LEN: usize = 15;

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    is_word: bool,
}

/// A prefix-searchable dictionary
///
/// Words are stored as uppercase ASCII bytes. Queries walk the tree one byte
/// at a time and fail fast at the first missing child, which is what makes
/// the board search's subtree pruning cheap.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a word source, applying the acceptance filter
    ///
    /// Each entry is trimmed and upper-cased; entries outside
    /// `[MIN_WORD_LEN, MAX_WORD_LEN]` or containing non-ASCII-alphabetic
    /// characters are silently skipped.
    ///
    /// # Examples
    /// ```
    /// use wordhunt::dictionary::Trie;
    ///
    /// let trie = Trie::from_words(["cat", "cats", "at"]);
    /// assert_eq!(trie.len(), 2); // "at" is below the minimum length
    /// assert!(trie.is_word("CAT"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            let trimmed = word.as_ref().trim();
            if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&trimmed.len())
                && trimmed.chars().all(|c| c.is_ascii_alphabetic())
            {
                trie.insert(&trimmed.to_ascii_uppercase());
            }
        }
        trie
    }

    /// Insert an already-normalized word
    ///
    /// Creates nodes for missing letters along the path and marks the
    /// terminal node. Inserting the same word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for &byte in word.as_bytes() {
            node = node.children.entry(byte).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Whether some stored word starts with `prefix`
    ///
    /// A stored word counts as a prefix of itself. Returns false as soon as
    /// any byte of `prefix` has no child at the current position.
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Whether `word` exactly matches a stored word
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_word)
    }

    /// Number of distinct words stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in s.as_bytes() {
            node = node.children.get(byte)?;
        }
        Some(node)
    }
}
