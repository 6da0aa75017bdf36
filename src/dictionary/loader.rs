//! Word list loading utilities
//!
//! Reads newline-separated word files into a [`Trie`]. Acquiring the file in
//! the first place (download, caching) is the caller's concern.

use super::Trie;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a newline-separated word file
///
/// Lines are trimmed and upper-cased; lines outside the accepted length
/// range or containing non-letter characters are skipped without error.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordhunt::dictionary::loader::load_from_file;
///
/// let trie = load_from_file("words_alpha.txt").unwrap();
/// println!("Loaded {} words", trie.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Trie> {
    let content = fs::read_to_string(path)?;
    Ok(Trie::from_words(content.lines()))
}
