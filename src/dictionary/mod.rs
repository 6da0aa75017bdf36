//! Prefix-tree dictionary
//!
//! Stores a filtered word list in a trie that answers prefix and exact-word
//! queries in time proportional to the query length.

pub mod loader;
mod trie;

pub use trie::{Trie, MAX_WORD_LEN, MIN_WORD_LEN};
