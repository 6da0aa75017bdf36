//! Benchmark command
//!
//! Measures solver throughput across randomly generated boards. Boards are
//! independent and the dictionary is read-only, so they are solved in
//! parallel against the one shared trie.

use crate::dictionary::Trie;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Letter pool weighted roughly by English letter frequency
///
/// Sampling uniformly from this pool produces boards that look like real
/// games instead of uniform-alphabet noise.
const LETTER_POOL: &[u8] =
    b"EEEEEEEEEEEETTTTTTTTTAAAAAAAAOOOOOOOIIIIIIINNNNNNNSSSSSSHHHHHHRRRRRRDDDDLLLLCCCUUUMMWWFFGGYYPPBBVKJXQZ";

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub best_board: Option<(String, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate a random 16-letter board
fn random_board(rng: &mut StdRng) -> String {
    (0..16)
        .map(|_| char::from(LETTER_POOL[rng.random_range(0..LETTER_POOL.len())]))
        .collect()
}

/// Solve `count` random boards and collect throughput statistics
///
/// The same `seed` always produces the same boards, so runs are
/// reproducible and comparable across dictionary or solver changes.
#[must_use]
pub fn run_benchmark(trie: &Trie, count: usize, seed: u64) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let boards: Vec<String> = (0..count).map(|_| random_board(&mut rng)).collect();

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let counts: Vec<(String, usize)> = boards
        .par_iter()
        .map(|letters| {
            let found = Solver::new(trie).solve(letters).map_or(0, |o| o.len());
            pb.inc(1);
            (letters.clone(), found)
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_words: usize = counts.iter().map(|&(_, n)| n).sum();
    let min_words = counts.iter().map(|&(_, n)| n).min().unwrap_or(0);
    let max_words = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let best_board = counts.iter().max_by_key(|&&(_, n)| n).cloned();

    BenchmarkResult {
        boards: count,
        total_words,
        average_words: if count == 0 {
            0.0
        } else {
            total_words as f64 / count as f64
        },
        min_words,
        max_words,
        best_board,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64(),
    }
}
