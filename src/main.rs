//! Word Hunt Solver - CLI
//!
//! Solves 4×4 Word Hunt boards against a dictionary file using a
//! trie-pruned depth-first search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordhunt::{
    commands::{run_benchmark, solve_board},
    dictionary::{loader::load_from_file, Trie},
    output::{print_benchmark_result, print_board_report},
};

#[derive(Parser)]
#[command(
    name = "wordhunt",
    about = "Word Hunt (Boggle-style) board solver",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a newline-separated dictionary file
    #[arg(short = 'w', long, global = true, default_value = "words_alpha.txt")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board given as 16 letters, left-to-right, top-to-bottom
    Solve {
        /// The 16 board letters, e.g. ABCDEFGHIJKLMNOP
        letters: String,

        /// Show the traversal path for each word
        #[arg(short, long)]
        paths: bool,
    },

    /// Solve randomly generated boards and report throughput
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed for reproducible board generation
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let trie = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Solve { letters, paths } => {
            let report = solve_board(&letters, &trie).map_err(|e| anyhow::anyhow!(e))?;
            print_board_report(&report, paths);
        }
        Commands::Benchmark { count, seed } => {
            println!("Solving {count} random boards (seed {seed})...");
            let result = run_benchmark(&trie, count, seed);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

/// Load and index the dictionary file once, before any solving
fn load_dictionary(path: &str) -> Result<Trie> {
    let trie = load_from_file(path)
        .with_context(|| format!("Failed to read word list '{path}'"))?;

    anyhow::ensure!(
        !trie.is_empty(),
        "Word list '{path}' contains no usable words (3-15 letters)"
    );

    Ok(trie)
}
