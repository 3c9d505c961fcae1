//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one or more puzzles and prints the problem, the solution, and
//! the seed that reproduces them.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```
//!
//! Pick a difficulty preset or an explicit removal count:
//!
//! ```sh
//! cargo run --example generate -- --difficulty hard
//! cargo run --example generate -- --cells-to-remove 55
//! ```
//!
//! Reproduce a puzzle from a seed (64 hex characters) or a phrase:
//!
//! ```sh
//! cargo run --example generate -- --seed <hex>
//! cargo run --example generate -- --phrase "club night #42"
//! ```
//!
//! Generate a batch in parallel and print the one with the fewest clues:
//!
//! ```sh
//! cargo run --example generate -- --difficulty extreme --batch 200
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use ninefold_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Extreme => Difficulty::Extreme,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset (clue-count based).
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Explicit number of cells to remove; overrides --difficulty.
    #[arg(long, value_name = "COUNT")]
    cells_to_remove: Option<u32>,

    /// Seed as 64 hex characters; mutually exclusive with --phrase.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Generate this many puzzles in parallel and keep the fewest-clue one.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    batch: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = match args.cells_to_remove {
        Some(cells) => PuzzleGenerator::with_cells_to_remove(cells),
        None => PuzzleGenerator::with_difficulty(args.difficulty.into()),
    };

    let seed = args.seed.as_deref().map(str::parse::<PuzzleSeed>).transpose();
    let seed = match seed {
        Ok(seed) => seed.or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase)),
        Err(err) => {
            eprintln!("invalid --seed: {err}");
            process::exit(2);
        }
    };

    if args.batch == 0 {
        eprintln!("--batch must be at least 1.");
        process::exit(1);
    }

    let puzzle = if let Some(seed) = seed {
        match generator.generate_with_seed(seed) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("generation failed: {err}");
                process::exit(1);
            }
        }
    } else if args.batch == 1 {
        generator.generate()
    } else {
        (0..args.batch)
            .into_par_iter()
            .map(|_| generator.generate())
            .min_by_key(|puzzle| puzzle.problem.filled_count())
            .expect("batch is non-empty")
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} clues):", puzzle.problem.filled_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
    println!("{:#}", puzzle.problem);
}
