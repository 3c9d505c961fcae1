//! Puzzle generation for the ninefold Sudoku engine.
//!
//! Generation runs in two stages, both driven by a caller-supplied random
//! number generator:
//!
//! 1. [`random_solved_grid`] fills an empty board by backtracking with
//!    Fisher-Yates-shuffled candidate order, yielding a varied solved grid
//!    on every call.
//! 2. [`create_puzzle`] carves a puzzle out of a solved grid: it clears
//!    cells in a fresh random order, re-verifying after every removal that
//!    the puzzle still has exactly one solution, and rolls back any removal
//!    that breaks uniqueness.
//!
//! [`PuzzleGenerator`] wraps the two stages behind a seeded, retrying entry
//! point and is what applications normally use:
//!
//! ```
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//! use ninefold_solver::count_grid_solutions;
//!
//! let generator = PuzzleGenerator::with_difficulty(Difficulty::Easy);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(count_grid_solutions(&puzzle.problem, 2), 1);
//! println!("share this: {}", puzzle.seed);
//! ```
//!
//! All of this is CPU-bound, synchronous work over value-semantic grids;
//! interactive callers run it on a background task, and independent
//! generations can run in parallel without coordination.

use derive_more::{Display, Error};
use log::{debug, warn};
use ninefold_core::{Digit, Grid, Position};
use ninefold_solver::{CandidateGrid, count_grid_solutions};
use rand::{Rng, seq::SliceRandom as _};

pub mod seed;

pub use self::seed::{ParseSeedError, PuzzleSeed};

/// The proven minimum number of clues for a uniquely solvable 9x9 puzzle.
pub const MINIMUM_CLUES: u32 = 17;

/// Error returned when puzzle carving fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// The carved puzzle failed the final uniqueness re-check.
    #[display("carved puzzle does not have a unique solution")]
    NotUnique,
    /// No attempt produced a unique puzzle within the attempt budget.
    #[display("no unique puzzle produced within {attempts} attempts")]
    TargetNotReached {
        /// Number of carve attempts made.
        attempts: usize,
    },
}

/// Clue-count presets for puzzle generation.
///
/// Each preset maps to a number of cells to remove from the solved grid.
/// This controls the *clue count* only: fewer clues usually means harder,
/// but no claim is made about the human solving techniques a puzzle
/// requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Remove 40 cells, leaving 41 clues.
    Easy,
    /// Remove 50 cells, leaving 31 clues.
    #[default]
    Medium,
    /// Remove 60 cells, leaving 21 clues.
    Hard,
    /// Remove 64 cells, aiming for 17 clues; the carve usually stalls
    /// above the target, and the generator keeps the best attempt.
    Extreme,
}

impl Difficulty {
    /// Returns the number of cells this preset removes from a solved grid.
    #[must_use]
    pub const fn cells_to_remove(self) -> u32 {
        match self {
            Self::Easy => 40,
            Self::Medium => 50,
            Self::Hard => 60,
            Self::Extreme => 64,
        }
    }
}

/// A generated puzzle together with its solution and the seed that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid handed to the player; uniquely solvable.
    pub problem: Grid,
    /// The solved grid the puzzle was carved from, equal to the unique
    /// solution of `problem`.
    pub solution: Grid,
    /// The seed that reproduces this exact puzzle.
    pub seed: PuzzleSeed,
}

/// Produces a uniformly varied solved grid.
///
/// Runs backtracking search over an empty candidate grid, shuffling the
/// candidate order at every branch, so repeated calls yield different
/// solved boards. An empty grid always has completions, so this cannot
/// fail.
pub fn random_solved_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    loop {
        if let Some(grid) = fill_random(&CandidateGrid::new(), rng) {
            return grid;
        }
        // unreachable for an empty store, but the search signature allows it
        debug!("randomized fill found no completion, retrying");
    }
}

fn fill_random<R: Rng + ?Sized>(store: &CandidateGrid, rng: &mut R) -> Option<Grid> {
    let Some(pos) = store.most_constrained() else {
        return store.solved_grid();
    };
    let mut digits: Vec<Digit> = store.candidates(pos).iter().collect();
    digits.shuffle(rng);
    for digit in digits {
        let mut branch = store.clone();
        if branch.assign(pos, digit).is_ok()
            && let Some(grid) = fill_random(&branch, rng)
        {
            return Some(grid);
        }
    }
    None
}

/// Carves a puzzle out of a solved grid in a single attempt.
///
/// Visits all 81 positions in a fresh random order. Each still-filled cell
/// is tentatively cleared; the removal sticks only if the remaining puzzle
/// still has exactly one solution (checked with a limit of 2, so the check
/// stays cheap), and is rolled back otherwise. Carving stops early once
/// `cells_to_remove` cells are gone, or after every position has been
/// tried - the latter leaves a unique puzzle with more clues than
/// requested.
///
/// Because removal order is re-randomized per call, repeated calls on the
/// same solved grid yield different puzzles. Retrying on a missed target
/// is the caller's decision; [`PuzzleGenerator`] implements the usual
/// policy.
///
/// # Errors
///
/// Returns [`GenerateError::NotUnique`] if the final uniqueness re-check
/// fails; in particular, an input grid that is not a valid solved grid
/// fails this way.
pub fn create_puzzle<R: Rng + ?Sized>(
    solution: &Grid,
    cells_to_remove: u32,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    let target_remaining = 81u32.saturating_sub(cells_to_remove);
    if target_remaining < MINIMUM_CLUES {
        warn!(
            "removal target leaves {target_remaining} clues, below the {MINIMUM_CLUES}-clue minimum; the carve will stall early"
        );
    }

    let mut order = Position::ALL;
    order.shuffle(rng);

    let mut puzzle = *solution;
    let mut remaining = puzzle.filled_count();
    for pos in order {
        if remaining <= target_remaining {
            break;
        }
        let Some(digit) = puzzle[pos] else {
            continue;
        };
        puzzle[pos] = None;
        if count_grid_solutions(&puzzle, 2) == 1 {
            remaining -= 1;
        } else {
            puzzle[pos] = Some(digit);
        }
    }

    if count_grid_solutions(&puzzle, 2) == 1 {
        Ok(puzzle)
    } else {
        Err(GenerateError::NotUnique)
    }
}

/// Seeded, retrying puzzle generator.
///
/// Combines [`random_solved_grid`] and [`create_puzzle`] behind the entry
/// points applications use. A generator is cheap plain data; it holds no
/// grid state, so one instance can serve any number of calls, including
/// concurrently.
///
/// # Examples
///
/// Reproducing a puzzle from a shared seed:
///
/// ```
/// use ninefold_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("club night #42");
/// let a = generator.generate_with_seed(seed).unwrap();
/// let b = generator.generate_with_seed(seed).unwrap();
/// assert_eq!(a.problem, b.problem);
/// assert_eq!(a.solution, b.solution);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    cells_to_remove: u32,
    max_attempts: usize,
}

impl PuzzleGenerator {
    /// Creates a generator with the default difficulty
    /// ([`Difficulty::Medium`]) and attempt budget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::default())
    }

    /// Creates a generator using a difficulty preset.
    #[must_use]
    pub const fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_cells_to_remove(difficulty.cells_to_remove())
    }

    /// Creates a generator removing an explicit number of cells.
    #[must_use]
    pub const fn with_cells_to_remove(cells_to_remove: u32) -> Self {
        Self {
            cells_to_remove,
            max_attempts: 10,
        }
    }

    /// Sets the number of carve attempts per seed before settling for the
    /// best attempt.
    #[must_use]
    pub const fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// Draws new seeds until an attempt yields a unique puzzle; for any
    /// reachable clue target this succeeds on the first seed in practice.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        loop {
            let seed = PuzzleSeed::random();
            match self.generate_with_seed(seed) {
                Ok(puzzle) => return puzzle,
                Err(err) => debug!("seed {seed} produced no puzzle ({err}), drawing another"),
            }
        }
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The solved grid and every carve attempt are driven by a generator
    /// seeded from `seed`, so equal seeds yield identical results. Carving
    /// is retried up to the attempt budget when it stalls short of the clue
    /// target; if no attempt reaches the target, the unique puzzle with the
    /// fewest clues is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TargetNotReached`] if no attempt produced a
    /// uniquely solvable puzzle at all.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let solution = random_solved_grid(&mut rng);
        let target_remaining = 81u32.saturating_sub(self.cells_to_remove);

        let mut best: Option<Grid> = None;
        for attempt in 0..self.max_attempts {
            match create_puzzle(&solution, self.cells_to_remove, &mut rng) {
                Ok(problem) => {
                    if problem.filled_count() <= target_remaining {
                        return Ok(GeneratedPuzzle {
                            problem,
                            solution,
                            seed,
                        });
                    }
                    debug!(
                        "attempt {attempt}: stalled at {} clues (target {target_remaining})",
                        problem.filled_count()
                    );
                    if best.is_none_or(|b| problem.filled_count() < b.filled_count()) {
                        best = Some(problem);
                    }
                }
                Err(err) => debug!("attempt {attempt}: {err}"),
            }
        }

        best.map(|problem| GeneratedPuzzle {
            problem,
            solution,
            seed,
        })
        .ok_or(GenerateError::TargetNotReached {
            attempts: self.max_attempts,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
