//! Constraint propagation and backtracking search for the ninefold engine.
//!
//! Two layers live here:
//!
//! - [`CandidateGrid`], the constraint store: one candidate [`DigitSet`] per
//!   cell, kept arc-consistent under [`assign`](CandidateGrid::assign) and
//!   [`eliminate`](CandidateGrid::eliminate). Emptying a candidate set, or
//!   leaving a house with no legal cell for some digit, surfaces as a
//!   [`Contradiction`].
//! - The search functions [`solve_one`] and [`count_solutions`]:
//!   depth-first backtracking over cloned stores, always branching on the
//!   most constrained cell. Counting stops the moment the given limit is
//!   reached, which is what makes uniqueness checks cheap.
//!
//! The deterministic entry points here never randomize candidate order; the
//! generator crate owns the shuffled variant used to produce varied solved
//! grids.
//!
//! # Examples
//!
//! ```
//! use ninefold_solver::{count_grid_solutions, solve};
//!
//! let puzzle = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! assert_eq!(count_grid_solutions(&puzzle, 2), 1);
//! let solution = solve(&puzzle).expect("puzzle is solvable");
//! assert!(solution.is_solved());
//! # Ok::<(), ninefold_core::ParseGridError>(())
//! ```
//!
//! [`DigitSet`]: ninefold_core::DigitSet

pub mod candidate_grid;
pub mod search;

pub use self::{
    candidate_grid::{CandidateGrid, Contradiction},
    search::{count_grid_solutions, count_solutions, solve, solve_one},
};
