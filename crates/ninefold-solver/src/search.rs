//! Depth-first backtracking search over the constraint store.

use ninefold_core::Grid;

use crate::{CandidateGrid, Contradiction};

/// Finds the first complete assignment consistent with the store, or `None`
/// if no completion exists.
///
/// Branches on the undecided cell with the fewest remaining candidates
/// (ties broken in row-major order) and tries its candidates in ascending
/// digit order, so the traversal is fully deterministic. Each branch clones
/// the store before assigning; sibling branches share no state.
#[must_use]
pub fn solve_one(store: &CandidateGrid) -> Option<Grid> {
    let Some(pos) = store.most_constrained() else {
        // every cell decided; an arc-consistent store is a solution
        return store.solved_grid();
    };
    for digit in store.candidates(pos) {
        let mut branch = store.clone();
        if branch.assign(pos, digit).is_ok()
            && let Some(solution) = solve_one(&branch)
        {
            return Some(solution);
        }
    }
    None
}

/// Counts complete assignments consistent with the store, up to `limit`.
///
/// The traversal is the same as [`solve_one`], but accumulates a counter
/// and abandons the search the moment the counter reaches `limit`. With
/// `limit = 2` this is a cheap uniqueness test even for sparse grids: almost
/// all branches die in propagation long before reaching full depth, and the
/// early exit avoids enumerating the (possibly astronomical) remainder.
#[must_use]
pub fn count_solutions(store: &CandidateGrid, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let Some(pos) = store.most_constrained() else {
        return usize::from(store.solved_grid().is_some());
    };
    let mut count = 0;
    for digit in store.candidates(pos) {
        let mut branch = store.clone();
        if branch.assign(pos, digit).is_ok() {
            count += count_solutions(&branch, limit - count);
            if count >= limit {
                break;
            }
        }
    }
    count
}

/// Solves a concrete grid, returning its first solution in deterministic
/// search order.
///
/// Returns `None` both for unsolvable grids and for grids that already
/// violate the Sudoku constraints.
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    let store = CandidateGrid::from_grid(grid).ok()?;
    solve_one(&store)
}

/// Counts the solutions of a concrete grid, up to `limit`.
///
/// A grid that violates the Sudoku constraints has zero solutions. A puzzle
/// is uniquely solvable iff `count_grid_solutions(&puzzle, 2) == 1`.
#[must_use]
pub fn count_grid_solutions(grid: &Grid, limit: usize) -> usize {
    match CandidateGrid::from_grid(grid) {
        Ok(store) => count_solutions(&store, limit),
        Err(Contradiction) => 0,
    }
}
