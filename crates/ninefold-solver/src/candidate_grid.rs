//! The constraint store: per-cell candidate sets with propagation.

use derive_more::{Display, Error};

use ninefold_core::{Digit, DigitSet, Grid, Position};

/// The candidate grid has become unsatisfiable.
///
/// Raised when propagation empties a cell's candidate set or leaves a house
/// with no legal cell for some digit. During search this is an ordinary
/// control-flow value - the branch is abandoned and the next candidate tried.
/// When [`CandidateGrid::from_grid`] returns it, the input grid itself
/// violates the Sudoku constraints (a duplicate digit in some house).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("candidate grid is contradictory")]
pub struct Contradiction;

/// A 9x9 grid of candidate sets, kept arc-consistent under assignment.
///
/// Each cell holds the set of digits still considered legal there. The two
/// mutating operations, [`assign`](Self::assign) and
/// [`eliminate`](Self::eliminate), propagate their consequences eagerly:
///
/// - a cell collapsing to a single candidate eliminates that digit from all
///   20 peers;
/// - a digit left with exactly one legal cell in a house is assigned there;
/// - a cell with no candidates, or a house where some digit has no legal
///   cell, aborts the whole call with [`Contradiction`].
///
/// Either every step succeeds or the first failure propagates up via `?`;
/// a store that returned an error is abandoned, never repaired. Speculative
/// search therefore clones the store per branch - a cheap O(81) copy - and
/// mutates only its private copy.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet, Position};
/// use ninefold_solver::CandidateGrid;
///
/// let mut store = CandidateGrid::new();
/// store.assign(Position::new(0, 0), Digit::D5)?;
///
/// // 5 is gone from every peer of (0, 0)
/// assert!(!store.candidates(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!store.candidates(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!store.candidates(Position::new(2, 2)).contains(Digit::D5));
/// // but untouched elsewhere
/// assert_eq!(store.candidates(Position::new(8, 8)), DigitSet::ALL);
/// # Ok::<(), ninefold_solver::Contradiction>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Creates a store with every digit still possible in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::ALL; 81],
        }
    }

    /// Builds a store from a concrete grid by assigning every filled cell.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the grid already violates the Sudoku
    /// constraints; the error surfaces from the first conflicting
    /// assignment.
    pub fn from_grid(grid: &Grid) -> Result<Self, Contradiction> {
        let mut store = Self::new();
        for pos in Position::ALL {
            if let Some(digit) = grid[pos] {
                store.assign(pos, digit)?;
            }
        }
        Ok(store)
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.cells[usize::from(pos.index())]
    }

    /// Returns `true` if the cell has exactly one candidate left.
    #[must_use]
    pub fn is_decided(&self, pos: Position) -> bool {
        self.candidates(pos).len() == 1
    }

    /// Returns the number of decided cells.
    #[must_use]
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Picks the undecided cell with the smallest candidate set, first such
    /// cell in row-major order on ties. Returns `None` when every cell is
    /// decided.
    ///
    /// This is the branching heuristic shared by all searches over the
    /// store: the most constrained cell has the fewest candidates to try
    /// and the best chance of failing fast.
    #[must_use]
    pub fn most_constrained(&self) -> Option<Position> {
        let mut best: Option<(Position, u32)> = None;
        for pos in Position::ALL {
            let len = self.candidates(pos).len();
            if len > 1 && best.is_none_or(|(_, best_len)| len < best_len) {
                if len == 2 {
                    // no undecided cell can beat two candidates
                    return Some(pos);
                }
                best = Some((pos, len));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Converts the store into a concrete grid if every cell is decided.
    #[must_use]
    pub fn solved_grid(&self) -> Option<Grid> {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid[pos] = Some(self.candidates(pos).single()?);
        }
        Some(grid)
    }

    /// Fixes `digit` as the value of `pos` by eliminating every other
    /// candidate there, propagating each elimination.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if `digit` is no longer a candidate at
    /// `pos`, or if any triggered elimination fails.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        if !self.candidates(pos).contains(digit) {
            return Err(Contradiction);
        }
        for other in self.candidates(pos).difference(DigitSet::from_elem(digit)) {
            self.eliminate(pos, other)?;
        }
        Ok(())
    }

    /// Removes `digit` from the candidates of `pos`, propagating the
    /// consequences.
    ///
    /// Eliminating an already-absent candidate is a no-op, which also makes
    /// the operation idempotent. Otherwise, after the removal:
    ///
    /// 1. an emptied cell is a contradiction;
    /// 2. a cell reduced to one candidate eliminates that digit from all its
    ///    peers;
    /// 3. each house of `pos` is checked for `digit`: no remaining legal
    ///    cell is a contradiction, exactly one triggers an assignment there.
    ///
    /// Every recursive step strictly reduces the total number of candidates
    /// on the board, so the recursion is bounded.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] as described above; the error propagates
    /// from any depth of the recursion.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        let cell = &mut self.cells[usize::from(pos.index())];
        if !cell.contains(digit) {
            return Ok(());
        }
        cell.remove(digit);
        let remaining = *cell;

        if remaining.is_empty() {
            return Err(Contradiction);
        }
        if let Some(sole) = remaining.single() {
            for peer in pos.peers() {
                self.eliminate(peer, sole)?;
            }
        }

        for house in pos.houses() {
            let mut places = house
                .positions()
                .into_iter()
                .filter(|&place| self.candidates(place).contains(digit));
            match (places.next(), places.next()) {
                // digit has nowhere to go in this house
                (None, _) => return Err(Contradiction),
                (Some(sole_place), None) => self.assign(sole_place, digit)?,
                _ => {}
            }
        }
        Ok(())
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_candidates(store: &CandidateGrid) -> u32 {
        Position::ALL
            .into_iter()
            .map(|pos| store.candidates(pos).len())
            .sum()
    }

    #[test]
    fn test_new_store_is_unconstrained() {
        let store = CandidateGrid::new();
        for pos in Position::ALL {
            assert_eq!(store.candidates(pos), DigitSet::ALL);
        }
        assert_eq!(store.decided_count(), 0);
        assert_eq!(store.solved_grid(), None);
    }

    #[test]
    fn test_assign_removes_digit_from_peers_only() {
        let mut store = CandidateGrid::new();
        let pos = Position::new(4, 4);
        store.assign(pos, Digit::D7).unwrap();

        assert_eq!(store.candidates(pos).single(), Some(Digit::D7));
        for peer in pos.peers() {
            assert!(!store.candidates(peer).contains(Digit::D7));
            assert_eq!(store.candidates(peer).len(), 8);
        }
        for other in Position::ALL {
            if other != pos && !pos.peers().contains(other) {
                assert_eq!(store.candidates(other), DigitSet::ALL);
            }
        }
    }

    #[test]
    fn test_assign_conflicting_digit_is_a_contradiction() {
        let mut store = CandidateGrid::new();
        store.assign(Position::new(0, 0), Digit::D5).unwrap();
        // same row, same digit
        assert_eq!(
            store.assign(Position::new(0, 7), Digit::D5),
            Err(Contradiction)
        );
    }

    #[test]
    fn test_from_grid_rejects_duplicate_in_row() {
        // two 5s in row 3
        let mut grid = Grid::new();
        grid[Position::new(3, 1)] = Some(Digit::D5);
        grid[Position::new(3, 6)] = Some(Digit::D5);
        assert_eq!(CandidateGrid::from_grid(&grid), Err(Contradiction));
    }

    #[test]
    fn test_from_grid_accepts_valid_puzzle() {
        let grid: Grid = "
            53. .7. ...
            6.. 195 ...
            .98 ... .6.
            8.. .6. ..3
            4.. 8.3 ..1
            7.. .2. ..6
            .6. ... 28.
            ... 419 ..5
            ... .8. .79
        "
        .parse()
        .unwrap();
        let store = CandidateGrid::from_grid(&grid).unwrap();
        // every given survives as a decided cell
        for pos in Position::ALL {
            if let Some(digit) = grid[pos] {
                assert_eq!(store.candidates(pos).single(), Some(digit));
            }
        }
    }

    #[test]
    fn test_eliminate_is_monotone_and_idempotent() {
        let mut store = CandidateGrid::new();
        let pos = Position::new(2, 7);

        let before = total_candidates(&store);
        store.eliminate(pos, Digit::D3).unwrap();
        let after = total_candidates(&store);
        assert!(after < before);
        assert!(!store.candidates(pos).contains(Digit::D3));

        // eliminating the same pair again changes nothing
        let snapshot = store.clone();
        store.eliminate(pos, Digit::D3).unwrap();
        assert_eq!(store, snapshot);
        assert_eq!(total_candidates(&store), after);
    }

    #[test]
    fn test_collapsing_a_cell_propagates_to_peers() {
        let mut store = CandidateGrid::new();
        let pos = Position::new(0, 0);
        // strip candidates until only D9 remains
        for digit in [
            Digit::D1,
            Digit::D2,
            Digit::D3,
            Digit::D4,
            Digit::D5,
            Digit::D6,
            Digit::D7,
            Digit::D8,
        ] {
            store.eliminate(pos, digit).unwrap();
        }
        assert!(store.is_decided(pos));
        for peer in pos.peers() {
            assert!(!store.candidates(peer).contains(Digit::D9));
        }
    }

    #[test]
    fn test_only_place_in_house_gets_assigned() {
        let mut store = CandidateGrid::new();
        // remove D4 from every cell of row 6 except column 2
        for col in 0..9 {
            if col != 2 {
                store.eliminate(Position::new(6, col), Digit::D4).unwrap();
            }
        }
        // the sole remaining place was assigned, not merely left possible
        assert_eq!(
            store.candidates(Position::new(6, 2)).single(),
            Some(Digit::D4)
        );
    }

    #[test]
    fn test_emptying_a_cell_is_a_contradiction() {
        let mut store = CandidateGrid::new();
        let pos = Position::new(5, 5);
        let mut result = Ok(());
        for digit in Digit::ALL {
            result = store.eliminate(pos, digit);
            if result.is_err() {
                break;
            }
        }
        assert_eq!(result, Err(Contradiction));
    }

    #[test]
    fn test_solved_grid_from_complete_store() {
        let grid: Grid =
            "483921657967345821251876493548132976729564138136798245372689514814253769695417382"
                .parse()
                .unwrap();
        let store = CandidateGrid::from_grid(&grid).unwrap();
        assert_eq!(store.decided_count(), 81);
        assert_eq!(store.solved_grid(), Some(grid));
    }
}
