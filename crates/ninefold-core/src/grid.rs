//! A concrete 9x9 grid of placed digits.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position, PositionSet};

/// A concrete Sudoku grid: 81 cells, each empty or holding a digit.
///
/// This is the exchange type at the engine boundary: generated puzzles and
/// solutions are `Grid`s, and the solver builds its candidate representation
/// from one. It has plain value semantics; cloning copies 81 bytes.
///
/// Grids parse from and render to the usual 81-character text form: digits
/// `1`-`9` for filled cells, `.`, `_`, or `0` for empty cells, whitespace
/// ignored. `Display` emits the canonical single line; the alternate form
/// (`{:#}`) renders a 9-row block with box separators.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.filled_count(), 0);
///
/// grid[Position::new(0, 0)] = Some(Digit::D5);
/// assert_eq!(grid.to_string().chars().next(), Some('5'));
///
/// let round_trip: Grid = grid.to_string().parse().unwrap();
/// assert_eq!(round_trip, grid);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> u32 {
        self.filled_positions().len()
    }

    /// Returns the set of filled positions.
    #[must_use]
    pub fn filled_positions(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| self[pos].is_some())
            .collect()
    }

    /// Returns the digits currently placed in a house.
    #[must_use]
    pub fn digits_in(&self, house: House) -> DigitSet {
        house.positions().into_iter().filter_map(|pos| self[pos]).collect()
    }

    /// Checks whether this grid is a complete, valid solution: every cell
    /// filled and every house containing each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some)
            && House::ALL
                .into_iter()
                .all(|house| self.digits_in(house) == DigitSet::ALL)
    }

    /// Checks whether placing `digit` at `pos` would conflict with a digit
    /// already present in the same row, column, or box.
    ///
    /// This is a plain membership scan over the 27 cells of the three houses
    /// of `pos` - no candidate tracking, no propagation - cheap enough to run
    /// on every keystroke for live conflict highlighting. The check is
    /// specified for empty target cells; querying a filled cell against its
    /// own current value returns `false`, since the digit is already present
    /// in all three houses. Clear the cell first to re-validate it.
    #[must_use]
    pub fn is_placement_valid(&self, pos: Position, digit: Digit) -> bool {
        pos.houses()
            .into_iter()
            .all(|house| !self.digits_in(house).contains(digit))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.index())]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[usize::from(pos.index())]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({self})")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self[pos] {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
            if f.alternate() {
                let (row, col) = (pos.row(), pos.col());
                if col == 2 || col == 5 {
                    f.write_str(" ")?;
                } else if col == 8 && row < 8 {
                    f.write_str("\n")?;
                    if row == 2 || row == 5 {
                        f.write_str("\n")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Grid`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, got {len}")]
    BadLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// The input contained a character that is neither a digit, a blank
    /// marker, nor whitespace.
    #[display("invalid cell character {ch:?}")]
    BadCharacter {
        /// The rejected character.
        ch: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::new();
        let mut count = 0usize;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::new(ch as u8 - b'0'),
                _ => return Err(ParseGridError::BadCharacter { ch }),
            };
            if count < 81 {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::from_index(count as u8);
                grid[pos] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::BadLength { len: count });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid.filled_count(), 81);
    }

    #[test]
    fn test_parse_accepts_blank_markers_and_whitespace() {
        let grid: Grid = "
            53_ _7_ ___
            6__ 195 ___
            .98 ... .6.
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            000 080 079
        "
        .parse()
        .unwrap();
        assert_eq!(grid.filled_count(), 30);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid[Position::new(0, 2)], None);
        assert_eq!(grid[Position::new(8, 4)], Some(Digit::D8));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseGridError::BadLength { len: 3 })
        );
        let long = "1".repeat(82);
        assert_eq!(
            long.parse::<Grid>(),
            Err(ParseGridError::BadLength { len: 82 })
        );
        assert_eq!(
            "x".parse::<Grid>(),
            Err(ParseGridError::BadCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_is_solved() {
        let solved: Grid = SOLVED.parse().unwrap();
        assert!(solved.is_solved());

        let mut broken = solved;
        broken[Position::new(0, 0)] = None;
        assert!(!broken.is_solved());

        // complete but with a duplicate in row 0
        let mut duplicate = solved;
        duplicate[Position::new(0, 0)] = duplicate[Position::new(0, 1)];
        assert!(!duplicate.is_solved());
    }

    #[test]
    fn test_placement_validity_matches_house_membership() {
        let mut grid = Grid::new();
        grid[Position::new(4, 4)] = Some(Digit::D7);

        // conflicts in row, column, and box
        assert!(!grid.is_placement_valid(Position::new(4, 0), Digit::D7));
        assert!(!grid.is_placement_valid(Position::new(0, 4), Digit::D7));
        assert!(!grid.is_placement_valid(Position::new(3, 3), Digit::D7));

        // no conflict outside the houses of (4, 4), or with another digit
        assert!(grid.is_placement_valid(Position::new(0, 0), Digit::D7));
        assert!(grid.is_placement_valid(Position::new(4, 0), Digit::D2));
    }

    #[test]
    fn test_placement_on_solved_grid_always_conflicts() {
        // On a complete grid every house already holds every digit, so no
        // placement is conflict-free, including a cell's own current value.
        let solved: Grid = SOLVED.parse().unwrap();
        for pos in Position::ALL {
            for digit in Digit::ALL {
                assert!(!solved.is_placement_valid(pos, digit));
            }
        }
    }

    #[test]
    fn test_alternate_display_is_reparsable() {
        let grid: Grid = SOLVED.parse().unwrap();
        let pretty = format!("{grid:#}");
        assert!(pretty.contains('\n'));
        assert_eq!(pretty.parse::<Grid>().unwrap(), grid);
    }
}
