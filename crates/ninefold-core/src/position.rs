//! Board position (row, column) coordinate types.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// Row labels used by the `A1`-`I9` addressing scheme, top row first.
pub const ROW_LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// A cell coordinate on the 9x9 board.
///
/// Rows and columns are 0-based, row 0 at the top and column 0 at the left.
/// Every position is equivalently addressable by a two-character label: a row
/// letter `A`-`I` followed by a 1-based column digit `1`-`9`. `Display` and
/// `FromStr` use the label form; the two schemes convert through fixed
/// lookup tables.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.to_string(), "E5");
/// assert_eq!("E5".parse::<Position>().unwrap(), pos);
/// assert_eq!(pos.index(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from 0-based row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "row and column must be 0-8");
        Self { row, col }
    }

    /// Creates a position from its row-major linear index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81, "position index must be 0-80");
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, row-major within the box).
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9, "box and cell index must be 0-8");
        Self {
            row: (box_index / 3) * 3 + cell / 3,
            col: (box_index % 3) * 3 + cell % 3,
        }
    }

    /// Returns the 0-based row (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the 0-based column (0 = left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major linear index (`row * 9 + col`, 0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.row * 9 + self.col
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LETTERS[self.row as usize], self.col + 1)
    }
}

/// Error returned when parsing a [`Position`] label fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid position label {label:?}: expected a row letter A-I followed by a column digit 1-9")]
pub struct ParsePositionError {
    /// The rejected input.
    pub label: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            label: s.to_owned(),
        };
        let mut chars = s.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter.to_ascii_uppercase(), digit),
            _ => return Err(err()),
        };
        let row = ROW_LETTERS
            .iter()
            .position(|&l| l == letter)
            .ok_or_else(err)?;
        let col = digit
            .to_digit(10)
            .filter(|d| (1u32..=9).contains(d))
            .ok_or_else(err)?;
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = (row as u8, (col - 1) as u8);
        Ok(Self::new(row, col))
    }
}
