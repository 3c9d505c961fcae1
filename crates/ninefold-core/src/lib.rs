//! Core data structures for the ninefold Sudoku engine.
//!
//! This crate defines the board vocabulary shared by the solver and the
//! generator:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`DigitSet`]: a 9-bit set of digits, used as a per-cell candidate set
//! - [`Position`]: a (row, column) board coordinate, also addressable by
//!   `A1`-`I9` labels
//! - [`PositionSet`]: an 81-bit set of board positions
//! - [`House`]: the 27 units (rows, columns, boxes) and the peer topology
//!   derived from them
//! - [`Grid`]: a concrete 9x9 grid of placed digits, with text parsing,
//!   formatting, and the placement validator used for live conflict checks
//!
//! The topology (house membership, peers of a cell) is encoded in `const`
//! tables and never mutated; all grid types have plain value semantics.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! let pos: Position = "E5".parse()?;
//! grid[pos] = Some(Digit::D7);
//!
//! // 7 now conflicts everywhere in row E, column 5, and the center box
//! assert!(!grid.is_placement_valid(Position::new(4, 0), Digit::D7));
//! assert!(grid.is_placement_valid(Position::new(0, 0), Digit::D7));
//! # Ok::<(), ninefold_core::ParsePositionError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::{ParsePositionError, Position},
    position_set::PositionSet,
};
