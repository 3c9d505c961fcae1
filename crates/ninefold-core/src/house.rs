//! Houses (rows, columns, boxes) and the peer topology derived from them.

use crate::{Position, PositionSet};

/// A Sudoku house: a row, a column, or a 3x3 box.
///
/// There are exactly 27 houses ([`House::ALL`]); a solved grid contains each
/// digit exactly once per house. Every cell belongs to exactly three houses
/// ([`Position::houses`]) and shares a house with exactly 20 other cells, its
/// peers ([`Position::peers`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row(u8),
    /// A column identified by its column index (0-8).
    Column(u8),
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box(u8),
}

impl House {
    /// All 27 houses: rows first, then columns, then boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the member positions of this house.
    #[must_use]
    pub const fn positions(self) -> PositionSet {
        match self {
            House::Row(row) => PositionSet::ROWS[row as usize],
            House::Column(col) => PositionSet::COLUMNS[col as usize],
            House::Box(index) => PositionSet::BOXES[index as usize],
        }
    }

    /// Converts a cell index within the house (0-8) into a [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row(row) => Position::new(row, i),
            House::Column(col) => Position::new(i, col),
            House::Box(index) => Position::from_box(index, i),
        }
    }

    /// Returns `true` if `pos` is a member of this house.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.positions().contains(pos)
    }
}

/// Peer masks for all 81 cells, indexed by [`Position::index`].
const PEERS: [PositionSet; 81] = {
    let mut peers = [PositionSet::EMPTY; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        let pos = Position::from_index(i as u8);
        let mut mask = PositionSet::ROWS[pos.row() as usize]
            .union(PositionSet::COLUMNS[pos.col() as usize])
            .union(PositionSet::BOXES[pos.box_index() as usize]);
        mask.remove(pos);
        peers[i] = mask;
        i += 1;
    }
    peers
};

impl Position {
    /// Returns the three houses containing this position: its row, its
    /// column, and its box.
    #[must_use]
    pub const fn houses(self) -> [House; 3] {
        [
            House::Row(self.row()),
            House::Column(self.col()),
            House::Box(self.box_index()),
        ]
    }

    /// Returns the 20 peers of this position: every other cell sharing its
    /// row, column, or box.
    ///
    /// The relation is symmetric and never contains the position itself.
    #[must_use]
    pub const fn peers(self) -> PositionSet {
        PEERS[self.index() as usize]
    }
}
