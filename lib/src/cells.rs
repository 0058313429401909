//! Cells on the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`. Both coordinates are 0-indexed.
pub type Coord = (i32, i32);

/// A snapshot of a single cell: its state and where it is.
///
/// This is a plain value. Changing the [`Grid`](crate::Grid) afterwards
/// does not change a `Cell` that was already read from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Whether the cell is alive.
    pub alive: bool,

    /// The coordinates of the cell.
    pub coord: Coord,
}

impl Cell {
    /// Creates a new cell.
    #[inline]
    pub const fn new(alive: bool, coord: Coord) -> Self {
        Self { alive, coord }
    }

    /// Whether the cell was alive when it was read.
    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// The coordinates of the cell.
    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }
}
