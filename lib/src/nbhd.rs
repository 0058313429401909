//! Neighborhoods of cells.

use crate::cells::{Cell, Coord};

/// A cell together with the cells around it.
///
/// Only neighbors inside the grid are stored, so a cell on an edge
/// has 5 neighbors and a cell in a corner has 3.
/// The neighbors are in the order of [`NBHD`](crate::NBHD).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    center: Cell,
    neighbors: Vec<Cell>,
}

impl Neighborhood {
    pub(crate) fn new(center: Cell, neighbors: Vec<Cell>) -> Self {
        debug_assert!(neighbors.len() <= 8);
        Self { center, neighbors }
    }

    /// The cell in the middle.
    #[inline]
    pub fn center(&self) -> Cell {
        self.center
    }

    /// The neighbors inside the grid.
    #[inline]
    pub fn neighbors(&self) -> &[Cell] {
        &self.neighbors
    }

    /// Whether the cell in the middle is alive.
    #[inline]
    pub fn cell_status(&self) -> bool {
        self.center.alive
    }

    /// Where the cell in the middle is.
    #[inline]
    pub fn cell_location(&self) -> Coord {
        self.center.coord
    }

    /// Number of living neighbors. The center itself is never counted.
    pub fn count_alive_neighbors(&self) -> usize {
        self.neighbors.iter().filter(|cell| cell.alive).count()
    }
}
