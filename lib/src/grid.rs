//! The grid.

use crate::{
    cells::{Cell, Coord},
    error::Error,
    nbhd::Neighborhood,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt::{self, Display, Formatter};

/// Offsets of the eight neighbors, relative to the center cell.
///
/// The neighbors in a [`Neighborhood`] always follow this order.
pub const NBHD: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A bounded board of cells.
///
/// The board does not wrap around: cells outside
/// `[0, width) × [0, height)` simply do not exist.
///
/// Cells are stored in one slice, and the cell at `(x, y)` lives at index
/// `y + x * height`. Note that this is transposed relative to the usual
/// row-major layout, and that [`Display`] still breaks lines every `width`
/// cells. For square boards this only swaps the axes of the picture.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Box<[bool]>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// Both sides must be positive, and the number of cells must fit in an
    /// `i32`, so that every index can be written as `y + x * height`.
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        match width.checked_mul(height) {
            Some(_) if width > 0 && height > 0 => Ok(Grid::dead(width, height)),
            _ => Err(Error::InvalidDimension { width, height }),
        }
    }

    /// Creates a grid where each cell is independently alive with
    /// probability `1/2`.
    pub fn random<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Result<Self, Error> {
        let mut grid = Grid::new(width, height)?;
        grid.randomize(rng);
        Ok(grid)
    }

    /// The dimensions must already be checked.
    fn dead(width: i32, height: i32) -> Self {
        let size = width as usize * height as usize;
        Grid {
            width,
            height,
            cells: vec![false; size].into_boxed_slice(),
        }
    }

    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen();
        }
    }

    /// Width of the grid, the range of the x-coordinate.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid, the range of the y-coordinate.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells, living or dead.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether no cell is alive.
    pub fn is_empty_board(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Whether the coordinates are inside the grid.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    /// Converts the coordinates to an index of the cell slice.
    pub fn index(&self, coord: Coord) -> Result<usize, Error> {
        if self.contains(coord) {
            let (x, y) = coord;
            Ok((y + x * self.height) as usize)
        } else {
            Err(Error::OutOfBounds(coord))
        }
    }

    /// Converts an index of the cell slice back to coordinates.
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let index = index as i32;
        (index / self.height, index % self.height)
    }

    /// Whether the cell at `coord` is alive.
    pub fn is_alive(&self, coord: Coord) -> Result<bool, Error> {
        let index = self.index(coord)?;
        Ok(self.cells[index])
    }

    /// Reads the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, Error> {
        Ok(Cell::new(self.is_alive(coord)?, coord))
    }

    /// Sets the state of the cell at `coord`.
    ///
    /// The grid is left unchanged if `coord` is outside the grid.
    pub fn set(&mut self, coord: Coord, alive: bool) -> Result<(), Error> {
        let index = self.index(coord)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Makes the cell at `coord` alive.
    pub fn activate(&mut self, coord: Coord) -> Result<(), Error> {
        self.set(coord, true)
    }

    /// Makes the cell at `coord` dead.
    pub fn deactivate(&mut self, coord: Coord) -> Result<(), Error> {
        self.set(coord, false)
    }

    /// Collects the cells around the cell at `index`.
    fn neighbors(&self, index: usize) -> Vec<Cell> {
        let (x, y) = self.coord_of(index);
        NBHD.iter()
            .filter_map(|&(dx, dy)| self.cell((x + dx, y + dy)).ok())
            .collect()
    }

    fn neighborhood_at(&self, index: usize) -> Neighborhood {
        let center = Cell::new(self.cells[index], self.coord_of(index));
        Neighborhood::new(center, self.neighbors(index))
    }

    /// The neighborhood of the cell at `coord`.
    pub fn neighborhood(&self, coord: Coord) -> Result<Neighborhood, Error> {
        let index = self.index(coord)?;
        Ok(self.neighborhood_at(index))
    }

    /// The neighborhoods of all cells, in index order.
    ///
    /// This is a snapshot of the current generation. The returned values
    /// do not change when the grid is modified later.
    pub fn neighborhoods(&self) -> Vec<Neighborhood> {
        (0..self.len()).map(|i| self.neighborhood_at(i)).collect()
    }

    /// Renders the grid as text. Same as the [`Display`] output.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

/// A random 10 × 10 grid.
impl Default for Grid {
    fn default() -> Self {
        let mut grid = Grid::dead(10, 10);
        grid.randomize(&mut StdRng::from_entropy());
        grid
    }
}

/// Two characters per cell: `" *"` for a living cell, `"  "` for a dead one.
///
/// A line break is put before every `width`-th cell, with a space before
/// each break except the first, and a space after the last cell.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.width as usize;
        for (i, &alive) in self.cells.iter().enumerate() {
            if i % width == 0 {
                if i > 0 {
                    f.write_str(" ")?;
                }
                f.write_str("\n")?;
            }
            f.write_str(if alive { " *" } else { "  " })?;
        }
        f.write_str(" ")
    }
}
