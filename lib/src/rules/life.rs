//! Conway's Game of Life.

use crate::rules::Rule;
use std::fmt::{self, Display, Formatter};

/// Conway's Game of Life, `B3/S23`.
///
/// 1. A living cell with fewer than two living neighbors dies (underpopulation).
/// 2. A living cell with two or three living neighbors survives.
/// 3. A living cell with more than three living neighbors dies (overpopulation).
/// 4. A dead cell with exactly three living neighbors becomes alive (birth).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Life;

impl Rule for Life {
    #[inline]
    fn next_state(&self, alive: bool, living_neighbors: usize) -> bool {
        match living_neighbors {
            // Rules 1 and 3.
            n if !(2..=3).contains(&n) => false,
            // Rule 2.
            _ if alive => true,
            // Rule 4.
            3 => true,
            _ => false,
        }
    }
}

impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B3/S23")
    }
}
