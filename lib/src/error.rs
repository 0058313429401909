//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width and height should be positive: got {width}x{height}.
    InvalidDimension {
        /// The requested width.
        width: i32,
        /// The requested height.
        height: i32,
    },
    /// Cell at {0:?} is outside the grid.
    OutOfBounds(Coord),
}
