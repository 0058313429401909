//! Conway's Game of Life on a bounded grid.
//!
//! A [`Grid`] holds the cells. A [`Player`] reads every [`Neighborhood`]
//! of the grid, asks its [`Rule`] for the next state of each cell,
//! and writes the results back. A [`Game`] puts a player and a grid together.

mod cells;
mod config;
mod error;
mod game;
mod grid;
mod nbhd;
mod player;
pub mod rules;

pub use cells::{Cell, Coord};
pub use config::Config;
pub use error::Error;
pub use game::{Game, SEPARATOR};
pub use grid::{Grid, NBHD};
pub use nbhd::Neighborhood;
pub use player::Player;
pub use rules::{Life, Rule};
