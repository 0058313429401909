//! A game: a player and the board it plays on.

use crate::{
    error::Error,
    grid::Grid,
    player::Player,
    rules::{Life, Rule},
};
use rand::Rng;
use std::io::{self, Write};

/// The line printed above the board.
pub const SEPARATOR: &str = "-------------------------------------";

/// A [`Player`] together with the [`Grid`] it plays on.
///
/// A game has no notion of time. Counting generations and deciding
/// when to stop is left to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game<R: Rule = Life> {
    player: Player<R>,
    grid: Grid,
}

impl<R: Rule> Game<R> {
    /// Creates a game from a player and a grid.
    pub fn new(player: Player<R>, grid: Grid) -> Self {
        Game { player, grid }
    }

    /// Creates a game on a random grid of the given size.
    pub fn with_size<G: Rng + ?Sized>(
        player: Player<R>,
        width: i32,
        height: i32,
        rng: &mut G,
    ) -> Result<Self, Error> {
        Ok(Game::new(player, Grid::random(width, height, rng)?))
    }

    /// The player of the game.
    pub fn player(&self) -> &Player<R> {
        &self.player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The board, for setting up cells by hand.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The separator line followed by the rendered grid.
    pub fn board(&self) -> String {
        format!("{}{}", SEPARATOR, self.grid)
    }

    /// Writes the board and a line break.
    pub fn show_board<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.board())
    }

    /// Plays exactly one generation.
    pub fn play_round(&mut self) -> Result<(), Error> {
        self.player.play(&mut self.grid)
    }
}
