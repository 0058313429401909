//! Game configuration.

use crate::{error::Error, game::Game, player::Player, rules::Life};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game configuration.
///
/// The game will be generated from this configuration.
/// The driver loop reads [`frames`](#structfield.frames) and
/// [`delay_ms`](#structfield.delay_ms); the game itself only needs the size
/// and the seed.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 50)]
    pub width: i32,

    /// Height.
    #[educe(Default = 50)]
    pub height: i32,

    /// Number of frames to show.
    #[educe(Default = 1000)]
    pub frames: u64,

    /// Delay between two frames, in milliseconds.
    #[educe(Default = 150)]
    pub delay_ms: u64,

    /// Seed of the initial board.
    ///
    /// `None` means that the board is seeded from the system entropy,
    /// so every run is different.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the number of frames.
    pub fn set_frames(mut self, frames: u64) -> Self {
        self.frames = frames;
        self
    }

    /// Sets the delay between two frames, in milliseconds.
    pub fn set_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sets the seed.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Delay between two frames.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Creates a new game with a random board from the configuration.
    /// Returns an error if the width or the height is not positive.
    pub fn game(&self) -> Result<Game<Life>, Error> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::with_size(Player::new(Life), self.width, self.height, &mut rng)?;
        debug!(
            "new {}x{} game, seed: {:?}, {} living cells",
            self.width,
            self.height,
            self.seed,
            game.grid().cell_count()
        );
        Ok(game)
    }
}
