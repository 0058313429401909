//! Printing frames to a plain console.

use anyhow::Result;
use lifegrid_lib::{Config, Game, Rule};
use log::info;
use std::{io::Write, thread, time::Duration};

/// Writes the header line and the board of one frame.
///
/// Frames are numbered from 1.
pub(crate) fn write_frame<R: Rule, W: Write + ?Sized>(
    out: &mut W,
    frame: u64,
    game: &Game<R>,
) -> Result<()> {
    writeln!(out, "Frame {}:", frame)?;
    game.show_board(out)?;
    Ok(())
}

/// Shows `frames` frames of the game, playing one round after each.
pub(crate) fn play<R: Rule, W: Write + ?Sized>(
    game: &mut Game<R>,
    frames: u64,
    delay: Duration,
    out: &mut W,
) -> Result<()> {
    for frame in 1..=frames {
        write_frame(out, frame, game)?;
        out.flush()?;
        game.play_round()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

/// Runs the whole game described by the configuration.
pub(crate) fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> Result<()> {
    let mut game = config.game()?;
    play(&mut game, config.frames, config.delay(), out)?;
    info!("Finished after {} frames", config.frames);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_lib::{Grid, Life, Player, SEPARATOR};
    use std::error::Error;

    #[test]
    fn blinker_frames() -> Result<(), Box<dyn Error>> {
        let mut grid = Grid::new(3, 3)?;
        for coord in [(1, 0), (1, 1), (1, 2)] {
            grid.activate(coord)?;
        }
        let mut game = Game::new(Player::new(Life), grid);
        let mut out = Vec::new();
        play(&mut game, 3, Duration::ZERO, &mut out)?;

        let even = format!("{}\n       \n * * * \n       \n", SEPARATOR);
        let odd = format!("{}\n   *   \n   *   \n   *   \n", SEPARATOR);
        assert_eq!(
            String::from_utf8(out)?,
            format!(
                "Frame 1:\n{}Frame 2:\n{}Frame 3:\n{}",
                even, odd, even
            )
        );
        Ok(())
    }

    #[test]
    fn seeded_run() -> Result<(), Box<dyn Error>> {
        let config = Config::new(6, 4).set_frames(2).set_delay_ms(0).set_seed(7);
        let mut out = Vec::new();
        run(&config, &mut out)?;

        let mut game = config.game()?;
        let mut expected = Vec::new();
        write_frame(&mut expected, 1, &game)?;
        game.play_round()?;
        write_frame(&mut expected, 2, &game)?;
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn zero_frames() -> Result<(), Box<dyn Error>> {
        let mut out = Vec::new();
        run(&Config::new(2, 2).set_frames(0), &mut out)?;
        assert!(out.is_empty());
        Ok(())
    }
}
