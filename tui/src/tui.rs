//! Redrawing the frames in place, with crossterm.

use crate::driver::write_frame;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use lifegrid_lib::Config;
use log::info;
use std::{
    io::{self, Write},
    str,
    time::{Duration, Instant},
};

/// Puts the terminal in raw mode on the alternate screen,
/// and restores it when dropped, also on errors.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Draws every frame on the alternate screen, then prints the last one
/// to the normal screen so that it stays visible after exiting.
///
/// [q], [Esc] and [Ctrl-C] stop early.
pub(crate) fn run_with_tui(config: &Config) -> Result<()> {
    let last_frame = {
        let _guard = TerminalGuard::enter()?;
        draw_frames(config, &mut io::stdout())?
    };
    let mut stdout = io::stdout();
    stdout.write_all(&last_frame)?;
    stdout.flush()?;
    Ok(())
}

/// Returns the text of the last frame shown.
fn draw_frames<W: Write>(config: &Config, out: &mut W) -> Result<Vec<u8>> {
    let mut game = config.game()?;
    let delay = config.delay();
    let mut frame_text = Vec::new();
    for frame in 1..=config.frames {
        frame_text.clear();
        write_frame(&mut frame_text, frame, &game)?;
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        // Raw mode: `\n` does not return the cursor to the first column.
        for line in str::from_utf8(&frame_text)?.lines() {
            queue!(out, Print(line), MoveToNextLine(1))?;
        }
        out.flush()?;
        game.play_round()?;
        if wait_for_quit(delay)? {
            info!("Quit at frame {}", frame);
            return Ok(frame_text);
        }
    }
    info!("Finished after {} frames", config.frames);
    Ok(frame_text)
}

/// Waits for `delay`, and returns `true` early if a quit key is pressed.
fn wait_for_quit(delay: Duration) -> Result<bool> {
    let deadline = Instant::now() + delay;
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if !event::poll(timeout)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if is_quit(&key) {
                return Ok(true);
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
