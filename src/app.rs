//! Shared event loop for the game binaries.
//!
//! Keyboard input and the enemy timer are serialized onto this single
//! thread: `event::poll` waits with a timeout that expires exactly at the
//! next enemy step, so session transitions never race. After the game
//! ends the loop keeps polling for the quit key; the session ignores any
//! further ticks on its own.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_chase_core::Session;
use tui_chase_input::{handle_key_event, should_quit};
use tui_chase_term::{GameView, TerminalRenderer};
use tui_chase_types::Mode;

/// Seed the enemy walk from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1)
}

/// Run one game to completion (or until the player quits).
pub fn run(mode: Mode) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_loop(&mut term, mode);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_loop(term: &mut TerminalRenderer, mode: Mode) -> Result<()> {
    let mut session = Session::new(mode, clock_seed());
    let view = GameView;

    let tick_duration = Duration::from_millis(mode.enemy_tick_ms());
    let mut last_tick = Instant::now();

    loop {
        // Render.
        term.draw(&view.render(&session))?;

        // Input with timeout until the next enemy step.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = handle_key_event(key) {
                        session.on_player_input(direction)?;
                    }
                }
            }
        }

        // Enemy step.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.on_tick()?;
        }
    }
}
