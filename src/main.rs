//! Terminal pairs runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The loop below is the game's single event
//! queue: key presses and tick deadlines are handled strictly in order, and
//! all state changes go through the session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::core::{GameSession, GameSnapshot};
use tui_pairs::input::{handle_key_event, should_quit, Cursor, KeyCommand};
use tui_pairs::term::{GameView, TerminalRenderer, Viewport};
use tui_pairs::types::{GameAction, BOARD_COLUMNS, DEFAULT_SYMBOLS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(&DEFAULT_SYMBOLS, launch_seed());
    session.start();

    let view = GameView::default();
    let mut cursor = Cursor::new(session.tile_count(), BOARD_COLUMNS);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let cursor_id = snap.tiles.get(cursor.index()).map(|t| t.id);
        let fb = view.render(&snap, cursor_id, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(command) = handle_key_event(key) {
                        match command {
                            KeyCommand::Flip => {
                                if let Some(id) = cursor_id {
                                    session.apply_action(GameAction::Select(id));
                                }
                            }
                            KeyCommand::Restart => {
                                session.apply_action(GameAction::Restart);
                            }
                            movement => {
                                cursor.apply(movement);
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}

/// Per-launch deck seed. The core stays deterministic for a given seed;
/// only the entrypoint reaches for wall-clock entropy.
fn launch_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
