//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`map::KeyCommand`]s and owns the board
//! cursor that decides which tile a flip targets. Turning a `Flip` into a
//! `GameAction::Select` is left to the runner, which knows both the cursor
//! and the session.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit, KeyCommand};
