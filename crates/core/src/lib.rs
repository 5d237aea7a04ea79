//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing
//! logic of the pairs game. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces the identical deck and game
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: deck construction - two tiles per symbol, Fisher-Yates shuffled
//! - [`session`]: the game state machine - selection, resolution, win detection
//! - [`clock`]: the 1 Hz game clock and `MM:SS` formatting
//! - [`snapshot`]: read-only state views for presentation layers
//! - [`rng`]: seeded LCG used for shuffling
//!
//! # Game Rules
//!
//! - Tiles are revealed two at a time; a matching pair locks face-up.
//! - A failed attempt flips both tiles back down after a fixed 1000 ms delay;
//!   further taps are ignored (not queued) while the flip-back is pending.
//! - One turn is counted per completed two-tile attempt.
//! - The round is won when every pair is matched; the clock stops there.
//! - Restart replaces the whole session, cancelling any pending timers.
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::GameSession;
//! use tui_pairs_types::GameAction;
//!
//! // Create and start a round with two pairs.
//! let mut session = GameSession::new(&["A", "B"], 12345);
//! session.start();
//!
//! // Flip two tiles; time advances only through tick().
//! session.apply_action(GameAction::Select(0));
//! session.apply_action(GameAction::Select(1));
//! session.tick(1000);
//!
//! assert_eq!(session.turn_count(), 1);
//! ```
//!
//! # Timing
//!
//! All time enters through [`GameSession::tick`] with elapsed milliseconds;
//! the flip-back delay and the game clock are countdown fields, never
//! threads or OS timers. Call `tick` every frame from the event loop.

pub mod clock;
pub mod deck;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use clock::{format_elapsed, GameClock};
pub use deck::{build_deck, Tile};
pub use rng::SimpleRng;
pub use session::{GameSession, RoundEvent};
pub use snapshot::{GameSnapshot, TileView};
