//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, UI rendering).

/// Default board geometry: 8 pairs laid out 4 tiles per row.
pub const BOARD_PAIRS: usize = 8;
pub const BOARD_COLUMNS: usize = 4;

/// Largest board the core supports (tile ids are `u8`).
pub const MAX_PAIRS: usize = 127;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 33;
pub const FLIP_BACK_DELAY_MS: u32 = 1000;
pub const CLOCK_TICK_MS: u32 = 1000;

/// Identifier of a tile on the board, stable for one round.
pub type TileId = u8;

/// A tile face. The default pool uses emoji faces, drawn as-is by the
/// terminal renderer.
pub type Symbol = &'static str;

/// Default symbol pool for a standard round.
pub const DEFAULT_SYMBOLS: [Symbol; BOARD_PAIRS] =
    ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the tile with the given id face-up.
    Select(TileId),
    /// Discard the round and start a fresh one.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbols_are_distinct() {
        for (i, a) in DEFAULT_SYMBOLS.iter().enumerate() {
            for b in DEFAULT_SYMBOLS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_board_fills_whole_rows() {
        assert_eq!((BOARD_PAIRS * 2) % BOARD_COLUMNS, 0);
    }

    #[test]
    fn test_default_board_fits_tile_id_range() {
        assert!(BOARD_PAIRS <= MAX_PAIRS);
    }
}
