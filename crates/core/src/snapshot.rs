//! Read-only session snapshots for presentation layers.
//!
//! A snapshot is the only surface the renderer sees. Faces of face-down,
//! unmatched tiles are withheld here rather than in the UI so that no
//! consumer can peek at the board through state inspection.

use crate::deck::Tile;
use crate::types::{Symbol, TileId};

/// One tile as the presentation layer may see it.
///
/// Tiles appear in board (shuffled) order; `id` is what taps must pass back
/// to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub id: TileId,
    /// The face, present only while the tile is face-up or matched.
    pub symbol: Option<Symbol>,
    pub revealed: bool,
    pub matched: bool,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        let visible = tile.revealed || tile.matched;
        Self {
            id: tile.id,
            symbol: visible.then_some(tile.symbol),
            revealed: tile.revealed,
            matched: tile.matched,
        }
    }
}

/// Read-only view of a [`crate::session::GameSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Tiles in board order.
    pub tiles: Vec<TileView>,
    /// The failed attempt currently awaiting its flip-back, if any.
    pub pending_mismatch: Option<[TileId; 2]>,
    pub match_count: u32,
    pub turn_count: u32,
    pub total_pairs: u32,
    pub elapsed_seconds: u32,
    pub won: bool,
    pub started: bool,
    pub round_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.pending_mismatch = None;
        self.match_count = 0;
        self.turn_count = 0;
        self.total_pairs = 0;
        self.elapsed_seconds = 0;
        self.won = false;
        self.started = false;
        self.round_id = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            pending_mismatch: None,
            match_count: 0,
            turn_count: 0,
            total_pairs: 0,
            elapsed_seconds: 0,
            won: false,
            started: false,
            round_id: 0,
        }
    }
}
