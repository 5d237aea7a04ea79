//! Deck builder - paired tiles in a uniformly shuffled order

use crate::rng::SimpleRng;
use crate::types::{Symbol, TileId, MAX_PAIRS};

/// One tile on the board.
///
/// Invariant: `matched` implies `revealed`. The id is assigned before
/// shuffling and stays stable for the whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub symbol: Symbol,
    pub revealed: bool,
    pub matched: bool,
}

impl Tile {
    /// Create a face-down, unmatched tile.
    pub const fn new(id: TileId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }
}

/// Build a shuffled deck of `2 * symbols.len()` tiles, two per symbol.
///
/// Ids cover `[0, 2N)` in the unshuffled order (first copies `0..N`, second
/// copies `N..2N`); the returned sequence is a Fisher-Yates permutation of
/// that pairing. All tiles start face-down.
///
/// Preconditions (caller bugs, checked in debug builds): at least one
/// symbol, no duplicate symbols, at most [`MAX_PAIRS`] symbols.
pub fn build_deck(symbols: &[Symbol], rng: &mut SimpleRng) -> Vec<Tile> {
    debug_assert!(!symbols.is_empty(), "deck needs at least one symbol");
    debug_assert!(symbols.len() <= MAX_PAIRS, "deck exceeds tile id range");
    debug_assert!(
        symbols
            .iter()
            .enumerate()
            .all(|(i, s)| !symbols[..i].contains(s)),
        "deck symbols must be distinct"
    );

    let mut tiles: Vec<Tile> = symbols
        .iter()
        .chain(symbols.iter())
        .enumerate()
        .map(|(id, &symbol)| Tile::new(id as TileId, symbol))
        .collect();

    rng.shuffle(&mut tiles);
    tiles
}
