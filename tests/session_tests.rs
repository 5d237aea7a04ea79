//! Session tests - state machine behavior through the public API
//!
//! The deck for a given seed is reproducible with `build_deck`, so these
//! tests derive the board layout a session was built with and then drive it
//! purely through actions, ticks, and snapshots.

use tui_pairs::core::{build_deck, GameSession, SimpleRng, Tile};
use tui_pairs::types::{GameAction, Symbol, TileId, CLOCK_TICK_MS, FLIP_BACK_DELAY_MS};

const SYMBOLS: [Symbol; 3] = ["A", "B", "C"];
const SEED: u32 = 20240806;

fn deck_for(seed: u32) -> Vec<Tile> {
    build_deck(&SYMBOLS, &mut SimpleRng::new(seed))
}

/// Ids of both tiles of each symbol, in deck symbol order.
fn pairs_by_symbol(deck: &[Tile]) -> Vec<[TileId; 2]> {
    SYMBOLS
        .iter()
        .map(|&symbol| {
            let mut ids = deck.iter().filter(|t| t.symbol == symbol).map(|t| t.id);
            [ids.next().unwrap(), ids.next().unwrap()]
        })
        .collect()
}

fn started_session(seed: u32) -> GameSession {
    let mut session = GameSession::new(&SYMBOLS, seed);
    session.start();
    session
}

#[test]
fn test_turns_count_attempts_not_taps() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    session.apply_action(GameAction::Select(pairs[0][0]));
    assert_eq!(session.turn_count(), 0);
    session.apply_action(GameAction::Select(pairs[0][1]));
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.match_count(), 1);
}

#[test]
fn test_mismatch_blocks_taps_until_flip_back() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    session.apply_action(GameAction::Select(pairs[0][0]));
    session.apply_action(GameAction::Select(pairs[1][0]));
    assert_eq!(session.turn_count(), 1);
    assert_eq!(session.match_count(), 0);

    // Third target ignored, not queued.
    assert!(!session.apply_action(GameAction::Select(pairs[2][0])));

    // One millisecond early the board is still locked...
    session.tick(FLIP_BACK_DELAY_MS - 1);
    assert!(!session.apply_action(GameAction::Select(pairs[2][0])));

    // ...and at the full delay it reopens with everything face-down.
    session.tick(1);
    let snap = session.snapshot();
    assert!(snap.tiles.iter().all(|t| !t.revealed));
    assert!(session.apply_action(GameAction::Select(pairs[2][0])));
}

#[test]
fn test_repeated_tap_on_same_tile_is_ignored() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    assert!(session.apply_action(GameAction::Select(pairs[0][0])));
    assert!(!session.apply_action(GameAction::Select(pairs[0][0])));
    assert_eq!(session.turn_count(), 0);

    // The pair can still be completed normally.
    assert!(session.apply_action(GameAction::Select(pairs[0][1])));
    assert_eq!(session.match_count(), 1);
}

#[test]
fn test_full_game_to_win() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    for pair in &pairs {
        session.apply_action(GameAction::Select(pair[0]));
        session.apply_action(GameAction::Select(pair[1]));
    }

    assert!(session.won());
    assert_eq!(session.match_count(), SYMBOLS.len() as u32);
    assert_eq!(session.turn_count(), SYMBOLS.len() as u32);

    let snap = session.snapshot();
    assert!(snap.won);
    assert!(snap.tiles.iter().all(|t| t.matched && t.revealed));
}

#[test]
fn test_clock_stops_at_win() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    session.tick(2 * CLOCK_TICK_MS);
    assert_eq!(session.elapsed_seconds(), 2);

    for pair in &pairs {
        session.apply_action(GameAction::Select(pair[0]));
        session.apply_action(GameAction::Select(pair[1]));
    }
    assert!(session.won());

    session.tick(30 * CLOCK_TICK_MS);
    assert_eq!(session.elapsed_seconds(), 2);
}

#[test]
fn test_taps_after_win_are_rejected() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    for pair in &pairs {
        session.apply_action(GameAction::Select(pair[0]));
        session.apply_action(GameAction::Select(pair[1]));
    }

    for id in 0..session.tile_count() as TileId {
        assert!(!session.apply_action(GameAction::Select(id)));
    }
    assert_eq!(session.turn_count(), SYMBOLS.len() as u32);
}

#[test]
fn test_restart_mid_flip_back_leaves_no_stale_timer() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    session.apply_action(GameAction::Select(pairs[0][0]));
    session.apply_action(GameAction::Select(pairs[1][0]));
    assert!(session.resolution_pending());

    session.apply_action(GameAction::Restart);
    assert_eq!(session.match_count(), 0);
    assert_eq!(session.turn_count(), 0);
    assert_eq!(session.elapsed_seconds(), 0);
    assert!(!session.won());
    assert!(!session.resolution_pending());

    // Reveal one tile of the fresh round and let the old delay pass twice
    // over; a leaked timer would flip it back down.
    let new_deck = build_deck(&SYMBOLS, &mut SimpleRng::new(session.seed()));
    let first_id = new_deck[0].id;
    assert!(session.apply_action(GameAction::Select(first_id)));
    session.tick(2 * FLIP_BACK_DELAY_MS);

    let snap = session.snapshot();
    let tile = snap.tiles.iter().find(|t| t.id == first_id).unwrap();
    assert!(tile.revealed);
}

#[test]
fn test_restart_restarts_clock() {
    let mut session = started_session(SEED);
    session.tick(5 * CLOCK_TICK_MS);
    assert_eq!(session.elapsed_seconds(), 5);

    session.apply_action(GameAction::Restart);
    assert_eq!(session.elapsed_seconds(), 0);
    session.tick(CLOCK_TICK_MS);
    assert_eq!(session.elapsed_seconds(), 1);
}

#[test]
fn test_restart_after_win_plays_again() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    for pair in &pairs {
        session.apply_action(GameAction::Select(pair[0]));
        session.apply_action(GameAction::Select(pair[1]));
    }
    assert!(session.won());
    assert_eq!(session.round_id(), 0);

    session.apply_action(GameAction::Restart);
    assert!(!session.won());
    assert_eq!(session.round_id(), 1);

    // The new round accepts selections again.
    let new_deck = build_deck(&SYMBOLS, &mut SimpleRng::new(session.seed()));
    assert!(session.apply_action(GameAction::Select(new_deck[0].id)));
}

#[test]
fn test_snapshot_never_leaks_face_down_symbols() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    session.apply_action(GameAction::Select(pairs[0][0]));
    session.apply_action(GameAction::Select(pairs[1][0]));

    let snap = session.snapshot();
    for tile in &snap.tiles {
        if tile.revealed || tile.matched {
            assert!(tile.symbol.is_some());
        } else {
            assert_eq!(tile.symbol, None);
        }
    }
}

#[test]
fn test_match_count_tracks_fully_matched_symbols() {
    let deck = deck_for(SEED);
    let pairs = pairs_by_symbol(&deck);
    let mut session = started_session(SEED);

    // Mismatch, then two matches, checking the invariant at every step.
    let steps: [(TileId, TileId); 3] = [
        (pairs[0][0], pairs[1][0]),
        (pairs[0][0], pairs[0][1]),
        (pairs[1][0], pairs[1][1]),
    ];

    for (a, b) in steps {
        session.apply_action(GameAction::Select(a));
        session.apply_action(GameAction::Select(b));
        session.tick(FLIP_BACK_DELAY_MS);

        let snap = session.snapshot();
        let matched_tiles = snap.tiles.iter().filter(|t| t.matched).count() as u32;
        assert_eq!(session.match_count() * 2, matched_tiles);
    }
}
