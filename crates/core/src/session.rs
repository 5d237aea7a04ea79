//! Game session module - the authoritative state machine for one round
//!
//! This module ties together the deck, the selection buffer, the flip-back
//! timer, and the game clock. It owns every mutation of game state: player
//! actions enter through [`GameSession::apply_action`] and time enters
//! through [`GameSession::tick`]. Presentation layers read snapshots and
//! never touch the fields directly.

use arrayvec::ArrayVec;

use crate::clock::GameClock;
use crate::deck::{build_deck, Tile};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, TileView};
use crate::types::{GameAction, Symbol, TileId, FLIP_BACK_DELAY_MS};

/// Deferred flip-back of a failed attempt.
///
/// Owned by the session: replacing or dropping the session cancels the
/// pending resolution, so a timer can never outlive its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FlipBackTimer {
    remaining_ms: u32,
}

impl FlipBackTimer {
    fn armed() -> Self {
        Self {
            remaining_ms: FLIP_BACK_DELAY_MS,
        }
    }

    /// Count down; true once the full delay has elapsed.
    fn fire(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }
}

/// Outcome of the last completed pair-attempt (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEvent {
    /// The two tiles of the attempt, in selection order.
    pub tiles: [TileId; 2],
    pub matched: bool,
    /// True when this attempt completed the board (the win notification).
    pub won: bool,
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameSession {
    tiles: Vec<Tile>,
    /// Face-up tiles awaiting resolution, in selection order.
    selection: ArrayVec<TileId, 2>,
    flip_back: Option<FlipBackTimer>,
    match_count: u32,
    turn_count: u32,
    elapsed_seconds: u32,
    clock: GameClock,
    won: bool,
    started: bool,
    /// Monotonic round id (increments on restart).
    round_id: u32,
    /// Seed the current deck was built from.
    seed: u32,
    rng: SimpleRng,
    symbols: Vec<Symbol>,
    /// Last resolved attempt (consumed by observers).
    last_event: Option<RoundEvent>,
}

impl GameSession {
    /// Create a new session with a deck built from `symbols` and `seed`.
    ///
    /// The deck is the first and only thing drawn from the seeded RNG before
    /// play, so `build_deck(symbols, &mut SimpleRng::new(seed))` reproduces
    /// the exact board layout of this session.
    pub fn new(symbols: &[Symbol], seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let tiles = build_deck(symbols, &mut rng);

        Self {
            tiles,
            selection: ArrayVec::new(),
            flip_back: None,
            match_count: 0,
            turn_count: 0,
            elapsed_seconds: 0,
            clock: GameClock::new(),
            won: false,
            started: false,
            round_id: 0,
            seed,
            rng,
            symbols: symbols.to_vec(),
            last_event: None,
        }
    }

    /// Begin the round and start the game clock. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.clock.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn total_pairs(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// True while two tiles are face-up awaiting the flip-back.
    pub fn resolution_pending(&self) -> bool {
        self.flip_back.is_some()
    }

    /// Take and clear the last attempt outcome.
    pub fn take_last_event(&mut self) -> Option<RoundEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(id) => self.select_tile(id),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    /// Flip the given tile face-up and resolve the attempt when it is the
    /// second selection.
    ///
    /// Rejected as a silent no-op (returns false) when: the round has not
    /// started or is already won, two tiles are pending resolution, the
    /// target is already face-up or matched, or the id is off the board.
    pub fn select_tile(&mut self, id: TileId) -> bool {
        if !self.started || self.won {
            return false;
        }
        // A pending flip-back means the buffer is full: the player cannot
        // interrupt resolution, extra taps are dropped rather than queued.
        if self.selection.is_full() {
            return false;
        }
        let Some(tile) = self.tile_mut(id) else {
            return false;
        };
        if tile.revealed || tile.matched {
            return false;
        }

        tile.revealed = true;
        self.selection.push(id);
        if self.selection.len() < 2 {
            return true;
        }

        // Second tile face-up: the attempt is complete. One turn per
        // completed attempt, counted before resolution.
        self.turn_count += 1;

        let first = self.selection[0];
        let second = self.selection[1];
        let matched = match (self.tile(first), self.tile(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };
        if matched {
            self.resolve_match(first, second);
        } else {
            // Both tiles stay revealed until the timer fires; the full
            // selection buffer blocks further taps meanwhile.
            self.flip_back = Some(FlipBackTimer::armed());
            self.last_event = Some(RoundEvent {
                tiles: [first, second],
                matched: false,
                won: false,
            });
        }

        true
    }

    fn resolve_match(&mut self, first: TileId, second: TileId) {
        for id in [first, second] {
            if let Some(tile) = self.tile_mut(id) {
                tile.matched = true;
            }
        }
        self.match_count += 1;
        self.selection.clear();

        let won = self.match_count == self.total_pairs();
        if won {
            self.won = true;
            self.clock.stop();
            // No flip-back can be armed here (a match resolves
            // synchronously), but the won state must never carry one.
            self.flip_back = None;
        }

        self.last_event = Some(RoundEvent {
            tiles: [first, second],
            matched: true,
            won,
        });
    }

    /// Discard the round and start a fresh one.
    ///
    /// Callable from any state, including mid-flip-back and after a win.
    /// The whole session value is replaced, which cancels the old round's
    /// flip-back timer and clock before the new state exists. The RNG state
    /// carries over so the new deck gets a different shuffle.
    pub fn restart(&mut self) {
        let seed = self.rng.state();
        let symbols = std::mem::take(&mut self.symbols);
        let next_round = self.round_id.wrapping_add(1);

        *self = Self::new(&symbols, seed);
        self.round_id = next_round;
        self.start();
    }

    /// Advance time by `elapsed_ms`: fire a due flip-back and accrue whole
    /// clock seconds. Returns whether any visible state changed.
    ///
    /// The flip-back countdown and the clock touch disjoint state, so their
    /// relative order within one tick is unobservable.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started {
            return false;
        }

        let mut changed = false;

        if let Some(timer) = &mut self.flip_back {
            if timer.fire(elapsed_ms) {
                self.flip_back = None;
                for tile in &mut self.tiles {
                    if !tile.matched {
                        tile.revealed = false;
                    }
                }
                self.selection.clear();
                changed = true;
            }
        }

        let seconds = self.clock.tick(elapsed_ms);
        if seconds > 0 {
            self.elapsed_seconds += seconds;
            changed = true;
        }

        changed
    }

    /// Write a read-only view of the session into an existing snapshot,
    /// reusing its allocations.
    ///
    /// Faces of face-down tiles are withheld so state inspection cannot
    /// reveal the board.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().map(TileView::from));

        out.pending_mismatch = self
            .flip_back
            .map(|_| [self.selection[0], self.selection[1]]);
        out.match_count = self.match_count;
        out.turn_count = self.turn_count;
        out.total_pairs = self.total_pairs();
        out.elapsed_seconds = self.elapsed_seconds;
        out.won = self.won;
        out.started = self.started;
        out.round_id = self.round_id;
    }

    /// Convenience helper that allocates a new snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Build a session around a fixed deck, bypassing the shuffle.
    #[cfg(test)]
    fn with_deck(tiles: Vec<Tile>) -> Self {
        let mut symbols: Vec<Symbol> = Vec::new();
        for tile in &tiles {
            if !symbols.contains(&tile.symbol) {
                symbols.push(tile.symbol);
            }
        }

        let mut session = Self::new(&symbols, 1);
        session.tiles = tiles;
        session
    }
}
