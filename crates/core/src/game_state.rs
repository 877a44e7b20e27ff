//! Game state module - the single owner of board, pieces, score and drop timer
//!
//! Every mutator is total: once the game is over they return without touching
//! anything. Locking runs the full sequence merge -> clear -> score -> spawn,
//! and queues [`GameEvent`]s that a [`crate::Session`] forwards to observers.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::collision::{collides, merge};
use crate::events::GameEvent;
use crate::piece::{try_rotate, Tetromino};
use crate::rng::{PieceGenerator, Randomizer};
use crate::scoring::{apply_clear, drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timer::DropTimer;
use crate::types::{Command, PieceKind};

/// Most timer firings a single `tick` will act on; older lag is discarded.
pub const MAX_CATCH_UP_DROPS: u32 = 8;

/// Pending events kept between drains; the oldest is evicted when full.
pub const EVENT_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Parameters for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub randomizer: Randomizer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            randomizer: Randomizer::Uniform,
        }
    }
}

/// Result of a single-row descent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not move and was locked
    Locked { lines_cleared: u8 },
    /// The game is over; nothing happened
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    next: Tetromino,
    generator: PieceGenerator,
    score: u32,
    level: u32,
    lines: u32,
    pieces_locked: u32,
    drop_timer: DropTimer,
    status: GameStatus,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Start a game on an empty board
    pub fn new(config: GameConfig) -> Self {
        let mut generator = PieceGenerator::new(config.seed, config.randomizer);
        let active = generator.draw();
        let next = generator.draw();
        Self::with_parts(Board::new(), active, next, generator)
    }

    /// Start a game from a prepared board with a chosen active and next piece.
    ///
    /// Later pieces come from the configured generator.
    pub fn from_position(
        config: GameConfig,
        board: Board,
        active: PieceKind,
        next: PieceKind,
    ) -> Self {
        let generator = PieceGenerator::new(config.seed, config.randomizer);
        Self::with_parts(board, active, next, generator)
    }

    fn with_parts(
        board: Board,
        active: PieceKind,
        next: PieceKind,
        generator: PieceGenerator,
    ) -> Self {
        let mut state = Self {
            board,
            active: Tetromino::spawn(active),
            next: Tetromino::spawn(next),
            generator,
            score: 0,
            level: 1,
            lines: 0,
            pieces_locked: 0,
            drop_timer: DropTimer::new(drop_interval_ms(1)),
            status: GameStatus::Running,
            events: ArrayVec::new(),
        };
        log::trace!("spawn {:?} at x={}", state.active.kind, state.active.x);
        if collides(&state.board, &state.active) {
            state.finish();
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_timer.interval_ms()
    }

    pub fn drop_timer(&self) -> &DropTimer {
        &self.drop_timer
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn randomizer(&self) -> Randomizer {
        self.generator.rule()
    }

    /// Apply one player command. Returns whether the state changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::RotateClockwise => self.rotate(),
            Command::SoftDrop => self.soft_drop() != DropOutcome::Ignored,
            Command::HardDrop => self.hard_drop() != DropOutcome::Ignored,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        let moved = self.active.shifted(dx, 0);
        if collides(&self.board, &moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate clockwise with wall kicks; the piece is untouched when every
    /// placement collides.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let board = &self.board;
        match try_rotate(&self.active, |candidate| collides(board, candidate)) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// One drop step on demand. The auto-drop schedule is left alone.
    pub fn soft_drop(&mut self) -> DropOutcome {
        self.step_down()
    }

    /// Descend to the resting position and lock immediately.
    pub fn hard_drop(&mut self) -> DropOutcome {
        if self.is_game_over() {
            return DropOutcome::Ignored;
        }
        let mut landed = self.active;
        loop {
            let below = landed.shifted(0, 1);
            if collides(&self.board, &below) {
                break;
            }
            landed = below;
        }
        self.active = landed;
        let lines_cleared = self.lock_active();
        DropOutcome::Locked { lines_cleared }
    }

    /// Feed wall-clock time to the auto-drop schedule.
    ///
    /// Returns the number of drop steps performed. A step that reschedules the
    /// timer (a scoring clear) ends the tick; the rest of `elapsed_ms` belongs
    /// to the cancelled schedule.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if self.is_game_over() {
            return 0;
        }

        let due = self.drop_timer.advance(elapsed_ms);
        if due > MAX_CATCH_UP_DROPS {
            log::debug!(
                "tick lagged {} drops behind, capping at {}",
                due,
                MAX_CATCH_UP_DROPS
            );
        }

        let mut performed = 0;
        for _ in 0..due.min(MAX_CATCH_UP_DROPS) {
            let generation = self.drop_timer.generation();
            if self.step_down() == DropOutcome::Ignored {
                break;
            }
            performed += 1;
            if self.is_game_over() || self.drop_timer.generation() != generation {
                break;
            }
        }
        performed
    }

    /// y+1, or lock when blocked
    fn step_down(&mut self) -> DropOutcome {
        if self.is_game_over() {
            return DropOutcome::Ignored;
        }
        let below = self.active.shifted(0, 1);
        if collides(&self.board, &below) {
            let lines_cleared = self.lock_active();
            DropOutcome::Locked { lines_cleared }
        } else {
            self.active = below;
            DropOutcome::Fell
        }
    }

    fn lock_active(&mut self) -> u8 {
        let merged = merge(&mut self.board, &self.active);
        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u8;
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        log::debug!(
            "lock {:?} at ({}, {}): {} cells, {} lines",
            self.active.kind,
            self.active.x,
            self.active.y,
            merged.written,
            lines_cleared
        );
        self.push_event(GameEvent::Locked { lines_cleared });

        if lines_cleared > 0 {
            let update = apply_clear(self.score, lines_cleared as u32);
            if update.level != self.level {
                log::info!(
                    "level {} -> {}, drop interval {}ms",
                    self.level,
                    update.level,
                    update.drop_interval_ms
                );
            }
            self.score = update.score;
            self.level = update.level;
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.drop_timer.reschedule(update.drop_interval_ms);
            self.push_event(GameEvent::ScoreChanged {
                score: self.score,
                level: self.level,
            });
        }

        if merged.locked_out() {
            self.finish();
        } else {
            self.spawn_next();
        }
        lines_cleared
    }

    fn spawn_next(&mut self) {
        self.active = self.next.at_spawn();
        self.next = Tetromino::spawn(self.generator.draw());
        log::trace!("spawn {:?} at x={}", self.active.kind, self.active.x);
        if collides(&self.board, &self.active) {
            self.finish();
        }
    }

    fn finish(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.status = GameStatus::GameOver;
        self.drop_timer.cancel();
        log::info!(
            "game over: score {} level {} lines {}",
            self.score,
            self.level,
            self.lines
        );
        self.push_event(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Drain queued events in the order they happened
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Fill an existing snapshot in place (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next.kind;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.drop_interval_ms = self.drop_timer.interval_ms();
        out.game_over = self.is_game_over();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(board: &[&str], active: PieceKind) -> GameState {
        GameState::from_position(
            GameConfig::default(),
            Board::from_ascii(board),
            active,
            PieceKind::T,
        )
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig { seed: 12345, ..Default::default() });
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.drop_interval_ms(), 600);
        assert_eq!(state.active().y, -1);
        assert!(state.drop_timer().is_armed());
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let config = GameConfig { seed: 7, randomizer: Randomizer::Bag7 };
        let mut a = GameState::new(config);
        let mut b = GameState::new(config);
        for _ in 0..10 {
            assert_eq!(a.active().kind, b.active().kind);
            assert_eq!(a.next().kind, b.next().kind);
            a.hard_drop();
            b.hard_drop();
        }
    }

    #[test]
    fn test_move_reverts_on_wall() {
        let mut state = game(&[], PieceKind::O);
        for _ in 0..4 {
            assert!(state.move_left());
        }
        assert_eq!(state.active().x, 0);
        assert!(!state.move_left());
        assert_eq!(state.active().x, 0);

        for _ in 0..8 {
            assert!(state.move_right());
        }
        assert!(!state.move_right());
        assert_eq!(state.active().x, 8);
    }

    #[test]
    fn test_rotate_failure_keeps_piece() {
        let mut state = game(&[], PieceKind::I);
        assert!(state.rotate());
        // Vertical I in a one-column shaft: no horizontal placement fits.
        state.active = state.active.shifted(0, 6);
        let before = *state.active();
        let mut board = Board::new();
        for y in 0..20 {
            for x in 0..10 {
                if x != before.x {
                    board.set(x, y, Some(PieceKind::Z));
                }
            }
        }
        state.board = board;
        assert!(!state.rotate());
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_soft_drop_does_not_touch_timer() {
        let mut state = game(&[], PieceKind::T);
        state.tick(300);
        let generation = state.drop_timer().generation();
        let elapsed = state.drop_timer().elapsed_ms();

        assert_eq!(state.soft_drop(), DropOutcome::Fell);
        assert_eq!(state.active().y, 0);
        assert_eq!(state.drop_timer().generation(), generation);
        assert_eq!(state.drop_timer().elapsed_ms(), elapsed);
    }

    #[test]
    fn test_hard_drop_locks_and_spawns_next() {
        let mut state = game(&[], PieceKind::O);
        let outcome = state.hard_drop();
        assert_eq!(outcome, DropOutcome::Locked { lines_cleared: 0 });
        assert_eq!(state.pieces_locked(), 1);
        assert_eq!(state.board().get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board().get(5, 18), Some(Some(PieceKind::O)));
        assert_eq!(state.active().kind, PieceKind::T);
        assert_eq!(state.active().y, -1);

        let events = state.take_events();
        assert_eq!(events.as_slice(), &[GameEvent::Locked { lines_cleared: 0 }]);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = game(&[], PieceKind::T);
        assert_eq!(state.tick(599), 0);
        assert_eq!(state.active().y, -1);
        assert_eq!(state.tick(1), 1);
        assert_eq!(state.active().y, 0);
        assert_eq!(state.tick(1200), 2);
        assert_eq!(state.active().y, 2);
    }

    #[test]
    fn test_tick_caps_catch_up() {
        let mut state = game(&[], PieceKind::T);
        assert_eq!(state.tick(600 * 50), MAX_CATCH_UP_DROPS);
        assert_eq!(state.active().y, -1 + MAX_CATCH_UP_DROPS as i8);
    }

    #[test]
    fn test_clear_reschedules_timer() {
        let mut state = game(&["IIIIIIIII."], PieceKind::I);
        assert!(state.rotate());
        while state.move_right() {}
        let generation = state.drop_timer().generation();

        assert_eq!(state.hard_drop(), DropOutcome::Locked { lines_cleared: 1 });
        assert_eq!(state.score(), 100);
        assert_eq!(state.lines(), 1);
        assert_eq!(state.level(), 1);
        assert_ne!(state.drop_timer().generation(), generation);
        assert_eq!(state.drop_timer().elapsed_ms(), 0);

        let events = state.take_events();
        assert_eq!(
            events.as_slice(),
            &[
                GameEvent::Locked { lines_cleared: 1 },
                GameEvent::ScoreChanged { score: 100, level: 1 },
            ]
        );
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut rows = vec![".........."; 20];
        rows[1] = "....ZZ....";
        let mut state = game(&rows, PieceKind::O);
        assert_eq!(state.hard_drop(), DropOutcome::Locked { lines_cleared: 0 });
        assert!(state.is_game_over());
        assert!(!state.drop_timer().is_armed());

        let snapshot = state.snapshot();
        assert!(!state.move_left());
        assert!(!state.rotate());
        assert_eq!(state.soft_drop(), DropOutcome::Ignored);
        assert_eq!(state.hard_drop(), DropOutcome::Ignored);
        assert_eq!(state.tick(10_000), 0);
        assert_eq!(state.snapshot(), snapshot);

        let game_overs = state
            .take_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_blocked_spawn_ends_game_immediately() {
        let state = game(&["IIIIIIIIII"; 20], PieceKind::O);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_event_buffer_evicts_oldest() {
        let mut state = game(&[], PieceKind::I);
        for _ in 0..EVENT_CAPACITY + 2 {
            state.push_event(GameEvent::Locked { lines_cleared: 0 });
        }
        state.push_event(GameEvent::ScoreChanged { score: 1, level: 1 });
        let events = state.take_events();
        assert_eq!(events.len(), EVENT_CAPACITY);
        assert_eq!(
            events.last(),
            Some(&GameEvent::ScoreChanged { score: 1, level: 1 })
        );
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = game(&[], PieceKind::O);
        state.soft_drop();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.active.kind, PieceKind::O);
        assert_eq!(snapshot.active.y, 0);
        assert_eq!(snapshot.next, PieceKind::T);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.drop_interval_ms, 600);
        assert!(!snapshot.game_over);
        assert!(snapshot.board.iter().flatten().all(|&c| c == 0));
    }
}
