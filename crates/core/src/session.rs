//! Session - event-driven front of a game
//!
//! A `Session` owns one [`GameState`] and one [`GameObserver`]. Every command
//! or elapsed-time feed runs to completion, then queued events are delivered
//! and a fresh snapshot is rendered if anything changed.

use crate::events::GameObserver;
use crate::game_state::{GameConfig, GameState};
use crate::snapshot::GameSnapshot;
use crate::types::Command;

pub struct Session<O: GameObserver> {
    state: GameState,
    observer: O,
    snapshot: GameSnapshot,
}

impl<O: GameObserver> Session<O> {
    /// Wrap a game and render its initial position.
    pub fn new(state: GameState, observer: O) -> Self {
        let mut session = Self {
            snapshot: state.snapshot(),
            state,
            observer,
        };
        session.publish(true);
        session
    }

    pub fn start(config: GameConfig, observer: O) -> Self {
        Self::new(GameState::new(config), observer)
    }

    /// Apply one command. Returns whether the game changed.
    pub fn handle(&mut self, command: Command) -> bool {
        if self.state.is_game_over() {
            return false;
        }
        let changed = self.state.apply_command(command);
        self.publish(changed);
        changed
    }

    /// Feed wall-clock time; returns the drop steps performed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let drops = self.state.tick(elapsed_ms);
        self.publish(drops > 0);
        drops
    }

    fn publish(&mut self, changed: bool) {
        for event in self.state.take_events() {
            event.dispatch(&mut self.observer);
        }
        if changed {
            self.state.snapshot_into(&mut self.snapshot);
            self.observer.render(&self.snapshot);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Last rendered snapshot
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn into_parts(self) -> (GameState, O) {
        (self.state, self.observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::PieceKind;

    #[derive(Default)]
    struct Recorder {
        renders: u32,
        locks: Vec<u8>,
        scores: Vec<(u32, u32)>,
        game_overs: Vec<u32>,
    }

    impl GameObserver for Recorder {
        fn render(&mut self, _snapshot: &GameSnapshot) {
            self.renders += 1;
        }

        fn lines_cleared(&mut self, lines: u8) {
            self.locks.push(lines);
        }

        fn score_changed(&mut self, score: u32, level: u32) {
            self.scores.push((score, level));
        }

        fn game_over(&mut self, final_score: u32) {
            self.game_overs.push(final_score);
        }
    }

    #[test]
    fn renders_initial_position() {
        let session = Session::start(GameConfig::default(), Recorder::default());
        assert_eq!(session.observer().renders, 1);
        assert_eq!(session.snapshot(), &session.state().snapshot());
    }

    #[test]
    fn rejected_command_does_not_render() {
        let state = GameState::from_position(
            GameConfig::default(),
            Board::new(),
            PieceKind::O,
            PieceKind::O,
        );
        let mut session = Session::new(state, Recorder::default());
        for _ in 0..4 {
            assert!(session.handle(Command::MoveLeft));
        }
        assert!(!session.handle(Command::MoveLeft));
        assert_eq!(session.observer().renders, 5);
    }

    #[test]
    fn hard_drop_reports_lock_and_render() {
        let mut session = Session::start(GameConfig::default(), Recorder::default());
        assert!(session.handle(Command::HardDrop));
        assert_eq!(session.observer().locks, vec![0]);
        assert_eq!(session.observer().renders, 2);
        assert_eq!(session.snapshot().pieces_locked, 1);
    }

    #[test]
    fn advance_without_drops_is_silent() {
        let mut session = Session::start(GameConfig::default(), Recorder::default());
        assert_eq!(session.advance(100), 0);
        assert_eq!(session.observer().renders, 1);
        assert_eq!(session.advance(500), 1);
        assert_eq!(session.observer().renders, 2);
    }

    #[test]
    fn game_over_notified_once() {
        let mut session = Session::start(GameConfig::default(), Recorder::default());
        for _ in 0..200 {
            session.handle(Command::HardDrop);
        }
        assert!(session.is_game_over());
        assert_eq!(session.observer().game_overs.len(), 1);
        assert_eq!(session.observer().game_overs[0], session.state().score());

        let renders = session.observer().renders;
        assert!(!session.handle(Command::RotateClockwise));
        assert_eq!(session.advance(60_000), 0);
        assert_eq!(session.observer().renders, renders);
    }
}
