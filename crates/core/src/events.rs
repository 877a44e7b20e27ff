//! Game events and the observer interface for presentation layers.

use serde::Serialize;

use crate::snapshot::GameSnapshot;

/// Something observable that happened during a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece was committed to the board
    Locked { lines_cleared: u8 },
    /// Score (and possibly level) changed after a clear
    ScoreChanged { score: u32, level: u32 },
    /// The session ended; emitted exactly once
    GameOver { final_score: u32 },
}

/// Callbacks invoked by [`crate::Session`] after each transition.
///
/// All methods default to no-ops so presenters only implement what they show.
pub trait GameObserver {
    /// A state-changing operation completed
    fn render(&mut self, _snapshot: &GameSnapshot) {}

    /// A piece locked; `lines_cleared` may be zero
    fn lines_cleared(&mut self, _lines_cleared: u8) {}

    fn score_changed(&mut self, _score: u32, _level: u32) {}

    /// Delivered once per session
    fn game_over(&mut self, _final_score: u32) {}
}

impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn render(&mut self, snapshot: &GameSnapshot) {
        (**self).render(snapshot)
    }

    fn lines_cleared(&mut self, lines_cleared: u8) {
        (**self).lines_cleared(lines_cleared)
    }

    fn score_changed(&mut self, score: u32, level: u32) {
        (**self).score_changed(score, level)
    }

    fn game_over(&mut self, final_score: u32) {
        (**self).game_over(final_score)
    }
}

impl GameEvent {
    /// Forward this event to the matching observer callback
    pub fn dispatch(&self, observer: &mut impl GameObserver) {
        match *self {
            GameEvent::Locked { lines_cleared } => observer.lines_cleared(lines_cleared),
            GameEvent::ScoreChanged { score, level } => observer.score_changed(score, level),
            GameEvent::GameOver { final_score } => observer.game_over(final_score),
        }
    }
}
