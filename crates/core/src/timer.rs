//! Drop timer - the periodic auto-drop schedule owned by the game state
//!
//! Time is fed in explicitly (`advance`), so the schedule is deterministic and
//! testable. `reschedule` replaces the running schedule atomically: the
//! generation counter moves on and any time accumulated under the old interval
//! is discarded, so there is never more than one live drop stream.

/// Periodic, cancelable auto-drop schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
    generation: u32,
}

impl DropTimer {
    /// An armed timer firing every `interval_ms`
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: true,
            generation: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next firing
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Identifies the current schedule; bumps on every reschedule or cancel
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Replace the schedule with a fresh one at `interval_ms`.
    pub fn reschedule(&mut self, interval_ms: u32) {
        self.generation = self.generation.wrapping_add(1);
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.armed = true;
    }

    /// Stop firing until rescheduled
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.elapsed_ms = 0;
        self.armed = false;
    }

    /// Feed elapsed time; returns how many firings became due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        let total = self.elapsed_ms.saturating_add(elapsed_ms);
        self.elapsed_ms = total % self.interval_ms;
        total / self.interval_ms
    }
}
