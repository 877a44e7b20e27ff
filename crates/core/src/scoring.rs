//! Scoring module - points per lock, level from score, drop speed from level
//!
//! - 1/2/3/4 lines award 100/300/500/800; larger clears fall back to 200 per line.
//! - Level is `score / 500 + 1`.
//! - The auto-drop interval starts at 600ms and shrinks 50ms per level, floored at 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, FALLBACK_POINTS_PER_LINE, LINE_SCORES,
    POINTS_PER_LEVEL,
};

/// Points awarded for clearing `lines` rows in a single lock
pub fn score_for_lines(lines: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&points) => points,
        None => lines.saturating_mul(FALLBACK_POINTS_PER_LINE),
    }
}

/// Level derived from cumulative score (starts at 1)
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Auto-drop interval for a level (milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Session values after a scoring clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub points: u32,
    pub score: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

/// Apply a clear of `lines` rows to the current score.
pub fn apply_clear(score: u32, lines: u32) -> ScoreUpdate {
    let points = score_for_lines(lines);
    let score = score.saturating_add(points);
    let level = level_for_score(score);
    ScoreUpdate {
        points,
        score,
        level,
        drop_interval_ms: drop_interval_ms(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(score_for_lines(0), 0);
        assert_eq!(score_for_lines(1), 100);
        assert_eq!(score_for_lines(2), 300);
        assert_eq!(score_for_lines(3), 500);
        assert_eq!(score_for_lines(4), 800);
    }

    #[test]
    fn test_oversized_clears_fall_back() {
        assert_eq!(score_for_lines(5), 1000);
        assert_eq!(score_for_lines(6), 1200);
        assert_eq!(score_for_lines(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(500), 2);
        assert_eq!(level_for_score(1300), 3);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 600);
        assert_eq!(drop_interval_ms(2), 550);
        assert_eq!(drop_interval_ms(10), 150);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(50), 100);
        assert_eq!(drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_level_zero_is_treated_as_level_one() {
        assert_eq!(drop_interval_ms(0), 600);
    }

    #[test]
    fn test_apply_clear() {
        let update = apply_clear(400, 1);
        assert_eq!(
            update,
            ScoreUpdate {
                points: 100,
                score: 500,
                level: 2,
                drop_interval_ms: 550,
            }
        );

        let tetris = apply_clear(0, 4);
        assert_eq!(tetris.points, 800);
        assert_eq!(tetris.level, 2);
    }
}
