//! Mouse drags interpreted as directional swipes.
//!
//! A press/release pair becomes a swipe when its pixel delta reaches the
//! threshold on at least one axis. The dominant axis picks the command; a tie
//! goes to the vertical axis. Short drags are reported as taps so the caller
//! can hit-test on-screen buttons.

use crate::types::{Command, SWIPE_THRESHOLD_PX};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pixel size of one terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8,
            height_px: 16,
        }
    }
}

/// Classify a pixel delta (`dy` grows downward).
pub fn classify_swipe(dx: i32, dy: i32, threshold_px: u32) -> Option<Command> {
    let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
    if ax < threshold_px && ay < threshold_px {
        return None;
    }
    if ax > ay {
        Some(if dx < 0 {
            Command::MoveLeft
        } else {
            Command::MoveRight
        })
    } else if dy > 0 {
        Some(Command::SoftDrop)
    } else {
        Some(Command::RotateClockwise)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(Command),
    /// Released close to where it was pressed
    Tap { column: u16, row: u16 },
}

/// Tracks one left-button drag at a time
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    metrics: CellMetrics,
    threshold_px: u32,
    pressed_at: Option<(u16, u16)>,
}

impl SwipeDetector {
    pub fn new(threshold_px: u32) -> Self {
        Self::with_metrics(threshold_px, CellMetrics::default())
    }

    pub fn with_metrics(threshold_px: u32, metrics: CellMetrics) -> Self {
        Self {
            metrics,
            threshold_px: threshold_px.max(1),
            pressed_at: None,
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.pressed_at = Some((column, row));
    }

    /// Finish the drag. Returns `None` when no press was recorded.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Gesture> {
        let (start_col, start_row) = self.pressed_at.take()?;
        let dx = (column as i32 - start_col as i32) * self.metrics.width_px as i32;
        let dy = (row as i32 - start_row as i32) * self.metrics.height_px as i32;
        Some(match classify_swipe(dx, dy, self.threshold_px) {
            Some(command) => Gesture::Swipe(command),
            None => Gesture::Tap {
                column: start_col,
                row: start_row,
            },
        })
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(event.column, event.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column, event.row),
            _ => None,
        }
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn short_deltas_are_not_swipes() {
        assert_eq!(classify_swipe(0, 0, 30), None);
        assert_eq!(classify_swipe(29, -29, 30), None);
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(classify_swipe(-40, 10, 30), Some(Command::MoveLeft));
        assert_eq!(classify_swipe(40, -35, 30), Some(Command::MoveRight));
        assert_eq!(classify_swipe(5, 31, 30), Some(Command::SoftDrop));
        assert_eq!(classify_swipe(-5, -60, 30), Some(Command::RotateClockwise));
    }

    #[test]
    fn ties_resolve_vertically() {
        assert_eq!(classify_swipe(32, 32, 30), Some(Command::SoftDrop));
        assert_eq!(classify_swipe(-32, -32, 30), Some(Command::RotateClockwise));
    }

    #[test]
    fn drag_in_cells_is_scaled_to_pixels() {
        let mut detector = SwipeDetector::default();
        // 4 columns = 32px
        detector.press(10, 5);
        assert_eq!(detector.release(14, 5), Some(Gesture::Swipe(Command::MoveRight)));

        // 1 row = 16px: a tap
        detector.press(10, 5);
        assert_eq!(
            detector.release(10, 6),
            Some(Gesture::Tap { column: 10, row: 5 })
        );

        // 2 rows = 32px
        detector.press(10, 5);
        assert_eq!(detector.release(10, 3), Some(Gesture::Swipe(Command::RotateClockwise)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut detector = SwipeDetector::default();
        assert_eq!(detector.release(3, 3), None);
    }

    #[test]
    fn mouse_events_drive_the_detector() {
        let mut detector = SwipeDetector::new(30);
        assert_eq!(
            detector.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 20, 2)),
            None
        );
        assert_eq!(
            detector.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 4)),
            None
        );
        assert_eq!(
            detector.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 4)),
            Some(Gesture::Swipe(Command::SoftDrop))
        );
        assert_eq!(
            detector.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Right), 0, 0)),
            None
        );
    }
}
