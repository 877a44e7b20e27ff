//! Terminal input module.
//!
//! Maps `crossterm` key events onto game commands and client actions, and
//! turns left-button mouse drags into swipe gestures. No game state lives here.

pub mod gesture;
pub mod map;

pub use blockdrop_types as types;

pub use gesture::{classify_swipe, CellMetrics, Gesture, SwipeDetector};
pub use map::{handle_key_event, InputAction};
