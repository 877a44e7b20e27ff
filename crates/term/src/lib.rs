//! Terminal presentation layer.
//!
//! Renders game snapshots into a framebuffer and flushes it to the terminal
//! with crossterm. No widget toolkit: the view owns every cell, which keeps the
//! board at a 2:1 column-to-row aspect and makes button hit-testing exact.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport, BUTTONS};
pub use renderer::{changed_runs, encode_runs, Run, TerminalRenderer};
