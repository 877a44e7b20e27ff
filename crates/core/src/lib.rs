//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and the state machine that drives them.
//! It has **no dependencies** on terminals, input devices or I/O:
//!
//! - **Deterministic**: the same seed and the same command/time feed produce
//!   the same game
//! - **Total**: no operation fails; game over is a state, not an error
//! - **Allocation-free**: board, shapes, snapshot and event queue are inline
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece matrices and the clockwise turn + trim transform
//! - [`board`]: 10x20 cell grid and line clearing
//! - [`piece`]: the active piece and the three-step wall kick
//! - [`collision`]: collision test and merge-on-lock
//! - [`scoring`]: points per clear, level from score, drop interval from level
//! - [`timer`]: the cancelable auto-drop schedule
//! - [`rng`]: seeded uniform and 7-bag piece generation
//! - [`game_state`]: spawn / move / rotate / drop / lock / game over
//! - [`snapshot`]: the read-only view handed to presentation layers
//! - [`events`], [`session`]: observer callbacks and the event-driven front
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{GameConfig, GameState};
//! use blockdrop_core::types::Command;
//!
//! let mut game = GameState::new(GameConfig { seed: 12345, ..Default::default() });
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::RotateClockwise);
//! game.apply_command(Command::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! Time is never read from a clock here. Callers feed elapsed milliseconds to
//! [`GameState::tick`]; the [`DropTimer`] turns that into drop steps.

pub use blockdrop_types as types;

pub mod board;
pub mod collision;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use board::{Board, ClearedRows};
pub use collision::{collides, merge, Merge};
pub use events::{GameEvent, GameObserver};
pub use game_state::{
    DropOutcome, GameConfig, GameState, GameStatus, EVENT_CAPACITY, MAX_CATCH_UP_DROPS,
};
pub use piece::{try_rotate, Tetromino, KICK_OFFSETS};
pub use rng::{PieceGenerator, Randomizer, SimpleRng};
pub use scoring::{apply_clear, drop_interval_ms, level_for_score, score_for_lines, ScoreUpdate};
pub use session::Session;
pub use shapes::{spawn_shape, Shape, MAX_SHAPE_SIZE};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::DropTimer;
