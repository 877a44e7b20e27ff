//! Shared types and constants for blockdrop.
//!
//! Everything in here is plain data: piece kinds, the five player commands,
//! board dimensions and the scoring/timing tables. The core engine, the input
//! mappers and the terminal view all speak these types.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn row**: -1, one row above the visible top
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default client frame tick |
//! | `BASE_DROP_MS` | 600 | Auto-drop interval at level 1 |
//! | `DROP_STEP_MS` | 50 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor |
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.code(), 6);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(Command::from_str("jump"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Vertical offset every piece spawns at
pub const SPAWN_Y: i8 = -1;

/// Default frame tick of the terminal client (milliseconds)
pub const TICK_MS: u32 = 16;

/// Auto-drop interval at level 1 (milliseconds)
pub const BASE_DROP_MS: u32 = 600;

/// Auto-drop speed-up per level (milliseconds)
pub const DROP_STEP_MS: u32 = 50;

/// Auto-drop interval floor (milliseconds)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Score needed per level
pub const POINTS_PER_LEVEL: u32 = 500;

/// Points per lock, indexed by lines cleared
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per line when more than four lines clear at once
pub const FALLBACK_POINTS_PER_LINE: u32 = 200;

/// Minimum swipe distance, in pixels, before a gesture counts
pub const SWIPE_THRESHOLD_PX: u32 = 30;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Non-zero cell code used in snapshot grids (0 means empty)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Display color as `(r, g, b)`.
    ///
    /// Presentation only; the engine never looks at it.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xf0, 0xf0),
            PieceKind::J => (0x00, 0x00, 0xf0),
            PieceKind::L => (0xf0, 0xa0, 0x00),
            PieceKind::O => (0xf0, 0xf0, 0x00),
            PieceKind::S => (0x00, 0xf0, 0x00),
            PieceKind::T => (0xa0, 0x00, 0xf0),
            PieceKind::Z => (0xf0, 0x00, 0x00),
        }
    }
}

/// Player commands accepted by the engine.
///
/// These are the only mutators the engine exposes to the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateClockwise,
    SoftDrop,
    HardDrop,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateClockwise,
        Command::SoftDrop,
        Command::HardDrop,
    ];

    /// Parse a command identifier (case-insensitive).
    ///
    /// Unknown identifiers yield `None`; callers drop them.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "rotateclockwise" | "rotatecw" | "rotate" => Some(Command::RotateClockwise),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "harddrop" | "drop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateClockwise => "rotateClockwise",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// Cell on the board (None = empty, Some = settled piece kind)
pub type Cell = Option<PieceKind>;
