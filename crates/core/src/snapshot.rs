use serde::Serialize;

use crate::piece::Tetromino;
use crate::shapes::{spawn_shape, MAX_SHAPE_SIZE};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    pub rows: u8,
    pub cols: u8,
    pub shape: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ActiveSnapshot {
    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(move |(dx, _)| (self.x + dx as i8, self.y + dy as i8))
        })
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            rows: value.shape.rows(),
            cols: value.shape.cols(),
            shape: value.shape.to_grid(),
        }
    }
}

/// Read-only view of a game, refreshed after every completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise [`PieceKind::code`]
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Preview grid of the queued piece in its spawn orientation
    pub fn next_shape(&self) -> [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        spawn_shape(self.next).to_grid()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(Tetromino::spawn(PieceKind::I)),
            next: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            pieces_locked: 0,
            drop_interval_ms: crate::types::BASE_DROP_MS,
            game_over: false,
        }
    }
}
