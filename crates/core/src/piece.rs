//! Active piece - kind, current shape and board offset
//!
//! Rotation uses the catalog transform (turn + trim) and a simple wall kick:
//! when the rotated piece collides, horizontal shifts of +1, -1 and +1 from the
//! rotated position are tried in order.

use crate::shapes::{spawn_shape, Shape};
use crate::types::{PieceKind, BOARD_WIDTH, SPAWN_Y};

/// Horizontal kick offsets tried after a colliding rotation, in order.
///
/// Offsets are relative to the rotated position, not cumulative.
pub const KICK_OFFSETS: [i8; 3] = [1, -1, 1];

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Quarter turns applied since spawn, mod 4
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Orientation 0, centered horizontally, one row above the board
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            rotation: 0,
            x: spawn_x(&shape),
            y: SPAWN_Y,
        }
    }

    /// Same shape, moved back to the spawn position
    pub fn at_spawn(self) -> Self {
        Self {
            x: spawn_x(&self.shape),
            y: SPAWN_Y,
            ..self
        }
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (px, py) = (self.x, self.y);
        self.shape.filled().map(move |(dx, dy)| (px + dx, py + dy))
    }

    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// One clockwise turn in place (no collision check)
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            rotation: (self.rotation + 1) % 4,
            ..self
        }
    }
}

/// `floor((width - piece width) / 2)` using the shape's matrix width
fn spawn_x(shape: &Shape) -> i8 {
    ((BOARD_WIDTH as i8) - (shape.cols() as i8)).div_euclid(2)
}

/// Rotate clockwise with the simple kick sequence.
///
/// Returns the first placement for which `collides` is false, or `None` when
/// the plain rotation and every kick collide (the caller keeps the old piece).
pub fn try_rotate(piece: &Tetromino, collides: impl Fn(&Tetromino) -> bool) -> Option<Tetromino> {
    let rotated = piece.rotated();
    if !collides(&rotated) {
        return Some(rotated);
    }

    KICK_OFFSETS
        .iter()
        .map(|&dx| rotated.shifted(dx, 0))
        .find(|candidate| !collides(candidate))
}
