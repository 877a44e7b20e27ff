//! Collision and merge - pure functions over a board and a piece
//!
//! Cells above the visible board (negative rows) are only checked against the
//! side walls, never against board contents, so pieces can spawn partially
//! off-screen.

use crate::board::Board;
use crate::piece::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece` overlaps a wall, the floor, or a settled cell.
pub fn collides(board: &Board, piece: &Tetromino) -> bool {
    piece.cells().any(|(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Outcome of committing a piece into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Merge {
    /// Cells written into the board
    pub written: u8,
    /// Cells dropped because they were still above row 0
    pub above_top: u8,
}

impl Merge {
    /// The piece locked before fully entering the board
    pub fn locked_out(&self) -> bool {
        self.above_top > 0
    }
}

/// Write the piece's kind into every cell it covers at row 0 or below.
pub fn merge(board: &mut Board, piece: &Tetromino) -> Merge {
    let mut result = Merge::default();
    for (x, y) in piece.cells() {
        if y < 0 {
            result.above_top += 1;
        } else if board.set(x, y, Some(piece.kind)) {
            result.written += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn spawned_pieces_fit_an_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&board, &Tetromino::spawn(kind)), "{:?}", kind);
        }
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let o = Tetromino::spawn(PieceKind::O);
        assert!(collides(&board, &Tetromino { x: -1, ..o }));
        assert!(collides(&board, &Tetromino { x: 9, ..o }));
        assert!(!collides(&board, &Tetromino { y: 18, ..o }));
        assert!(collides(&board, &Tetromino { y: 19, ..o }));
    }

    #[test]
    fn negative_rows_ignore_board_contents() {
        let board = Board::from_ascii(&["IIIIIIIIII"; 20]);
        let o = Tetromino { y: -2, ..Tetromino::spawn(PieceKind::O) };
        assert!(!collides(&board, &o));
        assert!(collides(&board, &Tetromino { y: -1, ..o }));
    }

    #[test]
    fn settled_cells_collide() {
        let mut board = Board::new();
        board.set(5, 0, Some(PieceKind::Z));
        assert!(collides(&board, &Tetromino::spawn(PieceKind::O)));
    }

    #[test]
    fn merge_skips_rows_above_the_board() {
        let mut board = Board::new();
        let o = Tetromino::spawn(PieceKind::O);
        let result = merge(&mut board, &o);
        assert_eq!(result, Merge { written: 2, above_top: 2 });
        assert!(result.locked_out());
        assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn merged_piece_collides_in_place() {
        let mut board = Board::new();
        let t = Tetromino { y: 10, ..Tetromino::spawn(PieceKind::T) };
        assert!(!collides(&board, &t));
        let result = merge(&mut board, &t);
        assert_eq!(result.written, 4);
        assert!(!result.locked_out());
        assert!(collides(&board, &t));
    }
}
