//! Board module - the 10x20 grid of settled cells
//!
//! Cells are stored in a flat row-major array (no allocation).
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! During play the grid only changes through merge (lock) and line clearing.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, aligned to the bottom of the grid.
    ///
    /// `.` (or a space) is empty; a piece letter fills the cell with that kind;
    /// any other character fills it with `I`. Rows longer than the board are cut.
    ///
    /// ```
    /// use blockdrop_core::Board;
    /// use blockdrop_types::PieceKind;
    ///
    /// let board = Board::from_ascii(&["TT........", "ZZZZ.ZZZZZ"]);
    /// assert_eq!(board.get(0, 18), Some(Some(PieceKind::T)));
    /// assert_eq!(board.get(4, 19), Some(None));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let skip = rows.len().saturating_sub(HEIGHT);
        let first_y = HEIGHT - (rows.len() - skip);
        for (dy, row) in rows.iter().skip(skip).enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Some(
                        PieceKind::from_str(other.encode_utf8(&mut [0u8; 4]))
                            .unwrap_or(PieceKind::I),
                    ),
                };
                board.cells[(first_y + dy) * WIDTH + x] = cell;
            }
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Row `y` as a slice (empty slice when out of range)
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= HEIGHT {
            return &[];
        }
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(|cell| cell.is_some())
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(|cell| cell.is_none())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Remove every full row, shift the rows above down, and refill the top
    /// with empty rows.
    ///
    /// Equivalent to scanning bottom-up, splicing out each full row and
    /// re-examining the same index, done as a single two-pointer compaction.
    /// Returns the original indices of the removed rows, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        cleared
    }

    /// Encode as a `u8` grid (0 = empty, otherwise [`PieceKind::code`])
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map_or(0, |kind| kind.code());
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(cell.map_or(".", |kind| kind.as_str()))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
