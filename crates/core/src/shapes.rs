//! Shape catalog - one canonical matrix per piece kind
//!
//! Orientation 0 of every kind is stored as a fixed matrix. Further
//! orientations are derived on demand: the matrix is turned 90° clockwise
//! (an R×C matrix becomes C×R) and then trimmed down to the bounding box of
//! its filled cells. Spawning always uses the untrimmed catalog matrix, so
//! spawn centering is computed from the catalog width.

use crate::types::PieceKind;

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Immutable matrix of filled sub-cells (at most 4×4), stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn from_bits(rows: u8, cols: u8, bits: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < rows as usize {
            let mut x = 0;
            while x < cols as usize {
                cells[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the sub-cell at column `x`, row `y` is filled.
    /// Out-of-range positions read as empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.cols as usize && y < self.rows as usize && self.cells[y][x]
    }

    /// Offsets `(x, y)` of the filled sub-cells, row by row.
    pub fn filled(self) -> impl Iterator<Item = (i8, i8)> {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.filled().count()
    }

    /// The shape turned 90° clockwise and trimmed to its bounding box.
    pub fn rotated_cw(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().enumerate().take(cols) {
            for (x, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.cells[rows - 1 - x][y];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
        .trimmed()
    }

    /// Drop all-empty border rows and columns.
    ///
    /// An entirely empty shape is returned unchanged.
    pub fn trimmed(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let row_used = |y: usize| (0..cols).any(|x| self.cells[y][x]);
        let col_used = |x: usize| (0..rows).any(|y| self.cells[y][x]);

        let Some(top) = (0..rows).find(|&y| row_used(y)) else {
            return *self;
        };
        let bottom = (0..rows).rev().find(|&y| row_used(y)).unwrap_or(top);
        let left = (0..cols).find(|&x| col_used(x)).unwrap_or(0);
        let right = (0..cols).rev().find(|&x| col_used(x)).unwrap_or(left);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in top..=bottom {
            for x in left..=right {
                cells[y - top][x - left] = self.cells[y][x];
            }
        }
        Shape {
            rows: (bottom - top + 1) as u8,
            cols: (right - left + 1) as u8,
            cells,
        }
    }

    /// Matrix as 0/1 rows, padded to 4×4 (for snapshots and previews).
    pub fn to_grid(&self) -> [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (x, y) in self.filled() {
            grid[y as usize][x as usize] = 1;
        }
        grid
    }
}

const I_SHAPE: Shape = Shape::from_bits(
    4,
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: Shape = Shape::from_bits(
    2,
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: Shape = Shape::from_bits(
    3,
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Orientation 0 of a piece kind, exactly as stored in the catalog
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
