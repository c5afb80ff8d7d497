//! Pieces module - tetromino catalog, color table, and matrix rotation
//!
//! Each catalog entry is a small square matrix whose non-zero values are the
//! piece's color id. Templates live in a `static` table and are never mutated;
//! [`shape_for`] hands out an owned copy so the active piece can rotate its
//! working matrix freely.

use arrayvec::ArrayVec;

use crate::types::{CellValue, PieceType, Rgb, EMPTY};

/// Largest matrix side in the catalog (the I piece)
pub const MAX_MATRIX_SIZE: usize = 4;

/// Cell capacity of a matrix buffer
pub const MAX_CELLS: usize = MAX_MATRIX_SIZE * MAX_MATRIX_SIZE;

/// A filled matrix cell: `(x, y, value)` relative to the matrix origin
pub type FilledCell = (i16, i16, CellValue);

/// Square piece matrix stored row-major in a fixed buffer.
///
/// Only the leading `size * size` entries are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    size: u8,
    cells: [CellValue; MAX_CELLS],
}

impl PieceMatrix {
    #[rustfmt::skip]
    const fn square3(rows: [[CellValue; 3]; 3]) -> Self {
        Self {
            size: 3,
            cells: [
                rows[0][0], rows[0][1], rows[0][2],
                rows[1][0], rows[1][1], rows[1][2],
                rows[2][0], rows[2][1], rows[2][2],
                0, 0, 0, 0, 0, 0, 0,
            ],
        }
    }

    #[rustfmt::skip]
    const fn square4(rows: [[CellValue; 4]; 4]) -> Self {
        Self {
            size: 4,
            cells: [
                rows[0][0], rows[0][1], rows[0][2], rows[0][3],
                rows[1][0], rows[1][1], rows[1][2], rows[1][3],
                rows[2][0], rows[2][1], rows[2][2], rows[2][3],
                rows[3][0], rows[3][1], rows[3][2], rows[3][3],
            ],
        }
    }

    /// Build a matrix from rows. Returns `None` unless the rows form a square of
    /// side `1..=4`.
    pub fn from_rows(rows: &[&[CellValue]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_MATRIX_SIZE || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let mut cells = [EMPTY; MAX_CELLS];
        for (y, row) in rows.iter().enumerate() {
            cells[y * size..(y + 1) * size].copy_from_slice(row);
        }
        Some(Self {
            size: size as u8,
            cells,
        })
    }

    /// Side length (width == height)
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Matrix width, used to center spawns
    pub fn width(&self) -> usize {
        self.size()
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size() + x
    }

    /// Value at `(x, y)`, or `None` outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<CellValue> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        Some(self.cells[self.idx(x, y)])
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> &[CellValue] {
        let n = self.size();
        &self.cells[y * n..(y + 1) * n]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells[..self.size() * self.size()].chunks(self.size())
    }

    /// Non-zero cells with their matrix-relative coordinates.
    ///
    /// Stack-only; at most 16 entries.
    pub fn filled_cells(&self) -> ArrayVec<FilledCell, MAX_CELLS> {
        let mut out = ArrayVec::new();
        let n = self.size();
        for y in 0..n {
            for x in 0..n {
                let v = self.cells[self.idx(x, y)];
                if v != EMPTY {
                    out.push((x as i16, y as i16, v));
                }
            }
        }
        out
    }

    /// Swap across the main diagonal
    pub fn transpose(&mut self) {
        let n = self.size();
        for y in 0..n {
            for x in 0..y {
                let a = self.idx(x, y);
                let b = self.idx(y, x);
                self.cells.swap(a, b);
            }
        }
    }

    /// Reverse every row in place
    pub fn reverse_rows(&mut self) {
        let n = self.size();
        for y in 0..n {
            self.cells[y * n..(y + 1) * n].reverse();
        }
    }

    /// Rotate 90° clockwise: transpose, then reverse each row
    pub fn rotate_cw(&mut self) {
        self.transpose();
        self.reverse_rows();
    }

    /// Exact inverse of [`rotate_cw`](Self::rotate_cw): reverse each row, then transpose
    pub fn rotate_ccw(&mut self) {
        self.reverse_rows();
        self.transpose();
    }
}

/// The falling, player-controlled piece: an owned working matrix at a grid offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceType,
    pub x: i16,
    pub y: i16,
    pub matrix: PieceMatrix,
}

impl ActivePiece {
    /// Copy the catalog shape for `kind` and place it at `(x, y)`
    pub fn new(kind: PieceType, x: i16, y: i16) -> Self {
        Self {
            kind,
            x,
            y,
            matrix: shape_for(kind),
        }
    }

    /// Place a fresh copy of `kind` on row 0, horizontally centered on a grid
    /// `columns` wide
    pub fn spawn(kind: PieceType, columns: u16) -> Self {
        let matrix = shape_for(kind);
        let x = (columns / 2) as i16 - (matrix.width() / 2) as i16;
        Self {
            kind,
            x,
            y: 0,
            matrix,
        }
    }

    /// Filled cells in absolute grid coordinates
    pub fn cells(&self) -> ArrayVec<FilledCell, MAX_CELLS> {
        self.matrix
            .filled_cells()
            .into_iter()
            .map(|(dx, dy, v)| (self.x + dx, self.y + dy, v))
            .collect()
    }
}

static TEMPLATES: [PieceMatrix; 7] = [
    PieceMatrix::square4([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    PieceMatrix::square3([[2, 0, 0], [2, 2, 2], [0, 0, 0]]),
    PieceMatrix::square3([[0, 0, 3], [3, 3, 3], [0, 0, 0]]),
    PieceMatrix::square3([[0, 4, 4], [0, 4, 4], [0, 0, 0]]),
    PieceMatrix::square3([[0, 5, 5], [5, 5, 0], [0, 0, 0]]),
    PieceMatrix::square3([[0, 6, 0], [6, 6, 6], [0, 0, 0]]),
    PieceMatrix::square3([[7, 7, 0], [0, 7, 7], [0, 0, 0]]),
];

static COLORS: [Rgb; 7] = [
    Rgb::from_hex(0xFF0D72), // I
    Rgb::from_hex(0x0DC2FF), // J
    Rgb::from_hex(0x0DFF72), // L
    Rgb::from_hex(0xF538FF), // O
    Rgb::from_hex(0xFF8E0D), // S
    Rgb::from_hex(0xFFE138), // T
    Rgb::from_hex(0x3877FF), // Z
];

/// Surface background color
pub const BACKGROUND: Rgb = Rgb::from_hex(0x111111);

/// Block border stroke color
pub const STROKE: Rgb = Rgb::from_hex(0x000000);

/// Borrow the immutable catalog template for a piece type
pub fn template(kind: PieceType) -> &'static PieceMatrix {
    &TEMPLATES[(kind.id() - 1) as usize]
}

/// Get an owned working copy of the shape for a piece type
pub fn shape_for(kind: PieceType) -> PieceMatrix {
    *template(kind)
}

/// Display color for a cell value; `None` for empty or unknown values
pub fn color_for(cell: CellValue) -> Option<Rgb> {
    PieceType::from_id(cell).map(|kind| COLORS[(kind.id() - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_values_match_their_piece_id() {
        for kind in PieceType::ALL {
            let cells = template(kind).filled_cells();
            assert_eq!(cells.len(), 4, "{:?} should have four minos", kind);
            assert!(cells.iter().all(|&(_, _, v)| v == kind.id()));
        }
    }

    #[test]
    fn rotate_cw_turns_rows_into_columns() {
        let mut m = shape_for(PieceType::I);
        m.rotate_cw();
        // Row 1 of the I becomes column 2.
        for y in 0..4 {
            assert_eq!(m.row(y), &[0, 0, 1, 0]);
        }
    }

    #[test]
    fn rotating_a_copy_leaves_the_template_alone() {
        let before = *template(PieceType::T);
        let mut working = shape_for(PieceType::T);
        working.rotate_cw();
        assert_ne!(working, before);
        assert_eq!(*template(PieceType::T), before);
    }

    #[test]
    fn from_rows_rejects_non_square_input() {
        let ragged: &[&[u8]] = &[&[1, 1], &[1]];
        assert!(PieceMatrix::from_rows(ragged).is_none());
        assert!(PieceMatrix::from_rows(&[]).is_none());
        let square: &[&[u8]] = &[&[1, 0], &[1, 1]];
        let m = PieceMatrix::from_rows(square).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(1, 1), Some(1));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn color_table_covers_catalog_only() {
        assert_eq!(color_for(0), None);
        assert_eq!(color_for(8), None);
        assert_eq!(color_for(1), Some(Rgb::new(0xFF, 0x0D, 0x72)));
        assert_eq!(color_for(7), Some(Rgb::new(0x38, 0x77, 0xFF)));
    }
}
