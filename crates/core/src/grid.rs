//! Grid module - the settled-block playfield
//!
//! The grid is `columns x rows` cells, each `0` (empty) or a piece id `1..=7`.
//! Uses a flat row-major buffer sized once per session.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::pieces::ActivePiece;
use crate::types::{CellValue, EMPTY};

/// The playfield of settled blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![EMPTY; columns as usize * rows as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.columns as i16 || y >= self.rows as i16 {
            return None;
        }
        Some((y as usize) * (self.columns as usize) + (x as usize))
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<CellValue> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, value: CellValue) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) is inside the grid and holds a settled block
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    /// True when (x, y) lies outside `[0, columns) x [0, rows)`
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        self.index(x, y).is_none()
    }

    /// Write every filled cell of `piece` into the grid at the piece's offset.
    ///
    /// The caller guarantees the piece rests at a valid position; cells that
    /// would land outside the grid are skipped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y, value) in piece.cells() {
            self.set(x, y, value);
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == EMPTY)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.chunks(self.columns.max(1) as usize)
    }

    /// Build a grid from rows of equal length (used by tests and tools).
    ///
    /// Returns `None` for ragged input.
    pub fn from_rows(rows: &[&[CellValue]]) -> Option<Self> {
        let columns = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != columns) {
            return None;
        }
        Some(Self {
            columns: columns as u16,
            rows: rows.len() as u16,
            cells: rows.concat(),
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_COLUMNS, crate::types::DEFAULT_ROWS)
    }
}
