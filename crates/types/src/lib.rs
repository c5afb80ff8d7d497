//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, so they can
//! be used by the game logic, the renderer, and the input layer alike.
//!
//! # Surface Dimensions
//!
//! The playfield is derived from a pixel surface and a uniform scale factor:
//!
//! - **Surface**: 300 x 600 pixels
//! - **Scale**: 30 pixels per block
//! - **Grid**: `300 / 30 = 10` columns by `600 / 30 = 20` rows
//!
//! # Cell Values
//!
//! A grid cell is a plain `u8`. `0` is empty and `1..=7` is a settled block of the
//! piece type with that id, which doubles as its color id.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceType, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceType::from_id(4), Some(PieceType::O));
//! assert_eq!(PieceType::O.id(), 4);
//!
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Surface width in pixels
pub const SURFACE_WIDTH: u32 = 300;

/// Surface height in pixels
pub const SURFACE_HEIGHT: u32 = 600;

/// Pixels per grid block
pub const SCALE: u32 = 30;

/// Grid columns for the default surface
pub const DEFAULT_COLUMNS: u16 = (SURFACE_WIDTH / SCALE) as u16;

/// Grid rows for the default surface
pub const DEFAULT_ROWS: u16 = (SURFACE_HEIGHT / SCALE) as u16;

/// Number of entries in the piece catalog
pub const PIECE_TYPE_COUNT: u8 = 7;

/// Piece types the randomizer draws from by default.
///
/// Only the first six catalog entries ever spawn unless configured otherwise.
pub const DEFAULT_PIECE_SET_SIZE: u8 = 6;

/// Render/input frame interval (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default gravity interval: one row per 60Hz frame
pub const GRAVITY_MS: u32 = 16;

/// Value of an empty grid cell
pub const EMPTY: CellValue = 0;

/// A grid or piece matrix cell: `0` empty, `1..=7` piece/color id.
pub type CellValue = u8;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// The seven catalog piece types, numbered `1..=7` in catalog order.
///
/// The numeric id is also the value written into the grid when a piece of this
/// type settles, and the key into the color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceType {
    /// All piece types in catalog order
    pub const ALL: [PieceType; 7] = [
        PieceType::I,
        PieceType::J,
        PieceType::L,
        PieceType::O,
        PieceType::S,
        PieceType::T,
        PieceType::Z,
    ];

    /// Catalog id (`1..=7`)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a piece type by catalog id
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceType;
    ///
    /// assert_eq!(PieceType::from_id(1), Some(PieceType::I));
    /// assert_eq!(PieceType::from_id(7), Some(PieceType::Z));
    /// assert_eq!(PieceType::from_id(0), None);
    /// assert_eq!(PieceType::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceType::I),
            2 => Some(PieceType::J),
            3 => Some(PieceType::L),
            4 => Some(PieceType::O),
            5 => Some(PieceType::S),
            6 => Some(PieceType::T),
            7 => Some(PieceType::Z),
            _ => None,
        }
    }

    /// Single-letter name
    pub fn name(self) -> &'static str {
        match self {
            PieceType::I => "I",
            PieceType::J => "J",
            PieceType::L => "L",
            PieceType::O => "O",
            PieceType::S => "S",
            PieceType::T => "T",
            PieceType::Z => "Z",
        }
    }
}

/// Horizontal shift direction for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta: `-1` for left, `+1` for right
    pub fn delta(self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Player commands routed to the piece controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if it cannot fall further
    Drop,
    /// Rotate piece 90° clockwise
    Rotate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_divides_into_ten_by_twenty() {
        assert_eq!(SURFACE_WIDTH % SCALE, 0);
        assert_eq!(SURFACE_HEIGHT % SCALE, 0);
        assert_eq!(DEFAULT_COLUMNS, 10);
        assert_eq!(DEFAULT_ROWS, 20);
    }

    #[test]
    fn piece_ids_round_trip_in_catalog_order() {
        for (i, kind) in PieceType::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, i + 1);
            assert_eq!(PieceType::from_id(kind.id()), Some(*kind));
        }
    }

    #[test]
    fn rgb_from_hex_splits_channels() {
        assert_eq!(Rgb::from_hex(0xFF0D72), Rgb::new(0xFF, 0x0D, 0x72));
        assert_eq!(Rgb::from_hex(0x111111), Rgb::new(0x11, 0x11, 0x11));
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Left.delta(), -1);
        assert_eq!(Direction::Right.delta(), 1);
    }
}
