//! Game configuration
//!
//! Settings come from environment variables, each with a default:
//!
//! - `BLOCKFALL_WIDTH`: surface width in pixels (default 300)
//! - `BLOCKFALL_HEIGHT`: surface height in pixels (default 600)
//! - `BLOCKFALL_SCALE`: pixels per block (default 30)
//! - `BLOCKFALL_PIECE_SET`: how many catalog pieces can spawn, `1..=7` (default 6)
//! - `BLOCKFALL_GRAVITY_MS`: gravity interval in milliseconds (default 16)
//! - `BLOCKFALL_SEED`: piece RNG seed (default: random, chosen by the binary)
//!
//! A variable that is set but unparsable is an error rather than a silent default.

use thiserror::Error;

use crate::pieces::MAX_MATRIX_SIZE;
use crate::types::{
    DEFAULT_PIECE_SET_SIZE, GRAVITY_MS, PIECE_TYPE_COUNT, SCALE, SURFACE_HEIGHT, SURFACE_WIDTH,
};

/// Largest grid side; keeps coordinates and framebuffer sizes in range
pub const MAX_GRID_SIZE: u16 = 256;

/// Smallest grid height that leaves room for a spawned piece
pub const MIN_ROWS: u16 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("scale must be greater than zero")]
    ZeroScale,

    #[error("{dimension} of {pixels}px is not a multiple of scale {scale}")]
    NotDivisible {
        dimension: &'static str,
        pixels: u32,
        scale: u32,
    },

    #[error("grid {columns}x{rows} is too small (need at least {min_columns}x{min_rows})")]
    GridTooSmall {
        columns: u32,
        rows: u32,
        min_columns: u32,
        min_rows: u32,
    },

    #[error("grid {columns}x{rows} exceeds the {max}x{max} limit")]
    GridTooLarge { columns: u32, rows: u32, max: u32 },

    #[error("piece set size {0} is outside 1..=7")]
    PieceSetSize(u8),

    #[error("gravity interval must be greater than zero")]
    ZeroGravity,

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub scale: u32,
    pub piece_set_size: u8,
    pub gravity_ms: u32,
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            scale: SCALE,
            piece_set_size: DEFAULT_PIECE_SET_SIZE,
            gravity_ms: GRAVITY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup, then validate.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            surface_width: parse_var(&lookup, "BLOCKFALL_WIDTH")?.unwrap_or(defaults.surface_width),
            surface_height: parse_var(&lookup, "BLOCKFALL_HEIGHT")?
                .unwrap_or(defaults.surface_height),
            scale: parse_var(&lookup, "BLOCKFALL_SCALE")?.unwrap_or(defaults.scale),
            piece_set_size: parse_var(&lookup, "BLOCKFALL_PIECE_SET")?
                .unwrap_or(defaults.piece_set_size),
            gravity_ms: parse_var(&lookup, "BLOCKFALL_GRAVITY_MS")?.unwrap_or(defaults.gravity_ms),
            seed: parse_var(&lookup, "BLOCKFALL_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_piece_set_size(mut self, size: u8) -> Self {
        self.piece_set_size = size;
        self
    }

    /// Grid columns (`surface_width / scale`)
    pub fn columns(&self) -> u16 {
        (self.surface_width / self.scale.max(1)) as u16
    }

    /// Grid rows (`surface_height / scale`)
    pub fn rows(&self) -> u16 {
        (self.surface_height / self.scale.max(1)) as u16
    }

    /// Check that the settings describe a well-formed grid and timer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        for (dimension, pixels) in [("width", self.surface_width), ("height", self.surface_height)] {
            if pixels % self.scale != 0 {
                return Err(ConfigError::NotDivisible {
                    dimension,
                    pixels,
                    scale: self.scale,
                });
            }
        }

        let columns = self.surface_width / self.scale;
        let rows = self.surface_height / self.scale;
        let max = MAX_GRID_SIZE as u32;
        if columns > max || rows > max {
            return Err(ConfigError::GridTooLarge { columns, rows, max });
        }
        let min_columns = MAX_MATRIX_SIZE as u32;
        let min_rows = MIN_ROWS as u32;
        if columns < min_columns || rows < min_rows {
            return Err(ConfigError::GridTooSmall {
                columns,
                rows,
                min_columns,
                min_rows,
            });
        }

        if self.piece_set_size == 0 || self.piece_set_size > PIECE_TYPE_COUNT {
            return Err(ConfigError::PieceSetSize(self.piece_set_size));
        }
        if self.gravity_ms == 0 {
            return Err(ConfigError::ZeroGravity);
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue { key, value: raw })
        }
    }
}
