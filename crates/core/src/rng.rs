//! RNG module - uniform piece selection
//!
//! Pieces are drawn uniformly from the first `set_size` catalog entries.
//! A simple LCG drives the draw so a seed reproduces the whole piece sequence.

use crate::types::{PieceType, DEFAULT_PIECE_SET_SIZE, PIECE_TYPE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Draws piece types uniformly from a prefix of the catalog
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
    set_size: u8,
}

impl PieceRandomizer {
    /// Create a randomizer over catalog ids `1..=set_size`.
    ///
    /// `set_size` is clamped to `1..=7`.
    pub fn new(seed: u32, set_size: u8) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            set_size: set_size.clamp(1, PIECE_TYPE_COUNT),
        }
    }

    pub fn set_size(&self) -> u8 {
        self.set_size
    }

    /// Draw the next piece type
    pub fn next_piece(&mut self) -> PieceType {
        let id = self.rng.next_range(self.set_size as u32) as u8 + 1;
        PieceType::from_id(id).unwrap_or(PieceType::I)
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1, DEFAULT_PIECE_SET_SIZE)
    }
}
