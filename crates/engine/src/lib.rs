//! Game loop module.
//!
//! Drives the piece controller from two sources: player actions, applied
//! immediately, and gravity, applied on a fixed wall-clock interval. Gravity
//! is measured in elapsed milliseconds rather than rendered frames, so the
//! fall speed does not depend on how often the host repaints and the loop can
//! be stepped deterministically in tests.

pub mod clock;
pub mod game_loop;
pub mod gravity;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::FrameClock;
pub use game_loop::GameLoop;
pub use gravity::GravityTimer;
