//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key-down
//! maps straight to one action: auto-repeats count as key-downs, and there is no
//! debouncing or key-up handling.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_key_down, should_quit};
