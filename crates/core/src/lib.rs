//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and session state. It has no dependency
//! on the terminal, input devices, or wall-clock time, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is exercised without a display
//! - **Portable**: the host decides how and when to draw
//!
//! # Module Structure
//!
//! - [`grid`]: settled-block playfield with merge and full reset
//! - [`pieces`]: tetromino catalog, color table, and matrix rotation
//! - [`collision`]: active piece vs. walls, floor, and settled blocks
//! - [`session`]: the piece controller (move, drop, rotate, reset)
//! - [`rng`]: seeded uniform piece selection
//! - [`config`]: surface/scale/timing settings read from the environment
//!
//! # Game Rules
//!
//! - Pieces spawn on row 0, horizontally centered
//! - A move, drop, or rotation that would collide is rolled back
//! - A piece that cannot fall further merges into the grid, then the next spawns
//! - A spawn that collides means the board is full: the grid is cleared and play goes on
//! - There is no line clearing
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, Session};
//! use blockfall_types::GameAction;
//!
//! let mut session = Session::new(&GameConfig::default().with_seed(12345));
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::Rotate);
//! session.apply_action(GameAction::Drop);
//!
//! assert!(session.take_redraw());
//! assert_eq!(session.score(), 0);
//! ```

pub mod collision;
pub mod config;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod session;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use config::{ConfigError, GameConfig};
pub use grid::Grid;
pub use pieces::{color_for, shape_for, template, ActivePiece, PieceMatrix, BACKGROUND, STROKE};
pub use rng::{PieceRandomizer, SimpleRng};
pub use session::{no_score, LockEvent, ScoreHook, Session};
