//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints the session into a
//! plain framebuffer, and the terminal renderer flushes that framebuffer.
//!
//! - [`game_view`] is pure and owns the grid-to-terminal scale transform
//! - [`renderer`] owns raw mode, the alternate screen, and byte encoding

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport, BLOCK_GLYPH, STROKE_GLYPH};
pub use renderer::{encode_frame_into, TerminalRenderer};
