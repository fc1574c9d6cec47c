//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play: the view paints a session
//! snapshot into a framebuffer, and the renderer flushes that framebuffer to
//! the terminal, writing only what changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{cell_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
