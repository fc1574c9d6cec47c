//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and keeps soft
//! drop held for terminals that never report key releases.

pub mod latch;
pub mod map;

pub use blockfall_types as types;

pub use latch::SoftDropLatch;
pub use map::{is_soft_drop_key, map_key_press, should_quit};
