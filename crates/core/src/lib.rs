//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: the board, the falling piece, and
//! the session loop that ties them together. It has no dependencies on
//! terminals or I/O.
//!
//! - **Deterministic**: all randomness comes from an injected [`ShapeSource`]
//! - **Frame-driven**: time only advances through [`Session::step`]
//! - **Zero allocation** on the step path
//!
//! # Module Structure
//!
//! - [`board`]: 10x24 grid with row detection and collapse
//! - [`pieces`]: the seven 4x4 patterns and the rotation rule
//! - [`piece`]: the falling piece and its collision-safe moves
//! - [`rng`]: shape sources (seeded random, scripted)
//! - [`scoring`]: multiplier chain and gravity speed-up
//! - [`session`]: the tick state machine
//! - [`snapshot`]: read-only state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at (3, 20), above the 20-row visible field
//! - Gravity moves the piece one row every `max(1, 60 - 2 * rows_cleared)` ticks
//! - Rotation is a quarter turn of the 4x4 frame, with no wall kicks
//! - A grounded piece triggers one complete-row check per action; each
//!   complete row is marked, held for 15 ticks, then collapsed and scored
//! - Rows from one placement score 40, 60, 200, then 900 each
//! - A piece grounded with any cell above row 19 ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::{Command, GameEvent};
//!
//! let mut session = Session::new(12345);
//! session.apply(Command::SetSoftDrop(true));
//!
//! let mut placed = false;
//! for _ in 0..200 {
//!     session.step();
//!     if session.take_last_event() == Some(GameEvent::PiecePlaced) {
//!         placed = true;
//!         break;
//!     }
//! }
//! assert!(placed);
//! assert!(!session.is_game_over());
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Piece;
pub use pieces::{pattern_for, rotated, Pattern};
pub use rng::{RandomShapes, ScriptedShapes, ShapeSource};
pub use scoring::{next_multiplier, step_interval};
pub use session::{Phase, Session};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
