//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the simulation, the terminal
//! view, and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 24 rows (indexed 0-23, bottom to top)
//! - **Visible field**: rows 0-19; rows 20-23 are spawn headroom
//! - **Spawn origin**: (3, 20)
//!
//! # Timing
//!
//! The simulation counts frames ("ticks"), not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_STEP_TICKS` | 60 | Ticks between gravity steps with no rows cleared |
//! | `STEP_TICKS_PER_ROW` | 2 | Speed-up per cleared row |
//! | `MIN_STEP_TICKS` | 1 | Fastest possible gravity |
//! | `CLEAR_DELAY_TICKS` | 15 | Pause between marking and collapsing a row |
//! | `INITIAL_STEP_TICKS` | 15 | Countdown of a brand new session |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_id(5).unwrap();
//! assert_eq!(kind, PieceKind::I);
//! assert_eq!("i".parse::<PieceKind>().unwrap(), PieceKind::I);
//!
//! assert_eq!(Cell::Block(kind).value(), 5);
//! assert_eq!(Cell::Marked.value(), -1);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 24);
//! ```

use std::fmt;
use std::str::FromStr;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (24 rows, including spawn headroom)
pub const BOARD_HEIGHT: u8 = 24;

/// Rows 0..VISIBLE_HEIGHT are the playable field.
pub const VISIBLE_HEIGHT: u8 = 20;

/// Side length of a piece's local frame.
pub const PATTERN_SIZE: u8 = 4;

/// Spawn origin column.
pub const SPAWN_X: i8 = 3;

/// Spawn origin row.
pub const SPAWN_Y: i8 = 20;

// Collision checks never test the top of the board. That is only sound while a
// piece spawned at SPAWN_Y fits entirely inside the array.
const _: () = assert!(SPAWN_Y as i16 + PATTERN_SIZE as i16 <= BOARD_HEIGHT as i16);

/// Fixed driver timestep in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in ticks before any row has been cleared.
pub const BASE_STEP_TICKS: u32 = 60;

/// Each cleared row shortens the gravity interval by this many ticks.
pub const STEP_TICKS_PER_ROW: u32 = 2;

/// Floor for the gravity interval.
pub const MIN_STEP_TICKS: u32 = 1;

/// Ticks between marking a complete row and collapsing it.
pub const CLEAR_DELAY_TICKS: u32 = 15;

/// Countdown a new session starts with.
pub const INITIAL_STEP_TICKS: u32 = 15;

/// Points per row for consecutive clears of a single placement.
///
/// The last entry repeats for every further row.
pub const MULTIPLIER_CHAIN: [u32; 4] = [40, 60, 200, 900];

/// Raised for a shape id outside 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("shape id {0} is not in 1..=7")]
pub struct ShapeIdError(pub u8);

/// Raised when a piece name is not one of the seven letters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece {0:?} (expected one of Z, S, J, O, I, T, L)")]
pub struct ParsePieceKindError(pub String);

/// The seven tetromino forms
///
/// The discriminant is the shape id stored in board cells, which also picks
/// the colour:
/// - **Z** (1): red
/// - **S** (2): green
/// - **J** (3): blue
/// - **O** (4): yellow
/// - **I** (5): cyan
/// - **T** (6): magenta
/// - **L** (7): orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Z = 1,
    S = 2,
    J = 3,
    O = 4,
    I = 5,
    T = 6,
    L = 7,
}

impl PieceKind {
    /// All kinds in shape-id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
    ];

    /// Look up a kind by its shape id.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Ok(PieceKind::Z));
    /// assert!(PieceKind::from_id(0).is_err());
    /// assert!(PieceKind::from_id(8).is_err());
    /// ```
    pub fn from_id(id: u8) -> Result<Self, ShapeIdError> {
        match id {
            1..=7 => Ok(Self::ALL[(id - 1) as usize]),
            _ => Err(ShapeIdError(id)),
        }
    }

    /// Shape id, 1..=7.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

impl TryFrom<u8> for PieceKind {
    type Error = ShapeIdError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    /// Parse piece kind from its letter (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePieceKindError(s.to_string()))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// A cell on the game board
///
/// The integer view (see [`Cell::value`]) is what renderers consume:
/// 0 empty, -1 marked for clear, 1..=7 a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Part of a completed row waiting to be collapsed.
    Marked,
    Block(PieceKind),
}

impl Cell {
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Marked => -1,
            Cell::Block(kind) => kind.id() as i8,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Input commands a driver delivers before each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rotate the falling piece 90° clockwise
    RotateCw,
    /// Move the falling piece one column left
    MoveLeft,
    /// Move the falling piece one column right
    MoveRight,
    /// Hold or release soft drop (step every tick instead of waiting)
    SetSoftDrop(bool),
    /// Throw the current game away and start over
    Restart,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::RotateCw => "rotateCw",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SetSoftDrop(true) => "softDropOn",
            Command::SetSoftDrop(false) => "softDropOff",
            Command::Restart => "restart",
        }
    }
}

/// Discrete happenings a driver can react to (sound, flashes).
///
/// At most one is produced per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The grounded piece was retired and the queued piece took its place.
    PiecePlaced,
    /// A marked row was collapsed and scored.
    RowCleared { row: u8 },
    /// The session entered its terminal state.
    GameOver,
}
