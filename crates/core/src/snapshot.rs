//! Read-only copy of everything a renderer needs after a step.

use crate::pieces::Pattern;
use crate::piece::Piece;
use crate::types::{GameEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PATTERN_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub grounded: bool,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let (x, y) = piece.origin();
        Self {
            kind: piece.kind(),
            x,
            y,
            grounded: piece.is_grounded(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    /// Cell values indexed `[row][column]`, row 0 at the bottom.
    pub board: [[i8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next_kind: PieceKind,
    pub next_pattern: Pattern,
    pub score: u32,
    pub multiplier: u32,
    pub rows_cleared: u32,
    pub ticks_until_step: u32,
    pub soft_drop: bool,
    pub clear_delay: bool,
    pub pending_clear_row: Option<u8>,
    pub game_over: bool,
    pub last_event: Option<GameEvent>,
}

impl SessionSnapshot {
    pub fn cell(&self, x: u8, y: u8) -> i8 {
        self.board[y as usize][x as usize]
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.clear_delay
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                x: 0,
                y: 0,
                grounded: false,
            },
            next_kind: PieceKind::I,
            next_pattern: [[false; PATTERN_SIZE as usize]; PATTERN_SIZE as usize],
            score: 0,
            multiplier: 0,
            rows_cleared: 0,
            ticks_until_step: 0,
            soft_drop: false,
            clear_delay: false,
            pending_clear_row: None,
            game_over: false,
            last_event: None,
        }
    }
}
