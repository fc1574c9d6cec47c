//! Session module - the frame-driven game loop
//!
//! A [`Session`] owns the board, the falling piece, the queued piece and all
//! scoring state. A driver feeds it zero or more [`Command`]s and then calls
//! [`Session::step`] exactly once per frame.
//!
//! Each step either waits (the countdown is still running) or acts. Acting
//! does exactly one of:
//!
//! 1. collapse and score a row marked on an earlier step,
//! 2. end the game when the grounded piece sticks out of the visible field,
//! 3. mark the lowest complete row, or promote the queued piece when there is
//!    none,
//! 4. drop the falling piece one row.
//!
//! Multi-row clears therefore take one collapse per action, each scored with
//! the next multiplier in the chain.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::pieces::Pattern;
use crate::rng::{RandomShapes, ShapeSource};
use crate::scoring::{next_multiplier, step_interval, BASE_MULTIPLIER};
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{Command, GameEvent, CLEAR_DELAY_TICKS, INITIAL_STEP_TICKS};

/// Coarse state of the loop, derived from the session's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The active piece can still fall.
    Falling,
    /// The active piece is down; the next action checks rows or promotes.
    Grounded,
    /// A completed row is being cleared.
    ClearDelay,
    GameOver,
}

#[derive(Debug)]
pub struct Session {
    board: Board,
    active: Piece,
    queued: Piece,
    source: Box<dyn ShapeSource>,
    score: u32,
    multiplier: u32,
    rows_cleared: u32,
    ticks_until_step: u32,
    soft_drop: bool,
    /// Row marked for collapse on the next action. Only set during clear delay.
    pending_clear_row: Option<u8>,
    /// Set from marking a row until the next piece is promoted.
    clear_delay: bool,
    game_over: bool,
    last_event: Option<GameEvent>,
}

impl Session {
    /// New game with uniformly random pieces drawn from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_source(Box::new(RandomShapes::seeded(seed)))
    }

    pub fn with_source(source: Box<dyn ShapeSource>) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// New game on a prepared field.
    ///
    /// # Panics
    ///
    /// Panics if the first piece does not fit at the spawn origin.
    pub fn with_board(board: Board, mut source: Box<dyn ShapeSource>) -> Self {
        let active = Piece::spawn(source.next_kind());
        let queued = Piece::spawn(source.next_kind());
        let mut session = Self {
            board,
            active,
            queued,
            source,
            score: 0,
            multiplier: BASE_MULTIPLIER,
            rows_cleared: 0,
            ticks_until_step: INITIAL_STEP_TICKS,
            soft_drop: false,
            pending_clear_row: None,
            clear_delay: false,
            game_over: false,
            last_event: None,
        };
        assert!(
            !session.active.collides(&session.board),
            "spawn area must be empty"
        );
        session.active.paint(&mut session.board);
        info!(
            active = %session.active.kind(),
            queued = %session.queued.kind(),
            "session started"
        );
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Integer value of a board cell, for renderers.
    pub fn cell_at(&self, x: u8, y: u8) -> i8 {
        self.board.value_at(x, y)
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn queued(&self) -> &Piece {
        &self.queued
    }

    /// Pattern of the piece that spawns next.
    pub fn next_piece_preview(&self) -> Pattern {
        *self.queued.pattern()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn ticks_until_step(&self) -> u32 {
        self.ticks_until_step
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    pub fn is_clear_delay_active(&self) -> bool {
        self.clear_delay
    }

    pub fn pending_clear_row(&self) -> Option<u8> {
        self.pending_clear_row
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.clear_delay {
            Phase::ClearDelay
        } else if self.active.is_grounded() {
            Phase::Grounded
        } else {
            Phase::Falling
        }
    }

    /// Event produced by the most recent step, if any.
    pub fn last_event(&self) -> Option<GameEvent> {
        self.last_event
    }

    /// Take and clear the event produced by the most recent step.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_value_grid(&mut out.board);
        out.active = ActiveSnapshot::from(&self.active);
        out.next_kind = self.queued.kind();
        out.next_pattern = *self.queued.pattern();
        out.score = self.score;
        out.multiplier = self.multiplier;
        out.rows_cleared = self.rows_cleared;
        out.ticks_until_step = self.ticks_until_step;
        out.soft_drop = self.soft_drop;
        out.clear_delay = self.clear_delay;
        out.pending_clear_row = self.pending_clear_row;
        out.game_over = self.game_over;
        out.last_event = self.last_event;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply an input command. Returns false when the command was ignored.
    ///
    /// `Restart` and releasing soft drop are always accepted. Everything else
    /// is ignored after game over and while rows are being cleared; moves and
    /// rotation are also ignored once the piece is grounded.
    pub fn apply(&mut self, command: Command) -> bool {
        let accepted = match command {
            Command::Restart => {
                self.restart();
                true
            }
            Command::SetSoftDrop(false) => {
                self.soft_drop = false;
                true
            }
            _ if self.game_over || self.clear_delay => false,
            Command::SetSoftDrop(true) => {
                self.soft_drop = true;
                true
            }
            _ if self.active.is_grounded() => false,
            Command::RotateCw => self.active.rotate(&mut self.board),
            Command::MoveLeft => self.active.move_left(&mut self.board),
            Command::MoveRight => self.active.move_right(&mut self.board),
        };
        trace!(command = command.as_str(), accepted, "command");
        accepted
    }

    /// Start a fresh game on an empty board, drawing new pieces from the
    /// same source. The countdown carries over.
    pub fn restart(&mut self) {
        self.board.reset();
        self.active = Piece::spawn(self.source.next_kind());
        self.queued = Piece::spawn(self.source.next_kind());
        self.active.paint(&mut self.board);
        self.soft_drop = false;
        self.clear_delay = false;
        self.pending_clear_row = None;
        self.score = 0;
        self.multiplier = BASE_MULTIPLIER;
        self.rows_cleared = 0;
        self.game_over = false;
        self.last_event = None;
        info!(
            active = %self.active.kind(),
            queued = %self.queued.kind(),
            "session restarted"
        );
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        self.last_event = None;
        if self.game_over {
            return;
        }

        if self.ticks_until_step > 0 && !self.soft_drop {
            self.ticks_until_step -= 1;
            return;
        }
        self.ticks_until_step = step_interval(self.rows_cleared);

        if let Some(row) = self.pending_clear_row.take() {
            self.collapse(row);
            return;
        }

        if self.active.is_grounded() {
            if self.active.is_over_top() {
                self.game_over = true;
                self.last_event = Some(GameEvent::GameOver);
                debug!(score = self.score, rows = self.rows_cleared, "game over");
            } else if let Some(row) = self.board.find_first_complete_row() {
                self.begin_clear(row);
            } else {
                self.promote();
            }
        } else if !self.clear_delay {
            self.active.move_down(&mut self.board);
        }
    }

    fn begin_clear(&mut self, row: u8) {
        self.board.mark_for_clear(row);
        self.clear_delay = true;
        self.pending_clear_row = Some(row);
        self.soft_drop = false;
        self.ticks_until_step = CLEAR_DELAY_TICKS;
        debug!(row, "row marked for clear");
    }

    fn collapse(&mut self, row: u8) {
        self.board.collapse_row(row);
        self.score += self.multiplier;
        self.multiplier = next_multiplier(self.multiplier);
        self.rows_cleared += 1;
        self.last_event = Some(GameEvent::RowCleared { row });
        debug!(
            row,
            score = self.score,
            rows = self.rows_cleared,
            "row collapsed"
        );
    }

    fn promote(&mut self) {
        let next = Piece::spawn(self.source.next_kind());
        let placed = std::mem::replace(&mut self.active, std::mem::replace(&mut self.queued, next));
        assert!(
            !self.active.collides(&self.board),
            "promoted piece overlaps the stack"
        );
        self.active.paint(&mut self.board);
        self.clear_delay = false;
        self.multiplier = BASE_MULTIPLIER;
        self.last_event = Some(GameEvent::PiecePlaced);
        debug!(
            placed = %placed.kind(),
            active = %self.active.kind(),
            queued = %self.queued.kind(),
            "piece placed"
        );
    }
}
