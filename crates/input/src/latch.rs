//! Soft-drop latch for terminal environments.
//!
//! Many terminals only ever report key presses: holding a key produces a
//! stream of repeated presses and no release. The latch turns that stream
//! into a held state that lapses a short while after the last press. On
//! terminals that do report releases, the release ends it immediately.

use crate::types::Command;

/// Ticks soft drop stays held after the last press (~160ms at 16ms ticks).
pub const SOFT_DROP_GRACE_TICKS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftDropLatch {
    held: bool,
    remaining: u32,
    grace: u32,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ticks(SOFT_DROP_GRACE_TICKS)
    }

    pub fn with_grace_ticks(grace: u32) -> Self {
        Self {
            held: false,
            remaining: 0,
            grace,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// A press (or auto-repeat) of a soft-drop key. Emits a command only on
    /// the transition into the held state.
    pub fn press(&mut self) -> Option<Command> {
        self.remaining = self.grace;
        if self.held {
            return None;
        }
        self.held = true;
        Some(Command::SetSoftDrop(true))
    }

    pub fn release(&mut self) -> Option<Command> {
        self.remaining = 0;
        if !self.held {
            return None;
        }
        self.held = false;
        Some(Command::SetSoftDrop(false))
    }

    /// Advance one tick; lapses into a release when the grace runs out.
    pub fn tick(&mut self) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return self.release();
        }
        None
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
