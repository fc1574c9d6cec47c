//! The falling piece and its collision-safe moves.
//!
//! A piece is painted into the board while it falls, so every move follows
//! the same protocol: erase, test the candidate placement, commit it only if
//! it fits, then repaint. The board never shows the piece anywhere it does
//! not fit.

use std::fmt;

use crate::board::Board;
use crate::pieces::{pattern_for, rotated, shape_of, Pattern, PieceShape};
use crate::types::{Cell, PieceKind, SPAWN_X, SPAWN_Y, VISIBLE_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    x: i8,
    y: i8,
    pattern: Pattern,
    grounded: bool,
}

impl Piece {
    /// New piece at the spawn origin (3, 20), not yet painted.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            pattern: pattern_for(kind),
            grounded: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Board position of the local frame's (0, 0) cell.
    pub fn origin(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Set once a downward move has been refused; never cleared.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Board coordinates of the four occupied cells.
    pub fn minos(&self) -> PieceShape {
        shape_of(&self.pattern)
            .into_iter()
            .map(|(i, j)| (self.x + i, self.y + j))
            .collect()
    }

    /// Write the shape id into every occupied cell.
    ///
    /// Not collision-checked: callers paint only placements known to fit.
    pub fn paint(&self, board: &mut Board) {
        self.fill(board, Cell::Block(self.kind));
    }

    pub fn erase(&self, board: &mut Board) {
        self.fill(board, Cell::Empty);
    }

    fn fill(&self, board: &mut Board, cell: Cell) {
        for (bx, by) in self.minos() {
            board.set(bx, by, cell);
        }
    }

    /// True if the piece overlaps a wall, the floor, or a non-empty cell.
    pub fn collides(&self, board: &Board) -> bool {
        !fits(board, self.x, self.y, &self.pattern)
    }

    /// Shift by (dx, dy). A refused downward move grounds the piece.
    ///
    /// Returns whether the piece moved.
    pub fn translate(&mut self, dx: i8, dy: i8, board: &mut Board) -> bool {
        self.erase(board);
        let moved = fits(board, self.x + dx, self.y + dy, &self.pattern);
        if moved {
            self.x += dx;
            self.y += dy;
        } else if dy < 0 {
            self.grounded = true;
        }
        self.paint(board);
        moved
    }

    pub fn move_left(&mut self, board: &mut Board) -> bool {
        self.translate(-1, 0, board)
    }

    pub fn move_right(&mut self, board: &mut Board) -> bool {
        self.translate(1, 0, board)
    }

    pub fn move_down(&mut self, board: &mut Board) -> bool {
        self.translate(0, -1, board)
    }

    /// Quarter turn in place. Rejected outright if the turned shape does not fit.
    pub fn rotate(&mut self, board: &mut Board) -> bool {
        let candidate = rotated(&self.pattern);
        self.erase(board);
        let turned = fits(board, self.x, self.y, &candidate);
        if turned {
            self.pattern = candidate;
        }
        self.paint(board);
        turned
    }

    /// True if any occupied cell sits above `row`.
    pub fn is_above_row(&self, row: i8) -> bool {
        self.minos().iter().any(|&(_, by)| by > row)
    }

    /// True if the piece pokes out of the visible field into spawn headroom.
    pub fn is_over_top(&self) -> bool {
        self.is_above_row(VISIBLE_HEIGHT as i8 - 1)
    }
}

/// Collision test for a pattern placed at (x, y). The top of the board is
/// covered by the spawn-height assertion in the types crate; `is_vacant`
/// still refuses anything off the array.
fn fits(board: &Board, x: i8, y: i8, pattern: &Pattern) -> bool {
    shape_of(pattern)
        .iter()
        .all(|&(i, j)| board.is_vacant(x + i, y + j))
}

impl fmt::Display for Piece {
    /// Renders the local frame top row first, ■ for occupied and □ for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.pattern.len();
        for j in (0..n).rev() {
            for column in &self.pattern {
                f.write_str(if column[j] { "■" } else { "□" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(kind: PieceKind, board: &mut Board) -> Piece {
        let piece = Piece::spawn(kind);
        piece.paint(board);
        piece
    }

    #[test]
    fn spawn_paints_shape_id() {
        let mut board = Board::new();
        let piece = painted(PieceKind::I, &mut board);

        assert_eq!(piece.origin(), (3, 20));
        for x in 3..=6u8 {
            assert_eq!(board.value_at(x, 21), 5);
        }
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn sideways_moves_stop_at_walls() {
        let mut board = Board::new();
        let mut piece = painted(PieceKind::I, &mut board);

        let mut steps = 0;
        while piece.move_left(&mut board) {
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(piece.origin(), (0, 20));
        assert!(!piece.is_grounded());

        while piece.move_right(&mut board) {}
        assert_eq!(piece.origin(), (6, 20));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn blocked_sideways_move_does_not_ground() {
        let mut board = Board::new();
        board.set(2, 21, Cell::Block(PieceKind::O));
        let mut piece = painted(PieceKind::I, &mut board);

        assert!(!piece.move_left(&mut board));
        assert!(!piece.is_grounded());
        assert_eq!(piece.origin(), (3, 20));
    }

    #[test]
    fn refused_rotation_keeps_pattern() {
        let mut board = Board::new();
        // The vertical I would occupy column 4, rows 20..=23.
        board.set(4, 23, Cell::Block(PieceKind::T));
        let mut piece = painted(PieceKind::I, &mut board);
        let before = *piece.pattern();

        assert!(!piece.rotate(&mut board));
        assert_eq!(*piece.pattern(), before);
        assert_eq!(board.value_at(3, 21), 5);
    }

    #[test]
    fn over_top_uses_row_nineteen() {
        assert!(Piece::at(PieceKind::O, 3, 18).is_over_top());
        assert!(!Piece::at(PieceKind::O, 3, 17).is_over_top());
        assert!(Piece::at(PieceKind::O, 3, 17).is_above_row(18));
    }

    #[test]
    fn display_renders_top_row_first() {
        let text = Piece::spawn(PieceKind::T).to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows, ["□□□□", "■■■□", "□■□□", "□□□□"]);
    }
}
