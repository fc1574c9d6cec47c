//! Board module - manages the game grid
//!
//! The board is a 10x24 grid stored as a flat array for cache locality and
//! zero allocation. Coordinates are (x, y) with x in 0..9 (left to right) and
//! y in 0..23 (bottom to top). Rows 20..23 are spawn headroom above the
//! visible field.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Integer cell value at (x, y): 0 empty, -1 marked, 1..=7 shape id.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board.
    pub fn value_at(&self, x: u8, y: u8) -> i8 {
        assert!(
            x < BOARD_WIDTH && y < BOARD_HEIGHT,
            "cell ({x}, {y}) is outside the {BOARD_WIDTH}x{BOARD_HEIGHT} board"
        );
        self.cells[(y as usize) * WIDTH + (x as usize)].value()
    }

    /// True if (x, y) is on the board and holds nothing.
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * WIDTH;
        &mut self.cells[start..start + WIDTH]
    }

    /// A row is complete when none of its cells is empty (marked counts as filled).
    pub fn is_row_complete(&self, y: u8) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        self.row(y as usize).iter().all(|cell| !cell.is_empty())
    }

    /// Lowest complete row, scanning upward from row 0.
    pub fn find_first_complete_row(&self) -> Option<u8> {
        (0..BOARD_HEIGHT).find(|&y| self.is_row_complete(y))
    }

    /// Paint every cell of `row` as marked for clearing.
    pub fn mark_for_clear(&mut self, row: u8) {
        assert!(row < BOARD_HEIGHT, "row {row} is outside the board");
        self.row_mut(row as usize).fill(Cell::Marked);
    }

    /// Remove `row` and drop everything above it by one; the top row becomes empty.
    ///
    /// Rows below `row` are untouched.
    pub fn collapse_row(&mut self, row: u8) {
        assert!(row < BOARD_HEIGHT, "row {row} is outside the board");
        let start = row as usize * WIDTH;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(start + WIDTH.., start);
        self.row_mut(HEIGHT - 1).fill(Cell::Empty);
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Write integer cell values into a `[row][column]` grid.
    pub fn write_value_grid(&self, out: &mut [[i8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * WIDTH + x].value();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
