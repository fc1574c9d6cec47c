//! Board tests - row completion and collapse

use blockfall::core::Board;
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Cell::Block(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.find_first_complete_row(), None);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);

    assert!(!board.is_vacant(-1, 5));
    assert!(!board.is_vacant(3, BOARD_HEIGHT as i8));
    assert!(board.is_vacant(3, 5));
}

#[test]
fn test_find_first_complete_row_is_lowest() {
    let mut board = Board::new();
    fill_row(&mut board, 7, PieceKind::S);
    fill_row(&mut board, 3, PieceKind::Z);

    assert_eq!(board.find_first_complete_row(), Some(3));
}

#[test]
fn test_marked_row_counts_as_complete() {
    let mut board = Board::new();
    board.set(0, 2, Cell::Block(PieceKind::T));
    board.mark_for_clear(2);

    assert!(board.is_row_complete(2));
    assert_eq!(board.value_at(9, 2), -1);
}

#[test]
fn test_collapse_row_drops_everything_above() {
    let mut board = Board::new();
    board.set(0, 0, Cell::Block(PieceKind::L));
    fill_row(&mut board, 1, PieceKind::I);
    board.set(4, 2, Cell::Block(PieceKind::J));
    board.set(9, 23, Cell::Block(PieceKind::O));

    board.collapse_row(1);

    // Below the collapsed row: untouched.
    assert_eq!(board.get(0, 0), Some(Cell::Block(PieceKind::L)));
    // Above it: shifted down one.
    assert_eq!(board.get(4, 1), Some(Cell::Block(PieceKind::J)));
    assert_eq!(board.get(4, 2), Some(Cell::Empty));
    assert_eq!(board.get(9, 22), Some(Cell::Block(PieceKind::O)));
    // Top row comes in empty.
    for x in 0..BOARD_WIDTH {
        assert_eq!(board.value_at(x, BOARD_HEIGHT - 1), 0);
    }
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_collapse_top_row() {
    let mut board = Board::new();
    fill_row(&mut board, BOARD_HEIGHT as i8 - 1, PieceKind::T);
    board.set(2, BOARD_HEIGHT as i8 - 2, Cell::Block(PieceKind::S));

    board.collapse_row(BOARD_HEIGHT - 1);

    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.value_at(2, BOARD_HEIGHT - 2), PieceKind::S.id() as i8);
}

#[test]
fn test_value_grid_matches_cells() {
    let mut board = Board::new();
    board.set(1, 0, Cell::Block(PieceKind::I));
    board.set(2, 5, Cell::Marked);

    let mut grid = [[0i8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_value_grid(&mut grid);

    assert_eq!(grid[0][1], 5);
    assert_eq!(grid[5][2], -1);
    assert_eq!(grid[5][3], 0);
}
