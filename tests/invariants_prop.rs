//! Property-based invariant tests for the board and session.
//!
//! 1. Collapsing a row equals removing it and appending an empty top row
//! 2. The first complete row is the lowest one
//! 3. A falling piece is always in bounds and painted on the board
//! 4. Score and multiplier stay on the chain under arbitrary input
//! 5. Four quarter turns are the identity

use blockfall::core::{pattern_for, rotated, Board, ScriptedShapes, Session};
use blockfall::types::{Cell, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MULTIPLIER_CHAIN};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        3 => Just(Cell::Empty),
        1 => Just(Cell::Marked),
        4 => kind_strategy().prop_map(Cell::Block),
    ]
}

fn board_strategy() -> impl Strategy<Value = Vec<Cell>> {
    proptest::collection::vec(cell_strategy(), BOARD_WIDTH as usize * BOARD_HEIGHT as usize)
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::RotateCw),
        any::<bool>().prop_map(Command::SetSoftDrop),
    ]
}

fn build_board(cells: &[Cell]) -> Board {
    let mut board = Board::new();
    for (i, cell) in cells.iter().enumerate() {
        let x = (i % BOARD_WIDTH as usize) as i8;
        let y = (i / BOARD_WIDTH as usize) as i8;
        board.set(x, y, *cell);
    }
    board
}

fn row_values(board: &Board, y: u8) -> Vec<i8> {
    (0..BOARD_WIDTH).map(|x| board.value_at(x, y)).collect()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn collapse_removes_exactly_one_row(cells in board_strategy(), row in 0..BOARD_HEIGHT) {
        let before = build_board(&cells);
        let mut after = before.clone();
        after.collapse_row(row);

        for y in 0..row {
            prop_assert_eq!(row_values(&after, y), row_values(&before, y));
        }
        for y in row..BOARD_HEIGHT - 1 {
            prop_assert_eq!(row_values(&after, y), row_values(&before, y + 1));
        }
        prop_assert!(row_values(&after, BOARD_HEIGHT - 1).iter().all(|&v| v == 0));
    }

    #[test]
    fn first_complete_row_is_lowest(cells in board_strategy()) {
        let board = build_board(&cells);
        let expected = (0..BOARD_HEIGHT)
            .find(|&y| row_values(&board, y).iter().all(|&v| v != 0));
        prop_assert_eq!(board.find_first_complete_row(), expected);
    }

    #[test]
    fn falling_piece_stays_painted_in_bounds(
        kinds in proptest::collection::vec(kind_strategy(), 1..8),
        frames in proptest::collection::vec(proptest::option::of(command_strategy()), 1..600),
    ) {
        let mut session = Session::with_source(Box::new(ScriptedShapes::new(kinds)));
        for command in frames {
            if let Some(command) = command {
                session.apply(command);
            }
            session.step();

            let active = session.active();
            if session.is_game_over() || active.is_grounded() {
                continue;
            }
            for (x, y) in active.minos() {
                prop_assert!(x >= 0 && x < BOARD_WIDTH as i8, "x {} out of range", x);
                prop_assert!(y >= 0 && y < BOARD_HEIGHT as i8, "y {} out of range", y);
                prop_assert_eq!(session.board().get(x, y), Some(Cell::Block(active.kind())));
            }
        }
    }

    #[test]
    fn score_follows_the_chain(
        seed in any::<u64>(),
        frames in proptest::collection::vec(proptest::option::of(command_strategy()), 1..2_000),
    ) {
        let mut session = Session::new(seed);
        let mut last_score = 0;
        let mut last_rows = 0;
        for command in frames {
            if let Some(command) = command {
                session.apply(command);
            }
            session.step();

            prop_assert!(MULTIPLIER_CHAIN.contains(&session.multiplier()));
            prop_assert!(session.score() >= last_score);
            prop_assert!(session.rows_cleared() >= last_rows);
            last_score = session.score();
            last_rows = session.rows_cleared();
        }
    }

    #[test]
    fn four_turns_are_identity(kind in kind_strategy()) {
        let start = pattern_for(kind);
        let turned = (0..4).fold(start, |p, _| rotated(&p));
        prop_assert_eq!(turned, start);
    }
}
