//! Pieces module - tetromino patterns and the 4x4 rotation rule
//!
//! Each piece lives in a 4x4 local frame. `pattern[i][j]` is true when local
//! cell (i, j) is occupied, with i the column and j the row (j grows upward,
//! like board rows). Rotation turns the whole frame about its centre; there
//! is no per-piece pivot and no wall-kick table.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, PATTERN_SIZE};

const N: usize = PATTERN_SIZE as usize;

/// Occupancy of a piece's local frame, indexed `[column][row]`.
pub type Pattern = [[bool; N]; N];

/// Offset of a single mino inside the local frame
pub type MinoOffset = (i8, i8);

/// The occupied offsets of a pattern. A tetromino always has exactly four.
pub type PieceShape = ArrayVec<MinoOffset, 4>;

/// Spawn-orientation cells for each shape id, in id order (Z, S, J, O, I, T, L).
const SPAWN_CELLS: [[(usize, usize); 4]; 7] = [
    // Z: upper pair on the left
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    // S: upper pair on the right
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    // J: bar on top, foot hanging right
    [(2, 1), (0, 2), (1, 2), (2, 2)],
    // O
    [(1, 1), (2, 1), (1, 2), (2, 2)],
    // I: horizontal in local row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // T: bar on top, stem in the middle
    [(1, 1), (0, 2), (1, 2), (2, 2)],
    // L: bar on top, foot hanging left
    [(0, 1), (0, 2), (1, 2), (2, 2)],
];

/// Spawn-orientation pattern for a piece kind.
pub fn pattern_for(kind: PieceKind) -> Pattern {
    let mut pattern = [[false; N]; N];
    for &(i, j) in &SPAWN_CELLS[(kind.id() - 1) as usize] {
        pattern[i][j] = true;
    }
    pattern
}

/// Quarter turn of the local frame: `new[i][j] = old[3 - j][i]`.
pub fn rotated(pattern: &Pattern) -> Pattern {
    let mut out = [[false; N]; N];
    for (i, column) in out.iter_mut().enumerate() {
        for (j, cell) in column.iter_mut().enumerate() {
            *cell = pattern[N - 1 - j][i];
        }
    }
    out
}

/// Occupied local offsets, column-major.
///
/// # Panics
///
/// Panics if the pattern holds more than four cells.
pub fn shape_of(pattern: &Pattern) -> PieceShape {
    let mut shape = PieceShape::new();
    for (i, column) in pattern.iter().enumerate() {
        for (j, &occupied) in column.iter().enumerate() {
            if occupied {
                shape.push((i as i8, j as i8));
            }
        }
    }
    shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_of(&pattern_for(kind)).len(), 4, "{kind:?}");
        }
    }

    #[test]
    fn spawn_patterns_use_local_rows_one_and_two() {
        for kind in PieceKind::ALL {
            for (_, j) in shape_of(&pattern_for(kind)) {
                assert!(j == 1 || j == 2, "{kind:?} reaches local row {j}");
            }
        }
    }

    #[test]
    fn i_pattern_rotates_to_vertical_column_one() {
        let vertical = rotated(&pattern_for(PieceKind::I));
        assert_eq!(
            shape_of(&vertical).as_slice(),
            &[(1, 0), (1, 1), (1, 2), (1, 3)]
        );
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for kind in PieceKind::ALL {
            let start = pattern_for(kind);
            let mut p = start;
            for _ in 0..4 {
                p = rotated(&p);
            }
            assert_eq!(p, start, "{kind:?}");
        }
    }

    #[test]
    fn o_pattern_is_rotation_invariant() {
        let o = pattern_for(PieceKind::O);
        assert_eq!(rotated(&o), o);
    }
}
