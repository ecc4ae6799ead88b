//! Quarter-turn application on the flat form.
//!
//! A turn rewrites two disjoint sets of stickers: the turning face's own
//! grid, permuted by the fixed 3×3 rotation, and the 12 neighbour stickers
//! listed by the [`AdjacencyTable`](facelet_geometry::AdjacencyTable),
//! cycled one strip along. Both read from the input state only, so the
//! order of writes never matters.
//!
//! There is exactly one implementation. Counterclockwise turns use the
//! inverse permutation and the opposite strip shift directly; tests check
//! that this equals three clockwise turns.

use facelet_core::{CubeError, CubeState, Direction, Move};
use facelet_geometry::{adjacency, CCW_GRID_PERMUTATION, CW_GRID_PERMUTATION};

/// Apply one quarter turn, returning the new state.
///
/// The input is never modified.
///
/// # Examples
///
/// ```
/// use facelet_core::{CubeState, Face, Move};
/// use facelet_engine::apply_move;
///
/// let solved = CubeState::solved();
/// let turned = apply_move(&solved, Move::cw(Face::Up));
/// assert!(!turned.is_solved());
/// assert_eq!(apply_move(&turned, Move::ccw(Face::Up)), solved);
/// ```
pub fn apply_move(state: &CubeState, mv: Move) -> CubeState {
    let entry = adjacency().entry(mv.face);
    let (grid_perm, shift) = match mv.direction {
        Direction::Clockwise => (&CW_GRID_PERMUTATION, 3),
        Direction::CounterClockwise => (&CCW_GRID_PERMUTATION, 1),
    };

    let mut next = state.clone();

    let old = state.face(mv.face);
    *next.face_mut(mv.face) = std::array::from_fn(|i| old[grid_perm[i]].clone());

    // Strip k receives strip k-1 on a clockwise turn, strip k+1 otherwise.
    for (k, dst) in entry.strips.iter().enumerate() {
        let src = &entry.strips[(k + shift) % 4];
        let grid = next.face_mut(dst.face);
        for (&d, &s) in dst.indices.iter().zip(&src.indices) {
            grid[d] = state.sticker(src.face, s).clone();
        }
    }

    next
}

/// Parse `token` and apply it.
///
/// Fails with [`CubeError::UnknownMove`] without producing any state.
pub fn apply_token(state: &CubeState, token: &str) -> Result<CubeState, CubeError> {
    let mv: Move = token.parse()?;
    Ok(apply_move(state, mv))
}

/// Apply `moves` in order.
pub fn apply_sequence(state: &CubeState, moves: &[Move]) -> CubeState {
    moves
        .iter()
        .fold(state.clone(), |acc, &mv| apply_move(&acc, mv))
}

/// Parse a whole sequence such as `"R U R' U'"`, then apply it.
///
/// Every token is parsed before any move is applied: one unknown token
/// rejects the whole sequence.
pub fn apply_tokens(state: &CubeState, text: &str) -> Result<CubeState, CubeError> {
    let moves = facelet_core::parse_sequence(text)?;
    Ok(apply_sequence(state, &moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use facelet_core::Face;
    use facelet_test_utils::{arb_move, arb_state, labelled_state, moves};
    use proptest::prelude::*;

    fn row(state: &CubeState, face: Face, r: usize) -> [String; 3] {
        std::array::from_fn(|c| state.sticker(face, 3 * r + c).as_str().to_owned())
    }

    #[test]
    fn up_turn_cycles_top_rows() {
        let before = labelled_state();
        let after = apply_move(&before, Move::cw(Face::Up));
        assert_eq!(row(&after, Face::Front, 0), row(&before, Face::Right, 0));
        assert_eq!(row(&after, Face::Right, 0), row(&before, Face::Back, 0));
        assert_eq!(row(&after, Face::Back, 0), row(&before, Face::Left, 0));
        assert_eq!(row(&after, Face::Left, 0), row(&before, Face::Front, 0));
        for r in 1..3 {
            for face in [Face::Front, Face::Right, Face::Back, Face::Left] {
                assert_eq!(row(&after, face, r), row(&before, face, r));
            }
        }
        assert_eq!(after.face(Face::Down), before.face(Face::Down));
    }

    #[test]
    fn up_turn_rotates_own_grid_clockwise() {
        let after = apply_move(&labelled_state(), Move::cw(Face::Up));
        let up: Vec<&str> = after.face(Face::Up).iter().map(|c| c.as_str()).collect();
        assert_eq!(
            up,
            ["U6", "U3", "U0", "U7", "U4", "U1", "U8", "U5", "U2"]
        );
    }

    #[test]
    fn front_turn_moves_up_bottom_row_onto_right_left_column() {
        let before = labelled_state();
        let after = apply_move(&before, Move::cw(Face::Front));
        assert_eq!(after.sticker(Face::Right, 0).as_str(), "U6");
        assert_eq!(after.sticker(Face::Right, 3).as_str(), "U7");
        assert_eq!(after.sticker(Face::Right, 6).as_str(), "U8");
        assert_eq!(after.sticker(Face::Down, 2).as_str(), "R0");
        assert_eq!(after.sticker(Face::Left, 8).as_str(), "D2");
        assert_eq!(after.sticker(Face::Up, 6).as_str(), "L8");
    }

    #[test]
    fn right_turn_carries_front_column_up() {
        let after = apply_move(&labelled_state(), Move::cw(Face::Right));
        assert_eq!(after.sticker(Face::Up, 8).as_str(), "F8");
        assert_eq!(after.sticker(Face::Up, 2).as_str(), "F2");
        assert_eq!(after.sticker(Face::Back, 0).as_str(), "U8");
        assert_eq!(after.sticker(Face::Down, 8).as_str(), "B0");
        assert_eq!(after.sticker(Face::Front, 8).as_str(), "D8");
    }

    #[test]
    fn input_is_not_mutated() {
        let before = labelled_state();
        let copy = before.clone();
        let _ = apply_move(&before, Move::cw(Face::Back));
        assert_eq!(before, copy);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let s = CubeState::solved();
        for bad in ["X", "F2", "f", "", "U''", "R'x"] {
            assert!(
                matches!(apply_token(&s, bad), Err(CubeError::UnknownMove { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn sequence_with_bad_token_applies_nothing() {
        let err = apply_tokens(&CubeState::solved(), "R U X U'").unwrap_err();
        assert_eq!(
            err,
            CubeError::UnknownMove {
                token: "X".into()
            }
        );
    }

    #[test]
    fn tokens_and_moves_agree() {
        let s = labelled_state();
        assert_eq!(
            apply_tokens(&s, "R U R' U'").unwrap(),
            apply_sequence(&s, &moves("R U R' U'"))
        );
    }

    proptest! {
        #[test]
        fn ccw_equals_three_cw(state in arb_state(), mv in arb_move()) {
            let cw = Move::cw(mv.face);
            let triple = apply_sequence(&state, &[cw, cw, cw]);
            prop_assert_eq!(apply_move(&state, Move::ccw(mv.face)), triple);
        }

        #[test]
        fn move_then_inverse_is_identity(state in arb_state(), mv in arb_move()) {
            let there = apply_move(&state, mv);
            prop_assert_eq!(apply_move(&there, mv.inverse()), state);
        }
    }
}
