//! Algebraic laws of quarter turns, checked over arbitrary states.

use facelet_core::{CubeState, Face, Move, CENTER};
use facelet_engine::{apply_move, apply_sequence};
use facelet_geometry::{to_cubies, to_flat};
use facelet_test_utils::{arb_face, arb_move, arb_moves, arb_state, labelled_state, moves};
use proptest::prelude::*;

proptest! {
    #[test]
    fn four_clockwise_turns_are_identity(state in arb_state(), face in arb_face()) {
        let cw = Move::cw(face);
        prop_assert_eq!(apply_sequence(&state, &[cw; 4]), state);
    }

    #[test]
    fn four_counterclockwise_turns_are_identity(state in arb_state(), face in arb_face()) {
        let ccw = Move::ccw(face);
        prop_assert_eq!(apply_sequence(&state, &[ccw; 4]), state);
    }

    #[test]
    fn cw_then_ccw_is_identity(state in arb_state(), face in arb_face()) {
        let there = apply_move(&state, Move::cw(face));
        prop_assert_eq!(apply_move(&there, Move::ccw(face)), state);
    }

    #[test]
    fn prime_equals_triple(state in arb_state(), face in arb_face()) {
        let cw = Move::cw(face);
        prop_assert_eq!(
            apply_move(&state, Move::ccw(face)),
            apply_sequence(&state, &[cw, cw, cw])
        );
    }

    #[test]
    fn colors_are_conserved(state in arb_state(), seq in arb_moves(30)) {
        let after = apply_sequence(&state, &seq);
        let mut before_counts: Vec<_> = state.color_counts().into_iter().collect();
        let mut after_counts: Vec<_> = after.color_counts().into_iter().collect();
        before_counts.sort();
        after_counts.sort();
        prop_assert_eq!(before_counts, after_counts);
    }

    #[test]
    fn centers_never_move(state in arb_state(), mv in arb_move()) {
        let after = apply_move(&state, mv);
        for face in Face::ALL {
            prop_assert_eq!(after.sticker(face, CENTER), state.sticker(face, CENTER));
        }
    }

    #[test]
    fn other_faces_keep_their_center(state in arb_state(), mv in arb_move(), face in arb_face()) {
        prop_assume!(face != mv.face);
        let after = apply_move(&state, mv);
        prop_assert_eq!(after.sticker(face, CENTER), state.sticker(face, CENTER));
    }

    #[test]
    fn opposite_face_untouched(state in arb_state(), mv in arb_move()) {
        let after = apply_move(&state, mv);
        let opposite = mv.face.opposite();
        prop_assert_eq!(after.face(opposite), state.face(opposite));
    }

    #[test]
    fn sequence_then_reverse_inverse_is_identity(state in arb_state(), seq in arb_moves(25)) {
        let inverse: Vec<Move> = seq.iter().rev().map(|m| m.inverse()).collect();
        let there = apply_sequence(&state, &seq);
        prop_assert_eq!(apply_sequence(&there, &inverse), state);
    }

    #[test]
    fn scrambled_states_round_trip_through_cubies(seq in arb_moves(30)) {
        let state = apply_sequence(&CubeState::solved(), &seq);
        prop_assert_eq!(to_flat(&to_cubies(&state)), state);
    }
}

#[test]
fn each_turn_moves_exactly_twenty_stickers() {
    let start = labelled_state();
    for mv in Move::ALL {
        let after = apply_move(&start, mv);
        let changed = Face::ALL
            .into_iter()
            .flat_map(|f| (0..9).map(move |i| (f, i)))
            .filter(|&(f, i)| after.sticker(f, i) != start.sticker(f, i))
            .count();
        assert_eq!(changed, 20, "{mv}");
    }
}

#[test]
fn opposite_faces_commute() {
    let start = labelled_state();
    for (a, b) in [
        (Face::Left, Face::Right),
        (Face::Up, Face::Down),
        (Face::Front, Face::Back),
    ] {
        let ab = apply_sequence(&start, &[Move::cw(a), Move::cw(b)]);
        let ba = apply_sequence(&start, &[Move::cw(b), Move::cw(a)]);
        assert_eq!(ab, ba, "{a} and {b}");
    }
}

#[test]
fn adjacent_faces_do_not_commute() {
    let start = labelled_state();
    let ru = apply_sequence(&start, &moves("R U"));
    let ur = apply_sequence(&start, &moves("U R"));
    assert_ne!(ru, ur);
}

#[test]
fn scrambled_state_round_trips_through_cubies() {
    let state = apply_sequence(&CubeState::solved(), &moves(facelet_test_utils::SCRAMBLE_20));
    assert!(!state.is_solved());
    assert_eq!(to_flat(&to_cubies(&state)), state);
}
