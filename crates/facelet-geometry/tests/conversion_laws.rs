//! Round-trip laws for the cubie view over arbitrary states.

use facelet_core::{CubeState, Face};
use facelet_geometry::{to_cubies, to_flat, CubieKind, CUBIE_COUNT};
use facelet_test_utils::{arb_state, labelled_state};
use proptest::prelude::*;

#[test]
fn solved_round_trip() {
    let s = CubeState::solved();
    assert_eq!(to_flat(&to_cubies(&s)), s);
}

#[test]
fn every_sticker_appears_on_exactly_one_cubie() {
    let set = to_cubies(&labelled_state());
    assert_eq!(set.cubies().len(), CUBIE_COUNT);
    let facets: usize = set.cubies().iter().map(|c| c.facets.len()).sum();
    assert_eq!(facets, 54);

    let mut labels: Vec<&str> = set
        .cubies()
        .iter()
        .flat_map(|c| c.facets.iter().map(|f| f.color.as_str()))
        .collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 54);
}

#[test]
fn centers_carry_face_centers() {
    let set = to_cubies(&labelled_state());
    for cubie in set.of_kind(CubieKind::Center) {
        let facet = &cubie.facets[0];
        assert_eq!(facet.color.as_str(), format!("{}4", facet.face.letter()));
    }
    assert!(set
        .of_kind(CubieKind::Center)
        .all(|c| Face::ALL.contains(&c.facets[0].face)));
}

proptest! {
    #[test]
    fn flat_cubie_flat_is_identity(state in arb_state()) {
        prop_assert_eq!(to_flat(&to_cubies(&state)), state);
    }

    #[test]
    fn cubie_flat_cubie_is_identity(state in arb_state()) {
        let set = to_cubies(&state);
        prop_assert_eq!(to_cubies(&to_flat(&set)), set);
    }
}
