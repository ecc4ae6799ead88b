//! The engine moves exactly the stickers the adjacency table names.

use std::collections::BTreeSet;

use facelet_core::{Face, Move, CENTER};
use facelet_engine::apply_move;
use facelet_geometry::frame::frame;
use facelet_geometry::{adjacency, compliance, StickerRef};
use facelet_test_utils::labelled_state;

#[test]
fn table_is_compliant() {
    compliance::run_full_compliance(adjacency());
}

#[test]
fn changed_stickers_are_the_turning_face_and_its_strips() {
    let start = labelled_state();
    for mv in Move::ALL {
        let after = apply_move(&start, mv);
        let changed: BTreeSet<(Face, usize)> = Face::ALL
            .into_iter()
            .flat_map(|f| (0..9).map(move |i| (f, i)))
            .filter(|&(f, i)| after.sticker(f, i) != start.sticker(f, i))
            .collect();

        let mut expected: BTreeSet<(Face, usize)> = (0..9)
            .filter(|&i| i != CENTER)
            .map(|i| (mv.face, i))
            .collect();
        for strip in &adjacency().entry(mv.face).strips {
            expected.extend(strip.indices.iter().map(|&i| (strip.face, i)));
        }
        assert_eq!(changed, expected, "{mv}");
    }
}

#[test]
fn clockwise_turn_follows_geometric_rotation() {
    let start = labelled_state();
    for face in Face::ALL {
        let after = apply_move(&start, Move::cw(face));
        for (f, i) in Face::ALL.into_iter().flat_map(|f| (0..9).map(move |i| (f, i))) {
            let from = StickerRef::new(f, i);
            let p = from.position();
            let normal = frame(face).normal;
            let in_layer = p[0] * normal[0] + p[1] * normal[1] + p[2] * normal[2] == 1;
            let to = if in_layer { from.rotated_cw(face) } else { from };
            assert_eq!(
                after.sticker(to.face, to.index),
                start.sticker(f, i),
                "{face}: {f}[{i}]"
            );
        }
    }
}
