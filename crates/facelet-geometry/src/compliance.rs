//! Adjacency table compliance helpers.
//!
//! These functions verify that an [`AdjacencyTable`] describes a real 3×3
//! cube. They panic with a descriptive message on the first violation and
//! are reused by the unit tests here and the engine's integration tests.

use std::collections::BTreeSet;

use facelet_core::{Face, CENTER};

use crate::adjacency::{AdjacencyTable, CW_GRID_PERMUTATION};
use crate::frame::{frame, StickerRef};

/// Assert that each entry's four strips sit on the four faces bordering the
/// turning face: never the face itself, never its opposite, no repeats.
pub fn assert_strips_on_bordering_faces(table: &AdjacencyTable) {
    for entry in table.entries() {
        let faces: BTreeSet<Face> = entry.strips.iter().map(|s| s.face).collect();
        assert_eq!(faces.len(), 4, "{}: neighbour faces repeat", entry.face);
        assert!(
            !faces.contains(&entry.face),
            "{}: strip on the turning face",
            entry.face
        );
        assert!(
            !faces.contains(&entry.face.opposite()),
            "{}: strip on the opposite face",
            entry.face
        );
    }
}

/// Assert that each entry names 12 distinct, in-range, non-center stickers.
pub fn assert_twelve_distinct_stickers(table: &AdjacencyTable) {
    for entry in table.entries() {
        let mut seen = BTreeSet::new();
        for strip in &entry.strips {
            for &i in &strip.indices {
                assert!(i < 9, "{}: index {i} out of range", entry.face);
                assert_ne!(i, CENTER, "{}: center sticker in strip", entry.face);
                assert!(
                    seen.insert((strip.face, i)),
                    "{}: sticker {}[{i}] listed twice",
                    entry.face,
                    strip.face
                );
            }
        }
        assert_eq!(seen.len(), 12, "{}", entry.face);
    }
}

/// Assert that every strip sticker lies in the turning layer.
pub fn assert_strips_in_turning_layer(table: &AdjacencyTable) {
    for entry in table.entries() {
        let normal = frame(entry.face).normal;
        for strip in &entry.strips {
            for s in strip.stickers() {
                let p = s.position();
                let depth = p[0] * normal[0] + p[1] * normal[1] + p[2] * normal[2];
                assert_eq!(
                    depth, 1,
                    "{}: {}[{}] at {p:?} is outside the layer",
                    entry.face, s.face, s.index
                );
            }
        }
    }
}

/// Assert that each face is disturbed by exactly the four faces bordering
/// it, and that together they touch each of its 8 non-center stickers
/// (corners twice, edges once).
pub fn assert_neighbour_coverage(table: &AdjacencyTable) {
    for face in Face::ALL {
        let mut turners = BTreeSet::new();
        let mut hits = [0usize; 9];
        for entry in table.entries() {
            for strip in entry.strips.iter().filter(|s| s.face == face) {
                turners.insert(entry.face);
                for &i in &strip.indices {
                    hits[i] += 1;
                }
            }
        }
        assert_eq!(turners.len(), 4, "{face}: disturbed by {turners:?}");
        assert!(!turners.contains(&face.opposite()), "{face}");
        for (i, &n) in hits.iter().enumerate() {
            let expected = match i {
                CENTER => 0,
                0 | 2 | 6 | 8 => 2,
                _ => 1,
            };
            assert_eq!(n, expected, "{face}[{i}] touched {n} times");
        }
    }
}

/// Assert that strip `k + 1` is the clockwise image of strip `k`, element
/// by element, including the wrap from strip 3 back to strip 0.
pub fn assert_strips_follow_rotation(table: &AdjacencyTable) {
    for entry in table.entries() {
        for k in 0..4 {
            let from = entry.strips[k].stickers();
            let to = entry.strips[(k + 1) % 4].stickers();
            for j in 0..3 {
                assert_eq!(
                    from[j].rotated_cw(entry.face),
                    to[j],
                    "{}: strip {k}[{j}] does not rotate onto strip {}[{j}]",
                    entry.face,
                    (k + 1) % 4
                );
            }
        }
    }
}

/// Assert that [`CW_GRID_PERMUTATION`] agrees with the geometric rotation
/// of each face's own stickers.
pub fn assert_grid_permutation_matches_rotation() {
    for face in Face::ALL {
        for (dst, &src) in CW_GRID_PERMUTATION.iter().enumerate() {
            assert_eq!(
                StickerRef::new(face, src).rotated_cw(face),
                StickerRef::new(face, dst),
                "{face}: grid permutation disagrees with rotation at {dst}"
            );
        }
    }
}

/// Run every compliance check.
pub fn run_full_compliance(table: &AdjacencyTable) {
    assert_strips_on_bordering_faces(table);
    assert_twelve_distinct_stickers(table);
    assert_strips_in_turning_layer(table);
    assert_neighbour_coverage(table);
    assert_strips_follow_rotation(table);
    assert_grid_permutation_matches_rotation();
}
