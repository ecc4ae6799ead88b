//! Test fixtures and proptest strategies for Facelet development.
//!
//! - [`labelled_state`]: every sticker carries a unique label (`"U0"` ..
//!   `"B8"`), so a test can tell exactly where each sticker went
//! - move sequences with known behavior ([`SEXY_MOVE`], [`SCRAMBLE_20`])
//! - proptest strategies for moves, move sequences and arbitrary states

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use facelet_core::{parse_sequence, Color, CubeState, Face, Move, StickerGrid};
use proptest::prelude::*;

/// `R U R' U'`. Has order 6: six repetitions restore any state.
pub const SEXY_MOVE: &str = "R U R' U'";

/// A fixed 20-move quarter-turn scramble.
pub const SCRAMBLE_20: &str = "R U' F L' D B' R' U F' L D' B R U F' D' L B' U' R";

/// A state whose 54 stickers are all distinct: face letter then index.
pub fn labelled_state() -> CubeState {
    CubeState::from_grids(Face::ALL.map(labelled_grid))
}

fn labelled_grid(face: Face) -> StickerGrid {
    std::array::from_fn(|i| Color::new(format!("{}{i}", face.letter())))
}

/// Parse a sequence that is known to be valid.
pub fn moves(text: &str) -> Vec<Move> {
    parse_sequence(text).expect("fixture sequence must parse")
}

/// Any of the 12 quarter turns.
pub fn arb_move() -> impl Strategy<Value = Move> {
    (0usize..Move::ALL.len()).prop_map(|i| Move::ALL[i])
}

/// Sequences of up to `max_len` quarter turns.
pub fn arb_moves(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(arb_move(), 0..=max_len)
}

/// Any face.
pub fn arb_face() -> impl Strategy<Value = Face> {
    (0usize..6).prop_map(|i| Face::ALL[i])
}

/// Arbitrary sticker assignments over a small palette.
///
/// Not necessarily reachable from solved: the engine must handle any
/// well-formed state.
pub fn arb_state() -> impl Strategy<Value = CubeState> {
    let palette = ["white", "yellow", "green", "blue", "red", "orange", "pink"];
    prop::collection::vec(0usize..palette.len(), 54).prop_map(move |picks| {
        CubeState::from_grids(std::array::from_fn(|f| {
            std::array::from_fn(|i| Color::from(palette[picks[f * 9 + i]]))
        }))
    })
}
