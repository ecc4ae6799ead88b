//! Seeded scramble sequences.
//!
//! A scramble is a run of random quarter turns drawn from a ChaCha8 stream,
//! so the same seed always yields the same sequence on every platform. No
//! two consecutive turns share a face: those would cancel or merge into a
//! half turn. There is no claim of uniformity over cube states.

use facelet_core::{Direction, Face, Move};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `len` quarter turns generated from `seed`.
///
/// # Examples
///
/// ```
/// use facelet_engine::scramble_moves;
///
/// let a = scramble_moves(7, 20);
/// assert_eq!(a.len(), 20);
/// assert_eq!(a, scramble_moves(7, 20));
/// ```
pub fn scramble_moves(seed: u64, len: usize) -> Vec<Move> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut moves: Vec<Move> = Vec::with_capacity(len);
    while moves.len() < len {
        let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        if moves.last().is_some_and(|prev| prev.face == face) {
            continue;
        }
        let direction = if rng.random_bool(0.5) {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        moves.push(Move::new(face, direction));
    }
    moves
}
