//! Cube geometry for the Facelet engine.
//!
//! The flat sticker form knows nothing about 3D space. Everything the move
//! engine needs to know about how faces border each other lives here, and
//! is derived once from first principles rather than transcribed by hand.
//!
//! # Modules
//!
//! - [`frame`]: each face's outward normal and on-face axes, and the
//!   mapping between sticker slots and cubie positions
//! - [`adjacency`]: the [`AdjacencyTable`] of neighbour strips disturbed
//!   by each face turn, plus the fixed 3×3 grid permutations
//! - [`cubie`]: the derived 26-cubie view of a flat state
//! - [`compliance`]: table invariants, reused by tests across the workspace

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod compliance;
pub mod cubie;
pub mod frame;

pub use adjacency::{
    adjacency, AdjacencyEntry, AdjacencyTable, Strip, CCW_GRID_PERMUTATION, CW_GRID_PERMUTATION,
};
pub use cubie::{to_cubies, to_flat, Cubie, CubieKind, CubieSet, Facet, CUBIE_COUNT};
pub use frame::{FaceFrame, StickerRef, Vec3};
