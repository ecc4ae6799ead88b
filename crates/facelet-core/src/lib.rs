//! Core types for the Facelet cube engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! face and sticker model shared by the rest of the workspace: face
//! identifiers, opaque sticker colors, the flat [`CubeState`], quarter-turn
//! [`Move`]s, and the [`CubeError`] type.
//!
//! # Flat form
//!
//! A cube state is six 3×3 sticker grids stored in a fixed face order
//! (Left, Right, Up, Down, Front, Back). Each grid is row-major as seen
//! when looking straight at that face from outside the cube. This is the
//! form exchanged with callers and the only form moves are applied to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod face;
pub mod moves;
pub mod state;

pub use color::{Color, ColorScheme};
pub use error::CubeError;
pub use face::{Face, FACE_COUNT, STICKERS_PER_FACE};
pub use moves::{parse_sequence, Direction, Move};
pub use state::{validate, CubeState, StickerGrid, CENTER};
