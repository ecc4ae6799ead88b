//! Facelet: a 3×3×3 cube state engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Facelet sub-crates. For most users, adding `facelet` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use facelet::prelude::*;
//!
//! // Pure engine: states in, states out.
//! let solved = CubeState::solved();
//! let turned = apply_tokens(&solved, "F R U").unwrap();
//! assert!(!turned.is_solved());
//! assert_eq!(apply_tokens(&turned, "U' R' F'").unwrap(), solved);
//!
//! // Sessions: one stored cube per key.
//! let service = CubeService::in_memory(ServiceConfig::default()).unwrap();
//! let key = SessionKey::new("alice");
//! service.apply_move(&key, "U", None).unwrap();
//! let view = service.cubies(&key).unwrap();
//! assert_eq!(view.of_kind(CubieKind::Corner).count(), 8);
//! assert!(service.reset(&key).unwrap().is_solved());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `facelet-core` | Faces, colors, `CubeState`, `Move`, `CubeError` |
//! | [`geometry`] | `facelet-geometry` | Face frames, adjacency table, cubie view |
//! | [`engine`] | `facelet-engine` | Move engine, session store, `CubeService` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Faces, colors, states and moves (`facelet-core`).
pub use facelet_core as types;

/// Face frames, the adjacency table and the cubie view (`facelet-geometry`).
///
/// [`geometry::adjacency()`] returns the process-wide table;
/// [`geometry::compliance`] checks any table against real cube geometry.
pub use facelet_geometry as geometry;

/// The move engine and session service (`facelet-engine`).
pub use facelet_engine as engine;

/// Common imports for typical Facelet usage.
///
/// ```rust
/// use facelet::prelude::*;
/// ```
pub mod prelude {
    // Model
    pub use facelet_core::{
        parse_sequence, Color, ColorScheme, CubeError, CubeState, Direction, Face, Move,
    };

    // Geometry
    pub use facelet_geometry::{adjacency, to_cubies, to_flat, Cubie, CubieKind, CubieSet};

    // Engine
    pub use facelet_engine::{
        apply_move, apply_sequence, apply_token, apply_tokens, CubeService, InMemoryStore,
        ServiceConfig, ServiceError, SessionKey, StateSource, StateStore,
    };
}
