//! The adjacency table: which neighbour stickers a face turn disturbs.
//!
//! A quarter turn of a face moves its own 9 stickers and a ring of 12
//! stickers on the four bordering faces, in four strips of three. The
//! [`AdjacencyTable`] lists those strips per turning face in clockwise
//! cycling order: a clockwise turn carries the contents of strip `k` into
//! strip `k + 1` (mod 4), element by element.
//!
//! The table is derived from the face frames in [`crate::frame`]. Strip 0
//! is the neighbour above the turning face (in the turning face's own
//! view), read left to right; each following strip is the image of the
//! previous one under the clockwise rotation. It is built once per process
//! and shared read-only.

use std::sync::OnceLock;

use facelet_core::{Face, FACE_COUNT};

use crate::frame::{add, face_along, frame, scale, StickerRef};

/// Clockwise 3×3 quarter-turn of a face grid: `new[i] = old[perm[i]]`.
pub const CW_GRID_PERMUTATION: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Counterclockwise 3×3 quarter-turn, the inverse of
/// [`CW_GRID_PERMUTATION`].
pub const CCW_GRID_PERMUTATION: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Three stickers of one neighbour face that move together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Strip {
    /// The neighbour face.
    pub face: Face,
    /// Sticker indices on `face`, in the order they travel.
    pub indices: [usize; 3],
}

impl Strip {
    /// The three stickers as [`StickerRef`]s.
    pub fn stickers(&self) -> [StickerRef; 3] {
        self.indices.map(|i| StickerRef::new(self.face, i))
    }
}

/// The four strips disturbed by turning one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyEntry {
    /// The turning face.
    pub face: Face,
    /// Neighbour strips in clockwise cycling order.
    pub strips: [Strip; 4],
}

/// Neighbour strips for all six faces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyTable {
    entries: [AdjacencyEntry; FACE_COUNT],
}

impl AdjacencyTable {
    /// Derive the table from the face frames.
    ///
    /// Deterministic. Prefer [`adjacency()`], which derives once and caches.
    pub fn derive() -> Self {
        Self {
            entries: Face::ALL.map(derive_entry),
        }
    }

    /// The entry for turning `face`.
    pub fn entry(&self, face: Face) -> &AdjacencyEntry {
        &self.entries[face.index()]
    }

    /// All entries in flat-form face order.
    pub fn entries(&self) -> &[AdjacencyEntry; FACE_COUNT] {
        &self.entries
    }
}

/// The process-wide adjacency table.
pub fn adjacency() -> &'static AdjacencyTable {
    static TABLE: OnceLock<AdjacencyTable> = OnceLock::new();
    TABLE.get_or_init(AdjacencyTable::derive)
}

fn derive_entry(turning: Face) -> AdjacencyEntry {
    let f = frame(turning);
    let above = scale(-1, f.down);
    let neighbour = face_along(above);

    // Top edge of the turning layer, left to right in the turning face's view.
    // Every position has unit components along both normals, so it lies on
    // `neighbour` and in the turning layer.
    let base = add(f.normal, above);
    let first = [-1, 0, 1].map(|k| StickerRef::on_face(neighbour, add(base, scale(k, f.right))));

    let mut strips = [first; 4];
    for k in 1..4 {
        strips[k] = strips[k - 1].map(|s| s.rotated_cw(turning));
    }

    AdjacencyEntry {
        face: turning,
        strips: strips.map(|stickers| Strip {
            face: stickers[0].face,
            indices: stickers.map(|s| s.index),
        }),
    }
}
