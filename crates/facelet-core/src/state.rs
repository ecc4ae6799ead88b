//! The flat cube state and its validation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorScheme};
use crate::error::CubeError;
use crate::face::{Face, FACE_COUNT, STICKERS_PER_FACE};

/// Index of the center sticker within a [`StickerGrid`].
pub const CENTER: usize = 4;

/// One face's stickers, row-major (`index = 3 * row + col`) as seen from
/// outside the cube.
pub type StickerGrid = [Color; STICKERS_PER_FACE];

/// A complete cube: one [`StickerGrid`] per [`Face`].
///
/// The shape invariant (6 faces × 9 stickers) is enforced by the type, so
/// a `CubeState` value is always well formed. Untyped input enters through
/// [`CubeState::from_flat`], which runs [`validate`] first.
///
/// No solvability check is performed: any assignment of colors is a
/// valid state.
///
/// On the wire a state is a JSON array of 6 arrays of 9 color strings in
/// flat-form face order.
///
/// # Examples
///
/// ```
/// use facelet_core::{CubeState, Face};
///
/// let state = CubeState::solved();
/// assert!(state.is_solved());
/// assert_eq!(state.face(Face::Up)[4].as_str(), "white");
///
/// let flat = state.to_flat();
/// assert_eq!(CubeState::from_flat(flat).unwrap(), state);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct CubeState {
    faces: [StickerGrid; FACE_COUNT],
}

impl CubeState {
    /// The solved state under the default [`ColorScheme`].
    pub fn solved() -> Self {
        Self::solved_with(&ColorScheme::default())
    }

    /// The solved state under `scheme`.
    pub fn solved_with(scheme: &ColorScheme) -> Self {
        Self {
            faces: Face::ALL.map(|face| std::array::from_fn(|_| scheme.color(face).clone())),
        }
    }

    /// Build a state from typed grids in flat-form face order.
    pub fn from_grids(faces: [StickerGrid; FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// Build a state from the untyped flat form, rejecting bad shapes with
    /// [`CubeError::MalformedState`].
    pub fn from_flat(faces: Vec<Vec<Color>>) -> Result<Self, CubeError> {
        validate(&faces)?;
        let mut grids = Vec::with_capacity(FACE_COUNT);
        for (i, stickers) in faces.into_iter().enumerate() {
            let grid = StickerGrid::try_from(stickers).map_err(|v| {
                CubeError::malformed(format!("face {i} has {} stickers, expected 9", v.len()))
            })?;
            grids.push(grid);
        }
        let faces = <[StickerGrid; FACE_COUNT]>::try_from(grids).map_err(|v| {
            CubeError::malformed(format!("expected {FACE_COUNT} faces, got {}", v.len()))
        })?;
        Ok(Self { faces })
    }

    /// The untyped flat form: 6 vectors of 9 colors.
    pub fn to_flat(&self) -> Vec<Vec<Color>> {
        self.faces.iter().map(|grid| grid.to_vec()).collect()
    }

    /// Stickers of `face`.
    pub fn face(&self, face: Face) -> &StickerGrid {
        &self.faces[face.index()]
    }

    /// Mutable stickers of `face`.
    pub fn face_mut(&mut self, face: Face) -> &mut StickerGrid {
        &mut self.faces[face.index()]
    }

    /// A single sticker. Panics if `index >= 9`.
    pub fn sticker(&self, face: Face, index: usize) -> &Color {
        &self.faces[face.index()][index]
    }

    /// Iterate `(face, grid)` pairs in flat-form order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &StickerGrid)> + '_ {
        Face::ALL.into_iter().zip(self.faces.iter())
    }

    /// `true` if every face is a single color.
    ///
    /// Does not require the default scheme, only uniform faces.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().all(|c| c == &grid[CENTER]))
    }

    /// `true` if this is exactly the default solved state.
    pub fn is_default(&self) -> bool {
        *self == Self::solved()
    }

    /// Multiset of sticker colors, in first-seen order.
    pub fn color_counts(&self) -> IndexMap<Color, usize> {
        let mut counts = IndexMap::new();
        for grid in &self.faces {
            for color in grid {
                *counts.entry(color.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl TryFrom<Vec<Vec<Color>>> for CubeState {
    type Error = CubeError;

    fn try_from(faces: Vec<Vec<Color>>) -> Result<Self, Self::Error> {
        Self::from_flat(faces)
    }
}

impl From<CubeState> for Vec<Vec<Color>> {
    fn from(state: CubeState) -> Self {
        state.faces.into_iter().map(Vec::from).collect()
    }
}

/// Check that an untyped flat state has exactly 6 faces of exactly 9
/// stickers each.
pub fn validate(faces: &[Vec<Color>]) -> Result<(), CubeError> {
    if faces.len() != FACE_COUNT {
        return Err(CubeError::malformed(format!(
            "expected {FACE_COUNT} faces, got {}",
            faces.len()
        )));
    }
    for (i, stickers) in faces.iter().enumerate() {
        if stickers.len() != STICKERS_PER_FACE {
            return Err(CubeError::malformed(format!(
                "face {i} has {} stickers, expected {STICKERS_PER_FACE}",
                stickers.len()
            )));
        }
    }
    Ok(())
}
