//! The cubie view of a cube state.
//!
//! A cube is 26 visible cubies: 6 centers, 12 edges, 8 corners. Each sits
//! at a fixed position in `{-1, 0, 1}³` (the hidden core at the origin is
//! not modelled) and exposes one colored facet per nonzero coordinate.
//!
//! The cubie view is always *derived* from the flat form with
//! [`to_cubies`], and converted back with [`to_flat`]. Moves are never
//! applied to it.

use facelet_core::{Color, CubeError, CubeState, Face};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::frame::{StickerRef, Vec3};

/// Number of visible cubies.
pub const CUBIE_COUNT: usize = 26;

/// Cubie classification by number of exposed facets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubieKind {
    /// One facet, at a face center.
    Center,
    /// Two facets.
    Edge,
    /// Three facets.
    Corner,
}

/// One colored side of a cubie.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facet {
    /// The outer face this side lies on.
    pub face: Face,
    /// Sticker color.
    pub color: Color,
}

/// A single small cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cubie {
    /// Fixed position, each coordinate in `{-1, 0, 1}`.
    pub position: Vec3,
    /// Exposed facets, ordered by axis (x, then y, then z).
    pub facets: SmallVec<[Facet; 3]>,
}

impl Cubie {
    /// Center, edge or corner, by the faces its position touches.
    ///
    /// `None` for the hidden core or a position outside the cube. The facet
    /// list is not consulted.
    pub fn kind(&self) -> Option<CubieKind> {
        if self.position.iter().any(|c| !(-1..=1).contains(c)) {
            return None;
        }
        match exposed_faces(self.position).len() {
            1 => Some(CubieKind::Center),
            2 => Some(CubieKind::Edge),
            3 => Some(CubieKind::Corner),
            _ => None,
        }
    }

    /// Color shown on `face`, if this cubie has a facet there.
    pub fn color_on(&self, face: Face) -> Option<&Color> {
        self.facets
            .iter()
            .find(|facet| facet.face == face)
            .map(|facet| &facet.color)
    }
}

/// A structurally complete set of 26 cubies in canonical order.
///
/// Canonical order is lexicographic by position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cubie>", into = "Vec<Cubie>")]
pub struct CubieSet {
    cubies: Vec<Cubie>,
}

impl CubieSet {
    /// Check completeness and sort into canonical order.
    ///
    /// Requires 26 cubies at the 26 distinct visible positions, each
    /// exposing exactly the faces its position implies. Facets may be given
    /// in any order. Fails with [`CubeError::MalformedState`].
    pub fn new(mut cubies: Vec<Cubie>) -> Result<Self, CubeError> {
        if cubies.len() != CUBIE_COUNT {
            return Err(CubeError::MalformedState {
                reason: format!("expected {CUBIE_COUNT} cubies, got {}", cubies.len()),
            });
        }
        cubies.sort_by_key(|c| c.position);
        for (cubie, expected) in cubies.iter_mut().zip(positions()) {
            if cubie.position != expected {
                return Err(CubeError::MalformedState {
                    reason: format!(
                        "missing or duplicate cubie near position {expected:?} (found {:?})",
                        cubie.position
                    ),
                });
            }
            let faces = exposed_faces(expected);
            let mut facets = SmallVec::with_capacity(faces.len());
            for face in &faces {
                let Some(color) = cubie.color_on(*face) else {
                    return Err(CubeError::MalformedState {
                        reason: format!("cubie at {expected:?} has no facet on {face}"),
                    });
                };
                facets.push(Facet {
                    face: *face,
                    color: color.clone(),
                });
            }
            if cubie.facets.len() != faces.len() {
                return Err(CubeError::MalformedState {
                    reason: format!(
                        "cubie at {expected:?} has {} facets, expected {}",
                        cubie.facets.len(),
                        faces.len()
                    ),
                });
            }
            cubie.facets = facets;
        }
        Ok(Self { cubies })
    }

    /// Cubies in canonical order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// The cubie at `position`, if visible.
    pub fn get(&self, position: Vec3) -> Option<&Cubie> {
        self.cubies
            .binary_search_by_key(&position, |c| c.position)
            .ok()
            .map(|i| &self.cubies[i])
    }

    /// Iterate cubies of one kind.
    pub fn of_kind(&self, kind: CubieKind) -> impl Iterator<Item = &Cubie> + '_ {
        self.cubies.iter().filter(move |c| c.kind() == Some(kind))
    }
}

impl TryFrom<Vec<Cubie>> for CubieSet {
    type Error = CubeError;

    fn try_from(cubies: Vec<Cubie>) -> Result<Self, Self::Error> {
        Self::new(cubies)
    }
}

impl From<CubieSet> for Vec<Cubie> {
    fn from(set: CubieSet) -> Self {
        set.cubies
    }
}

/// The 26 visible cubie positions in canonical order.
pub fn positions() -> impl Iterator<Item = Vec3> {
    (-1..=1).flat_map(|x| {
        (-1..=1).flat_map(move |y| {
            (-1..=1)
                .map(move |z| [x, y, z])
                .filter(|p| *p != [0, 0, 0])
        })
    })
}

/// Faces a cubie at `position` shows, ordered by axis.
pub fn exposed_faces(position: Vec3) -> SmallVec<[Face; 3]> {
    let axes = [
        (Face::Left, Face::Right),
        (Face::Down, Face::Up),
        (Face::Back, Face::Front),
    ];
    let mut faces = SmallVec::new();
    for (coord, (neg, pos)) in position.into_iter().zip(axes) {
        match coord {
            1 => faces.push(pos),
            -1 => faces.push(neg),
            _ => {}
        }
    }
    faces
}

/// Derive the cubie view of `state`.
pub fn to_cubies(state: &CubeState) -> CubieSet {
    let cubies = positions()
        .map(|position| Cubie {
            position,
            facets: exposed_faces(position)
                .into_iter()
                .filter_map(|face| StickerRef::at(face, position))
                .map(|s| Facet {
                    face: s.face,
                    color: state.sticker(s.face, s.index).clone(),
                })
                .collect(),
        })
        .collect();
    CubieSet { cubies }
}

/// Rebuild the flat state from a cubie set.
///
/// The set's 54 facets cover all 54 sticker slots exactly once, so every
/// slot of the result is written.
pub fn to_flat(cubies: &CubieSet) -> CubeState {
    let mut state = CubeState::from_grids(std::array::from_fn(|_| {
        std::array::from_fn(|_| Color::from(""))
    }));
    for cubie in &cubies.cubies {
        for facet in &cubie.facets {
            if let Some(s) = StickerRef::at(facet.face, cubie.position) {
                state.face_mut(s.face)[s.index] = facet.color.clone();
            }
        }
    }
    state
}
