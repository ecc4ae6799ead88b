//! The six outer faces of the cube.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Number of stickers on one face (a 3×3 grid).
pub const STICKERS_PER_FACE: usize = 9;

/// One of the six outer faces.
///
/// The discriminant is the face's slot in the flat form. That order
/// (Left, Right, Up, Down, Front, Back) is part of the wire format and
/// carries no geometric meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// The face at `x = -1`.
    Left = 0,
    /// The face at `x = +1`.
    Right = 1,
    /// The face at `y = +1`.
    Up = 2,
    /// The face at `y = -1`.
    Down = 3,
    /// The face at `z = +1`, facing the viewer.
    Front = 4,
    /// The face at `z = -1`.
    Back = 5,
}

impl Face {
    /// All faces in flat-form order.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Slot of this face in the flat form (`0..6`).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Face> {
        Self::ALL.get(index).copied()
    }

    /// Move-notation letter (`L R U D F B`).
    pub const fn letter(self) -> char {
        match self {
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Parse a move-notation letter. Only upper-case letters are accepted.
    pub fn from_letter(letter: char) -> Option<Face> {
        Self::ALL.into_iter().find(|f| f.letter() == letter)
    }

    /// Lower-case face name, as used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Face::Left => "left",
            Face::Right => "right",
            Face::Up => "up",
            Face::Down => "down",
            Face::Front => "front",
            Face::Back => "back",
        }
    }

    /// The face on the other side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_flat_order() {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(face));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('f'), None);
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Face::Front).unwrap();
        assert_eq!(json, "\"front\"");
        let back: Face = serde_json::from_str("\"back\"").unwrap();
        assert_eq!(back, Face::Back);
    }
}
