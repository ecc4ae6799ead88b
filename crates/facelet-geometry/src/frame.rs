//! Face frames and sticker coordinates.
//!
//! Axes: `x` points right, `y` up, `z` out of the Front face toward the
//! viewer. Cubie positions are integer vectors in `{-1, 0, 1}³`.
//!
//! Each face has a [`FaceFrame`]: its outward normal plus the `right` and
//! `down` directions of its sticker grid as seen from outside. The sticker
//! at `(row, col)` of a face sits on the cubie at
//! `normal + (col - 1) * right + (row - 1) * down`.
//!
//! The frames follow the usual cube net: Up sits above Front (its top row
//! borders Back), Down sits below Front (its top row borders Front), and
//! the four side faces share `down = -y`.

use facelet_core::{Face, STICKERS_PER_FACE};
use serde::{Deserialize, Serialize};

/// An integer vector in cube space.
pub type Vec3 = [i32; 3];

/// Orientation of one face's sticker grid in cube space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceFrame {
    /// Outward unit normal.
    pub normal: Vec3,
    /// Direction of increasing column, seen from outside.
    pub right: Vec3,
    /// Direction of increasing row, seen from outside.
    pub down: Vec3,
}

/// Frame of `face`.
pub const fn frame(face: Face) -> FaceFrame {
    match face {
        Face::Left => FaceFrame {
            normal: [-1, 0, 0],
            right: [0, 0, 1],
            down: [0, -1, 0],
        },
        Face::Right => FaceFrame {
            normal: [1, 0, 0],
            right: [0, 0, -1],
            down: [0, -1, 0],
        },
        Face::Up => FaceFrame {
            normal: [0, 1, 0],
            right: [1, 0, 0],
            down: [0, 0, 1],
        },
        Face::Down => FaceFrame {
            normal: [0, -1, 0],
            right: [1, 0, 0],
            down: [0, 0, -1],
        },
        Face::Front => FaceFrame {
            normal: [0, 0, 1],
            right: [1, 0, 0],
            down: [0, -1, 0],
        },
        Face::Back => FaceFrame {
            normal: [0, 0, -1],
            right: [-1, 0, 0],
            down: [0, -1, 0],
        },
    }
}

pub(crate) fn dot(a: Vec3, b: Vec3) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
pub(crate) fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub(crate) fn scale(k: i32, v: Vec3) -> Vec3 {
    [k * v[0], k * v[1], k * v[2]]
}

/// The face whose outward normal points along the dominant axis of `n`.
///
/// Exact for unit axis vectors, which is all this crate ever passes.
pub(crate) fn face_along(n: Vec3) -> Face {
    match n {
        [x, _, _] if x > 0 => Face::Right,
        [x, _, _] if x < 0 => Face::Left,
        [_, y, _] if y > 0 => Face::Up,
        [_, y, _] if y < 0 => Face::Down,
        [_, _, z] if z > 0 => Face::Front,
        _ => Face::Back,
    }
}

/// Rotate `v` a clockwise quarter turn about `face`'s normal, as seen from
/// outside that face.
///
/// In the face's own frame this sends `right` to `down` and `down` to
/// `-right`, leaving the normal component alone.
pub fn rotate_cw(face: Face, v: Vec3) -> Vec3 {
    let f = frame(face);
    let n = dot(v, f.normal);
    let r = dot(v, f.right);
    let d = dot(v, f.down);
    add(add(scale(n, f.normal), scale(r, f.down)), scale(-d, f.right))
}

/// A sticker slot in the flat form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StickerRef {
    /// Face holding the sticker.
    pub face: Face,
    /// Row-major index within the face grid (`0..9`).
    pub index: usize,
}

impl StickerRef {
    /// Construct a sticker reference. Does not check `index`.
    pub const fn new(face: Face, index: usize) -> Self {
        Self { face, index }
    }

    /// Position of the cubie carrying this sticker.
    pub fn position(self) -> Vec3 {
        let f = frame(self.face);
        let row = (self.index / 3) as i32;
        let col = (self.index % 3) as i32;
        add(
            add(f.normal, scale(col - 1, f.right)),
            scale(row - 1, f.down),
        )
    }

    /// The sticker on `face` carried by the cubie at `position`, if that
    /// cubie touches `face`.
    pub fn at(face: Face, position: Vec3) -> Option<StickerRef> {
        if position.iter().any(|c| !(-1..=1).contains(c)) {
            return None;
        }
        let f = frame(face);
        if dot(position, f.normal) != 1 {
            return None;
        }
        Some(Self::on_face(face, position))
    }

    /// Where this sticker lands after a clockwise turn of `turning`.
    ///
    /// Only meaningful for stickers in the turning layer.
    pub fn rotated_cw(self, turning: Face) -> StickerRef {
        let position = rotate_cw(turning, self.position());
        let normal = rotate_cw(turning, frame(self.face).normal);
        Self::on_face(face_along(normal), position)
    }

    /// The sticker on `face` at `position`. The caller guarantees that
    /// `position` is a cubie position touching `face`.
    pub(crate) fn on_face(face: Face, position: Vec3) -> StickerRef {
        let f = frame(face);
        let row = dot(position, f.down) + 1;
        let col = dot(position, f.right) + 1;
        Self::new(face, (row * 3 + col) as usize)
    }
}

/// Every sticker slot, face by face in flat-form order.
pub fn all_stickers() -> impl Iterator<Item = StickerRef> {
    Face::ALL
        .into_iter()
        .flat_map(|face| (0..STICKERS_PER_FACE).map(move |i| StickerRef::new(face, i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_right_handed_seen_from_outside() {
        // Looking at a face from outside, right × down points into the cube.
        for face in Face::ALL {
            let f = frame(face);
            assert_eq!(cross(f.right, f.down), scale(-1, f.normal), "{face}");
            assert_eq!(dot(f.right, f.normal), 0);
            assert_eq!(dot(f.down, f.normal), 0);
        }
    }

    #[test]
    fn normals_match_face_along() {
        for face in Face::ALL {
            assert_eq!(face_along(frame(face).normal), face);
        }
    }

    #[test]
    fn opposite_faces_have_opposite_normals() {
        for face in Face::ALL {
            assert_eq!(
                frame(face.opposite()).normal,
                scale(-1, frame(face).normal)
            );
        }
    }

    #[test]
    fn center_sticker_sits_at_the_normal() {
        for face in Face::ALL {
            assert_eq!(StickerRef::new(face, 4).position(), frame(face).normal);
        }
    }

    #[test]
    fn position_and_at_are_inverse() {
        for s in all_stickers() {
            assert_eq!(StickerRef::at(s.face, s.position()), Some(s));
        }
    }

    #[test]
    fn at_rejects_cubies_off_the_face() {
        assert_eq!(StickerRef::at(Face::Up, [0, 0, 1]), None);
        assert_eq!(StickerRef::at(Face::Up, [0, 2, 0]), None);
        assert_eq!(StickerRef::at(Face::Front, [1, 1, -1]), None);
    }

    #[test]
    fn known_corner_positions() {
        // Front top-left is the up-front-left corner.
        assert_eq!(StickerRef::new(Face::Front, 0).position(), [-1, 1, 1]);
        // Up bottom-right borders Front and Right.
        assert_eq!(StickerRef::new(Face::Up, 8).position(), [1, 1, 1]);
        // Back top-left, seen from behind, is on the right-hand side.
        assert_eq!(StickerRef::new(Face::Back, 0).position(), [1, 1, -1]);
        // Down top-left borders Front and Left.
        assert_eq!(StickerRef::new(Face::Down, 0).position(), [-1, -1, 1]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for face in Face::ALL {
            for v in [[1, 0, 0], [0, 1, 0], [0, 0, 1], [1, 1, 1], [-1, 0, 1]] {
                let mut w = v;
                for _ in 0..4 {
                    w = rotate_cw(face, w);
                }
                assert_eq!(w, v, "{face} {v:?}");
            }
        }
    }

    #[test]
    fn up_turn_sends_front_to_left() {
        assert_eq!(rotate_cw(Face::Up, [0, 0, 1]), [-1, 0, 0]);
        assert_eq!(rotate_cw(Face::Up, [1, 0, 0]), [0, 0, 1]);
    }

    #[test]
    fn all_stickers_covers_54_slots() {
        assert_eq!(all_stickers().count(), 54);
    }
}
