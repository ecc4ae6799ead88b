//! Sticker colors and the canonical color-per-face scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::face::{Face, FACE_COUNT};

/// An opaque sticker color.
///
/// The engine never interprets a color beyond equality. Any string is a
/// valid color; names such as `"white"` are only a convention.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a color token.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The color token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The canonical color of each face in the solved state.
///
/// The default scheme is Up white, Down yellow, Left green, Right blue,
/// Front red, Back orange.
///
/// # Examples
///
/// ```
/// use facelet_core::{Color, ColorScheme, Face};
///
/// let scheme = ColorScheme::default().with(Face::Front, "green".into());
/// assert_eq!(scheme.color(Face::Front), &Color::from("green"));
/// assert_eq!(scheme.duplicate(), Some((Face::Left, Face::Front)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    colors: [Color; FACE_COUNT],
}

impl ColorScheme {
    /// Build a scheme from colors given in flat-form face order.
    pub fn new(colors: [Color; FACE_COUNT]) -> Self {
        Self { colors }
    }

    /// Replace the color of one face.
    pub fn with(mut self, face: Face, color: Color) -> Self {
        self.colors[face.index()] = color;
        self
    }

    /// Canonical color of `face`.
    pub fn color(&self, face: Face) -> &Color {
        &self.colors[face.index()]
    }

    /// The first pair of faces sharing a color, if any.
    pub fn duplicate(&self) -> Option<(Face, Face)> {
        for (i, a) in Face::ALL.into_iter().enumerate() {
            for b in Face::ALL.into_iter().skip(i + 1) {
                if self.color(a) == self.color(b) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    /// The first face whose color token is empty, if any.
    pub fn blank(&self) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|&face| self.color(face).as_str().is_empty())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new([
            Color::from("green"),
            Color::from("blue"),
            Color::from("white"),
            Color::from("yellow"),
            Color::from("red"),
            Color::from("orange"),
        ])
    }
}
