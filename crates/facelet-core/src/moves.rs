//! Quarter-turn moves and move notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;
use crate::face::Face;

/// Turn direction, as seen looking at the turning face from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Quarter turn clockwise. Written without a suffix.
    Clockwise,
    /// Quarter turn counterclockwise. Written with a `'` suffix.
    CounterClockwise,
}

impl Direction {
    /// The other direction.
    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A single 90° turn of one outer face.
///
/// Only the 12 face/direction combinations exist. Double turns are two
/// applications of the same move.
///
/// # Examples
///
/// ```
/// use facelet_core::{Direction, Face, Move};
///
/// let m: Move = "R'".parse().unwrap();
/// assert_eq!(m, Move::new(Face::Right, Direction::CounterClockwise));
/// assert_eq!(m.inverse().to_string(), "R");
/// assert!("R2".parse::<Move>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    /// The turning face.
    pub face: Face,
    /// The turn direction.
    pub direction: Direction,
}

impl Move {
    /// Every legal move: clockwise then counterclockwise for each face in
    /// flat-form order.
    pub const ALL: [Move; 12] = {
        let mut out = [Move::cw(Face::Left); 12];
        let mut i = 0;
        while i < 6 {
            out[2 * i] = Move::cw(Face::ALL[i]);
            out[2 * i + 1] = Move::ccw(Face::ALL[i]);
            i += 1;
        }
        out
    };

    /// Construct a move.
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Clockwise quarter turn of `face`.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    /// Counterclockwise quarter turn of `face`.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.reversed())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face.letter()),
            Direction::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeError::UnknownMove {
            token: token.to_owned(),
        };
        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(unknown)?;
        let direction = match (chars.next(), chars.next()) {
            (None, _) => Direction::Clockwise,
            (Some('\''), None) => Direction::CounterClockwise,
            _ => return Err(unknown()),
        };
        Ok(Self::new(face, direction))
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.to_string()
    }
}

/// Parse a move sequence such as `"R U R' U'"`.
///
/// Tokens are separated by whitespace and/or commas. The first unknown
/// token fails the whole parse with [`CubeError::UnknownMove`].
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, CubeError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}
