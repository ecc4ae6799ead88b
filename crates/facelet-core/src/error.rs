//! Error type for the cube state engine.
//!
//! The engine has exactly two ways to reject an input: the state does not
//! have the required shape, or the move token is not one of the twelve
//! legal quarter turns. Both are detected before anything is mutated.

use std::error::Error;
use std::fmt;

/// Errors from state validation and move parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CubeError {
    /// An externally supplied state does not have 6 faces of 9 stickers,
    /// or a cubie set is structurally incomplete.
    MalformedState {
        /// Human-readable description of the shape violation.
        reason: String,
    },
    /// A move token outside the 12 legal face/direction combinations.
    UnknownMove {
        /// The rejected token, verbatim.
        token: String,
    },
}

impl CubeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedState {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedState { reason } => write!(f, "malformed cube state: {reason}"),
            Self::UnknownMove { token } => write!(f, "unknown move '{token}'"),
        }
    }
}

impl Error for CubeError {}
