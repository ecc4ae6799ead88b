//! Service configuration, validation, and error types.
//!
//! [`ServiceConfig`] is the input to [`CubeService::new`](crate::CubeService::new),
//! which calls [`validate()`](ServiceConfig::validate) before accepting it.

use std::error::Error;
use std::fmt;

use facelet_core::ColorScheme;
use serde::{Deserialize, Serialize};

// ── StateSource ────────────────────────────────────────────────────

/// Which state a move request is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSource {
    /// Always the stored session state. A caller-supplied state is still
    /// validated, then ignored.
    #[default]
    Store,
    /// A caller-supplied state, once validated, replaces the stored state
    /// inside the same critical section as the move. Without one, the
    /// stored state is used.
    CallerWhenPresent,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ServiceConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The color scheme repeats a color or has a blank one.
    InvalidColorScheme {
        /// Which face is at fault.
        reason: String,
    },
    /// `max_sequence_len` is zero.
    ZeroSequenceLimit,
    /// `scramble_len` is zero.
    ZeroScrambleLength,
    /// `scramble_len` is longer than `max_sequence_len`.
    ScrambleExceedsLimit {
        /// The configured scramble length.
        scramble_len: usize,
        /// The configured sequence limit.
        max_sequence_len: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorScheme { reason } => write!(f, "invalid color scheme: {reason}"),
            Self::ZeroSequenceLimit => write!(f, "max_sequence_len must be at least 1"),
            Self::ZeroScrambleLength => write!(f, "scramble_len must be at least 1"),
            Self::ScrambleExceedsLimit {
                scramble_len,
                max_sequence_len,
            } => write!(
                f,
                "scramble_len {scramble_len} exceeds max_sequence_len {max_sequence_len}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── ServiceConfig ──────────────────────────────────────────────────

/// Configuration for a [`CubeService`](crate::CubeService).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Which state is authoritative for a move. Default: [`StateSource::Store`].
    pub state_source: StateSource,
    /// Colors of the solved cube. Default: the standard scheme.
    pub color_scheme: ColorScheme,
    /// Longest sequence accepted by one request. Default: 256.
    pub max_sequence_len: usize,
    /// Quarter turns in a scramble. Default: 20.
    pub scramble_len: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            state_source: StateSource::default(),
            color_scheme: ColorScheme::default(),
            max_sequence_len: 256,
            scramble_len: 20,
        }
    }
}

impl ServiceConfig {
    /// Check structural invariants.
    ///
    /// The color scheme must give six distinct, non-blank colors, otherwise
    /// a solved cube could not be told apart from some scrambled ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(face) = self.color_scheme.blank() {
            return Err(ConfigError::InvalidColorScheme {
                reason: format!("{face} has a blank color"),
            });
        }
        if let Some((a, b)) = self.color_scheme.duplicate() {
            return Err(ConfigError::InvalidColorScheme {
                reason: format!(
                    "{a} and {b} share color '{}'",
                    self.color_scheme.color(a)
                ),
            });
        }
        if self.max_sequence_len == 0 {
            return Err(ConfigError::ZeroSequenceLimit);
        }
        if self.scramble_len == 0 {
            return Err(ConfigError::ZeroScrambleLength);
        }
        if self.scramble_len > self.max_sequence_len {
            return Err(ConfigError::ScrambleExceedsLimit {
                scramble_len: self.scramble_len,
                max_sequence_len: self.max_sequence_len,
            });
        }
        Ok(())
    }
}
