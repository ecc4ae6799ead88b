//! The cube service: apply, reset and query over a [`StateStore`].
//!
//! Every operation validates its input before touching the store, then
//! does all of its read-compute-write inside one
//! [`with_session`](StateStore::with_session) call. A request that fails
//! validation leaves the stored state exactly as it was.
//!
//! Which state a move applies to is decided here and only here, by
//! [`ServiceConfig::state_source`]. The engine never sees that choice.

use std::error::Error;
use std::fmt;

use facelet_core::{parse_sequence, Color, CubeError, CubeState, Move};
use facelet_geometry::{to_cubies, CubieSet};

use crate::config::{ConfigError, ServiceConfig, StateSource};
use crate::metrics::{Counters, ServiceMetrics};
use crate::scramble::scramble_moves;
use crate::store::{InMemoryStore, SessionKey, StateStore, StoreError};
use crate::turn::{apply_move, apply_sequence};

// ── ServiceError ───────────────────────────────────────────────────

/// Errors returned by [`CubeService`] operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// The request carried an unknown move or a malformed state.
    Cube(CubeError),
    /// The store could not be accessed.
    Store(StoreError),
    /// A sequence request is longer than the configured limit.
    SequenceTooLong {
        /// Moves in the request.
        len: usize,
        /// The configured `max_sequence_len`.
        max: usize,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cube(e) => write!(f, "cube: {e}"),
            Self::Store(e) => write!(f, "store: {e}"),
            Self::SequenceTooLong { len, max } => {
                write!(f, "sequence of {len} moves exceeds limit of {max}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cube(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::SequenceTooLong { .. } => None,
        }
    }
}

impl From<CubeError> for ServiceError {
    fn from(e: CubeError) -> Self {
        Self::Cube(e)
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ── CubeService ────────────────────────────────────────────────────

/// Session-aware front to the move engine.
///
/// Generic over its store; [`CubeService::in_memory`] builds one over an
/// [`InMemoryStore`].
///
/// # Examples
///
/// ```
/// use facelet_engine::{CubeService, ServiceConfig, SessionKey};
///
/// let service = CubeService::in_memory(ServiceConfig::default()).unwrap();
/// let alice = SessionKey::new("alice");
///
/// let turned = service.apply_move(&alice, "R", None).unwrap();
/// assert!(!turned.is_solved());
/// assert_eq!(service.query_state(&alice).unwrap(), turned);
///
/// service.apply_move(&alice, "R'", None).unwrap();
/// assert!(service.query_state(&alice).unwrap().is_solved());
/// ```
#[derive(Debug)]
pub struct CubeService<S = InMemoryStore> {
    store: S,
    config: ServiceConfig,
    solved: CubeState,
    counters: Counters,
}

impl CubeService<InMemoryStore> {
    /// A service over a fresh [`InMemoryStore`].
    pub fn in_memory(config: ServiceConfig) -> Result<Self, ConfigError> {
        Self::new(InMemoryStore::new(), config)
    }
}

impl<S: StateStore> CubeService<S> {
    /// Validate `config` and wrap `store`.
    pub fn new(store: S, config: ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let solved = CubeState::solved_with(&config.color_scheme);
        Ok(Self {
            store,
            config,
            solved,
            counters: Counters::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The solved state under the configured color scheme.
    pub fn solved(&self) -> &CubeState {
        &self.solved
    }

    /// Snapshot of the request counters.
    pub fn metrics(&self) -> ServiceMetrics {
        self.counters.snapshot()
    }

    /// Apply one move for `key` and return the new state.
    ///
    /// `caller_state`, when given, is validated first; whether it is then
    /// used depends on [`ServiceConfig::state_source`]. A session with no
    /// stored state starts from solved.
    pub fn apply_move(
        &self,
        key: &SessionKey,
        token: &str,
        caller_state: Option<Vec<Vec<Color>>>,
    ) -> Result<CubeState, ServiceError> {
        let mv: Move = token.parse().map_err(|e| self.reject(key, e))?;
        let caller = self.authoritative_caller_state(key, caller_state)?;

        let next = self.update(key, caller, |current| apply_move(current, mv))?;
        Counters::bump(&self.counters.moves_applied, 1);
        tracing::debug!(session = %key, mv = %mv, "applied move");
        Ok(next)
    }

    /// Apply a whole sequence such as `"R U R' U'"` for `key`.
    ///
    /// All-or-nothing: every token is parsed and the length checked before
    /// the session is touched, and the moves are applied under one lock.
    pub fn apply_sequence(&self, key: &SessionKey, text: &str) -> Result<CubeState, ServiceError> {
        let moves = parse_sequence(text).map_err(|e| self.reject(key, e))?;
        self.check_len(moves.len())?;

        let next = self.update(key, None, |current| apply_sequence(current, &moves))?;
        Counters::bump(&self.counters.moves_applied, moves.len() as u64);
        Counters::bump(&self.counters.sequences_applied, 1);
        tracing::debug!(session = %key, moves = moves.len(), "applied sequence");
        Ok(next)
    }

    /// Reset `key` to solved and return the solved state.
    pub fn reset(&self, key: &SessionKey) -> Result<CubeState, ServiceError> {
        let solved = self.solved.clone();
        self.store
            .with_session(key, &mut |slot| *slot = Some(solved.clone()))?;
        Counters::bump(&self.counters.resets, 1);
        tracing::debug!(session = %key, "reset");
        Ok(solved)
    }

    /// The current state of `key`.
    ///
    /// A session with no stored state is initialised to solved.
    pub fn query_state(&self, key: &SessionKey) -> Result<CubeState, ServiceError> {
        let state = self.update(key, None, CubeState::clone)?;
        Counters::bump(&self.counters.queries, 1);
        tracing::debug!(session = %key, "queried state");
        Ok(state)
    }

    /// The cubie view of `key`'s current state.
    pub fn cubies(&self, key: &SessionKey) -> Result<CubieSet, ServiceError> {
        Ok(to_cubies(&self.query_state(key)?))
    }

    /// Reset `key`, then apply a scramble generated from `seed`.
    ///
    /// Returns the moves applied and the resulting state.
    pub fn scramble(
        &self,
        key: &SessionKey,
        seed: u64,
    ) -> Result<(Vec<Move>, CubeState), ServiceError> {
        let moves = scramble_moves(seed, self.config.scramble_len);
        let state = apply_sequence(&self.solved, &moves);
        self.store
            .with_session(key, &mut |slot| *slot = Some(state.clone()))?;
        Counters::bump(&self.counters.moves_applied, moves.len() as u64);
        Counters::bump(&self.counters.sequences_applied, 1);
        tracing::debug!(session = %key, seed, moves = moves.len(), "scrambled");
        Ok((moves, state))
    }

    // ── internals ──────────────────────────────────────────────────

    /// Validate a caller-supplied state and keep it only if it is to be
    /// applied.
    fn authoritative_caller_state(
        &self,
        key: &SessionKey,
        caller_state: Option<Vec<Vec<Color>>>,
    ) -> Result<Option<CubeState>, ServiceError> {
        let Some(flat) = caller_state else {
            return Ok(None);
        };
        let state = CubeState::from_flat(flat).map_err(|e| self.reject(key, e))?;
        match self.config.state_source {
            StateSource::Store => Ok(None),
            StateSource::CallerWhenPresent => Ok(Some(state)),
        }
    }

    /// Read-compute-write for `key` under its session lock.
    ///
    /// `base` overrides the stored state; an empty session starts from
    /// solved.
    fn update(
        &self,
        key: &SessionKey,
        mut base: Option<CubeState>,
        compute: impl Fn(&CubeState) -> CubeState,
    ) -> Result<CubeState, ServiceError> {
        let mut result = None;
        self.store.with_session(key, &mut |slot| {
            let current = match (base.take(), slot.as_ref()) {
                (Some(caller), _) => caller,
                (None, Some(stored)) => stored.clone(),
                (None, None) => {
                    Counters::bump(&self.counters.sessions_initialised, 1);
                    tracing::info!(session = %key, "initialised session");
                    self.solved.clone()
                }
            };
            let next = compute(&current);
            *slot = Some(next.clone());
            result = Some(next);
        })?;
        result.ok_or_else(|| ServiceError::Store(StoreError::Skipped { key: key.clone() }))
    }

    fn check_len(&self, len: usize) -> Result<(), ServiceError> {
        let max = self.config.max_sequence_len;
        if len > max {
            Counters::bump(&self.counters.requests_rejected, 1);
            tracing::warn!(len, max, "rejected sequence: too long");
            return Err(ServiceError::SequenceTooLong { len, max });
        }
        Ok(())
    }

    fn reject(&self, key: &SessionKey, e: CubeError) -> ServiceError {
        Counters::bump(&self.counters.requests_rejected, 1);
        tracing::warn!(session = %key, %e, "rejected request");
        ServiceError::Cube(e)
    }
}
