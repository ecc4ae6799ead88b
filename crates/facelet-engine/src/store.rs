//! Session state storage.
//!
//! A [`StateStore`] maps a [`SessionKey`] to that session's current
//! [`CubeState`]. The one contract that matters is
//! [`with_session`](StateStore::with_session): the callback runs with
//! exclusive access to one session's slot, so read-compute-write for a key
//! is never interleaved with another writer of the same key. Different keys
//! are independent.
//!
//! [`InMemoryStore`] keeps a per-session `Arc<Mutex<..>>` inside a global
//! table. The table lock is only held to look up or insert a session; the
//! session lock is held for the whole callback.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use facelet_core::CubeState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── SessionKey ─────────────────────────────────────────────────────

/// Opaque identifier of one user's cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
    /// Wrap a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SessionKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// ── StoreError ─────────────────────────────────────────────────────

/// Errors from a [`StateStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A lock was poisoned by a panic in an earlier holder.
    Poisoned {
        /// The session whose access failed.
        key: SessionKey,
    },
    /// The store returned `Ok` without running the session callback.
    Skipped {
        /// The session whose callback never ran.
        key: SessionKey,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poisoned { key } => write!(f, "store lock poisoned for session '{key}'"),
            Self::Skipped { key } => {
                write!(f, "store did not run the callback for session '{key}'")
            }
        }
    }
}

impl Error for StoreError {}

// ── StateStore ─────────────────────────────────────────────────────

/// Per-session state storage with serialised access per key.
///
/// Object safe: a service may hold a `Box<dyn StateStore>`.
pub trait StateStore: Send + Sync {
    /// Run `f` with exclusive access to the slot for `key`.
    ///
    /// The slot is `None` for a session with no stored state. Whatever `f`
    /// leaves in the slot is persisted. No other call for the same key
    /// observes the slot while `f` runs. An `Ok` return means `f` ran
    /// exactly once.
    fn with_session(
        &self,
        key: &SessionKey,
        f: &mut dyn FnMut(&mut Option<CubeState>),
    ) -> Result<(), StoreError>;

    /// The stored state for `key`, if any.
    fn load(&self, key: &SessionKey) -> Result<Option<CubeState>, StoreError> {
        let mut out = None;
        self.with_session(key, &mut |slot| out = slot.clone())?;
        Ok(out)
    }

    /// Forget `key`. Returns whether a state was stored.
    fn remove(&self, key: &SessionKey) -> Result<bool, StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn with_session(
        &self,
        key: &SessionKey,
        f: &mut dyn FnMut(&mut Option<CubeState>),
    ) -> Result<(), StoreError> {
        (**self).with_session(key, f)
    }

    fn load(&self, key: &SessionKey) -> Result<Option<CubeState>, StoreError> {
        (**self).load(key)
    }

    fn remove(&self, key: &SessionKey) -> Result<bool, StoreError> {
        (**self).remove(key)
    }
}

// ── InMemoryStore ──────────────────────────────────────────────────

type Slot = Arc<Mutex<Option<CubeState>>>;

/// Process-memory [`StateStore`].
///
/// Sessions iterate in first-seen order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: Mutex<IndexMap<SessionKey, Slot>>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // The table lock is never held across a callback, so a poisoned table
    // is still consistent and is recovered rather than reported.
    fn table(&self) -> MutexGuard<'_, IndexMap<SessionKey, Slot>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, key: &SessionKey) -> Option<Slot> {
        self.table().get(key).cloned()
    }

    fn slot_or_insert(&self, key: &SessionKey) -> Slot {
        Arc::clone(self.table().entry(key.clone()).or_default())
    }

    /// Keys of sessions that currently hold a state, in first-seen order.
    pub fn keys(&self) -> Result<Vec<SessionKey>, StoreError> {
        let slots: Vec<(SessionKey, Slot)> = self
            .table()
            .iter()
            .map(|(key, slot)| (key.clone(), Arc::clone(slot)))
            .collect();
        let mut keys = Vec::with_capacity(slots.len());
        for (key, slot) in slots {
            if slot.lock().map_err(|_| poisoned(&key))?.is_some() {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Number of sessions holding a state.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.keys()?.len())
    }

    /// Whether no session holds a state.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl StateStore for InMemoryStore {
    fn with_session(
        &self,
        key: &SessionKey,
        f: &mut dyn FnMut(&mut Option<CubeState>),
    ) -> Result<(), StoreError> {
        let slot = self.slot_or_insert(key);
        let mut guard = slot.lock().map_err(|_| poisoned(key))?;
        f(&mut guard);
        Ok(())
    }

    fn load(&self, key: &SessionKey) -> Result<Option<CubeState>, StoreError> {
        match self.slot(key) {
            Some(slot) => Ok(slot.lock().map_err(|_| poisoned(key))?.clone()),
            None => Ok(None),
        }
    }

    fn remove(&self, key: &SessionKey) -> Result<bool, StoreError> {
        let removed = self.table().shift_remove(key);
        match removed {
            Some(slot) => Ok(slot.lock().map_err(|_| poisoned(key))?.is_some()),
            None => Ok(false),
        }
    }
}

fn poisoned(key: &SessionKey) -> StoreError {
    StoreError::Poisoned { key: key.clone() }
}
