//! Move engine and session service for Facelet.
//!
//! The [`turn`] module is the single implementation of a quarter turn: a
//! pure function from one [`CubeState`](facelet_core::CubeState) to the
//! next, applied to the flat form only. Everything else in this crate is
//! the boundary a service layer plugs into:
//!
//! - [`store`]: the [`StateStore`] trait and an in-memory implementation
//!   that serialises read-compute-write per session key
//! - [`service`]: [`CubeService`], which owns a store and decides once
//!   which state is authoritative for each request
//! - [`config`]: [`ServiceConfig`] and its validation
//! - [`metrics`]: counters exposed as a [`ServiceMetrics`] snapshot
//! - [`scramble`]: seeded, reproducible scramble sequences
//!
//! Only [`service`] logs. The engine and store are silent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod scramble;
pub mod service;
pub mod store;
pub mod turn;

pub use config::{ConfigError, ServiceConfig, StateSource};
pub use metrics::ServiceMetrics;
pub use scramble::scramble_moves;
pub use service::{CubeService, ServiceError};
pub use store::{InMemoryStore, SessionKey, StateStore, StoreError};
pub use turn::{apply_move, apply_sequence, apply_token, apply_tokens};
