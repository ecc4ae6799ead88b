//! Benchmark profiles for the Facelet cube engine.
//!
//! - [`scrambled_state`]: a reproducible scrambled cube
//! - [`populated_service`]: an in-memory service with many live sessions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;

use facelet_core::CubeState;
use facelet_engine::{apply_sequence, scramble_moves, CubeService, ServiceConfig, SessionKey};

/// Solved cube scrambled by `len` seeded quarter turns.
pub fn scrambled_state(seed: u64, len: usize) -> CubeState {
    apply_sequence(&CubeState::solved(), &scramble_moves(seed, len))
}

/// Session keys `session-0 .. session-{n-1}`.
pub fn session_keys(n: usize) -> Vec<SessionKey> {
    (0..n).map(|i| SessionKey::new(format!("session-{i}"))).collect()
}

/// In-memory service with `sessions` scrambled sessions, seeded by index.
pub fn populated_service(sessions: usize) -> Result<CubeService, Box<dyn Error>> {
    let service = CubeService::in_memory(ServiceConfig::default())?;
    for (i, key) in session_keys(sessions).iter().enumerate() {
        service.scramble(key, i as u64)?;
    }
    Ok(service)
}
