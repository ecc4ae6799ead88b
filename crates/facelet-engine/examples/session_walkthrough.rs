//! Walk one session through the cube service with logging enabled.
//!
//! Run with `RUST_LOG=debug cargo run -p facelet-engine --example session_walkthrough`.

use facelet_core::Face;
use facelet_engine::{CubeService, ServiceConfig, ServiceError, SessionKey};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let service = CubeService::in_memory(ServiceConfig::default())?;
    let alice = SessionKey::new("alice");

    let state = service.query_state(&alice)?;
    println!("fresh session solved: {}", state.is_solved());

    let state = service.apply_move(&alice, "U", None)?;
    print_top_rows("after U", &state);

    match service.apply_move(&alice, "U2", None) {
        Err(ServiceError::Cube(e)) => println!("rejected: {e}"),
        other => println!("unexpected: {other:?}"),
    }

    service.reset(&alice)?;
    for rep in 1..=6 {
        let state = service.apply_sequence(&alice, "R U R' U'")?;
        println!("R U R' U' x{rep}: solved = {}", state.is_solved());
    }

    let (moves, state) = service.scramble(&alice, 2024)?;
    let tokens: Vec<String> = moves.iter().map(ToString::to_string).collect();
    println!("scramble: {}", tokens.join(" "));
    println!("{}", serde_json::to_string(&state)?);

    let cubies = service.cubies(&alice)?;
    println!("cubies: {}", cubies.cubies().len());

    service.reset(&alice)?;
    println!("metrics: {:?}", service.metrics());
    Ok(())
}

fn print_top_rows(label: &str, state: &facelet_core::CubeState) {
    println!("{label}:");
    for face in [Face::Front, Face::Right, Face::Back, Face::Left] {
        let row: Vec<&str> = state.face(face)[..3].iter().map(|c| c.as_str()).collect();
        println!("  {face}: {}", row.join(" "));
    }
}
