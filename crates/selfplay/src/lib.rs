//! Self-play runner for chess_core strategies
//!
//! This crate provides:
//! - A TOML-configured match between two strategies
//! - Per-game records and a JSON-serializable summary
//!
//! # Usage
//!
//! ```bash
//! # Play the match described in match.toml and print the summary
//! RUST_LOG=selfplay=info cargo run -p selfplay -- play --config match.toml
//!
//! # Perft counters for a position
//! cargo run --release -p selfplay -- perft 4 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
//! ```

mod config;
mod match_runner;

pub use config::*;
pub use match_runner::*;
