//! Perft timings for profiling with cargo-flamegraph.
//!
//! ```text
//! cargo flamegraph --example perft_bench -p chess_core -- [depth] [mode] [fen]
//! ```
//!
//! `mode` is `nodes` (default), `full` or `parallel`. Without a FEN the
//! standard suite is timed.

use std::env;
use std::time::{Duration, Instant};

use chess_core::{Position, START_FEN, perft, perft_nodes, perft_parallel};

const SUITE: &[(&str, &str)] = &[
    ("start", START_FEN),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
    ("endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    ("promotions", "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1"),
];

#[derive(Clone, Copy)]
enum Mode {
    Nodes,
    Full,
    Parallel,
}

impl Mode {
    fn run(self, pos: &Position, depth: u8) -> u64 {
        match self {
            Mode::Nodes => perft_nodes(pos, depth),
            Mode::Full => perft(pos, depth).nodes,
            Mode::Parallel => perft_parallel(pos, depth).nodes,
        }
    }
}

fn timed(mode: Mode, pos: &Position, depth: u8) -> (u64, Duration) {
    let start = Instant::now();
    let nodes = mode.run(pos, depth);
    (nodes, start.elapsed())
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    nodes as f64 / elapsed.as_secs_f64().max(1e-9)
}

fn main() {
    let mut args = env::args().skip(1);
    let depth: u8 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let mode = match args.next().as_deref() {
        Some("full") => Mode::Full,
        Some("parallel") => Mode::Parallel,
        _ => Mode::Nodes,
    };

    let positions: Vec<(String, String)> = match args.next() {
        Some(fen) => vec![("custom".to_string(), fen)],
        None => SUITE
            .iter()
            .map(|(name, fen)| (name.to_string(), fen.to_string()))
            .collect(),
    };

    let mut total = (0u64, Duration::ZERO);
    for (name, fen) in &positions {
        let pos = match Position::from_fen(fen) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let (nodes, elapsed) = timed(mode, &pos, depth);
        println!("{name:<12} depth {depth}: {nodes:>12} nodes {elapsed:>10.3?} {:>12.0} nps", nps(nodes, elapsed));
        total.0 += nodes;
        total.1 += elapsed;
    }

    if positions.len() > 1 {
        println!("total: {} nodes in {:.3?} ({:.0} nps)", total.0, total.1, nps(total.0, total.1));
    }
}
