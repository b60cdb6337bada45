//! Self-play CLI
//!
//! Play strategy matches, count perft nodes and ask a strategy for a move.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chess_core::{Game, Move, Position, START_FEN, divide, move_to_uci, perft, perft_parallel};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use selfplay::{MatchConfig, MatchRunner};
use strategy::Strategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match between two strategies and print the summary as JSON
    Play {
        /// TOML match configuration; defaults apply when omitted
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Override the number of games
        #[arg(long, short)]
        games: Option<u32>,
    },
    /// Count leaf nodes and move-kind counters
    Perft {
        depth: u8,
        #[arg(default_value = START_FEN)]
        fen: String,
        /// Board size of the FEN
        #[arg(long, default_value_t = 8)]
        size: u8,
        /// Split root moves across threads
        #[arg(long)]
        parallel: bool,
        /// Print per-root-move node counts
        #[arg(long)]
        divide: bool,
    },
    /// Print the move a strategy picks in a position
    Best {
        #[arg(default_value = START_FEN)]
        fen: String,
        /// Board size of the FEN
        #[arg(long, default_value_t = 8)]
        size: u8,
        #[arg(long, short, default_value = "minimax:2")]
        strategy: Strategy,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play { config, games } => run_play(config, games),
        Command::Perft {
            depth,
            fen,
            size,
            parallel,
            divide,
        } => run_perft(depth, &fen, size, parallel, divide),
        Command::Best {
            fen,
            size,
            strategy,
            seed,
        } => run_best(&fen, size, strategy, seed),
    }
}

fn run_play(path: Option<PathBuf>, games: Option<u32>) -> Result<()> {
    let mut config = match &path {
        Some(p) => MatchConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = games {
        config.games = games;
    }

    info!(white = %config.white, black = %config.black, games = config.games, "starting match");
    let summary = MatchRunner::new(config)
        .run()
        .context("invalid start_fen")?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_perft(depth: u8, fen: &str, size: u8, parallel: bool, split: bool) -> Result<()> {
    let pos = Position::from_fen_sized(fen, size).with_context(|| format!("parsing FEN '{fen}'"))?;

    if split {
        let mut total = 0;
        for (mv, nodes) in divide(&pos, depth) {
            println!("{}: {}", move_to_uci(mv), nodes);
            total += nodes;
        }
        println!();
        println!("Nodes searched: {total}");
        return Ok(());
    }

    let start = Instant::now();
    let counts = if parallel {
        perft_parallel(&pos, depth)
    } else {
        perft(&pos, depth)
    };
    let elapsed = start.elapsed();
    info!(
        depth,
        nodes = counts.nodes,
        ms = elapsed.as_millis() as u64,
        nps = (counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64,
        "perft done"
    );

    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

fn run_best(fen: &str, size: u8, strategy: Strategy, seed: u64) -> Result<()> {
    let game = Game::from_fen_sized(fen, size).with_context(|| format!("parsing FEN '{fen}'"))?;
    match best_move(&game, strategy, seed) {
        Some(mv) => println!("bestmove {}", move_to_uci(mv)),
        None => println!("bestmove (none) {:?}", game.status()),
    }
    Ok(())
}

fn best_move(game: &Game, strategy: Strategy, seed: u64) -> Option<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    strategy.choose_move(game, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_parses_size_flag() {
        let cli = Cli::try_parse_from([
            "selfplay",
            "best",
            "4k5/10/10/10/10/10/10/10/10/5K4 w - - 0 1",
            "--size",
            "10",
            "--strategy",
            "random",
        ])
        .unwrap();
        let Command::Best { fen, size, strategy, .. } = cli.command else {
            panic!("expected best subcommand");
        };
        assert_eq!(size, 10);
        assert_eq!(strategy, Strategy::Random);

        let game = Game::from_fen_sized(&fen, size).unwrap();
        let mv = best_move(&game, strategy, 3).unwrap();
        assert_eq!(mv.from, "f1".parse().unwrap());
        assert!(Game::from_fen(&fen).is_err());
    }

    #[test]
    fn test_best_defaults_to_standard_board() {
        let cli = Cli::try_parse_from(["selfplay", "best"]).unwrap();
        let Command::Best { fen, size, strategy, .. } = cli.command else {
            panic!("expected best subcommand");
        };
        assert_eq!(size, 8);
        assert_eq!(fen, START_FEN);
        assert_eq!(strategy, Strategy::Minimax { depth: 2 });
    }
}
