pub mod attacks;
pub mod board;
pub mod eval;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;

// Core rules and state
pub use attacks::{attackers_of, checkers, is_square_attacked};
pub use board::*;
pub use fen::{FenError, START_FEN};
pub use game::{Game, GameStatus};
pub use movegen::*;
pub use types::*;

// Scoring and verification
pub use eval::evaluate;
pub use perft::{PerftCounts, divide, perft, perft_nodes, perft_parallel};
pub use uci::{move_to_uci, parse_uci_move};
