//! Move-choice strategies for chess_core games.
//!
//! The strategy set is closed: [`Strategy`] is an enum and
//! [`Strategy::choose_move`] is the single dispatch point. Randomness is
//! always injected so games can be replayed from a seed.
//!
//! ```no_run
//! use chess_core::Game;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strategy::Strategy;
//!
//! let game = Game::new();
//! let mut rng = StdRng::seed_from_u64(1);
//! let mv = "minimax:2".parse::<Strategy>().unwrap().choose_move(&game, &mut rng);
//! ```

pub mod advisor;
pub mod capture;
pub mod config;
pub mod minimax;
pub mod players;
pub mod random;

use std::fmt;
use std::str::FromStr;

use chess_core::{Game, Move};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use advisor::{CancelToken, MoveAdvisor, berserk_move, pacifist_move, parse_advice};
pub use config::ConfigError;
pub use minimax::{MATE_SCORE, minimax_move, minimax_parallel};
pub use players::Players;

/// Depth used by `"minimax"` without an explicit depth.
pub const DEFAULT_MINIMAX_DEPTH: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Uniform over every legal move.
    Random,
    /// Uniform over captures when there are any, otherwise over quiet moves.
    CapturePreferring,
    /// Fixed-depth alpha-beta minimax on [`chess_core::evaluate`].
    Minimax { depth: u8 },
}

impl Strategy {
    /// Picks a move for the side to move. `None` only when there are no
    /// legal moves.
    pub fn choose_move<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Move> {
        match *self {
            Strategy::Random => random::random_move(game, rng),
            Strategy::CapturePreferring => capture::capture_preferring_move(game, rng),
            Strategy::Minimax { depth } => minimax_move(game, depth),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Minimax {
            depth: DEFAULT_MINIMAX_DEPTH,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => f.write_str("random"),
            Strategy::CapturePreferring => f.write_str("capture"),
            Strategy::Minimax { depth } => write!(f, "minimax:{depth}"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Accepts `random`, `capture`, `minimax` and `minimax:<depth>`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        let (name, arg) = match text.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (text.as_str(), None),
        };
        match (name, arg) {
            ("random", None) => Ok(Strategy::Random),
            ("capture" | "capture-preferring", None) => Ok(Strategy::CapturePreferring),
            ("minimax", None) => Ok(Strategy::default()),
            ("minimax", Some(depth)) => match depth.parse::<u8>() {
                Ok(depth) if depth >= 1 => Ok(Strategy::Minimax { depth }),
                _ => Err(ConfigError::InvalidDepth(depth.to_string())),
            },
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(value: Strategy) -> Self {
        value.to_string()
    }
}
