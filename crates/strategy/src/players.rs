use chess_core::{Color, Game};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Strategy;

/// Strategy used for a side that has none configured.
pub const FALLBACK_STRATEGY: Strategy = Strategy::Minimax { depth: 1 };

/// Optional strategy per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    #[serde(default)]
    pub white: Option<Strategy>,
    #[serde(default)]
    pub black: Option<Strategy>,
}

impl Players {
    pub fn new(white: Option<Strategy>, black: Option<Strategy>) -> Self {
        Self { white, black }
    }

    pub fn get(&self, color: Color) -> Option<Strategy> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn set(&mut self, color: Color, strategy: Option<Strategy>) {
        match color {
            Color::White => self.white = strategy,
            Color::Black => self.black = strategy,
        }
    }

    /// The configured strategy for `color`, or [`FALLBACK_STRATEGY`].
    pub fn strategy_for(&self, color: Color) -> Strategy {
        self.get(color).unwrap_or(FALLBACK_STRATEGY)
    }

    /// Lets the side to move pick and play a move. Returns `false` when it
    /// has none.
    pub fn make_strategy_move<R: Rng + ?Sized>(&self, game: &mut Game, rng: &mut R) -> bool {
        let side = game.side_to_move();
        let strategy = self.strategy_for(side);
        let Some(mv) = strategy.choose_move(game, rng) else {
            debug!(%side, %strategy, "no move available");
            return false;
        };
        game.apply_move(mv)
    }
}
