use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Position;
use crate::fen::FenError;
use crate::movegen;
use crate::types::*;

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// A position together with the moves that produced it. Every move goes
/// through [`Game::apply_move`], which only accepts legal moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn from_fen_sized(fen: &str, size: u8) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen_sized(fen, size)?))
    }

    /// Plays `mv` if it is one of the legal moves from its origin square.
    /// Returns `false` and leaves the game untouched otherwise.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if !movegen::legal_moves_from(&self.position, mv.from).contains(&mv) {
            debug!(%mv, fen = %self.position.to_fen(), "rejected illegal move");
            return false;
        }

        let mut next = self.position.clone();
        let Some(effect) = next.make_move(mv) else {
            return false;
        };
        debug!(
            %mv,
            capture = effect.is_capture(),
            castle = effect.castle.is_some(),
            en_passant = effect.en_passant,
            "applied move"
        );

        self.position = next;
        self.history.push(mv);
        true
    }

    pub fn legal_moves_from(&self, sq: Square) -> Vec<Move> {
        movegen::legal_moves_from(&self.position, sq)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(&self.position)
    }

    pub fn status(&self) -> GameStatus {
        let in_check = self.position.in_check(self.position.side_to_move);
        match (movegen::has_legal_move(&self.position), in_check) {
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Active,
        }
    }

    /// An owned copy of the current position.
    pub fn position(&self) -> Position {
        self.position.clone()
    }

    pub fn position_ref(&self) -> &Position {
        &self.position
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Moves played so far in `<from><to>[promotion]` form.
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(|m| m.to_string()).collect()
    }

    pub fn moves(&self) -> &[Move] {
        &self.history
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
