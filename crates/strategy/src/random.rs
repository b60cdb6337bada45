use chess_core::{Game, Move};
use rand::Rng;
use rand::seq::SliceRandom;

/// Any legal move, each equally likely.
pub fn random_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Move> {
    game.legal_moves().choose(rng).copied()
}
