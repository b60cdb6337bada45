use chess_core::{Game, Move, is_capture};
use rand::Rng;
use rand::seq::SliceRandom;

/// A random capture (en passant included) if one exists, otherwise a random
/// quiet move.
pub fn capture_preferring_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Move> {
    let pos = game.position_ref();
    let (captures, quiet): (Vec<Move>, Vec<Move>) = game
        .legal_moves()
        .into_iter()
        .partition(|&mv| is_capture(pos, mv));

    if captures.is_empty() {
        quiet.choose(rng).copied()
    } else {
        captures.choose(rng).copied()
    }
}
