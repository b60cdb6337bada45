//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are white-positive centipawns from [`chess_core::evaluate`]; white
//! maximises and black minimises. Each root move gets its own full window,
//! and every recursive step works on an owned copy of the position.

use chess_core::{Color, Game, Move, Position, evaluate, has_legal_move, legal_moves};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Score of a checkmated position, signed against the side that is mated.
pub const MATE_SCORE: f64 = 20000.0;

/// Best move for the side to move at `depth` plies (at least one).
pub fn minimax_move(game: &Game, depth: u8) -> Option<Move> {
    search(game.position_ref(), depth).map(|(mv, _)| mv)
}

/// Same result as [`minimax_move`], with root moves scored on the rayon pool.
pub fn minimax_parallel(game: &Game, depth: u8) -> Option<Move> {
    let pos = game.position_ref();
    let depth = depth.max(1);
    let scored: Vec<(Move, f64)> = legal_moves(pos)
        .into_par_iter()
        .map(|mv| (mv, score_root_move(pos, mv, depth)))
        .collect();
    pick_best(pos.side_to_move, scored).map(|(mv, _)| mv)
}

/// Best move with its score. Ties keep the move generated first.
pub fn search(pos: &Position, depth: u8) -> Option<(Move, f64)> {
    let depth = depth.max(1);
    let scored = legal_moves(pos)
        .into_iter()
        .map(|mv| (mv, score_root_move(pos, mv, depth)));
    let best = pick_best(pos.side_to_move, scored);
    if let Some((mv, score)) = best {
        debug!(%mv, score, depth, side = %pos.side_to_move, "minimax picked move");
    }
    best
}

fn pick_best(side: Color, scored: impl IntoIterator<Item = (Move, f64)>) -> Option<(Move, f64)> {
    let mut best: Option<(Move, f64)> = None;
    for (mv, score) in scored {
        let better = match best {
            None => true,
            Some((_, b)) if side == Color::White => score > b,
            Some((_, b)) => score < b,
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}

fn score_root_move(pos: &Position, mv: Move, depth: u8) -> f64 {
    let mut next = pos.clone();
    if next.make_move(mv).is_none() {
        return 0.0;
    }
    let score = alpha_beta(&next, depth - 1, f64::NEG_INFINITY, f64::INFINITY);
    trace!(%mv, score, "root move scored");
    score
}

/// No legal moves: mated sides score as lost, stalemate is level.
fn terminal_score(pos: &Position) -> f64 {
    match (pos.in_check(pos.side_to_move), pos.side_to_move) {
        (true, Color::White) => -MATE_SCORE,
        (true, Color::Black) => MATE_SCORE,
        (false, _) => 0.0,
    }
}

fn alpha_beta(pos: &Position, depth: u8, mut alpha: f64, mut beta: f64) -> f64 {
    if depth == 0 {
        if !has_legal_move(pos) {
            return terminal_score(pos);
        }
        return evaluate(pos);
    }

    let moves = legal_moves(pos);
    if moves.is_empty() {
        return terminal_score(pos);
    }

    let maximizing = pos.side_to_move == Color::White;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves {
        let mut next = pos.clone();
        if next.make_move(mv).is_none() {
            continue;
        }
        let score = alpha_beta(&next, depth - 1, alpha, beta);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
