//! Boundary to an external advisory engine.
//!
//! The engine itself (a subprocess, an HTTP proxy, ...) lives outside this
//! crate. Everything here talks to it through [`MoveAdvisor`], whose methods
//! collapse every failure (crash, timeout, cancellation, garbage output) to
//! `None`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chess_core::{Game, Move, is_capture, parse_uci_move};
use tracing::{debug, warn};

/// Thinking time granted when no candidate list narrows the choice.
pub const FALLBACK_BUDGET: Duration = Duration::from_millis(100);

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub trait MoveAdvisor {
    /// The engine's choice for `fen` within `budget`.
    fn best_move(&self, fen: &str, budget: Duration, cancel: &CancelToken) -> Option<String>;

    /// The engine's choice restricted to `moves`.
    fn best_from_list(&self, fen: &str, moves: &[String], cancel: &CancelToken) -> Option<String>;
}

/// Prefers captures: the only capture is played outright, several are put
/// to the advisor, and with none the advisor picks freely.
pub fn berserk_move<A: MoveAdvisor + ?Sized>(advisor: &A, fen: &str, cancel: &CancelToken) -> Option<String> {
    restricted_move(advisor, fen, cancel, true)
}

/// Mirror of [`berserk_move`] over non-capturing moves.
pub fn pacifist_move<A: MoveAdvisor + ?Sized>(advisor: &A, fen: &str, cancel: &CancelToken) -> Option<String> {
    restricted_move(advisor, fen, cancel, false)
}

fn restricted_move<A: MoveAdvisor + ?Sized>(
    advisor: &A,
    fen: &str,
    cancel: &CancelToken,
    captures: bool,
) -> Option<String> {
    if cancel.is_cancelled() {
        return None;
    }
    let game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(e) => {
            warn!(fen, error = %e, "advisor asked about an invalid position");
            return None;
        }
    };

    let pos = game.position_ref();
    let candidates: Vec<String> = game
        .legal_moves()
        .into_iter()
        .filter(|&mv| is_capture(pos, mv) == captures)
        .map(|mv| mv.to_string())
        .collect();
    debug!(fen, captures, candidates = candidates.len(), "restricted advisor move");

    match candidates.as_slice() {
        [only] => Some(only.clone()),
        [] => advisor.best_move(fen, FALLBACK_BUDGET, cancel),
        _ => advisor.best_from_list(fen, &candidates, cancel),
    }
}

/// Turns advisor output into a legal move for `game`, dropping anything
/// that does not parse or is not legal here.
pub fn parse_advice(game: &Game, text: &str) -> Option<Move> {
    let mv = parse_uci_move(game.position_ref(), text);
    if mv.is_none() {
        warn!(advice = text.trim(), fen = %game.fen(), "discarding unusable advice");
    }
    mv
}

#[cfg(test)]
#[path = "advisor_tests.rs"]
mod advisor_tests;
