use std::ops::{Add, AddAssign};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::attacks::checkers;
use crate::board::{MoveEffect, Position};
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::Move;

/// Leaf statistics in the layout of the published perft tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub discovery_checks: u64,
    pub double_checks: u64,
    pub checkmates: u64,
}

impl Add for PerftCounts {
    type Output = PerftCounts;

    fn add(mut self, rhs: PerftCounts) -> PerftCounts {
        self += rhs;
        self
    }
}

impl AddAssign for PerftCounts {
    fn add_assign(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.discovery_checks += rhs.discovery_checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Full perft: every counter is tallied on the last ply only.
/// Depth 0 is the position itself, one node and nothing else.
pub fn perft(pos: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut counts = PerftCounts::default();
    for mv in legal_moves(pos) {
        counts += perft_child(pos, mv, depth);
    }
    counts
}

/// Same as [`perft`] with the root moves spread across the rayon pool.
pub fn perft_parallel(pos: &Position, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(pos, depth);
    }
    legal_moves(pos)
        .into_par_iter()
        .map(|mv| perft_child(pos, mv, depth))
        .reduce(PerftCounts::default, |a, b| a + b)
}

/// Node count only; skips the classification work.
pub fn perft_nodes(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut next = pos.clone();
        if next.make_move(mv).is_some() {
            nodes += perft_nodes(&next, depth - 1);
        }
    }
    nodes
}

/// Node count below each root move, in generation order.
pub fn divide(pos: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(pos)
        .into_iter()
        .map(|mv| {
            let mut next = pos.clone();
            let nodes = match next.make_move(mv) {
                Some(_) => perft_nodes(&next, depth - 1),
                None => 0,
            };
            trace!(%mv, nodes, "divide");
            (mv, nodes)
        })
        .collect()
}

fn perft_child(pos: &Position, mv: Move, depth: u8) -> PerftCounts {
    let mut next = pos.clone();
    let Some(effect) = next.make_move(mv) else {
        return PerftCounts::default();
    };
    if depth > 1 {
        return perft(&next, depth - 1);
    }
    classify_leaf(&next, mv, &effect)
}

fn classify_leaf(next: &Position, mv: Move, effect: &MoveEffect) -> PerftCounts {
    let mut c = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if effect.is_capture() {
        c.captures = 1;
    }
    if effect.en_passant {
        c.en_passant = 1;
    }
    if effect.castle.is_some() {
        c.castles = 1;
    }
    if effect.promotion.is_some() {
        c.promotions = 1;
    }

    let hit = checkers(next, next.side_to_move);
    if hit.is_empty() {
        return c;
    }
    c.checks = 1;
    if hit.len() > 1 {
        c.double_checks = 1;
    }
    // Any checker that is not the piece that just landed was uncovered.
    let landed = effect.castle.map_or(mv.to, |path| path.rook_to);
    if hit.iter().any(|&sq| sq != landed) {
        c.discovery_checks = 1;
    }
    if !has_legal_move(next) {
        c.checkmates = 1;
    }
    c
}

#[cfg(test)]
#[path = "perft_tests.rs"]
mod perft_tests;
