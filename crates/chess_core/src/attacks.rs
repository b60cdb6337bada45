//! Attack detection.
//!
//! Looks outward from the target square along every line a piece could
//! attack it from, so no move generation (and in particular no castling
//! generation) is involved. Works on any board width.

use crate::board::Position;
use crate::types::*;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Calls `visit` with each square holding a piece of color `by` that
/// attacks `target`. Stops early when `visit` returns `true`.
fn scan_attackers(pos: &Position, target: Square, by: Color, mut visit: impl FnMut(Square) -> bool) {
    let size = pos.size();
    let holds = |s: Square, kinds: &[PieceKind]| {
        pos.piece_at(s)
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // A pawn attacks diagonally forward, so look one rank "behind" the target
    // from the attacker's point of view.
    let back = -by.forward();
    for df in [-1, 1] {
        if let Some(s) = target.offset(df, back, size)
            && holds(s, &[PieceKind::Pawn])
            && visit(s)
        {
            return;
        }
    }

    for (df, dr) in KNIGHT_DELTAS {
        if let Some(s) = target.offset(df, dr, size)
            && holds(s, &[PieceKind::Knight])
            && visit(s)
        {
            return;
        }
    }

    for (df, dr) in KING_DELTAS {
        if let Some(s) = target.offset(df, dr, size)
            && holds(s, &[PieceKind::King])
            && visit(s)
        {
            return;
        }
    }

    let lines: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
        (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, sliders) in lines {
        for &(df, dr) in dirs {
            let mut cur = target;
            while let Some(s) = cur.offset(df, dr, size) {
                if pos.piece_at(s).is_some() {
                    if holds(s, &sliders) && visit(s) {
                        return;
                    }
                    break;
                }
                cur = s;
            }
        }
    }
}

/// True if any piece of color `by` attacks `target`.
pub fn is_square_attacked(pos: &Position, target: Square, by: Color) -> bool {
    let mut hit = false;
    scan_attackers(pos, target, by, |_| {
        hit = true;
        true
    });
    hit
}

/// All squares holding a piece of color `by` that attacks `target`.
pub fn attackers_of(pos: &Position, target: Square, by: Color) -> Vec<Square> {
    let mut out = Vec::new();
    scan_attackers(pos, target, by, |s| {
        out.push(s);
        false
    });
    out
}

/// Pieces currently giving check to `c`'s king.
pub fn checkers(pos: &Position, c: Color) -> Vec<Square> {
    match pos.king_sq(c) {
        Some(k) => attackers_of(pos, k, c.other()),
        None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
