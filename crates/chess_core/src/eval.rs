//! Static evaluation in centipawns from white's point of view.
//!
//! Tables are laid out as a diagram of the board seen from white's side:
//! row 0 is the far (eighth) rank. Boards of other widths are sampled by
//! scaling rows and columns onto the 8x8 grid.

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::*;

type Table = [[i32; 8]; 8];

const MOBILITY_WEIGHT: f64 = 0.1;

/// Non-king material at or below this switches the king to its endgame table.
const ENDGAME_MATERIAL: i32 = 1500;

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   5,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_MIDDLE_GAME_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[rustfmt::skip]
const KING_END_GAME_TABLE: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10,   0,   0, -10, -20, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  30,  40,  40,  30, -10, -30],
    [-30, -10,  20,  30,  30,  20, -10, -30],
    [-30, -30,   0,   0,   0,   0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Material plus piece-square bonuses plus a small mobility term. Positive
/// favours white. The standard starting position scores exactly zero.
pub fn evaluate(pos: &Position) -> f64 {
    let endgame = is_endgame(pos);
    let mut score = 0i32;

    for (sq, pc) in pos.pieces() {
        let v = piece_value(pc.kind) + positional_score(pos.size(), sq, pc, endgame);
        score += if pc.color == Color::White { v } else { -v };
    }

    let mobility = mobility(pos, Color::White) as f64 - mobility(pos, Color::Black) as f64;
    score as f64 + MOBILITY_WEIGHT * mobility
}

/// True when the pieces other than kings add up to roughly a queen and a
/// rook or less, counting both sides.
pub fn is_endgame(pos: &Position) -> bool {
    let material: i32 = pos
        .pieces()
        .filter(|(_, pc)| pc.kind != PieceKind::King)
        .map(|(_, pc)| piece_value(pc.kind))
        .sum();
    material <= ENDGAME_MATERIAL
}

/// Legal-move count for `color` as if it were on move.
pub fn mobility(pos: &Position, color: Color) -> usize {
    if pos.side_to_move == color {
        return legal_moves(pos).len();
    }
    let mut flipped = pos.clone();
    flipped.side_to_move = color;
    legal_moves(&flipped).len()
}

fn positional_score(size: u8, sq: Square, pc: Piece, endgame: bool) -> i32 {
    let table = match pc.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if endgame => &KING_END_GAME_TABLE,
        PieceKind::King => &KING_MIDDLE_GAME_TABLE,
    };

    // White reads the diagram top-down; black sees it mirrored.
    let row = match pc.color {
        Color::White => size - 1 - sq.rank,
        Color::Black => sq.rank,
    } as usize;
    let size = size as usize;
    table[row * 8 / size][sq.file as usize * 8 / size]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
