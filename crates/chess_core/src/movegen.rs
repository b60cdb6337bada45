use crate::attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, is_square_attacked};
use crate::board::{CastleSide, Position};
use crate::types::*;

const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Legal moves for the piece on `from`. Empty if the square is empty or the
/// piece belongs to the side not on move.
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    match pos.piece_at(from) {
        Some(pc) if pc.color == pos.side_to_move => {}
        _ => return Vec::new(),
    }
    let mut out = pseudo_moves_from(pos, from, true);
    out.retain(|&mv| leaves_king_safe(pos, mv));
    out
}

/// All legal moves for the side to move, scanning squares from a1.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (sq, pc) in pos.pieces() {
        if pc.color != pos.side_to_move {
            continue;
        }
        let start = out.len();
        gen_piece(pos, sq, pc, true, &mut out);
        let mut keep = start;
        for i in start..out.len() {
            if leaves_king_safe(pos, out[i]) {
                out[keep] = out[i];
                keep += 1;
            }
        }
        out.truncate(keep);
    }
    out
}

/// True as soon as one legal move is found.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut buf = Vec::with_capacity(32);
    for (sq, pc) in pos.pieces() {
        if pc.color != pos.side_to_move {
            continue;
        }
        buf.clear();
        gen_piece(pos, sq, pc, true, &mut buf);
        if buf.iter().any(|&mv| leaves_king_safe(pos, mv)) {
            return true;
        }
    }
    false
}

/// Moves that obey the movement shape of the piece on `from` (of either
/// color) but may leave its own king in check. Castling is only generated
/// when `with_castling` is set.
pub fn pseudo_moves_from(pos: &Position, from: Square, with_castling: bool) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from) {
        gen_piece(pos, from, pc, with_castling, &mut out);
    }
    out
}

/// Destination occupied, or an en-passant capture.
pub fn is_capture(pos: &Position, mv: Move) -> bool {
    if pos.piece_at(mv.to).is_some() {
        return true;
    }
    is_en_passant(pos, mv)
}

pub fn is_en_passant(pos: &Position, mv: Move) -> bool {
    matches!(pos.piece_at(mv.from), Some(pc) if pc.kind == PieceKind::Pawn)
        && pos.en_passant == Some(mv.to)
        && mv.from.file != mv.to.file
        && pos.piece_at(mv.to).is_none()
}

pub fn is_castle(pos: &Position, mv: Move) -> bool {
    matches!(pos.piece_at(mv.from), Some(pc) if pc.kind == PieceKind::King)
        && mv.from.rank == mv.to.rank
        && mv.from.file.abs_diff(mv.to.file) == 2
}

pub fn capture_moves(pos: &Position) -> Vec<Move> {
    legal_moves(pos)
        .into_iter()
        .filter(|&mv| is_capture(pos, mv))
        .collect()
}

pub fn quiet_moves(pos: &Position) -> Vec<Move> {
    legal_moves(pos)
        .into_iter()
        .filter(|&mv| !is_capture(pos, mv))
        .collect()
}

/// Plays the move on a copy and checks the mover's king afterwards.
fn leaves_king_safe(pos: &Position, mv: Move) -> bool {
    let mover = match pos.piece_at(mv.from) {
        Some(pc) => pc.color,
        None => return false,
    };
    let mut next = pos.clone();
    if next.make_move(mv).is_none() {
        return false;
    }
    match next.king_sq(mover) {
        Some(k) => !is_square_attacked(&next, k, mover.other()),
        None => true,
    }
}

fn gen_piece(pos: &Position, from: Square, pc: Piece, with_castling: bool, out: &mut Vec<Move>) {
    let c = pc.color;
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, c, out),
        PieceKind::Knight => gen_steps(pos, from, c, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(pos, from, c, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(pos, from, c, out, &ORTHOGONALS),
        PieceKind::Queen => gen_slider(pos, from, c, out, &QUEEN_DIRS),
        PieceKind::King => {
            gen_steps(pos, from, c, out, &KING_DELTAS);
            if with_castling {
                gen_castle(pos, from, c, out);
            }
        }
    }
}

fn push_pawn_move(pos: &Position, from: Square, to: Square, c: Color, out: &mut Vec<Move>) {
    if to.rank == pos.promotion_rank(c) {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::with_promotion(from, to, pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let size = pos.size();
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(0, dir, size)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(pos, from, to, c, out);

        // forward 2 from start
        if from.rank == pos.pawn_start_rank(c)
            && let Some(to2) = from.offset(0, 2 * dir, size)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir, size) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => push_pawn_move(pos, from, to, c, out),
            Some(_) => {}
            None => {
                // The pawn being taken stands beside us, behind the target.
                let victim = Square::new(to.file, from.rank);
                if pos.en_passant == Some(to)
                    && pos
                        .piece_at(victim)
                        .is_some_and(|v| v.kind == PieceKind::Pawn && v.color != c)
                {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr, pos.size()) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr, pos.size()) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    if from != pos.king_home(c) {
        return;
    }
    let enemy = c.other();
    let mut in_check = None;

    for side in [CastleSide::King, CastleSide::Queen] {
        if !pos.castling.has(c, side) {
            continue;
        }
        let Some(path) = pos.castle_path(c, side) else {
            continue;
        };
        if pos.piece_at(path.rook_from) != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }
        if path.between().any(|s| pos.piece_at(s).is_some()) {
            continue;
        }
        // Can't castle out of, through, or into check.
        let checked = *in_check.get_or_insert_with(|| is_square_attacked(pos, from, enemy));
        if checked {
            return;
        }
        if path.king_transit().any(|s| is_square_attacked(pos, s, enemy)) {
            continue;
        }
        out.push(Move::new(path.king_from, path.king_to));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
