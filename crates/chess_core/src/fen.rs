//! Forsyth-Edwards Notation reader and writer.
//!
//! Boards wider or narrower than eight files use the same six fields; empty
//! runs may then take more than one digit (`10`), and ranks above nine are
//! written with two digits in square names (`a10`).

use std::str::FromStr;

use thiserror::Error;

use crate::board::{CastleSide, CastlingRights, Position};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must contain 6 fields, found {0}")]
    FieldCount(usize),
    #[error("unsupported board size {0}")]
    UnsupportedSize(u8),
    #[error("board must have {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },
    #[error("rank {rank} must have {expected} squares, found {found}")]
    RankWidth {
        rank: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("active color must be \"w\" or \"b\", found '{0}'")]
    ActiveColor(String),
    #[error("invalid castling rights '{0}'")]
    Castling(String),
    #[error("invalid en passant square '{0}'")]
    EnPassantSquare(String),
    #[error("en passant square '{0}' is not on the third or sixth rank")]
    EnPassantRank(String),
    #[error("half-move clock must be a non-negative integer, found '{0}'")]
    HalfmoveClock(String),
    #[error("full-move number must be an integer >= 1, found '{0}'")]
    FullmoveNumber(String),
}

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parses a standard 8x8 FEN record.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_sized(fen, STANDARD_SIZE)
    }

    /// Parses a FEN record describing a `size` x `size` board.
    pub fn from_fen_sized(fen: &str, size: u8) -> Result<Self, FenError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(FenError::UnsupportedSize(size));
        }

        let parts: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, active, castling, ep, halfmove, fullmove] = parts.as_slice() else {
            return Err(FenError::FieldCount(parts.len()));
        };

        let mut pos = Position::empty(size);
        parse_placement(&mut pos, placement)?;

        pos.side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::ActiveColor(other.to_string())),
        };
        pos.castling = parse_castling(castling)?;
        pos.en_passant = parse_en_passant(ep, size)?;
        pos.halfmove_clock =
            parse_count(halfmove).ok_or_else(|| FenError::HalfmoveClock(halfmove.to_string()))?;
        pos.fullmove_number = parse_count(fullmove)
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::FullmoveNumber(fullmove.to_string()))?;

        Ok(pos)
    }

    /// Writes the position back out; the exact inverse of [`Position::from_fen_sized`]
    /// for canonical records.
    pub fn to_fen(&self) -> String {
        let size = self.size();
        let mut out = String::new();

        for row in 0..size {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u32;
            for col in 0..size {
                let Some(sq) = Square::from_coords(row, col, size) else {
                    continue;
                };
                match self.piece_at(sq) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }

        out.push(' ');
        out.push(self.side_to_move.fen_char());

        out.push(' ');
        let mut rights = String::new();
        for (color, side, ch) in [
            (Color::White, CastleSide::King, 'K'),
            (Color::White, CastleSide::Queen, 'Q'),
            (Color::Black, CastleSide::King, 'k'),
            (Color::Black, CastleSide::Queen, 'q'),
        ] {
            if self.castling.has(color, side) {
                rights.push(ch);
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        out.push_str(&rights);

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_placement(pos: &mut Position, placement: &str) -> Result<(), FenError> {
    let size = pos.size();
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != size as usize {
        return Err(FenError::RankCount {
            expected: size as usize,
            found: ranks.len(),
        });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut squares = Vec::with_capacity(size as usize);
        let mut chars = rank_str.chars().peekable();
        while let Some(ch) = chars.next() {
            if let Some(d) = ch.to_digit(10) {
                // Digit runs may be longer than one character on wide boards.
                let mut run = d as usize;
                while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                    run = run.saturating_mul(10).saturating_add(next as usize);
                    chars.next();
                }
                squares.extend(std::iter::repeat_n(None, run.min(size as usize + 1)));
            } else {
                squares.push(Some(Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?));
            }
        }

        if squares.len() != size as usize {
            return Err(FenError::RankWidth {
                rank: size as usize - row,
                expected: size as usize,
                found: squares.len(),
            });
        }

        for (col, pc) in squares.into_iter().enumerate() {
            if let Some(sq) = Square::from_coords(row as u8, col as u8, size) {
                pos.set_piece(sq, pc);
            }
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }
    let invalid = || FenError::Castling(field.to_string());
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::King),
            'Q' => (Color::White, CastleSide::Queen),
            'k' => (Color::Black, CastleSide::King),
            'q' => (Color::Black, CastleSide::Queen),
            _ => return Err(invalid()),
        };
        if rights.has(color, side) {
            return Err(invalid());
        }
        rights.set(color, side, true);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str, size: u8) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let sq: Square = field
        .parse()
        .ok()
        .filter(|s: &Square| s.in_bounds(size))
        .ok_or_else(|| FenError::EnPassantSquare(field.to_string()))?;
    // Third rank for a white double push, third-from-last for black.
    if sq.rank != 2 && sq.rank != size - 3 {
        return Err(FenError::EnPassantRank(field.to_string()));
    }
    Ok(Some(sq))
}

fn parse_count(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
