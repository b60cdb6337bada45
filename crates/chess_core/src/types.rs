use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported board width. Pawn start, double-push and promotion
/// ranks must all be distinct.
pub const MIN_BOARD_SIZE: u8 = 6;
/// Largest supported board width (one file letter per column).
pub const MAX_BOARD_SIZE: u8 = 26;
/// Width of the standard board.
pub const STANDARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pieces a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Lowercase letter used by FEN and move text.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::to_char`].
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// Errors produced when reading squares or moves from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("invalid move text '{0}'")]
    InvalidMove(String),
    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),
}

/// A board coordinate. `rank` 0 is white's back rank, `file` 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Converts a top-down grid coordinate (row 0 is the last rank, as FEN
    /// lists it) into a square on a board of width `size`.
    pub fn from_coords(row: u8, col: u8, size: u8) -> Option<Square> {
        if row >= size || col >= size {
            return None;
        }
        Some(Square::new(col, size - 1 - row))
    }

    /// Inverse of [`Square::from_coords`].
    pub fn to_coords(self, size: u8) -> (u8, u8) {
        (size - 1 - self.rank, self.file)
    }

    pub fn in_bounds(self, size: u8) -> bool {
        self.file < size && self.rank < size
    }

    /// The square `(df, dr)` away, if it is still on a board of width `size`.
    pub fn offset(self, df: i8, dr: i8, size: u8) -> Option<Square> {
        let f = self.file as i16 + df as i16;
        let r = self.rank as i16 + dr as i16;
        if (0..size as i16).contains(&f) && (0..size as i16).contains(&r) {
            Some(Square::new(f as u8, r as u8))
        } else {
            None
        }
    }

    pub fn index(self, size: u8) -> usize {
        self.rank as usize * size as usize + self.file as usize
    }

    pub fn from_index(idx: usize, size: u8) -> Square {
        let size = size as usize;
        Square::new((idx % size) as u8, (idx / size) as u8)
    }

    /// Reads a square like `e4` or `b10` from the front of `text`, returning
    /// the square and the number of bytes consumed.
    fn scan(text: &str) -> Option<(Square, usize)> {
        let bytes = text.as_bytes();
        let file = *bytes.first()?;
        if !file.is_ascii_lowercase() {
            return None;
        }
        let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || digits > 2 || bytes[1] == b'0' {
            return None;
        }
        let rank: u8 = text[1..1 + digits].parse().ok()?;
        if rank == 0 || rank > MAX_BOARD_SIZE {
            return None;
        }
        Some((Square::new(file - b'a', rank - 1), 1 + digits))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank as u32 + 1)
    }
}

impl FromStr for Square {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Square::scan(s) {
            Some((sq, used)) if used == s.len() => Ok(sq),
            _ => Err(MoveParseError::InvalidSquare(s.to_string())),
        }
    }
}

/// A move is just its geometry; whether it captures, castles or takes en
/// passant is derived from the position it is played in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `<from><to>[q|r|b|n]`. Legality is not checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveParseError::InvalidMove(s.to_string());
        let (from, a) = Square::scan(s).ok_or_else(invalid)?;
        let (to, b) = Square::scan(&s[a..]).ok_or_else(invalid)?;
        let rest = &s[a + b..];
        let mut chars = rest.chars();
        let promotion = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => match PieceKind::from_char(c) {
                Some(k) if PieceKind::PROMOTIONS.contains(&k) => Some(k),
                _ => return Err(MoveParseError::InvalidPromotion(c)),
            },
            _ => return Err(invalid()),
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
