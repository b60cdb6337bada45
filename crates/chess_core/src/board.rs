use crate::attacks::is_square_attacked;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.white_king_side,
            (Color::White, CastleSide::Queen) => self.white_queen_side,
            (Color::Black, CastleSide::King) => self.black_king_side,
            (Color::Black, CastleSide::Queen) => self.black_queen_side,
        }
    }

    pub fn set(&mut self, color: Color, side: CastleSide, allowed: bool) {
        let flag = match (color, side) {
            (Color::White, CastleSide::King) => &mut self.white_king_side,
            (Color::White, CastleSide::Queen) => &mut self.white_queen_side,
            (Color::Black, CastleSide::King) => &mut self.black_king_side,
            (Color::Black, CastleSide::Queen) => &mut self.black_queen_side,
        };
        *flag = allowed;
    }

    pub fn clear_color(&mut self, color: Color) {
        self.set(color, CastleSide::King, false);
        self.set(color, CastleSide::Queen, false);
    }
}

/// King and rook squares for one castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlePath {
    pub side: CastleSide,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastlePath {
    /// Squares strictly between king and rook; all must be empty.
    pub fn between(&self) -> impl Iterator<Item = Square> + '_ {
        let (lo, hi) = if self.king_from.file < self.rook_from.file {
            (self.king_from.file, self.rook_from.file)
        } else {
            (self.rook_from.file, self.king_from.file)
        };
        let rank = self.king_from.rank;
        (lo + 1..hi).map(move |f| Square::new(f, rank))
    }

    /// Squares the king crosses or lands on; none may be attacked.
    pub fn king_transit(&self) -> impl Iterator<Item = Square> + '_ {
        let rank = self.king_from.rank;
        let from = self.king_from.file;
        let to = self.king_to.file;
        let files: Vec<u8> = if to > from {
            (from + 1..=to).collect()
        } else {
            (to..from).rev().collect()
        };
        files.into_iter().map(move |f| Square::new(f, rank))
    }
}

/// What [`Position::make_move`] did, for callers that classify moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEffect {
    pub moved: Piece,
    /// The captured piece and the square it stood on (differs from the
    /// destination for en passant).
    pub captured: Option<(Square, Piece)>,
    pub en_passant: bool,
    pub castle: Option<CastlePath>,
    pub promotion: Option<PieceKind>,
}

impl MoveEffect {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    size: u8,
    board: Vec<Option<Piece>>,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// An empty board of width `size` (clamped to the supported range),
    /// white to move, no castling rights.
    pub fn empty(size: u8) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Position {
            size,
            board: vec![None; size as usize * size as usize],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty(STANDARD_SIZE);
        p.castling = CastlingRights::ALL;

        for f in 0..STANDARD_SIZE {
            p.set_piece(Square::new(f, 1), Some(Piece::new(Color::White, PieceKind::Pawn)));
            p.set_piece(Square::new(f, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.set_piece(Square::new(f as u8, 0), Some(Piece::new(Color::White, kind)));
            p.set_piece(Square::new(f as u8, 7), Some(Piece::new(Color::Black, kind)));
        }
        p
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.in_bounds(self.size) {
            return None;
        }
        self.board[sq.index(self.size)]
    }

    /// Places (or clears) a square. Out-of-range squares are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if sq.in_bounds(self.size) {
            let idx = sq.index(self.size);
            self.board[idx] = pc;
        }
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = self.size;
        self.board
            .iter()
            .enumerate()
            .filter_map(move |(i, pc)| pc.map(|p| (Square::from_index(i, size), p)))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// A side without a king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => is_square_attacked(self, ksq, c.other()),
            None => false,
        }
    }

    pub fn back_rank(&self, c: Color) -> u8 {
        match c {
            Color::White => 0,
            Color::Black => self.size - 1,
        }
    }

    pub fn pawn_start_rank(&self, c: Color) -> u8 {
        match c {
            Color::White => 1,
            Color::Black => self.size - 2,
        }
    }

    pub fn promotion_rank(&self, c: Color) -> u8 {
        match c {
            Color::White => self.size - 1,
            Color::Black => 0,
        }
    }

    /// The king's starting square: the e-file on a standard board, the
    /// middle file (rounded up) on other widths.
    pub fn king_home(&self, c: Color) -> Square {
        Square::new(self.size / 2, self.back_rank(c))
    }

    pub fn rook_home(&self, c: Color, side: CastleSide) -> Square {
        let file = match side {
            CastleSide::King => self.size - 1,
            CastleSide::Queen => 0,
        };
        Square::new(file, self.back_rank(c))
    }

    /// Castling squares for `c` on `side`, or `None` if the board is too
    /// narrow for the king to travel two files without reaching the rook.
    pub fn castle_path(&self, c: Color, side: CastleSide) -> Option<CastlePath> {
        let king_from = self.king_home(c);
        let rook_from = self.rook_home(c, side);
        let kf = king_from.file;
        let rank = king_from.rank;
        let (king_to, rook_to) = match side {
            CastleSide::King => {
                if kf + 2 >= rook_from.file {
                    return None;
                }
                (kf + 2, kf + 1)
            }
            CastleSide::Queen => {
                if kf < 3 {
                    return None;
                }
                (kf - 2, kf - 1)
            }
        };
        Some(CastlePath {
            side,
            king_from,
            king_to: Square::new(king_to, rank),
            rook_from,
            rook_to: Square::new(rook_to, rank),
        })
    }

    /// Plays `mv` without checking legality, updating every piece of game
    /// state. Returns `None` (and leaves the position untouched) if the
    /// from-square is empty or either square is off the board.
    pub fn make_move(&mut self, mv: Move) -> Option<MoveEffect> {
        let moved = self.piece_at(mv.from)?;
        if !mv.to.in_bounds(self.size) {
            return None;
        }
        let mover = moved.color;
        let mut captured = self.piece_at(mv.to).map(|pc| (mv.to, pc));

        // En-passant capture removes the pawn beside the mover, not on `to`.
        let mut en_passant = false;
        if moved.kind == PieceKind::Pawn
            && captured.is_none()
            && self.en_passant == Some(mv.to)
            && mv.from.file != mv.to.file
        {
            let victim_sq = Square::new(mv.to.file, mv.from.rank);
            if let Some(victim) = self.piece_at(victim_sq)
                && victim.kind == PieceKind::Pawn
                && victim.color != mover
            {
                self.set_piece(victim_sq, None);
                captured = Some((victim_sq, victim));
                en_passant = true;
            }
        }

        let promotion = match mv.promotion {
            Some(kind) if moved.kind == PieceKind::Pawn => Some(kind),
            _ => None,
        };
        let placed = match promotion {
            Some(kind) => Piece::new(mover, kind),
            None => moved,
        };
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(placed));

        // A king travelling two files along its rank is castling.
        let mut castle = None;
        if moved.kind == PieceKind::King
            && mv.from.rank == mv.to.rank
            && mv.from.file.abs_diff(mv.to.file) == 2
        {
            let side = if mv.to.file > mv.from.file {
                CastleSide::King
            } else {
                CastleSide::Queen
            };
            if let Some(path) = self.castle_path(mover, side)
                && path.king_from == mv.from
                && path.king_to == mv.to
                && let Some(rook) = self.piece_at(path.rook_from)
                && rook == Piece::new(mover, PieceKind::Rook)
            {
                self.set_piece(path.rook_from, None);
                self.set_piece(path.rook_to, Some(rook));
                castle = Some(path);
            }
        }

        // Castling rights: king moves, rook leaves home, rook captured at home.
        if moved.kind == PieceKind::King {
            self.castling.clear_color(mover);
        }
        for color in Color::ALL {
            for side in CastleSide::ALL {
                let home = self.rook_home(color, side);
                let rook_left = moved.kind == PieceKind::Rook && moved.color == color && mv.from == home;
                let rook_taken = matches!(
                    captured,
                    Some((sq, pc)) if sq == home && pc.kind == PieceKind::Rook && pc.color == color
                );
                if rook_left || rook_taken {
                    self.castling.set(color, side, false);
                }
            }
        }

        // Double pawn push sets the en-passant target, anything else clears it.
        self.en_passant = None;
        if moved.kind == PieceKind::Pawn
            && mv.from.file == mv.to.file
            && mv.from.rank == self.pawn_start_rank(mover)
            && mv.to.rank as i16 == mv.from.rank as i16 + 2 * mover.forward() as i16
        {
            let ep_rank = (mv.from.rank + mv.to.rank) / 2;
            self.en_passant = Some(Square::new(mv.from.file, ep_rank));
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.other();

        Some(MoveEffect {
            moved,
            captured,
            en_passant,
            castle,
            promotion,
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
