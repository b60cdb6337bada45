use super::*;

fn s(text: &str) -> Square {
    text.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

#[test]
fn test_castle_paths_on_standard_board() {
    let pos = Position::startpos();
    let ks = pos.castle_path(Color::White, CastleSide::King).unwrap();
    assert_eq!((ks.king_from, ks.king_to), (s("e1"), s("g1")));
    assert_eq!((ks.rook_from, ks.rook_to), (s("h1"), s("f1")));
    assert_eq!(ks.between().collect::<Vec<_>>(), vec![s("f1"), s("g1")]);
    assert_eq!(ks.king_transit().collect::<Vec<_>>(), vec![s("f1"), s("g1")]);

    let qs = pos.castle_path(Color::Black, CastleSide::Queen).unwrap();
    assert_eq!((qs.king_from, qs.king_to), (s("e8"), s("c8")));
    assert_eq!((qs.rook_from, qs.rook_to), (s("a8"), s("d8")));
    assert_eq!(qs.between().collect::<Vec<_>>(), vec![s("b8"), s("c8"), s("d8")]);
    assert_eq!(qs.king_transit().collect::<Vec<_>>(), vec![s("d8"), s("c8")]);
}

#[test]
fn test_narrow_board_has_no_king_side_castle() {
    let pos = Position::empty(6);
    assert!(pos.castle_path(Color::White, CastleSide::King).is_none());
    assert!(pos.castle_path(Color::White, CastleSide::Queen).is_some());
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut pos = Position::startpos();
    let effect = pos.make_move(mv("e2e4")).unwrap();
    assert!(!effect.is_capture());
    assert_eq!(pos.en_passant, Some(s("e3")));
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.fullmove_number, 1);
    assert_eq!(pos.halfmove_clock, 0);

    pos.make_move(mv("g8f6")).unwrap();
    assert_eq!(pos.en_passant, None);
    assert_eq!(pos.fullmove_number, 2);
    assert_eq!(pos.halfmove_clock, 1);
}

#[test]
fn test_en_passant_removes_captured_pawn() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1").unwrap();
    let effect = pos.make_move(mv("e5f6")).unwrap();
    assert!(effect.en_passant);
    assert_eq!(
        effect.captured,
        Some((s("f5"), Piece::new(Color::Black, PieceKind::Pawn)))
    );
    assert_eq!(pos.piece_at(s("f5")), None);
    assert_eq!(pos.piece_at(s("f6")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(pos.halfmove_clock, 0);
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 10").unwrap();
    let effect = pos.make_move(mv("e1g1")).unwrap();
    assert!(effect.castle.is_some());
    assert_eq!(pos.piece_at(s("g1")), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(pos.piece_at(s("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(pos.piece_at(s("h1")), None);
    assert!(!pos.castling.white_king_side && !pos.castling.white_queen_side);
    assert!(pos.castling.black_king_side && pos.castling.black_queen_side);
    assert_eq!(pos.halfmove_clock, 6);

    pos.make_move(mv("e8c8")).unwrap();
    assert_eq!(pos.piece_at(s("d8")), Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert_eq!(pos.piece_at(s("a8")), None);
    assert_eq!(pos.to_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 7 11");
}

#[test]
fn test_rook_moves_and_captures_clear_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    pos.make_move(mv("a1a8")).unwrap();
    // White's rook left a1, black's rook was captured on a8.
    assert!(!pos.castling.white_queen_side);
    assert!(!pos.castling.black_queen_side);
    assert!(pos.castling.white_king_side);
    assert!(pos.castling.black_king_side);
}

#[test]
fn test_promotion_substitutes_piece() {
    let mut pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let effect = pos.make_move(mv("a7a8n")).unwrap();
    assert_eq!(effect.promotion, Some(PieceKind::Knight));
    assert_eq!(pos.piece_at(s("a8")), Some(Piece::new(Color::White, PieceKind::Knight)));
}

#[test]
fn test_make_move_from_empty_square_is_a_no_op() {
    let mut pos = Position::startpos();
    assert!(pos.make_move(mv("e4e5")).is_none());
    assert_eq!(pos, Position::startpos());
}
