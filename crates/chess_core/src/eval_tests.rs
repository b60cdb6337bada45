use super::*;

fn eval_fen(fen: &str) -> f64 {
    evaluate(&Position::from_fen(fen).unwrap())
}

#[test]
fn test_start_position_is_level() {
    assert_eq!(evaluate(&Position::startpos()), 0.0);
}

#[test]
fn test_extra_white_pawn_is_positive() {
    let score = eval_fen("rnbqkbnr/ppp1pppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(score > 70.0, "got {score}");
}

#[test]
fn test_missing_white_queen_is_very_negative() {
    let score = eval_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");
    assert!(score < -800.0, "got {score}");
}

#[test]
fn test_king_table_switches_in_endgame() {
    let end = Position::from_fen("4k3/8/8/8/8/8/P7/4K3 w - - 0 1").unwrap();
    let open = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/P7/4K3 w - - 0 1").unwrap();
    assert!(is_endgame(&end));
    assert!(!is_endgame(&open));
    assert_ne!(evaluate(&end), evaluate(&open));
}

#[test]
fn test_mobility_counts_each_side_on_move() {
    let pos = Position::startpos();
    assert_eq!(mobility(&pos, Color::White), 20);
    assert_eq!(mobility(&pos, Color::Black), 20);

    let open = eval_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
    let blocked = eval_fen("rnbqkbnr/pppppppp/8/8/4p3/4P3/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
    assert!(open > blocked);
}

#[test]
fn test_symmetric_nine_wide_start_is_level() {
    let pos = Position::from_fen_sized(
        "rnbqkbnrr/ppppppppp/9/9/9/9/9/PPPPPPPPP/RNBQKBNRR w - - 0 1",
        9,
    )
    .unwrap();
    assert!(evaluate(&pos).abs() < 1.0);
}

#[test]
fn test_evaluate_is_pure() {
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .unwrap();
    let before = pos.clone();
    let a = evaluate(&pos);
    let b = evaluate(&pos);
    assert_eq!(a, b);
    assert_eq!(pos, before);
}
