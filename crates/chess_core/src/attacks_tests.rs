use super::*;

fn s(text: &str) -> Square {
    text.parse().unwrap()
}

#[test]
fn test_pawn_attacks_forward_diagonals() {
    let pos = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, s("d5"), Color::White));
    assert!(is_square_attacked(&pos, s("f5"), Color::White));
    // Pushes are not attacks.
    assert!(!is_square_attacked(&pos, s("e5"), Color::White));
    assert!(!is_square_attacked(&pos, s("d3"), Color::White));

    let pos = Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, s("c4"), Color::Black));
    assert!(is_square_attacked(&pos, s("e4"), Color::Black));
    assert!(!is_square_attacked(&pos, s("e6"), Color::Black));
}

#[test]
fn test_knight_and_king_attacks() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, s("b3"), Color::White));
    assert!(is_square_attacked(&pos, s("c2"), Color::White));
    assert!(is_square_attacked(&pos, s("d2"), Color::White)); // king
    assert!(!is_square_attacked(&pos, s("c3"), Color::White));
}

#[test]
fn test_sliders_are_blocked() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R2P3K w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, s("a8"), Color::White));
    assert!(is_square_attacked(&pos, s("c1"), Color::White));
    // The d1 pawn shields e1 from the rook.
    assert!(!is_square_attacked(&pos, s("e1"), Color::White));
    assert!(!is_square_attacked(&pos, s("f1"), Color::Black));

    let pos = Position::from_fen("4k3/8/8/8/8/8/8/B3K3 w - - 0 1").unwrap();
    assert!(is_square_attacked(&pos, s("h8"), Color::White));
}

#[test]
fn test_attackers_lists_every_checker() {
    // Double check: rook on e1 and knight on d6 both hit the king on e8.
    let pos = Position::from_fen("4k3/8/3N4/8/8/8/8/K3R3 b - - 0 1").unwrap();
    let mut found = checkers(&pos, Color::Black);
    found.sort();
    let mut expected = vec![s("d6"), s("e1")];
    expected.sort();
    assert_eq!(found, expected);
    assert!(pos.in_check(Color::Black));
    assert!(!pos.in_check(Color::White));
}

#[test]
fn test_missing_king_is_never_in_check() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(!pos.in_check(Color::Black));
    assert!(checkers(&pos, Color::Black).is_empty());
}

#[test]
fn test_attacks_on_wide_board() {
    // 10x10 board: queen on a1 sees j10 along the long diagonal.
    let pos = Position::from_fen_sized("4k5/10/10/10/10/10/10/10/10/Q3K5 w - - 0 1", 10).unwrap();
    assert!(is_square_attacked(&pos, s("j10"), Color::White));
    assert!(is_square_attacked(&pos, s("a10"), Color::White));
}
