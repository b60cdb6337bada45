use super::*;
use chess_core::GameStatus;

const MATE_IN_ONE: &str = "4r2k/1p3rbp/2p1N1p1/p3n3/P2NB1nq/1P6/4R1P1/B1Q2RK1 b - - 4 32";

#[test]
fn test_finds_mate_in_one() {
    let mut game = Game::from_fen(MATE_IN_ONE).unwrap();
    let mv = minimax_move(&game, 1).unwrap();
    assert_eq!(mv.to_string(), "h4h2");

    assert!(game.apply_move(mv));
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn test_mate_scores_for_the_side_delivering_it() {
    let pos = Position::from_fen(MATE_IN_ONE).unwrap();
    let (_, score) = search(&pos, 1).unwrap();
    assert_eq!(score, -MATE_SCORE);
}

#[test]
fn test_captures_free_queen() {
    let game = Game::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mv = minimax_move(&game, 2).unwrap();
    assert_eq!(mv.to_string(), "e4d5");
}

#[test]
fn test_depth_zero_is_treated_as_one() {
    let game = Game::from_fen(MATE_IN_ONE).unwrap();
    assert_eq!(minimax_move(&game, 0), minimax_move(&game, 1));
}

#[test]
fn test_no_move_without_legal_moves() {
    let game =
        Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(minimax_move(&game, 2), None);
    assert_eq!(minimax_parallel(&game, 2), None);

    let stalemate = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(minimax_move(&stalemate, 1), None);
}

#[test]
fn test_parallel_matches_serial() {
    for fen in [
        MATE_IN_ONE,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ] {
        let game = Game::from_fen(fen).unwrap();
        assert_eq!(minimax_parallel(&game, 2), minimax_move(&game, 2), "{fen}");
    }
}

#[test]
fn test_stalemate_scores_level() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(terminal_score(&pos), 0.0);
    let mated = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1")
        .unwrap();
    assert_eq!(terminal_score(&mated), -MATE_SCORE);
}

#[test]
fn test_search_does_not_mutate_game() {
    let game = Game::from_fen(MATE_IN_ONE).unwrap();
    let before = game.clone();
    let _ = minimax_move(&game, 2);
    assert_eq!(game, before);
}
