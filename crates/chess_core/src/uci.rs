//! Long-algebraic move text (`e2e4`, `a7a8q`), the form moves take in
//! histories, configs and advisory-engine replies.

use crate::board::Position;
use crate::movegen::legal_moves_from;
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses `txt` and matches it against the legal moves of `pos`.
/// Returns `None` for malformed text or a move that is not legal here.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let mv: Move = txt.trim().parse().ok()?;
    legal_moves_from(pos, mv.from).into_iter().find(|&m| m == mv)
}

/// Plays a sequence of moves from `start`, stopping at the first one that
/// does not parse or is not legal. Returns the position reached and how
/// many moves were applied.
pub fn play_moves<'a>(start: &Position, moves: impl IntoIterator<Item = &'a str>) -> (Position, usize) {
    let mut pos = start.clone();
    let mut applied = 0;
    for txt in moves {
        let Some(mv) = parse_uci_move(&pos, txt) else {
            break;
        };
        if pos.make_move(mv).is_none() {
            break;
        }
        applied += 1;
    }
    (pos, applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_text_round_trip_through_position() {
        let pos = Position::startpos();
        let mv = parse_uci_move(&pos, "g1f3").unwrap();
        assert_eq!(move_to_uci(mv), "g1f3");
    }

    #[test]
    fn test_rejects_illegal_and_malformed_text() {
        let pos = Position::startpos();
        assert_eq!(parse_uci_move(&pos, "e2e5"), None);
        assert_eq!(parse_uci_move(&pos, "e7e5"), None);
        assert_eq!(parse_uci_move(&pos, "zz"), None);
        assert_eq!(parse_uci_move(&pos, ""), None);
    }

    #[test]
    fn test_promotion_text_must_match() {
        let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(parse_uci_move(&pos, "a7a8"), None);
        let mv = parse_uci_move(&pos, "a7a8n").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn test_play_moves_stops_at_first_bad_move() {
        let (pos, applied) = play_moves(&Position::startpos(), ["e2e4", "e7e5", "e1e3", "g1f3"]);
        assert_eq!(applied, 2);
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
        );
    }
}
