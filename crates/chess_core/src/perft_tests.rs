use super::*;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_depth_zero_is_one_node() {
    let pos = Position::startpos();
    assert_eq!(perft(&pos, 0).nodes, 1);
    assert_eq!(perft_nodes(&pos, 0), 1);
    assert!(divide(&pos, 0).is_empty());
}

#[test]
fn test_startpos_shallow_counts() {
    let pos = Position::startpos();
    assert_eq!(perft(&pos, 1).nodes, 20);
    assert_eq!(perft(&pos, 2).nodes, 400);

    let d3 = perft(&pos, 3);
    assert_eq!(d3.nodes, 8902);
    assert_eq!(d3.captures, 34);
    assert_eq!(d3.checks, 12);
    assert_eq!(d3.checkmates, 0);
}

#[test]
fn test_kiwipete_counters() {
    let pos = Position::from_fen(KIWIPETE).unwrap();
    let d1 = perft(&pos, 1);
    assert_eq!(
        d1,
        PerftCounts {
            nodes: 48,
            captures: 8,
            castles: 2,
            ..PerftCounts::default()
        }
    );

    let d2 = perft(&pos, 2);
    assert_eq!(d2.nodes, 2039);
    assert_eq!(d2.captures, 351);
    assert_eq!(d2.en_passant, 1);
    assert_eq!(d2.castles, 91);
    assert_eq!(d2.promotions, 0);
    assert_eq!(d2.checks, 3);
    assert_eq!(d2.checkmates, 0);
}

#[test]
fn test_parallel_and_node_only_variants_agree() {
    let pos = Position::from_fen(KIWIPETE).unwrap();
    let serial = perft(&pos, 2);
    assert_eq!(perft_parallel(&pos, 2), serial);
    assert_eq!(perft_nodes(&pos, 2), serial.nodes);
}

#[test]
fn test_divide_sums_to_total() {
    let pos = Position::startpos();
    let split = divide(&pos, 3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);
    let e2e4 = split
        .iter()
        .find(|(m, _)| m.to_string() == "e2e4")
        .map(|(_, n)| *n);
    assert_eq!(e2e4, Some(600));
}

#[test]
fn test_counts_add_and_serialize() {
    let a = PerftCounts {
        nodes: 3,
        checks: 1,
        ..PerftCounts::default()
    };
    let b = PerftCounts {
        nodes: 2,
        captures: 2,
        ..PerftCounts::default()
    };
    let sum = a + b;
    assert_eq!(sum.nodes, 5);
    assert_eq!(sum.captures, 2);
    assert_eq!(sum.checks, 1);

    let json = serde_json::to_value(sum).unwrap();
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["discovery_checks"], 0);
}

fn leaf(fen: &str, text: &str) -> PerftCounts {
    let mut next = Position::from_fen(fen).unwrap();
    let mv: Move = text.parse().unwrap();
    let effect = next.make_move(mv).unwrap();
    classify_leaf(&next, mv, &effect)
}

#[test]
fn test_check_classification() {
    // Direct rook check.
    let c = leaf("4k3/8/8/8/4R3/8/8/K7 w - - 0 1", "e4e6");
    assert_eq!((c.checks, c.discovery_checks, c.double_checks), (1, 0, 0));

    // Knight steps off the long diagonal and uncovers the bishop.
    let c = leaf("7k/8/8/8/3N4/8/8/B3K3 w - - 0 1", "d4e6");
    assert_eq!((c.checks, c.discovery_checks, c.double_checks), (1, 1, 0));

    // Knight gives check itself while uncovering the bishop.
    let c = leaf("7k/8/8/4N3/8/8/8/B3K3 w - - 0 1", "e5g6");
    assert_eq!((c.checks, c.discovery_checks, c.double_checks), (1, 1, 1));
    assert_eq!(c.checkmates, 0);
}
