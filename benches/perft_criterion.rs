use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::perft::perft_legal;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "starting_position",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "endgame",
        fen: ENDGAME_FEN,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "starting_position",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "endgame",
        fen: ENDGAME_FEN,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "promotions",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        expected_nodes: &[6, 264, 9467],
    },
    BenchCase {
        name: "middlegame",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486, 62_379],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite = suite_name();
    let cases = if suite == "standard" {
        CASES_STANDARD
    } else {
        CASES_QUICK
    };

    let mut group = c.benchmark_group(format!("perft_{suite}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            let warmup = perft_legal(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft_legal(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
