use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tilechess::board::board::Board;
use tilechess::board::board_utils::Color;
use tilechess::player::player::Player;
use tilechess::search::board_scoring::StandardScorer;
use tilechess::search::minimax::Minimax;

const POSITIONS: &[(&str, &str)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "italian",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3",
    ),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let board = Board::from_fen(fen).expect("benchmark FEN should parse");
        let white = Player::from_board(&board, Color::White);
        let black = Player::from_board(&board, Color::Black);

        for depth in [1u8, 2] {
            for ordering in [true, false] {
                let label = format!("{name}_d{depth}_{}", if ordering { "sorted" } else { "plain" });
                group.bench_function(BenchmarkId::from_parameter(label), |b| {
                    b.iter(|| {
                        let mut search = Minimax::new(StandardScorer::default(), ordering);
                        let best = search.search(black_box(&board), &white, &black, black_box(depth));
                        black_box(best)
                    });
                });
            }
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
