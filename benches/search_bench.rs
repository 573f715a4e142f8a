use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tictacbot::{select_move, Algorithm, Board, Player};

fn bench_search(c: &mut Criterion) {
    let empty = Board::empty();
    let mid: Board = "X---O----".parse().unwrap();
    c.bench_function("minimax_empty", |ben| {
        ben.iter(|| black_box(select_move(black_box(&empty), Player::X, Algorithm::Minimax, false)).metrics.nodes)
    });
    c.bench_function("alphabeta_empty", |ben| {
        ben.iter(|| black_box(select_move(black_box(&empty), Player::X, Algorithm::AlphaBeta, false)).metrics.nodes)
    });
    c.bench_function("alphabeta_tt_empty", |ben| {
        ben.iter(|| black_box(select_move(black_box(&empty), Player::X, Algorithm::AlphaBeta, true)).metrics.nodes)
    });
    c.bench_function("alphabeta_tt_midgame", |ben| {
        ben.iter(|| black_box(select_move(black_box(&mid), Player::X, Algorithm::AlphaBeta, true)).metrics.nodes)
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
