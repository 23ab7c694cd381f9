use checkers_engine::agent::ai::{
    choose_best_move, minimax, SearchConfig, SearchContext, TieBreak, WIN_SCORE,
};
use checkers_engine::agent::Deadline;
use checkers_engine::game_repr::{Color, GameState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn bench_minimax_depth_4(c: &mut Criterion) {
    let state = GameState::new();
    let deadline = Deadline::from_now(Duration::from_secs(3600));
    c.bench_function("minimax depth 4", |b| {
        b.iter(|| {
            let mut ctx = SearchContext::new(&deadline);
            black_box(minimax(
                black_box(&state),
                4,
                -WIN_SCORE,
                WIN_SCORE,
                Color::White,
                &mut ctx,
            ))
        })
    });
}

fn bench_choose_best_move_depth_5(c: &mut Criterion) {
    let state = GameState::new();
    let config = SearchConfig {
        max_depth: 5,
        tie_break: TieBreak::FirstCandidate,
        ..SearchConfig::default()
    };
    c.bench_function("choose best move depth 5", |b| {
        b.iter(|| {
            let deadline = Deadline::from_now(Duration::from_secs(3600));
            black_box(choose_best_move(black_box(&state), &deadline, &config))
        })
    });
}

criterion_group!(benches, bench_minimax_depth_4, bench_choose_best_move_depth_5);
criterion_main!(benches);
