use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use focus_engine::core::PieceColor;
use focus_engine::rules::FocusGame;
use std::hint::black_box;

fn fresh() -> FocusGame {
    FocusGame::new(("PlayerA", PieceColor::RED), ("PlayerB", PieceColor::GREEN)).unwrap()
}

/// Play the first legal action for each side until a win or `limit` turns.
fn playout(mut game: FocusGame, limit: usize) -> FocusGame {
    for _ in 0..limit {
        let name = game.active_turn().to_string();
        let Some(action) = game.legal_actions(&name).into_iter().next() else {
            break;
        };
        match game.apply(&name, &action) {
            Ok(outcome) if outcome.is_win() => break,
            Ok(_) => {}
            Err(_) => break,
        }
    }
    game
}

fn bench_moves(c: &mut Criterion) {
    c.bench_function("legal_actions/fresh", |b| {
        let game = fresh();
        b.iter(|| black_box(game.legal_actions("PlayerA").len()))
    });
    c.bench_function("move_piece/single", |b| {
        b.iter_batched(
            fresh,
            |mut game| black_box(game.move_piece("PlayerA", (0, 0), (0, 1), 1)),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("playout/200", |b| {
        b.iter_batched(fresh, |game| black_box(playout(game, 200)), BatchSize::SmallInput)
    });
    c.bench_function("clone/mid_game", |b| {
        let game = playout(fresh(), 100);
        b.iter(|| black_box(game.clone()))
    });
}

criterion_group!(benches, bench_moves);
criterion_main!(benches);
