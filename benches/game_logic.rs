use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{winning_combos, GameEngine};
use tui_tictactoe::types::{Move, MAX_BOARD_SIZE};

fn bench_combo_generation(c: &mut Criterion) {
    c.bench_function("winning_combos_max_size", |b| {
        b.iter(|| winning_combos(black_box(MAX_BOARD_SIZE)))
    });
}

fn bench_process_move(c: &mut Criterion) {
    c.bench_function("process_move_max_size", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(MAX_BOARD_SIZE).unwrap();
            // Fill a checkerboard-ish pattern so no line completes early.
            for row in 0..MAX_BOARD_SIZE {
                for col in 0..MAX_BOARD_SIZE {
                    let label = if (row / 2 + col) % 2 == 0 { "X" } else { "O" };
                    let mv = Move::new(row, col, label);
                    if engine.is_valid_move(&mv) {
                        engine.process_move(mv).unwrap();
                    }
                }
            }
            black_box(engine.is_tied())
        })
    });
}

fn bench_full_game_3x3(c: &mut Criterion) {
    c.bench_function("full_game_3x3", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(3).unwrap();
            for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
                let mv = Move::new(row, col, engine.current_player().label.clone());
                engine.process_move(mv).unwrap();
                if !engine.has_winner() && !engine.is_tied() {
                    engine.toggle_player();
                }
            }
            black_box(engine.is_tied())
        })
    });
}

criterion_group!(
    benches,
    bench_combo_generation,
    bench_process_move,
    bench_full_game_3x3
);
criterion_main!(benches);
