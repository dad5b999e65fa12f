use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameEngine};
use blockfall::types::{Color, Command};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.restart();
            }
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(Color::Cyan));
                }
            }
            board.clear_completed_rows()
        })
    });
}

fn bench_restart(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("restart_and_spawn", |b| {
        b.iter(|| {
            game.restart();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            game.apply(black_box(Command::MoveLeft));
            game.apply(black_box(Command::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.apply(black_box(Command::Rotate));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_restart,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
