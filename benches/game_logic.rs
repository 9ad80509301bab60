use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, GameState, Piece};
use tui_blockfall::term::{GameView, Viewport};
use tui_blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.is_running() {
                state.start();
            }
            state.tick(black_box(16));
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
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_lines()
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    let piece = Piece::spawn(PieceKind::T).shifted(0, 19);

    c.bench_function("collides", |b| b.iter(|| board.collides(black_box(&piece))));
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.move_right();
            state.rotate();
            state.move_left();
        })
    });
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            state.start();
            while state.is_running() {
                state.hard_drop();
            }
            state.score()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut fb = view.render(&state.snapshot(), viewport);
    let mut snap = state.snapshot();

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_move_and_rotate,
    bench_hard_drop_game,
    bench_render
);
criterion_main!(benches);
