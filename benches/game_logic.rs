use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tektris::core::{Block, BlockId, EngineConfig, Grid, Tektris};
use tektris::session::Session;
use tektris::types::{BlockColor, GameAction};

fn started(seed: u32) -> Tektris {
    let mut game = Tektris::new(EngineConfig::default(), seed);
    game.begin_game();
    game.new_shape();
    game.drain_events();
    game
}

fn bench_fall(c: &mut Criterion) {
    c.bench_function("let_shape_fall", |b| {
        b.iter_batched(
            || started(12345),
            |mut game| {
                game.let_shape_fall();
                black_box(game.drain_events())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_drop_and_settle(c: &mut Criterion) {
    c.bench_function("drop_and_settle", |b| {
        b.iter_batched(
            || started(12345),
            |mut game| {
                game.drop_shape();
                game.let_shape_fall();
                black_box(game.grid().count())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut game = started(12345);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            game.move_shape_left();
            game.move_shape_right();
            game.rotate_shape();
            game.drain_events();
        })
    });
}

fn bench_full_row_scan(c: &mut Criterion) {
    let mut grid: Grid<Block> = Grid::new(10, 20);
    for row in 16..20 {
        for column in 0..10 {
            let block = Block::new(BlockId(0), column, row, BlockColor::Blue);
            grid.set(column, row, Some(block));
        }
    }

    c.bench_function("full_row_scan", |b| {
        b.iter(|| (0..20).filter(|&row| black_box(&grid).is_row_full(row)).count())
    });
}

fn bench_session_play(c: &mut Criterion) {
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::Drop,
    ];

    c.bench_function("session_200_commands", |b| {
        b.iter(|| {
            let mut session = Session::new(EngineConfig::default(), 777);
            for (i, action) in actions.iter().cycle().take(200).enumerate() {
                session.apply(*action);
                if i % 5 == 4 {
                    session.tick();
                }
                if session.is_game_over() {
                    session.restart();
                }
            }
            black_box(session.total_lines())
        })
    });
}

criterion_group!(
    benches,
    bench_fall,
    bench_drop_and_settle,
    bench_move_and_rotate,
    bench_full_row_scan,
    bench_session_play
);
criterion_main!(benches);
