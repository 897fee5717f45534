use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    cells::Cell,
    generators,
    grid_dimensions::GridDimensions,
    pathing,
    random,
    units::{ColumnsCount, RowsCount},
};

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(32), ColumnsCount(32)).unwrap();
    let mut rng = random::seeded_rng(32);

    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(dimensions, Cell::new(0, 0), &mut rng).unwrap())
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(256), ColumnsCount(256)).unwrap();
    let mut rng = random::seeded_rng(256);

    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| generators::recursive_backtracker(dimensions, Cell::new(128, 128), &mut rng).unwrap())
    });
}

fn bench_longest_path_32(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(32), ColumnsCount(32)).unwrap();
    let maze = generators::recursive_backtracker(dimensions, Cell::new(0, 0), &mut random::seeded_rng(1))
        .unwrap();

    c.bench_function("longest_path_32", move |b| b.iter(|| pathing::longest_path(&maze)));
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256,
    bench_longest_path_32
);
criterion_main!(benches);
