use criterion::{criterion_group, criterion_main, Criterion};
use life_canvas::{next_generation, Grid};

fn bench_next_generation(c: &mut Criterion) {
    // a 1280x800 window with the default 5px cells
    let grid = Grid::random(160, 256, Some(42)).unwrap();
    c.bench_function("next_generation 160x256", |b| {
        b.iter(|| next_generation(&grid))
    });
}

fn bench_long_run(c: &mut Criterion) {
    let start = Grid::random(64, 64, Some(42)).unwrap();
    c.bench_function("100 generations 64x64", |b| {
        b.iter(|| (0..100).fold(start.clone(), |grid, _| next_generation(&grid)))
    });
}

criterion_group!(benches, bench_next_generation, bench_long_run);
criterion_main!(benches);
