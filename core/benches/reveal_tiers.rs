use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for grid_size in [16, 64, 255] {
        // a single corner mine makes one reveal open the whole board
        let grid = Grid::from_mine_coords(grid_size, &[(0, 0)]).unwrap();
        let far_corner = (grid_size - 1, grid_size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(grid_size), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| RevealEngine::reveal(&mut grid, black_box(far_corner)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let config = GameConfig::new(30, 180).unwrap();
    c.bench_function("session/reveal_all_safe", |b| {
        b.iter_batched(
            || GameSession::new(config, 7).unwrap(),
            |mut session| {
                let safe: Vec<_> = session
                    .grid()
                    .cells()
                    .filter(|(_, cell)| !cell.is_bomb())
                    .map(|(coords, _)| coords)
                    .collect();
                for coords in safe {
                    session.reveal(coords);
                }
                session
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_cascade, bench_session);
criterion_main!(benches);
