use criterion::{Criterion, criterion_group, criterion_main};
use minefield_core::{BoardGenerator, GameConfig, RandomBoardGenerator};
use std::hint::black_box;

fn generate_tiers(c: &mut Criterion) {
    let tiers = [("classic", 10, 10), ("medium", 16, 40), ("dense", 16, 200)];

    let mut group = c.benchmark_group("generate");
    for (name, size, mines) in tiers {
        let config = GameConfig::new(size, mines).expect("valid bench config");
        group.bench_function(name, |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomBoardGenerator::new(seed).generate(black_box(config)))
            })
        });
    }
    group.finish();
}

fn flood_reveal(c: &mut Criterion) {
    let board = minefield_core::Board::from_mine_coords(64, &[(0, 0)]).expect("valid bench board");

    c.bench_function("reveal/flood_64", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(board.reveal(black_box((63, 63))))
        })
    });
}

criterion_group!(benches, generate_tiers, flood_reveal);
criterion_main!(benches);
