use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motor_damas::{perft, GameType, MoveGenerator, Position};

const KING_CAPTURE: &str = "......xx.....x...x...O....x.......................W";

fn bench_generate(c: &mut Criterion) {
    let generator = MoveGenerator::default();
    let start = Position::initial(GameType::INTERNATIONAL);
    let kings: Position = KING_CAPTURE.parse().expect("valid position");

    c.bench_function("generate_start", |b| b.iter(|| generator.generate(black_box(&start))));
    c.bench_function("generate_king_capture", |b| {
        b.iter(|| generator.generate(black_box(&kings)))
    });
}

fn bench_perft(c: &mut Criterion) {
    let generator = MoveGenerator::default();
    let start = Position::initial(GameType::INTERNATIONAL);

    let mut group = c.benchmark_group("perft");
    group.sample_size(10);
    for depth in [3u8, 4] {
        group.bench_function(format!("depth_{}", depth), |b| {
            b.iter(|| perft(black_box(&start), &generator, depth))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_perft);
criterion_main!(benches);
