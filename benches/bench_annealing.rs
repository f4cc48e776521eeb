use std::time::Duration;

use annealing::{
    models::{Quadratic, Timetable, TimetableShape},
    rng::RandomNumberGenerator,
    search::{metropolis_probability, Annealer, AnnealingConfig},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic");
    for trials in [10, 100, 1000].iter() {
        let config =
            AnnealingConfig::new(1e3, 1e-3, 0.1, *trials, Duration::from_secs(60)).unwrap();
        let annealer = Annealer::new(config);
        let mut rng = RandomNumberGenerator::from_seed(42);

        group.bench_function(&format!("quadratic_{}_trials", trials), |b| {
            b.iter(|| {
                let mut model = Quadratic::new(-2.0, 3.0, 2.0, -1.0);
                let result = annealer.run(black_box(&mut model), black_box(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_timetable(c: &mut Criterion) {
    let config = AnnealingConfig::new(1e3, 1e-3, 0.1, 100, Duration::from_secs(60)).unwrap();
    let annealer = Annealer::new(config);
    let mut rng = RandomNumberGenerator::from_seed(42);
    let shape = TimetableShape::new(3, 5, 3, 5);

    c.bench_function("timetable_standard", |b| {
        b.iter(|| {
            let mut model = Timetable::random_valid(shape, 0.1, &mut rng);
            let result = annealer.run(black_box(&mut model), black_box(&mut rng));
            assert!(result.is_ok());
        })
    });
}

fn bench_metropolis(c: &mut Criterion) {
    c.bench_function("metropolis_probability", |b| {
        b.iter(|| metropolis_probability(black_box(1.5), black_box(250.0)))
    });
}

criterion_group!(benches, bench_quadratic, bench_timetable, bench_metropolis);
criterion_main!(benches);
