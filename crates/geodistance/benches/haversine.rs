use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geodistance::{DistanceUnit, GeoPoint, compute_distance};

fn setup(pair_count: usize) -> Vec<(GeoPoint, GeoPoint)> {
    let mut rng = rand::rng();

    let mut pairs = Vec::with_capacity(pair_count);

    pairs.resize_with(pair_count, || {
        (GeoPoint::random_from(&mut rng), GeoPoint::random_from(&mut rng))
    });

    pairs
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const COUNT: usize = 5000;

    let pairs = black_box(setup(COUNT));

    for unit in [DistanceUnit::Kilometers, DistanceUnit::NauticalMiles] {
        let res_id = criterion::BenchmarkId::new("compute_distance", format!("{unit}-{COUNT}"));

        c.bench_with_input(res_id, &pairs, |b, pairs| {
            b.iter(|| {
                for (origin, destination) in black_box(pairs.iter()) {
                    let _ = black_box(compute_distance(*origin, *destination, unit));
                }
            });
        });
    }

    let res_id = criterion::BenchmarkId::new("compute_distance_token", format!("mi-{COUNT}"));

    c.bench_with_input(res_id, &pairs, |b, pairs| {
        b.iter(|| {
            for (origin, destination) in black_box(pairs.iter()) {
                let _ = black_box(compute_distance(*origin, *destination, black_box("mi")));
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
