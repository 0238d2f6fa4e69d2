use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;
use std::time::Duration;

use coincid_overlaprs::{bin2_overlap, count_overlap};

fn generate_train(n: usize, rate: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut t = 0.0;
    (0..n)
        .map(|_| {
            // exponential inter-spike intervals
            t += -(1.0 - rng.random::<f64>()).ln() / rate;
            t
        })
        .collect()
}

fn benchmark_coincidence(c: &mut Criterion) {
    let mut group = c.benchmark_group("coincidence");
    group.measurement_time(Duration::from_secs(10));

    let test_cases = vec![
        (1_000, 0.01),
        (10_000, 0.01),
        (100_000, 0.01),
        (100_000, 0.1),
    ];

    for (n, dt) in test_cases {
        let a = generate_train(n, 20.0, 42);
        let b = generate_train(n, 20.0, 7);

        group.bench_with_input(
            BenchmarkId::new("count_overlap", format!("n={}_dt={}", n, dt)),
            &(&a, &b, dt),
            |bench, (a, b, dt)| {
                bench.iter(|| count_overlap(black_box(a.as_slice()), black_box(b.as_slice()), *dt));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("bin2_overlap", format!("n={}_dt={}", n, dt)),
            &(&a, &b, dt),
            |bench, (a, b, dt)| {
                bench.iter(|| bin2_overlap(black_box(a.as_slice()), black_box(b.as_slice()), *dt, 100));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_coincidence);
criterion_main!(benches);
