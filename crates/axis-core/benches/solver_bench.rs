use axis_core::config::{DEFAULT_LINEAR_CANDIDATES, DEFAULT_LOG_CANDIDATES};
use axis_core::{linear, logarithmic, AxisRange};
use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};

fn gen_ranges(n: usize) -> Vec<AxisRange> {
    (0..n)
        .map(|i| {
            let lo = (i as f64 * 0.37).sin() * 10f64.powi((i % 9) as i32 - 4);
            let span = 1.0 + (i as f64 * 0.11).cos().abs() * 10f64.powi((i % 7) as i32 - 3);
            AxisRange::new(lo, lo + span)
        })
        .collect()
}

fn bench_linear(c: &mut Criterion) {
    let ranges = gen_ranges(1_000);
    let mut group = c.benchmark_group("linear");
    for &n in &[2usize, 5, 10] {
        group.bench_with_input(BenchmarkId::new("approx", n), &n, |b, &n| {
            b.iter(|| {
                for r in &ranges {
                    let _ = black_box(linear::solve(*r, n));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
            b.iter(|| {
                for r in &ranges {
                    let _ = black_box(linear::solve_exact(*r, n.max(2), &DEFAULT_LINEAR_CANDIDATES));
                }
            });
        });
    }
    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let ranges: Vec<AxisRange> = gen_ranges(1_000)
        .into_iter()
        .map(|r| AxisRange::new(r.span(), r.span() * 1e3))
        .collect();
    c.bench_function("log_exact_n4", |b| {
        b.iter(|| {
            for r in &ranges {
                let _ = black_box(logarithmic::solve_log(*r, 4, &DEFAULT_LOG_CANDIDATES));
            }
        });
    });
}

criterion_group!(benches, bench_linear, bench_log);
criterion_main!(benches);
