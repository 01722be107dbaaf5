use criterion::{black_box, criterion_group, criterion_main, Criterion};

use satpath::interval_propagator::{IntervalPropagator, PropagationParams};
use satpath::propagator::sgp4_propagator::Sgp4Satellite;
use satpath::time::{add_days, add_seconds};

const ISS_LINE1: &str = "1 25544U 98067A   19156.50900463  .00003075  00000-0  59442-4 0  9992";
const ISS_LINE2: &str = "2 25544  51.6433  59.2583 0008217  16.4489 347.6017 15.51174618173442";

/// One day of ISS positions at the default 100 s step (864 instants).
fn bench_propagate_one_day(c: &mut Criterion) {
    let iss = Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2).unwrap();
    let start = iss.epoch();
    let stop = add_days(&start, 1.0);
    let propagator = IntervalPropagator::new(&iss, PropagationParams::default());

    c.bench_function("propagate_interval/one_day_100s", |b| {
        b.iter(|| propagator.propagate_interval(black_box(&start), black_box(&stop)))
    });
}

/// Interpolated queries every second over one revolution.
fn bench_curve_queries(c: &mut Criterion) {
    let iss = Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2).unwrap();
    let start = iss.epoch();
    let stop = start + iss.orbital_period();
    let propagator = IntervalPropagator::new(&iss, PropagationParams::default());
    let curve = propagator
        .propagate_interval(&start, &stop)
        .to_interpolated_curve(8);

    c.bench_function("interpolated_curve/position_at_1s", |b| {
        b.iter(|| {
            for s in 0..5_500 {
                let _ = curve.position_at(black_box(&add_seconds(&start, s as f64)));
            }
        })
    });
}

criterion_group!(benches, bench_propagate_one_day, bench_curve_queries);
criterion_main!(benches);
