// -------------------------------------------------------------------------
// SCPN GW Curvature -- Path Tracing Benchmark
// Compares the PREM radial kernel against the symbolic-field kernel at
// the default step counts, plus raw field-sampler throughput.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gw_core::field::SymbolicField;
use gw_core::prem::DensityProfile;
use gw_core::sampler::FieldSampler;
use gw_core::sky::{parse_utc, SiderealTransform, SkyPosition};
use gw_core::tracer::{trace_prem, trace_symbolic};
use gw_types::geo::GeoPoint;
use std::hint::black_box;

/// Self-contained density table so benchmarks do not depend on data files.
fn bench_profile() -> DensityProfile {
    DensityProfile::from_samples(vec![
        (0.0, 13088.0),
        (1221.5, 12166.0),
        (3480.0, 9903.0),
        (5701.0, 4380.0),
        (6151.0, 3380.0),
        (6371.0, 2600.0),
    ])
    .unwrap()
}

fn bench_trace(c: &mut Criterion) {
    let sky = SkyPosition {
        ra_deg: 197.45,
        dec_deg: -23.38,
    };
    let site = GeoPoint::new(43.63, 10.5, 0.051884);
    let when = parse_utc("2017-08-17T12:41:04").unwrap();

    let profile = bench_profile();
    let mut group = c.benchmark_group("trace_prem");
    for steps in [100usize, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                trace_prem(
                    black_box(&sky),
                    black_box(&site),
                    when,
                    steps,
                    &profile,
                    &SiderealTransform,
                )
                .unwrap()
            })
        });
    }
    group.finish();

    let field = SymbolicField::build();
    let sampler = FieldSampler::new(&field).unwrap();
    c.bench_function("trace_symbolic_200", |b| {
        b.iter(|| {
            trace_symbolic(
                black_box(&sky),
                black_box(&site),
                when,
                200,
                &sampler,
                &SiderealTransform,
            )
            .unwrap()
        })
    });

    c.bench_function("field_sample", |b| {
        b.iter(|| sampler.sample(black_box(43.63), black_box(10.5), black_box(730.0)))
    });
}

criterion_group!(benches, bench_trace);
criterion_main!(benches);
