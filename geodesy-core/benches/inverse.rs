use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geodesy_core::{GeoError, InverseEngine, InverseResult, Position};
use rand_chacha::ChaChaRng;
use rand_core::{Rng, SeedableRng as _};

#[derive(Clone, Copy)]
struct GeoCase {
    name: &'static str,
    p1: Position,
    p2: Position,
}

fn position(latitude: f64, longitude: f64) -> Position {
    Position::from_degrees(latitude, longitude).expect("benchmark coordinate must be valid")
}

fn benchmark_cases() -> [GeoCase; 5] {
    [
        GeoCase {
            name: "local_short",
            p1: position(37.7749, -122.4194),
            p2: position(37.7759, -122.4184),
        },
        GeoCase {
            name: "regional",
            p1: position(48.8566, 2.3522),
            p2: position(51.5074, -0.1278),
        },
        GeoCase {
            name: "long_haul_intercontinental",
            p1: position(40.7128, -74.006),
            p2: position(-33.8688, 151.2093),
        },
        GeoCase {
            name: "near_antipodal_stress",
            p1: position(10.0, 20.0),
            p2: position(-10.0001, -159.9999),
        },
        GeoCase {
            name: "exact_antipodal",
            p1: position(0.0, 0.0),
            p2: position(0.0, 180.0),
        },
    ]
}

fn format_result(result: &Result<InverseResult, GeoError>) -> String {
    match result {
        Ok(solution) => format!("{:.3}", solution.distance_meters),
        Err(error) => format!("err({error})"),
    }
}

/// Prints a distance snapshot for every case so that regressions in the
/// numbers themselves show up next to the timing regressions.
fn emit_comparison_report(cases: &[GeoCase]) {
    let primary = InverseEngine::new();
    let forced_fallback = InverseEngine::new().set_max_iterations(0);

    eprintln!("case,primary_m,fallback_m");
    for case in cases {
        eprintln!(
            "{},{},{}",
            case.name,
            format_result(&primary.inverse(case.p1, case.p2)),
            format_result(&forced_fallback.inverse(case.p1, case.p2)),
        );
    }
}

fn bench_cases(c: &mut Criterion, cases: &[GeoCase]) {
    let engine = InverseEngine::new();
    let mut group = c.benchmark_group("inverse::solve");

    for case in cases {
        let (p1, p2) = (case.p1, case.p2);
        group.bench_function(BenchmarkId::new("engine", case.name), |b| {
            b.iter(|| black_box(engine.inverse(black_box(p1), black_box(p2))))
        });
    }

    group.finish();
}

fn random_position<R: Rng>(rng: &mut R) -> Position {
    let unit = |value: u64| value as f64 / u64::MAX as f64;
    let latitude = unit(rng.next_u64()) * 180.0 - 90.0;
    let longitude = unit(rng.next_u64()) * 360.0 - 180.0;
    Position::from_degrees(latitude, longitude).expect("generated coordinate must be valid")
}

fn bench_batch(c: &mut Criterion) {
    let engine = InverseEngine::new();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let pairs: Vec<(Position, Position)> = (0..512)
        .map(|_| (random_position(&mut rng), random_position(&mut rng)))
        .collect();

    c.bench_function("inverse::batch_512", |b| {
        b.iter(|| {
            let mut rejected = 0usize;
            for (p1, p2) in &pairs {
                match engine.inverse(*p1, *p2) {
                    Ok(solution) => {
                        black_box(solution);
                    }
                    Err(_) => rejected += 1,
                }
            }
            black_box(rejected)
        })
    });
}

fn inverse(c: &mut Criterion) {
    let cases = benchmark_cases();
    emit_comparison_report(&cases);
    bench_cases(c, &cases);
    bench_batch(c);
}

criterion_group!(benches, inverse);
criterion_main!(benches);
