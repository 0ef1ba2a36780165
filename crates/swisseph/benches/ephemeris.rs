use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swisseph::{calendar, flag, planet, Ephemeris, EphemerisConfig};

const J2000: f64 = 2451545.0;

fn ephe_path() -> Option<PathBuf> {
    match std::env::var_os("SE_EPHE_PATH") {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            eprintln!("Skipping file-backed benchmarks: SE_EPHE_PATH not set");
            None
        }
    }
}

fn time_bench(c: &mut Criterion) {
    let _eph = Ephemeris::with_defaults();
    c.bench_function("julday", |b| {
        b.iter(|| swisseph::julday(black_box(2000), 1, 1, black_box(12.0), calendar::GREGORIAN))
    });
}

fn moshier_bench(c: &mut Criterion) {
    let _eph = Ephemeris::with_defaults();

    let mut group = c.benchmark_group("moshier");
    group.bench_function("calc_ut", |b| {
        b.iter(|| {
            swisseph::calc_ut(black_box(J2000), planet::SUN, flag::MOSEPH | flag::SPEED)
                .expect("calc_ut should succeed")
        })
    });
    group.bench_function("houses", |b| {
        b.iter(|| {
            swisseph::houses(black_box(J2000), 51.5074, -0.1278, b'P')
                .expect("houses should succeed")
        })
    });
    group.finish();
}

fn swiss_ephemeris_bench(c: &mut Criterion) {
    let path = match ephe_path() {
        Some(v) => v,
        None => return,
    };
    let _eph = Ephemeris::open(EphemerisConfig {
        ephe_path: Some(path),
        ..EphemerisConfig::default()
    })
    .expect("should open ephemeris session");

    let mut group = c.benchmark_group("swiss_ephemeris");
    group.bench_function("calc_ut", |b| {
        b.iter(|| {
            swisseph::calc_ut(black_box(J2000), planet::SUN, flag::SWIEPH | flag::SPEED)
                .expect("calc_ut should succeed")
        })
    });
    group.bench_function("all_planets", |b| {
        b.iter(|| {
            for ipl in planet::SUN..=planet::PLUTO {
                swisseph::calc_ut(black_box(J2000), ipl, flag::SWIEPH | flag::SPEED)
                    .expect("calc_ut should succeed");
            }
        })
    });
    group.finish();
}

criterion_group!(benches, time_bench, moshier_bench, swiss_ephemeris_bench);
criterion_main!(benches);
