use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use exo_rust::algorithms::{aggregate_by_host, to_cartesian};
use exo_rust::core::domain::PlanetRecord;
use exo_rust::services::blurb::generate_blurb;
use exo_rust::services::starmap::{build_starmap, StarmapConfig};

fn synthetic_catalog(hosts: usize, planets_per_host: usize) -> Vec<PlanetRecord> {
    let mut planets = Vec::with_capacity(hosts * planets_per_host);
    for h in 0..hosts {
        let host = format!("HOST-{}", h);
        let ra = (h as f64 * 7.3) % 360.0;
        let dec = ((h as f64 * 3.1) % 180.0) - 90.0;
        let dist = 1.0 + (h as f64 * 0.37) % 500.0;
        for p in 0..planets_per_host {
            let letter = (b'b' + (p % 24) as u8) as char;
            planets.push(
                PlanetRecord::new(&host, format!("{} {}", host, letter))
                    .with_position(ra, dec, dist)
                    .with_spectral_type(["G2 V", "K1 V", "M4.5 V", "F8"][h % 4])
                    .with_discovery_year(1995 + (p as i32 % 30)),
            );
        }
    }
    planets
}

fn bench_coordinates(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinates");

    group.bench_function("to_cartesian", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let ra = i as f64 * 0.36;
                black_box(to_cartesian(Some(black_box(ra)), Some(12.5), Some(40.0)));
            }
        });
    });

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for hosts in [100, 1_000, 5_000] {
        let planets = synthetic_catalog(hosts, 3);
        group.bench_with_input(BenchmarkId::new("aggregate_by_host", hosts), &planets, |b, input| {
            b.iter(|| black_box(aggregate_by_host(input.iter())));
        });
    }

    group.finish();
}

fn bench_starmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("starmap");
    let config = StarmapConfig::default();

    for hosts in [100, 1_000, 5_000] {
        let planets = synthetic_catalog(hosts, 3);
        group.bench_with_input(BenchmarkId::new("build_starmap", hosts), &planets, |b, input| {
            b.iter(|| black_box(build_starmap(input, &config)));
        });
    }

    let data = build_starmap(&synthetic_catalog(1, 5), &config);
    group.bench_function("generate_blurb", |b| {
        b.iter(|| black_box(generate_blurb(black_box(&data.hosts[0]))));
    });

    group.finish();
}

criterion_group!(benches, bench_coordinates, bench_aggregation, bench_starmap);
criterion_main!(benches);
