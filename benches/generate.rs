use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geofoils_rs::airfoil::generate::generate;
use geofoils_rs::{Airfoil, GeoDocument, MeshProfile};

fn generate_and_write(code: &str, n: usize, profile: &MeshProfile) -> String {
    let points = generate(code, n, 1.0).unwrap();
    let airfoil = Airfoil::from_points(points).unwrap();
    GeoDocument::new(&airfoil, profile, "bench").to_string()
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("NACA 2412 generation", |b| {
        b.iter(|| generate(black_box("2412"), black_box(400), 1.0))
    });

    let plain = MeshProfile::plain();
    let viscous = MeshProfile::viscous();
    c.bench_function("Plain farfield document", |b| {
        b.iter(|| generate_and_write(black_box("2412"), black_box(400), &plain))
    });
    c.bench_function("Viscous domain document", |b| {
        b.iter(|| generate_and_write(black_box("2412"), black_box(400), &viscous))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
