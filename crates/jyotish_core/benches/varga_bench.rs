use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_core::{
    ALL_GRAHAS, ALL_VARGAS, AyanamshaSystem, DashaTree, Varga, ayanamsha_deg, build_houses,
    expand_children, mahadashas, varga_sign,
};
use jyotish_core::graha::Graha;

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(jd)))
    });
    group.finish();
}

fn varga_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("varga");
    group.bench_function("d9_sign", |b| {
        b.iter(|| varga_sign(black_box(lon), Varga::D9))
    });
    group.bench_function("all_schemes", |b| {
        b.iter(|| {
            for &v in &ALL_VARGAS {
                let _ = varga_sign(black_box(lon), v);
            }
        })
    });
    group.finish();
}

fn houses_bench(c: &mut Criterion) {
    let bodies: Vec<(Graha, f64)> = ALL_GRAHAS
        .iter()
        .enumerate()
        .map(|(i, &g)| (g, i as f64 * 37.5))
        .collect();

    let mut group = c.benchmark_group("houses");
    group.bench_function("build_d1_nine_bodies", |b| {
        b.iter(|| build_houses(Varga::D1, black_box(&bodies), black_box(12.0)))
    });
    group.bench_function("build_d9_nine_bodies", |b| {
        b.iter(|| build_houses(Varga::D9, black_box(&bodies), black_box(12.0)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_448_711.767;
    let moon_lon = 123.456;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("mahadashas", |b| {
        b.iter(|| mahadashas(black_box(birth_jd), black_box(moon_lon), 360.0))
    });
    group.bench_function("expand_children", |b| {
        b.iter(|| expand_children(Graha::Chandra, black_box(10.0), black_box(birth_jd), 360.0, 1))
    });
    let tree = DashaTree::new(birth_jd, moon_lon, 360.0).unwrap();
    group.bench_function("node_at_depth_4", |b| {
        b.iter(|| tree.node_at(black_box(&[3, 5, 1, 7, 2])))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, varga_bench, houses_bench, dasha_bench);
criterion_main!(benches);
