use criterion::{Criterion, black_box, criterion_group, criterion_main};
use astro_base::{
    ALL_PLANETS, AspectSet, AstroInput, Planet, calculate, find_aspects, planet_longitude,
};

fn position_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("positions");
    group.bench_function("sun_longitude", |b| {
        b.iter(|| planet_longitude(black_box(Planet::Sun), black_box(1990), 5, 15))
    });
    group.bench_function("all_planets", |b| {
        b.iter(|| {
            ALL_PLANETS
                .map(|p| planet_longitude(p, black_box(1990), black_box(5), black_box(15)))
        })
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let input = AstroInput::new(1990, 5, 15).at(14, 0);
    let bodies: Vec<(Planet, f64)> = ALL_PLANETS
        .iter()
        .map(|p| (*p, planet_longitude(*p, 1990, 5, 15)))
        .collect();

    let mut group = c.benchmark_group("chart");
    group.bench_function("aspects_all", |b| {
        b.iter(|| find_aspects(black_box(&bodies), AspectSet::All))
    });
    group.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(&input), AspectSet::Major))
    });
    group.finish();
}

criterion_group!(benches, position_bench, chart_bench);
criterion_main!(benches);
