use criterion::{criterion_group, criterion_main, Criterion};
use langmap_core::{CountryDirectory, CountrySearch};
use std::hint::black_box;

fn bench_build(c: &mut Criterion) {
    c.bench_function("build bundled directory", |b| {
        b.iter(|| black_box(CountryDirectory::build()))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let dir = CountryDirectory::build();

    c.bench_function("find_by_name hit (late entry)", |b| {
        b.iter(|| dir.find_by_name(black_box("zimbabwe")))
    });
    c.bench_function("find_by_name miss", |b| {
        b.iter(|| dir.find_by_name(black_box("Qxyzzy-not-a-country")))
    });
    c.bench_function("find_by_code iso3", |b| {
        b.iter(|| dir.find_by_code(black_box("PAK")))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("countries.dir.bin");
    CountryDirectory::build().save_as(&path).expect("save snapshot");

    c.bench_function("load_snapshot", |b| {
        b.iter(|| CountryDirectory::load_snapshot(black_box(&path)).expect("load snapshot"))
    });
}

criterion_group!(benches, bench_build, bench_lookup, bench_snapshot);
criterion_main!(benches);
