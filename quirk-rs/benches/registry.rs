use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quirk_rs::registry::{CustomGateSet, GateRegistry};
use quirk_rs::toolbox::Toolbox;

fn benchmark_standard_registry(c: &mut Criterion) {
    c.bench_function("build standard registry", |b| {
        b.iter(|| GateRegistry::standard().expect("built-in gates should be valid"))
    });
}

fn benchmark_lookup(c: &mut Criterion) {
    let registry = GateRegistry::shared();
    let custom = CustomGateSet::new();
    let ids: Vec<_> = registry.ids().collect();
    c.bench_function("find every gate by id", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(registry.find_gate_by_id(id, &custom));
            }
        })
    });
    c.bench_function("compose toolbox", |b| {
        b.iter(|| Toolbox::top_groups(black_box(registry)).expect("toolbox gates should exist"))
    });
}

criterion_group!(benches, benchmark_standard_registry, benchmark_lookup);
criterion_main!(benches);
