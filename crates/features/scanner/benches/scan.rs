use conwire_convention::ConventionSettings;
use conwire_domain::{Lifetime, TypeDescriptor};
use conwire_registry::ServiceCollection;
use conwire_scanner::{RegistryExt, Scanner};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn snapshot(count: usize) -> Vec<TypeDescriptor> {
    let mut types = Vec::with_capacity(count * 3);
    for i in 0..count {
        let ns = format!("App.Module{}", i % 16);
        let interface = format!("{ns}.IThing{i}Service");
        types.push(TypeDescriptor::interface(interface.as_str()));
        types.push(TypeDescriptor::class(format!("{ns}.Thing{i}Service")).implements(interface));
        types.push(TypeDescriptor::class(format!("Vendor.Noise{i}")));
    }
    types
}

// ============================================================================
// Benchmark: Resolution without registration
// ============================================================================

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let settings = ConventionSettings::for_root(Lifetime::Scoped, "App", ["Service"]).unwrap();

    for count in [16usize, 128, 512] {
        let types = snapshot(count);
        group.throughput(Throughput::Elements(u64::try_from(types.len()).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &types, |b, types| {
            b.iter(|| black_box(Scanner::new(&settings).plan(types).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Full scan into a fresh registry
// ============================================================================

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let settings = ConventionSettings::for_root(Lifetime::Singleton, "App", ["Service"]).unwrap();

    for count in [16usize, 128, 512] {
        let types = snapshot(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &types, |b, types| {
            b.iter(|| {
                let mut services = ServiceCollection::new();
                black_box(services.inject_by_convention(&settings, types).unwrap());
                services
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan, bench_scan);
criterion_main!(benches);
