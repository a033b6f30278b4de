/// Performance benchmarks for config resolution
///
/// Resolution runs on every language-server start, so it should stay well
/// under a millisecond.
///
/// Run with: cargo bench --bench resolve
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relay_apollo_config::config::{resolve, RawUserConfig, RuleSet};
use std::time::Duration;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(100);

    group.bench_function("defaults", |b| {
        b.iter(|| {
            let resolved = resolve(black_box(None)).unwrap();
            black_box(resolved);
        });
    });

    group.bench_function("full_user_config", |b| {
        let raw = RawUserConfig::default()
            .with_schema("path/to/schema.graphql")
            .with_src("path/to/src-root")
            .with_include(["lib/**", "shared/**/*.js"])
            .with_exclude(["**/__generated__/**", "**/legacy/**"])
            .with_language("typescript");

        b.iter(|| {
            let resolved = resolve(black_box(Some(&raw))).unwrap();
            black_box(resolved);
        });
    });

    group.finish();
}

fn bench_rule_policy(c: &mut Criterion) {
    c.bench_function("rule_set_for_relay", |b| {
        b.iter(|| black_box(RuleSet::for_relay()));
    });
}

criterion_group!(benches, bench_resolve, bench_rule_policy);
criterion_main!(benches);
