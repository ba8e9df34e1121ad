//! Benchmarks for line validation and list derivation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use domblock::aggregator::graylist;
use domblock::domain::{normalize, Domain};
use std::collections::HashSet;
use std::hint::black_box;

/// Generate raw list content with realistic noise mixed in
fn generate_content(count: usize) -> String {
    (0..count)
        .map(|i| match i % 10 {
            0 => "# comment line\n".to_string(),
            1 => "\n".to_string(),
            2 => format!("UPPER{}.EXAMPLE.COM\n", i),
            3 => "not a domain!\n".to_string(),
            _ => format!("host{}.example.com\n", i),
        })
        .collect()
}

/// Generate a set of distinct valid domains
fn generate_domains(count: usize, prefix: &str) -> HashSet<Domain> {
    (0..count)
        .map(|i| format!("{}{}.example.com", prefix, i).parse().unwrap())
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [100, 1000, 10000] {
        let content = generate_content(size);
        group.bench_with_input(
            BenchmarkId::new("mixed_lines", size),
            &content,
            |b, content| {
                b.iter(|| black_box(content.lines().filter_map(normalize).collect::<Vec<_>>()));
            },
        );
    }

    group.finish();
}

fn bench_graylist(c: &mut Criterion) {
    let mut group = c.benchmark_group("graylist");

    for size in [100, 1000, 10000] {
        let blacklist = generate_domains(size, "d");
        // Whitelist covers half the blacklist plus some entries of its own
        let mut whitelist: HashSet<Domain> = blacklist.iter().take(size / 2).cloned().collect();
        whitelist.extend(generate_domains(size / 10, "w"));

        group.bench_with_input(
            BenchmarkId::new("half_overlap", size),
            &(blacklist, whitelist),
            |b, (blacklist, whitelist)| {
                b.iter(|| black_box(graylist(blacklist, whitelist)));
            },
        );
    }

    group.finish();
}

fn bench_sort_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_output");

    for size in [100, 1000, 10000] {
        let domains = generate_domains(size, "d");
        group.bench_with_input(
            BenchmarkId::new("sorted_lines", size),
            &domains,
            |b, domains| {
                b.iter(|| {
                    let mut sorted: Vec<&Domain> = domains.iter().collect();
                    sorted.sort();
                    black_box(sorted)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_graylist, bench_sort_output);
criterion_main!(benches);
