//! Criterion benchmarks for CPE parsing, rendering, and matching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cpe_uri::{find_first_match, CpeName};

/// Benchmark: `CpeName::parse` with varying URI shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("empty", "cpe:/"),
        ("typical", "cpe:/a:apache:http_server:2.4.52"),
        ("full", "cpe:/o:redhat:enterprise_linux:5:server:ga:en-us"),
        ("encoded", "cpe:/a:acme:wid%20get%2Fpro:1.0"),
    ];

    for (name, uri) in test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| CpeName::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: rendering a parsed name back to URI text
fn bench_to_uri(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_uri");

    let test_cases = [
        ("typical", "cpe:/a:apache:http_server:2.4.52"),
        ("sparse", "cpe:/a:acme::1.0"),
        ("full", "cpe:/o:redhat:enterprise_linux:5:server:ga:en-us"),
    ];

    for (name, uri_str) in test_cases {
        let parsed = CpeName::parse(uri_str).expect("valid test URI");
        group.bench_with_input(BenchmarkId::new("name", name), &parsed, |b, parsed| {
            b.iter(|| black_box(parsed).to_uri());
        });
    }

    group.finish();
}

/// Benchmark: candidate-vs-pattern matching outcomes
fn bench_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches");

    let cases = [
        (
            "hit",
            "cpe:/a:apache:http_server:2.4.52",
            "cpe:/a:apache:http_server:2.4.52",
        ),
        (
            "wildcard",
            "cpe:/a:apache::2.4.52",
            "cpe:/a:apache:http_server:2.4.52",
        ),
        (
            "miss",
            "cpe:/a:apache:http_server:2.4.52",
            "cpe:/a:nginx:nginx:1.25.0",
        ),
    ];

    for (name, candidate, pattern) in cases {
        let candidate = CpeName::parse(candidate).expect("valid candidate");
        let pattern = CpeName::parse(pattern).expect("valid pattern");
        group.bench_with_input(
            BenchmarkId::new("pair", name),
            &(candidate, pattern),
            |b, (candidate, pattern)| {
                b.iter(|| black_box(candidate).matches(black_box(pattern)));
            },
        );
    }

    group.finish();
}

/// Benchmark: scanning a target list, match on the last entry
fn bench_find_first_match(c: &mut Criterion) {
    let targets = [
        "cpe:/o:debian:linux:3.1",
        "cpe:/o:redhat:enterprise_linux:5",
        "cpe:/h:cisco:router_2500",
        "cpe:/a:nginx:nginx:1.25.0",
        "cpe:/a:apache:tomcat:9.0.1",
        "cpe:/a:apache:http_server:2.4.52",
    ];

    c.bench_function("find_first_match", |b| {
        b.iter(|| find_first_match(black_box("cpe:/a:apache:http_server:2.4.52"), &targets));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_to_uri,
    bench_matches,
    bench_find_first_match,
);
criterion_main!(benches);
