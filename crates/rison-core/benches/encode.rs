use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rison_core::{encode, encode_uri, url_encode};
use serde_json::{json, Value};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Fixtures: small, medium, large values
// ---------------------------------------------------------------------------

fn make_small() -> Value {
    json!({"q": "hello world", "page": 2})
}

fn make_medium() -> Value {
    json!({
        "filter": {
            "status": "open",
            "labels": ["bug", "help wanted", "good first issue"],
            "assignee": null,
            "milestone": "v1.2"
        },
        "sort": {"field": "created_at", "direction": "desc"},
        "page": 3,
        "per_page": 50,
        "include_archived": false
    })
}

fn make_large() -> Value {
    let items: Vec<Value> = (0..100)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("item {i}"),
                "active": i % 2 == 0,
                "score": i as f64 / 10.0,
            })
        })
        .collect();
    json!({"version": "query-v1", "items": items, "total": 100})
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, value) in [
        ("small", make_small()),
        ("medium", make_medium()),
        ("large", make_large()),
    ] {
        group.bench_with_input(BenchmarkId::new("rison", name), &value, |b, v| {
            b.iter(|| encode(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("rison_uri", name), &value, |b, v| {
            b.iter(|| encode_uri(black_box(v)))
        });
    }
    group.finish();
}

fn bench_url_encode(c: &mut Criterion) {
    let text = encode(&make_large());
    c.bench_function("url_encode/large", |b| b.iter(|| url_encode(black_box(&text))));
}

criterion_group!(benches, bench_encode, bench_url_encode);
criterion_main!(benches);
