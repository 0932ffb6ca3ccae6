//! Benchmarks for model output normalization
//!
//! This benchmark measures:
//! - Decode + defaulting for scenes of growing layer counts
//! - The fallback path for unparseable output

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use chat2vis_ai::scene::Normalizer;

const KINDS: [&str; 5] = ["rect", "circle", "text", "line", "arrow"];

fn model_output(layers: usize) -> String {
    let layers: Vec<_> = (0..layers)
        .map(|i| {
            json!({
                "id": format!("layer{}", i),
                "type": KINDS[i % KINDS.len()],
                "props": {"x": i * 10},
                "animations": [
                    {"property": "opacity", "from": 0, "to": 1, "start": i * 100, "end": i * 100 + 800}
                ]
            })
        })
        .collect();
    json!({
        "text": "Benchmark answer",
        "visualization": {"id": "bench", "layers": layers}
    })
    .to_string()
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("normalize");

    for layers in [1usize, 10, 100] {
        let raw = model_output(layers);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(layers), &raw, |b, raw| {
            b.iter(|| normalizer.normalize(black_box(raw)))
        });
    }

    group.bench_function("fallback", |b| {
        b.iter(|| normalizer.normalize_or_fallback(black_box("{\"text\": \"trunc"), "gravity"))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
