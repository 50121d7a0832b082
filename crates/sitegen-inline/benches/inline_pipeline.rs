//! Benchmarks for the inline pipeline.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sitegen_inline::text_to_inline_units;

/// Generate one paragraph with `sentences` formatted sentences.
fn generate_paragraph(sentences: usize) -> String {
    let mut text = String::with_capacity(sentences * 120);
    for i in 0..sentences {
        text.push_str(&format!(
            "Sentence {i} has **bold**, *italic* and `code`, an ![image {i}](img/{i}.png) and a [link {i}](page-{i}.html). "
        ));
    }
    text
}

fn bench_plain_text(c: &mut Criterion) {
    let text = "Plain text without any inline markup at all. ".repeat(20);

    c.bench_function("inline_plain_text", |b| {
        b.iter(|| text_to_inline_units(&text));
    });
}

fn bench_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline_by_size");

    for sentences in [1, 10, 100] {
        let text = generate_paragraph(sentences);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sentences", sentences),
            &text,
            |b, text| b.iter(|| text_to_inline_units(text)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_plain_text, bench_varying_sizes);
criterion_main!(benches);
