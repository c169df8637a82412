use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use notesheet_engine::{
    Cmd, LineIdentity, NoteDocument, PageCapacity, apply_line_edit, classify, paginate,
};
mod common;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = common::generate_note(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| std::hint::black_box(classify(std::hint::black_box(content))));
        });
    }

    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");
    group.sample_size(10);

    let note = classify(&common::generate_note(100));
    group.bench_function("mixed_note", |b| {
        b.iter(|| std::hint::black_box(paginate(&note, PageCapacity::default())));
    });

    let paragraph = classify(&common::generate_long_paragraph(20_000));
    group.bench_function("long_paragraph", |b| {
        b.iter(|| std::hint::black_box(paginate(&paragraph, PageCapacity::default())));
    });

    group.finish();
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    group.sample_size(10);

    let content = common::generate_note(100);
    let pages = paginate(&classify(&content), PageCapacity::default());
    group.bench_function("apply_line_edit", |b| {
        b.iter(|| {
            std::hint::black_box(apply_line_edit(
                &content,
                &pages,
                LineIdentity::new(1, 0, 0),
                "Edited",
            ))
        });
    });

    group.bench_function("document_apply", |b| {
        b.iter_batched(
            || NoteDocument::from_text(&content),
            |mut doc| {
                doc.apply(Cmd::InsertText {
                    at: 0,
                    text: "x".to_string(),
                });
                doc
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_paginate, bench_edit);
criterion_main!(benches);
