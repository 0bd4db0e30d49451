//! Benchmarks for rapid_summarizer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rapid_summarizer::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.

Natural language processing (NLP) is a subfield of linguistics, computer science,
and artificial intelligence concerned with the interactions between computers and
human language. NLP techniques are used to analyze, understand, and generate human
language in a valuable way. Key applications include sentiment analysis, machine
translation, and text summarization.
"#;

fn benchmark_segmentation(c: &mut Criterion) {
    let segmenter = Segmenter::new();

    c.bench_function("segment_sample", |b| {
        b.iter(|| segmenter.segment(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("segment_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_weighting(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    let sentences: Vec<String> = Segmenter::new()
        .segment(&SAMPLE_TEXT.repeat(5))
        .sentences
        .iter()
        .map(|s| tokenizer.normalize(&s.text))
        .collect();
    let counter = StopwordTermCounter::default();

    c.bench_function("count_terms", |b| {
        b.iter(|| counter.count(black_box(&sentences)))
    });

    let matrix = counter.count(&sentences);
    let mut group = c.benchmark_group("idf_variants");
    group.bench_function("smoothed", |b| {
        b.iter(|| SmoothedTfIdf.weigh(black_box(&matrix)))
    });
    group.bench_function("unsmoothed", |b| {
        b.iter(|| UnsmoothedTfIdf.weigh(black_box(&matrix)))
    });
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let summarizer = Summarizer::new();
    let mut group = c.benchmark_group("summarize_by_size");

    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("paragraph", size), &text, |b, text| {
            let plan = SummaryPlan::paragraph(SummaryLength::Medium);
            b.iter(|| {
                summarizer.summarize_with_noise(black_box(text), &plan, &mut ZeroNoise)
            })
        });

        group.bench_with_input(BenchmarkId::new("keypoints", size), &text, |b, text| {
            let plan = SummaryPlan::keypoints(SummaryLength::Short);
            b.iter(|| summarizer.summarize(black_box(text), &plan))
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let summary = Summarizer::new()
        .summarize_with_noise(
            &SAMPLE_TEXT.repeat(5),
            &SummaryPlan::keypoints(SummaryLength::Long),
            &mut ZeroNoise,
        )
        .expect("sample text summarizes");

    let mut group = c.benchmark_group("render");
    group.bench_function("plain", |b| b.iter(|| render_plain(black_box(&summary))));
    group.bench_function("html", |b| b.iter(|| render_html(black_box(&summary))));
    group.finish();
}

fn benchmark_batch_json(c: &mut Criterion) {
    let request = serde_json::json!({ "text": SAMPLE_TEXT, "ratio": "short" });
    let batch = serde_json::Value::Array(vec![request; 32]).to_string();

    c.bench_function("summarize_batch_json_32", |b| {
        b.iter(|| summarize_batch_json(black_box(&batch)))
    });
}

fn benchmark_stopwords(c: &mut Criterion) {
    let filter = StopwordFilter::new("en");

    let words: Vec<&str> = vec![
        "the",
        "and",
        "is",
        "a",
        "machine",
        "learning",
        "artificial",
        "intelligence",
        "deep",
        "neural",
        "network",
        "data",
        "algorithm",
        "computer",
        "science",
    ];

    c.bench_function("stopword_check", |b| {
        b.iter(|| {
            for word in &words {
                black_box(filter.is_stopword(word));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_segmentation,
    benchmark_weighting,
    benchmark_full_pipeline,
    benchmark_render,
    benchmark_batch_json,
    benchmark_stopwords,
);
criterion_main!(benches);
