//! Benchmarks for section index rebuilds and lookups
//!
//! Every store mutation rebuilds the whole index, so build time bounds the
//! cost of a create or update.

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use simplepedia::{Article, SectionIndex};

/// Generate articles spread over the alphabet, with some accented and lowercase titles
fn generate_articles(count: usize) -> Vec<Article> {
    const STEMS: [&str; 6] = ["Alpha", "élan", "Zeppelin", "dalek", "Öresund", "Kestrel"];
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            let letter = (b'A' + (i % 26) as u8) as char;
            Article::new(format!("{letter}{stem} {i}"), "extract", now)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for count in [100, 1_000, 10_000] {
        let articles = generate_articles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &articles, |b, articles| {
            b.iter(|| SectionIndex::build(black_box(articles)).unwrap());
        });
    }

    group.finish();
}

fn bench_articles_in_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("articles_in_section");

    for count in [100, 1_000, 10_000] {
        let index = SectionIndex::build(&generate_articles(count)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &index, |b, index| {
            b.iter(|| index.articles_in_section(black_box("E")));
        });
    }

    group.finish();
}

fn bench_list_sections(c: &mut Criterion) {
    let index = SectionIndex::build(&generate_articles(10_000)).unwrap();
    c.bench_function("list_sections", |b| b.iter(|| black_box(&index).list_sections()));
}

criterion_group!(
    benches,
    bench_build,
    bench_articles_in_section,
    bench_list_sections
);
criterion_main!(benches);
