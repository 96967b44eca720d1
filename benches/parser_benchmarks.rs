#![allow(clippy::unwrap_used)]

use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jparse::{from_str, BufferReader, Config, FileReader, MmapReader, Parser};

const SIMPLE_JSON: &str = r#"{"name": "Bugs Bunny", "age": 10}"#;
const NESTED_JSON: &str = r#"{"a": {"b": {"c": [1, 2, 3]}}, "manager": {"name": "Daffy Duck"}}"#;
const UNICODE_JSON: &str = r#"["Omega \u03A9", "Japanese \u8A9E", "Pair \uD834\uDD1E"]"#;

fn large_document() -> String {
    let records: Vec<String> = (0..2_000)
        .map(|i| {
            format!(
                r#"{{"id": {i}, "name": "customer {i}", "score": {}.25, "active": {}, "tags": ["a", "b", null]}}"#,
                i % 97,
                i % 2 == 0
            )
        })
        .collect();
    format!("[{}]", records.join(",\n"))
}

fn bench_small(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| b.iter(|| from_str(black_box(SIMPLE_JSON))));
    c.bench_function("parse_nested", |b| b.iter(|| from_str(black_box(NESTED_JSON))));
    c.bench_function("parse_unicode", |b| b.iter(|| from_str(black_box(UNICODE_JSON))));
}

fn bench_sources(c: &mut Criterion) {
    let input = large_document();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(input.as_bytes()).unwrap();

    c.bench_function("large_buffer", |b| {
        b.iter(|| {
            let mut reader = BufferReader::from_str(black_box(&input));
            Parser::with_config(&mut reader, Config::unlimited())
                .parse()
                .unwrap()
        })
    });

    c.bench_function("large_file", |b| {
        b.iter(|| {
            let mut reader = FileReader::open(file.path()).unwrap();
            Parser::with_config(&mut reader, Config::unlimited())
                .parse()
                .unwrap()
        })
    });

    c.bench_function("large_mmap", |b| {
        b.iter(|| {
            let mut reader = MmapReader::open(file.path());
            Parser::with_config(&mut reader, Config::unlimited())
                .parse()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_small, bench_sources);
criterion_main!(benches);
