use std::hint::black_box;
use std::io::Write;

use content_search::loader::CatalogCache;
use content_search::load_catalog;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::NamedTempFile;

/// Generate a synthetic catalog CSV with N rows
fn generate_catalog_file(num_rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "title,summary,full_content,type,date").unwrap();

    for i in 0..num_rows {
        let content_type = if i % 3 == 0 { "Case Study" } else { "Blog" };
        let date = if i % 17 == 0 {
            "not a date".to_string()
        } else {
            format!("2023-{:02}-{:02}", (i % 12) + 1, (i % 28) + 1)
        };
        writeln!(
            file,
            "Post {i},\"Summary of post {i}, covering cloud topics\",\
             \"Body text for post {i} about migration, cost and AI\",{content_type},{date}"
        )
        .unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_load_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_catalog");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_catalog_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| load_catalog(black_box(file.path())).unwrap());
        });
    }

    group.finish();
}

fn bench_cache_hit(c: &mut Criterion) {
    let file = generate_catalog_file(10_000);
    let mut cache = CatalogCache::new();
    cache.get_or_load(file.path()).unwrap();

    c.bench_function("catalog_cache_hit", |b| {
        b.iter(|| cache.get_or_load(black_box(file.path())).unwrap());
    });
}

criterion_group!(benches, bench_load_catalog, bench_cache_hit);
criterion_main!(benches);
