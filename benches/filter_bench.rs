use criterion::{Criterion, criterion_group, criterion_main};
use result_inspector::core::Summary;
use result_inspector::filter::FilterCriteria;
use result_inspector::infra::source::{ResultSource, SampleSource};
use result_inspector::models::{Method, Status, TestResult};
use std::hint::black_box;

/// The sample feed repeated until it holds `count` records, with unique ids.
fn large_collection(count: usize) -> Vec<TestResult> {
    let sample = SampleSource.fetch_recent().unwrap();
    (0..count)
        .map(|i| {
            let mut record = sample[i % sample.len()].clone();
            record.id = format!("{}-{}", record.id, i);
            record
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let results = large_collection(10_000);
    let criteria = FilterCriteria::new()
        .with_query("api/users")
        .with_statuses([Status::Passed, Status::Failed])
        .with_method(Some(Method::new("GET")));

    c.bench_function("filter_apply", |b| {
        b.iter(|| black_box(criteria.apply(black_box(&results))).len());
    });
}

fn bench_summary(c: &mut Criterion) {
    let results = large_collection(10_000);

    c.bench_function("summary_from_results", |b| {
        b.iter(|| Summary::from_results(black_box(&results)));
    });
}

criterion_group!(benches, bench_filter, bench_summary);
criterion_main!(benches);
