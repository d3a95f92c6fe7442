//! Benchmarks for the offline pipeline stages.
//!
//! Run with: `cargo bench --package huahua-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huahua_bench::{WALLET, synthetic_history, with_duplicates};
use huahua_lib::{DenomLabels, ReportFormat, TransferEvent, process_txs, remove_duplicates};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 20_000];

fn dedup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_duplicates");

    for size in SIZES {
        let records = with_duplicates(&synthetic_history(size / 2));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| remove_duplicates(black_box(records.clone())));
        });
    }

    group.finish();
}

fn classify_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_txs");
    let labels = DenomLabels::new();

    for size in SIZES {
        let records = synthetic_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let mut events: Vec<TransferEvent> = Vec::with_capacity(records.len());
                process_txs(WALLET, black_box(records), &labels, &mut events);
                events
            });
        });
    }

    group.finish();
}

fn report_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_report");
    let records = synthetic_history(10_000);
    let mut events: Vec<TransferEvent> = Vec::new();
    process_txs(WALLET, &records, &DenomLabels::new(), &mut events);
    group.throughput(Throughput::Elements(events.len() as u64));

    for format in ReportFormat::all() {
        group.bench_with_input(BenchmarkId::from_parameter(format), &events, |b, events| {
            b.iter(|| {
                let mut out = Vec::new();
                format.write(black_box(events), &mut out).unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, dedup_benchmark, classify_benchmark, report_benchmark);
criterion_main!(benches);
