use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde::Serialize;
use typedump::{dump_enum, to_string, Dump, Dumper, Enum, Result, Serde};

#[derive(Clone, Copy)]
enum Level {
    Info,
    Warn,
}

dump_enum!(Level { Info => "info", Warn => "warn" });

#[derive(Serialize, Clone)]
struct Event {
    id: u64,
    source: String,
    payload: Vec<u32>,
}

impl Dump for Event {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.record("Event")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("payload", &self.payload)
            .finish()
    }
}

struct Batch {
    level: Level,
    events: Vec<Event>,
    counters: BTreeMap<String, u64>,
}

impl Dump for Batch {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.record("Batch")
            .field("level", &Enum(self.level))
            .field("events", &self.events)
            .field("counters", &self.counters)
            .finish()
    }
}

fn sample_event(id: u64) -> Event {
    Event {
        id,
        source: format!("sensor-{}", id % 16),
        payload: (0..8).map(|n| n * n).collect(),
    }
}

fn sample_batch(size: u64) -> Batch {
    let mut counters = BTreeMap::new();
    counters.insert("accepted".to_string(), size);
    counters.insert("dropped".to_string(), 0);
    Batch {
        level: if size > 50 { Level::Warn } else { Level::Info },
        events: (0..size).map(sample_event).collect(),
        counters,
    }
}

fn benchmark_simple_record(c: &mut Criterion) {
    let event = sample_event(42);

    c.bench_function("dump_simple_record", |b| {
        b.iter(|| to_string(black_box(&event)))
    });
}

fn benchmark_nested_batch(c: &mut Criterion) {
    let batch = sample_batch(100);

    c.bench_function("dump_nested_batch_100", |b| {
        b.iter(|| to_string(black_box(&batch)))
    });
}

fn benchmark_primitive_sequence(c: &mut Criterion) {
    let numbers: Vec<i64> = (0..1000).collect();

    c.bench_function("dump_sequence_1000_ints", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });
}

fn benchmark_native_vs_bridge(c: &mut Criterion) {
    let event = sample_event(42);

    let mut group = c.benchmark_group("native_vs_bridge");
    group.bench_function("native", |b| b.iter(|| to_string(black_box(&event))));
    group.bench_function("serde_bridge", |b| {
        b.iter(|| to_string(black_box(&Serde(&event))))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_simple_record,
    benchmark_nested_batch,
    benchmark_primitive_sequence,
    benchmark_native_vs_bridge
);
criterion_main!(benches);
