//! Lookup benchmarks for the tokenized entity index
//!
//! Run with: cargo bench --bench lookup
//!
//! Measures ranked multi-phrase lookup against indexes of increasing size,
//! plus the incremental cost of adding one entity.

use comention::{BasicEntity, Entity, EntityId, Field, Label, SimpleTokenizer, TokenizedEntityIndex};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

const FIRST: [&str; 8] = [
    "New", "Old", "North", "South", "East", "West", "Upper", "Lower",
];
const SECOND: [&str; 8] = [
    "York", "Hampton", "Bridge", "Field", "Haven", "Port", "Wood", "Castle",
];
const THIRD: [&str; 4] = ["City", "County", "Giants", "University"];

fn synthetic_entity(i: usize) -> Arc<dyn Entity> {
    let label = format!(
        "{} {} {}",
        FIRST[i % FIRST.len()],
        SECOND[(i / FIRST.len()) % SECOND.len()],
        THIRD[i % THIRD.len()]
    );
    Arc::new(
        BasicEntity::new(EntityId::new(format!("urn:bench:{i}")))
            .with_value(Field::Label, Label::tagged(label, "en")),
    )
}

fn populated_index(entity_count: usize) -> TokenizedEntityIndex {
    let mut index = TokenizedEntityIndex::new(
        Arc::new(SimpleTokenizer),
        Field::Label,
        [Some("en".to_string())],
    );
    for i in 0..entity_count {
        index.add_entity(synthetic_entity(i));
    }
    index
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_lookup");
    for entity_count in [100usize, 1_000, 10_000] {
        let index = populated_index(entity_count);
        group.bench_with_input(
            BenchmarkId::new("two_phrase", entity_count),
            &index,
            |b, index| {
                b.iter(|| {
                    index.lookup(
                        &Field::Label,
                        &["New York", "New York City"],
                        &[Some("en")],
                        10,
                        0,
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_add_entity(c: &mut Criterion) {
    c.bench_function("index_add_entity", |b| {
        let mut i = 0usize;
        let mut index = populated_index(1_000);
        b.iter(|| {
            index.add_entity(synthetic_entity(i % 1_000));
            i += 1;
        });
    });
}

criterion_group!(benches, bench_lookup, bench_add_entity);
criterion_main!(benches);
