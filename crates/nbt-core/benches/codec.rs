use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nbt_core::{encoded_len, parse, write_to_vec, Compound, List, Tag};
use std::hint::black_box;

/// A chunk-like document: many small compounds plus bulk arrays.
fn sample_document() -> Compound {
    let mut entities = List::new(Tag::Compound);
    for i in 0..256i32 {
        let mut entity = Compound::new();
        entity.insert("id", format!("entity_{i}"));
        entity.insert("health", 20.0f32);
        entity.insert("pos", List::from_values(Tag::Double, [i as f64, 64.0, -(i as f64)]).unwrap());
        entity.insert("uuid", vec![i, i + 1, i + 2, i + 3]);
        entities.push(entity).unwrap();
    }

    let mut doc = Compound::new();
    doc.insert("Entities", entities);
    doc.insert("BlockStates", (0..4096i64).collect::<Vec<_>>());
    doc.insert("Biomes", (0..1024).map(|n| (n % 64) as i8).collect::<Vec<_>>());
    doc.insert("Name", "Überwelt ÅÄÖ €");
    doc
}

fn bench_codec(c: &mut Criterion) {
    let doc = sample_document();
    let bytes = write_to_vec(&doc, "Level").unwrap();

    let mut group = c.benchmark_group("nbt");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("write_to_vec", |b| {
        b.iter(|| write_to_vec(black_box(&doc), "Level").unwrap())
    });
    group.bench_function("encoded_len", |b| {
        b.iter(|| encoded_len(black_box(&doc), "Level").unwrap())
    });
    group.bench_function("parse", |b| b.iter(|| parse(black_box(&bytes)).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
