use chainbytes::ser::{Deserializer, Serializer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_entries() -> Vec<(u64, Option<String>)> {
    (0..256u64)
        .map(|i| (i, (i % 3 == 0).then(|| format!("memo-{i}"))))
        .collect()
}

fn bench_ser(c: &mut Criterion) {
    let mut group = c.benchmark_group("ser");

    group.bench_function("uleb128_roundtrip", |b| {
        b.iter(|| {
            let mut serializer = Serializer::with_capacity(5 * 64);
            for shift in 0..32u32 {
                serializer.serialize_uleb128_as_u32(black_box(1u32 << shift));
                serializer.serialize_uleb128_as_u32(black_box(u32::MAX >> shift));
            }
            let bytes = serializer.finish();
            let mut deserializer = Deserializer::new(&bytes);
            while deserializer.remaining() > 0 {
                black_box(deserializer.deserialize_uleb128_as_u32().expect("uleb"));
            }
        });
    });

    group.bench_function("bytes_large", |b| {
        let payload = vec![42u8; 64 * 1024];
        b.iter(|| {
            let mut serializer = Serializer::new();
            serializer.serialize_bytes(&payload).expect("length");
            black_box(serializer.finish())
        });
    });

    let entries = sample_entries();
    group.bench_function("vector_encode", |b| {
        b.iter(|| black_box(chainbytes::serialize(&entries).expect("encode")));
    });

    let encoded = chainbytes::serialize(&entries).expect("encode");
    group.bench_function("vector_decode", |b| {
        b.iter(|| {
            black_box(
                chainbytes::deserialize_exact::<Vec<(u64, Option<String>)>>(&encoded)
                    .expect("decode"),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ser);
criterion_main!(benches);
