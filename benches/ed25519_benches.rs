use chainbytes::crypto::{Ed25519PrivateKey, Ed25519PublicKey, KeyMaterial};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_ed25519(c: &mut Criterion) {
    let private_key = Ed25519PrivateKey::from_seed(&[7u8; 32]);
    let public_key = private_key.public_key();
    let message = vec![0x5au8; 256];
    let signature = private_key.sign(&message);
    let mut group = c.benchmark_group("ed25519");

    group.bench_function("sign_256", |b| {
        b.iter(|| black_box(private_key.sign(black_box(&message))));
    });

    group.bench_function("verify_256", |b| {
        b.iter(|| black_box(public_key.verify_signature(black_box(&message), &signature)));
    });

    group.bench_function("public_key_decode", |b| {
        let encoded = chainbytes::serialize(&public_key).expect("encode");
        b.iter(|| {
            black_box(chainbytes::deserialize::<Ed25519PublicKey>(&encoded).expect("decode"))
        });
    });

    group.bench_function("public_key_from_hex", |b| {
        let text = public_key.to_string();
        b.iter(|| black_box(Ed25519PublicKey::from_hex(&text).expect("hex")));
    });

    group.finish();
}

criterion_group!(benches, bench_ed25519);
criterion_main!(benches);
