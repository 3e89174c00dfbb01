use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::RngCore;

use rijndael_core::{encrypt_block, encrypt_stream, expand_key, normalize_key, KeySize, Padding};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        let key = normalize_key(b"benchmark key material", size);
        group.bench_function(size.to_string(), |b| {
            b.iter(|| expand_key(black_box(&key)));
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("encrypt_block");
    for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
        let round_keys = expand_key(&normalize_key(b"benchmark key material", size));
        group.bench_function(size.to_string(), |b| {
            b.iter(|| encrypt_block(black_box(&block), &round_keys));
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let round_keys = expand_key(&normalize_key(b"benchmark key material", KeySize::Aes128));
    let mut data = vec![0u8; 64 * 1024];
    rand::thread_rng().fill_bytes(&mut data);

    let mut group = c.benchmark_group("stream");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encrypt_64k", |b| {
        b.iter(|| encrypt_stream(black_box(&data), &round_keys, Padding::Binary));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_stream);
criterion_main!(benches);
