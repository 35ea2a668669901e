use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use md5forge::{forge, forge_with_oracle, KeyedMacOracle};

fn bench_forge(c: &mut Criterion) {
    let oracle = KeyedMacOracle::new(b"secretkey".to_vec());
    let message = b"comment1=cooking%20MCs;userdata=foo;comment2=%20like%20a%20pound%20of%20bacon";
    let mac = oracle.sign(message);

    let mut group = c.benchmark_group("forge");
    for append_len in [11usize, 1024, 64 * 1024] {
        let append = vec![b'A'; append_len];
        group.throughput(Throughput::Bytes(append_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(append_len), &append, |b, append| {
            b.iter(|| forge(black_box(9), black_box(message), black_box(&mac), black_box(append)))
        });
    }
    group.finish();
}

fn bench_secret_length_search(c: &mut Criterion) {
    let oracle = KeyedMacOracle::new(vec![0x42; 48]);
    let mac = oracle.sign(b"data=abc");

    c.bench_function("forge_with_oracle_0_to_64", |b| {
        b.iter(|| {
            forge_with_oracle(
                &oracle,
                black_box(b"data=abc"),
                black_box(&mac),
                black_box(b"&admin=true"),
                0..=64,
            )
        })
    });
}

criterion_group!(benches, bench_forge, bench_secret_length_search);
criterion_main!(benches);
