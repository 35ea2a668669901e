use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use md5forge::{md5_digest, process_block, HashState, BLOCK_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_data(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

fn bench_process_block(c: &mut Criterion) {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&random_data(BLOCK_SIZE));

    c.bench_function("md5_process_block", |b| {
        b.iter(|| process_block(black_box(HashState::INITIAL), black_box(&block)))
    });
}

fn bench_md5_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_digest");
    for size in [64usize, 1024, 16 * 1024, 1024 * 1024] {
        let data = random_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| md5_digest(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process_block, bench_md5_digest);
criterion_main!(benches);
