use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffcode::{code, huffman_coding, tree};

fn bench_huffman_coding(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_coding");
    for n in [16usize, 256, 4096] {
        let symbols: Vec<u32> = (0..n as u32).collect();
        // Skewed but repetitive weights, so plenty of ties hit the tie-breaker.
        let weights: Vec<f64> = (0..n).map(|i| ((i * 7919) % 97 + 1) as f64).collect();

        group.bench_with_input(BenchmarkId::new("end_to_end", n), &n, |b, _| {
            b.iter(|| huffman_coding(black_box(&symbols), black_box(&weights)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, _| {
            b.iter(|| {
                tree::build(symbols.iter().copied().zip(weights.iter().copied())).unwrap()
            })
        });

        let root = tree::build(symbols.iter().copied().zip(weights.iter().copied())).unwrap();
        group.bench_with_input(BenchmarkId::new("extract", n), &n, |b, _| {
            b.iter(|| code::extract(black_box(root.clone())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huffman_coding);
criterion_main!(benches);
