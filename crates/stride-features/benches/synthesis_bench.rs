use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stride_features::{FeatureSynthesizer, SeededSource, ThreadRngSource};

fn bench_generate(c: &mut Criterion) {
    let mut seeded = FeatureSynthesizer::new(SeededSource::new(42));
    c.bench_function("generate_seeded", |b| b.iter(|| black_box(seeded.generate())));

    let mut thread = FeatureSynthesizer::new(ThreadRngSource);
    c.bench_function("generate_thread_rng", |b| {
        b.iter(|| black_box(thread.generate()))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
