//! Benchmarks for stemming and the ranked-list passes
//!
//! Run with: cargo bench -p dirt-core

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dirt_core::{
  GroundTruth, Pair, PathConverter, PorterStemmer, PrCurve, RankedPairs, ScoredPair, Stemmer, SuffixStemmer,
  collect_examples, find_optimal_threshold,
};

const VERBS: &[&str] = &[
  "cause", "caused", "causing", "prevents", "relational", "controlling", "agreed", "happily", "generalization",
  "confused", "leads", "dying",
];

fn synthetic_inputs(size: usize) -> (RankedPairs, GroundTruth) {
  let pair = |i: usize| Pair::new(format!("N:<nsubj:V:v{}:>dobj:N", i), "N:<nsubj:V:caus:>dobj:N");
  let ranked = RankedPairs::from_unsorted((0..size).map(|i| ScoredPair::new(pair(i), 1.0 / (i + 1) as f64)));
  let truth = GroundTruth::new(
    (0..size).step_by(7).map(pair).collect(),
    (3..size).step_by(11).map(pair).collect(),
  );
  (ranked, truth)
}

fn bench_stemmers(c: &mut Criterion) {
  let mut group = c.benchmark_group("stem");
  group.throughput(Throughput::Elements(VERBS.len() as u64));

  let porter = PorterStemmer::new();
  group.bench_function("porter", |b| {
    b.iter(|| {
      for verb in VERBS {
        black_box(porter.stem(black_box(verb)));
      }
    });
  });

  group.bench_function("suffix", |b| {
    b.iter(|| {
      for verb in VERBS {
        black_box(SuffixStemmer.stem(black_box(verb)));
      }
    });
  });

  group.finish();
}

fn bench_convert(c: &mut Criterion) {
  let converter = PathConverter::new(PorterStemmer::new());
  c.bench_function("convert_phrase", |b| {
    b.iter(|| converter.convert(black_box("X caused by Y")));
  });
}

fn bench_ranked_passes(c: &mut Criterion) {
  let mut group = c.benchmark_group("ranked_passes");

  for size in [1_000, 10_000, 100_000].iter() {
    let (ranked, truth) = synthetic_inputs(*size);
    group.throughput(Throughput::Elements(*size as u64));

    group.bench_with_input(BenchmarkId::new("threshold", size), &ranked, |b, ranked| {
      b.iter(|| find_optimal_threshold(black_box(ranked), &truth, 0.01));
    });
    group.bench_with_input(BenchmarkId::new("examples", size), &ranked, |b, ranked| {
      b.iter(|| collect_examples(black_box(ranked), &truth, 0.05));
    });
    group.bench_with_input(BenchmarkId::new("curve", size), &ranked, |b, ranked| {
      b.iter(|| PrCurve::build(black_box(ranked), &truth));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_stemmers, bench_convert, bench_ranked_passes);
criterion_main!(benches);
