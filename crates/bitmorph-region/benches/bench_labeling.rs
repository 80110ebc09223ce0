use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use bitmorph_core::{Connectivity, ExecutionStrategy};
use bitmorph_region::{LabelAlgorithm, LabelOptions, label_components};
use bitmorph_test::random_image;

fn bench_labeling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Labeling");

    // the eager relabeler rescans its table on every merge, keep it to
    // the smaller sizes
    let cases = [
        (128u32, 128u32, true),
        (256, 256, true),
        (1000, 1000, false),
    ];

    for (width, height, with_eager) in cases {
        let image = random_image(width, height, 0.5, 42).unwrap();
        group.throughput(Throughput::Elements(width as u64 * height as u64));

        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let parameter_string = format!("{}x{}_{:?}", width, height, connectivity);
            let mut variants = vec![
                ("deferred_parallel", LabelAlgorithm::Deferred, ExecutionStrategy::Parallel),
                ("deferred_serial", LabelAlgorithm::Deferred, ExecutionStrategy::Serial),
            ];
            if with_eager {
                variants.push(("eager_parallel", LabelAlgorithm::Eager, ExecutionStrategy::Parallel));
                variants.push(("eager_serial", LabelAlgorithm::Eager, ExecutionStrategy::Serial));
            }

            for (name, algorithm, strategy) in variants {
                let options = LabelOptions::new(connectivity)
                    .with_algorithm(algorithm)
                    .with_strategy(strategy);
                group.bench_with_input(
                    BenchmarkId::new(name, &parameter_string),
                    &image,
                    |b, i| b.iter(|| black_box(label_components(i, &options))),
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_labeling);
criterion_main!(benches);
