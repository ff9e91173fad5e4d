use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fractal_viewer::core::data::region::Region;
use fractal_viewer::core::kernel::parallel::render_parallel;
use fractal_viewer::core::kernel::serial::render_serial;
use fractal_viewer::{KernelVariant, RenderRequest};

fn bench_request(variant: KernelVariant) -> RenderRequest {
    let region = Region::new(-2.5, 1.5, -2.0, 2.0).unwrap();

    RenderRequest::new(400, 300, region, 256, variant).unwrap()
}

fn kernel_benches(c: &mut Criterion) {
    let serial_request = bench_request(KernelVariant::Serial);
    c.bench_function("serial 400x300 x256", |b| {
        b.iter(|| render_serial(black_box(&serial_request)))
    });

    let parallel_request = bench_request(KernelVariant::Parallel);
    c.bench_function("parallel 400x300 x256", |b| {
        b.iter(|| render_parallel(black_box(&parallel_request)))
    });
}

criterion_group!(benches, kernel_benches);
criterion_main!(benches);
