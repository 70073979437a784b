//! Benchmarks for the render pass and the frame copy done on every tick.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandel_render::config::settings::RenderSettings;
use mandel_render::core::actions::render_pass::render_pass::render_pass;
use mandel_render::core::data::frame_buffer::FrameBuffer;
use mandel_render::core::fractals::mandelbrot::colour_mapping::kinds::ColourAlgorithm;

fn settings(algorithm: ColourAlgorithm) -> RenderSettings {
    RenderSettings {
        algorithm,
        ..RenderSettings::default()
    }
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    let (width, height) = (320, 240);
    group.throughput(Throughput::Elements(u64::from(width * height)));

    for &algorithm in ColourAlgorithm::ALL {
        let settings = settings(algorithm);
        let viewport = settings.viewport(width, height).unwrap();
        let colours = settings.colour_cache().unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.config_name()),
            &(viewport, colours),
            |b, (viewport, colours)| b.iter(|| render_pass(black_box(viewport), colours).unwrap()),
        );
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_snapshot");

    for &(width, height) in &[(320u32, 240u32), (800, 600), (1920, 1080)] {
        let frame = FrameBuffer::new(width, height);
        let mut rgba = vec![0u8; width as usize * height as usize * 4];
        group.throughput(Throughput::Bytes(rgba.len() as u64));

        group.bench_function(BenchmarkId::new("copy_into_rgba", format!("{}x{}", width, height)), |b| {
            b.iter(|| {
                let snapshot = frame.snapshot();
                snapshot.copy_into_rgba(black_box(&mut rgba)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_pass, bench_snapshot);
criterion_main!(benches);
