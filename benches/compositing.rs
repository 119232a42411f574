// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use face_replacer::domain::element::{default_layout, ElementKind};
use face_replacer::media::{self, Composition, ImageData, Layer};
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;

fn solid(width: u32, height: u32, color: [u8; 4]) -> ImageData {
    ImageData::from_rgba_image(RgbaImage::from_pixel(width, height, Rgba(color)))
}

fn sample_composition(width: u32, height: u32) -> Composition {
    let layout = default_layout(width, height);
    let layers = ElementKind::ALL
        .into_iter()
        .map(|kind| Layer {
            image: solid(256, 256, [255, 0, 0, 200]),
            bounds: layout[kind].bounds,
        })
        .collect();

    Composition {
        base: solid(width, height, [90, 90, 90, 255]),
        layers,
    }
}

fn compositing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");
    let composition = sample_composition(1920, 1080);

    group.bench_function("compose_1080p_three_layers", |b| {
        b.iter(|| {
            let _ = black_box(media::compose(black_box(&composition)));
        });
    });

    group.bench_function("render_export_1080p", |b| {
        b.iter(|| {
            let _ = black_box(media::render_export(black_box(&composition)));
        });
    });

    group.finish();
}

criterion_group!(benches, compositing_benchmark);
criterion_main!(benches);
