use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use pixel_palette::PaletteExtractor;

/// Synthetic 64x64 image with smooth gradients and a repeating accent
fn bench_image() -> RgbImage {
    RgbImage::from_fn(64, 64, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([220, 60, 40])
        } else {
            Rgb([(x * 4) as u8, (y * 4) as u8, 180])
        }
    })
}

fn benchmark_palette_extraction(c: &mut Criterion) {
    let img = bench_image();
    let extractor = PaletteExtractor::new();

    c.bench_function("extract_64x64_k5", |b| {
        b.iter(|| extractor.extract(black_box(&img), black_box(5)).unwrap())
    });

    c.bench_function("dominant_color_64x64_k5", |b| {
        b.iter(|| extractor.dominant_color(black_box(&img), black_box(5)).unwrap())
    });
}

criterion_group!(benches, benchmark_palette_extraction);
criterion_main!(benches);
