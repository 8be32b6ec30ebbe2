//! Benchmark suite for module decoding
//!
//! This benchmark measures PackBits decompression, palette application and
//! full module decoding on synthetic data.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tonka_benches::{generate_frame_pixels, generate_test_module, packbits_encode, sizes};
use tonka_types::file::module::{DecodeConfig, File, Palette, packbits};

/// Benchmark PackBits decompression for several frame sizes
fn bench_packbits(c: &mut Criterion) {
	let mut group = c.benchmark_group("packbits_decompress");

	for (name, (width, height)) in
		[("sprite", sizes::SPRITE), ("character", sizes::CHARACTER), ("full_screen", sizes::FULL_SCREEN)]
	{
		let pixels = generate_frame_pixels(width, height, 7);
		let compressed = packbits_encode(&pixels);

		group.throughput(Throughput::Elements(pixels.len() as u64));
		group.bench_with_input(BenchmarkId::new("decompress", name), &compressed, |b, data| {
			b.iter(|| black_box(packbits::decompress_with_hint(black_box(data), pixels.len())));
		});
	}

	group.finish();
}

/// Benchmark palette application (indexed to RGB and RGBA conversion)
fn bench_palette_application(c: &mut Criterion) {
	let mut group = c.benchmark_group("palette_apply");

	let indices = generate_frame_pixels(sizes::FULL_SCREEN.0, sizes::FULL_SCREEN.1, 1);
	let palette = Palette::grayscale();

	group.throughput(Throughput::Elements(indices.len() as u64));
	group.bench_function("indexed_to_rgb", |b| {
		b.iter(|| black_box(palette.apply_rgb(black_box(&indices))));
	});
	group.bench_function("indexed_to_rgba", |b| {
		b.iter(|| black_box(palette.apply_rgba(black_box(&indices), Some(0x0F))));
	});

	group.finish();
}

/// Benchmark decoding whole modules
fn bench_module_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("module_decode");

	let cases = [
		("video_only", generate_test_module(sizes::CHARACTER, 8, 16, false)),
		("with_audio", generate_test_module(sizes::CHARACTER, 8, 16, true)),
		("cut_scene", generate_test_module(sizes::FULL_SCREEN, 1, 24, true)),
	];

	for (name, data) in &cases {
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("default", name), data, |b, data| {
			b.iter(|| black_box(File::from_bytes(black_box(data))));
		});
		group.bench_with_input(BenchmarkId::new("strict", name), data, |b, data| {
			let config = DecodeConfig::strict();
			b.iter(|| black_box(File::from_bytes_with_config(black_box(data), &config)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_packbits, bench_palette_application, bench_module_decode);
criterion_main!(benches);
