//! Benchmark helper utilities for tonka-rs
//!
//! This module provides generators for synthetic module files and PackBits
//! streams used by the benchmark suite.

/// Encodes `pixels` as a PackBits stream, alternating replicated runs for
/// repeated bytes and literal runs for everything else.
pub fn packbits_encode(pixels: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(pixels.len() + pixels.len() / 128 + 1);
	let mut i = 0;
	while i < pixels.len() {
		let run = pixels[i..].iter().take(128).take_while(|&&b| b == pixels[i]).count();
		if run >= 2 {
			out.push((1 - run as i16) as i8 as u8);
			out.push(pixels[i]);
			i += run;
			continue;
		}

		let start = i;
		while i < pixels.len() && i - start < 128 {
			if i + 1 < pixels.len() && pixels[i] == pixels[i + 1] {
				break;
			}
			i += 1;
		}
		out.push((i - start - 1) as u8);
		out.extend_from_slice(&pixels[start..i]);
	}
	out
}

/// Generates frame pixels mixing flat spans and noisy detail, like typical
/// sprite artwork.
pub fn generate_frame_pixels(width: u32, height: u32, seed: u8) -> Vec<u8> {
	(0..width * height)
		.map(|i| {
			let x = i % width;
			if (x / 16) % 2 == 0 {
				seed
			} else {
				(i as u8).wrapping_mul(31).wrapping_add(seed)
			}
		})
		.collect()
}

fn frame_record(width: u32, height: u32, seed: u8, audio: &[u8]) -> Vec<u8> {
	let pixels = generate_frame_pixels(width, height, seed);
	let compressed = packbits_encode(&pixels);

	let mut data = Vec::with_capacity(20 + audio.len() + compressed.len());
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&height.to_le_bytes());
	data.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
	data.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
	data.extend_from_slice(&(audio.len() as u32).to_le_bytes());
	data.extend_from_slice(&0i16.to_le_bytes());
	data.extend_from_slice(&0i16.to_le_bytes());
	data.extend_from_slice(audio);
	data.extend_from_slice(&compressed);
	data
}

fn asset_chunk(width: u32, height: u32, frames: u16, with_audio: bool) -> Vec<u8> {
	let mut data = Vec::new();
	for code in [1u16, 1, 1] {
		data.extend_from_slice(&code.to_le_bytes());
	}
	data.extend_from_slice(&frames.to_le_bytes());
	data.extend_from_slice(&(if with_audio { 8u16 } else { 0 }).to_le_bytes());
	data.extend_from_slice(&(width as u16).to_le_bytes());
	data.extend_from_slice(&(height as u16).to_le_bytes());
	data.extend_from_slice(&[0u8; 0x56 + 4 + 4 + 4 + 0x0C + 4]);
	if !with_audio {
		data.extend(std::iter::repeat_n(0u8, usize::from(frames) * 4));
	}

	// about a third of a second of audio per clip
	let audio: Vec<u8> = (0..7350u32).map(|i| (128 + ((i % 64) as i32 - 32)) as u8).collect();
	for index in 0..frames {
		let clip: &[u8] = if with_audio && index % 8 == 0 { &audio } else { &[] };
		data.extend(frame_record(width, height, index as u8, clip));
	}
	data
}

fn background_chunk(width: u32, height: u32) -> Vec<u8> {
	let mut data = vec![0u8; 10 + 0x50 + 16 + 0x24 + 8 + 0x14];
	for i in 0..=255u8 {
		data.extend_from_slice(&[i.wrapping_mul(3), i.wrapping_mul(2), i, 0]);
	}
	let pixel_count = width * height;
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&height.to_le_bytes());
	data.extend_from_slice(&pixel_count.to_le_bytes());
	data.extend_from_slice(&[0u8; 0x0C]);
	data.extend((0..pixel_count).map(|i| i as u8));
	data
}

/// Generates a complete module: a 640x480 background and `assets` animations
/// of `frames` frames each, with audio every 8th frame when `with_audio` is set.
pub fn generate_test_module(frame_size: (u32, u32), assets: u16, frames: u16, with_audio: bool) -> Vec<u8> {
	let (width, height) = sizes::BACKGROUND;
	let background = background_chunk(width, height);
	let chunks: Vec<Vec<u8>> =
		(0..assets).map(|_| asset_chunk(frame_size.0, frame_size.1, frames, with_audio)).collect();

	let mut next = 2 + chunks.len() * 4 + 2 + 4 + background.len();
	let mut data = Vec::new();
	data.extend_from_slice(&assets.to_le_bytes());
	for chunk in &chunks {
		data.extend_from_slice(&(next as u32).to_le_bytes());
		next += chunk.len();
	}
	data.extend_from_slice(&assets.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(&background);
	for chunk in &chunks {
		data.extend_from_slice(chunk);
	}
	data
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Background size of every generated module
	pub const BACKGROUND: (u32, u32) = (640, 480);
	/// Small sprite: 32x32
	pub const SPRITE: (u32, u32) = (32, 32);
	/// Character animation: 128x160
	pub const CHARACTER: (u32, u32) = (128, 160);
	/// Full-screen cut scene: 640x480
	pub const FULL_SCREEN: (u32, u32) = (640, 480);
}

#[cfg(test)]
mod tests {
	use super::*;
	use tonka_types::file::module::{File, packbits};

	#[test]
	fn test_packbits_encode_decodes_back() {
		let pixels = generate_frame_pixels(100, 7, 3);
		let decoded = packbits::decompress(&packbits_encode(&pixels)).unwrap();
		assert_eq!(decoded, pixels);
	}

	#[test]
	fn test_generated_module_decodes() {
		let data = generate_test_module(sizes::SPRITE, 3, 9, true);
		let module = File::from_bytes(&data).unwrap();
		assert_eq!(module.assets().len(), 3);
		assert_eq!(module.assets()[0].frames().len(), 9);
		assert_eq!(module.assets()[0].audio_chunks().len(), 2);
	}
}
