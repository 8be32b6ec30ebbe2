//! Integration tests for module decoding through the public `tonka-rs` API.

mod builder;

use std::io::Cursor;

use anyhow::Context;

use tonka_rs::prelude::*;

/// Background plus one talking animation: 9 frames with audio on frames 0 and 8.
fn talking_module() -> Vec<u8> {
	let frames: Vec<Vec<u8>> = (0..9u8)
		.map(|i| {
			let audio: Vec<u8> = if i % 8 == 0 {
				(0..16).map(|s| s * 16 + i).collect()
			} else {
				Vec::new()
			};
			builder::frame(i, &audio)
		})
		.collect();
	let talking = builder::asset([3, 1, 1], 9, 8, &frames);
	let still = builder::asset([2, 1, 1], 1, 0, &[builder::frame(0x0F, &[])]);
	builder::module(&builder::background(b"Caf\xE9", 4, 4), &[talking, still])
}

#[test_log::test]
fn test_decode_module_with_audio() {
	let data = talking_module();
	let module = ModuleFile::from_bytes(&data).unwrap();

	assert_eq!(module.chunk_count(), 2);
	assert_eq!(module.background().name(), "Café");
	assert_eq!(module.background().pixel_count(), 16);

	let talking = &module.assets()[0];
	assert_eq!(talking.kind(), AssetKind::ScriptedAnimation);
	assert_eq!(talking.contents(), FrameContents::AudioAndVideo);
	assert_eq!(talking.frames().len(), 9);
	assert_eq!(talking.audio_chunks().len(), 2);
	assert_eq!(talking.audio_chunks()[1].samples[0], 8);
	assert!(talking.is_animation());

	let still = &module.assets()[1];
	assert_eq!(still.kind(), AssetKind::ClickableStill);
	assert!(still.is_discrete());
	assert_eq!(still.frames()[0].left(), 3);
	assert_eq!(still.frames()[0].top(), 4);
}

#[test_log::test]
fn test_decode_from_reader_matches_bytes() {
	let data = talking_module();
	let from_bytes = ModuleFile::from_bytes(&data).unwrap();
	let from_reader = ModuleFile::from_reader(&mut data.as_slice()).unwrap();
	assert_eq!(from_bytes, from_reader);
}

#[test_log::test]
fn test_strict_config_accepts_exact_boundaries() {
	let data = talking_module();
	let module = ModuleFile::from_bytes_with_config(&data, &DecodeConfig::strict()).unwrap();
	assert_eq!(module.assets().len(), 2);
}

#[test_log::test]
fn test_strict_config_rejects_asset_slack() {
	let mut talking = builder::asset([1, 1, 1], 1, 0, &[builder::frame(1, &[])]);
	talking.extend_from_slice(&[0u8; 4]);
	let data = builder::module(&builder::background(b"X", 1, 1), &[talking]);

	assert!(ModuleFile::from_bytes(&data).is_ok());

	let err = ModuleFile::from_bytes_with_config(&data, &DecodeConfig::strict()).unwrap_err();
	assert_eq!(err.chunk(), Some(1));
	assert!(matches!(err.root_cause(), ModuleError::IntegrityViolation { .. }));
}

#[test_log::test]
fn test_export_audio_as_wav() {
	let data = talking_module();
	let module = ModuleFile::from_bytes(&data).unwrap();
	let clip = &module.assets()[0].audio_chunks()[0];

	let mut wav = Cursor::new(Vec::new());
	clip.write_wav(&mut wav).unwrap();
	wav.set_position(0);

	let mut reader = hound::WavReader::new(wav).unwrap();
	let spec = reader.spec();
	assert_eq!(spec.sample_rate, 22050);
	assert_eq!(spec.channels, 1);
	assert_eq!(spec.bits_per_sample, 8);

	let samples: Vec<u8> = reader.samples::<i8>().map(|s| (i16::from(s.unwrap()) + 128) as u8).collect();
	assert_eq!(samples, clip.samples);
}

#[test_log::test]
fn test_render_frame_to_image() {
	let data = talking_module();
	let module = ModuleFile::from_bytes(&data).unwrap();
	let palette = module.background().palette();

	let frame = &module.assets()[0].frames()[2];
	let rgb = frame.to_rgb(palette);
	let image = image::RgbImage::from_raw(frame.width(), frame.height(), rgb).unwrap();
	assert_eq!(image.get_pixel(1, 1).0, [2, 0, 253]);

	// index 0x0F is transparent
	let still = &module.assets()[1].frames()[0];
	let rgba = still.to_rgba(palette);
	let image = image::RgbaImage::from_raw(still.width(), still.height(), rgba).unwrap();
	assert_eq!(image.get_pixel(0, 0).0[3], 0);
}

#[test_log::test]
fn test_unknown_asset_type_is_attributed_to_chunk() {
	let good = builder::asset([0, 1, 1], 1, 0, &[builder::frame(1, &[])]);
	let bad = builder::asset([7, 7, 7], 1, 0, &[builder::frame(1, &[])]);
	let data = builder::module(&builder::background(b"X", 1, 1), &[good, bad]);

	let err = ModuleFile::from_bytes(&data).unwrap_err();
	assert_eq!(err.chunk(), Some(2));
	assert!(matches!(
		err.root_cause(),
		ModuleError::UnknownAssetType {
			codes: [7, 7, 7]
		}
	));
}

#[test_log::test]
fn test_open_from_disk_and_discover() -> anyhow::Result<()> {
	let dir = std::env::temp_dir().join(format!("tonka-rs-test-{}", std::process::id()));
	std::fs::create_dir_all(&dir).context("create temp dir")?;
	let path = dir.join("MODULE07.DAT");
	std::fs::write(&path, talking_module()).context("write module")?;

	let name = path.file_name().and_then(|n| n.to_str()).context("file name")?;
	assert!(is_module_file_name(name));

	let module = ModuleFile::open(&path).with_context(|| format!("open {}", path.display()))?;
	assert_eq!(module.assets().len(), 2);

	std::fs::remove_dir_all(&dir).context("remove temp dir")?;
	Ok(())
}

#[test_log::test]
fn test_missing_file_is_io_error() {
	let err = ModuleFile::open("/nonexistent/MODULE00.DAT").unwrap_err();
	assert!(matches!(err, ModuleError::IOError(_)));
}
