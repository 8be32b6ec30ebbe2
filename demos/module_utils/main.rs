//! Module CLI Utility
//!
//! A command-line tool for inspecting and extracting `MODULE*.DAT` containers.
//!
//! # Features
//!
//! - **info**: Display the chunk table, background and assets of a module
//! - **export**: Write the background, every frame and every audio chunk to disk
//!   together with a JSON metadata file
//! - **scan**: Find module files below a directory and report which decode
//!
//! # Metadata Format
//!
//! `export` writes `metadata.json` next to the images:
//! ```json
//! {
//!   "background": { "name": "QUARRY1", "width": 640, "height": 480, "filename": "background.png" },
//!   "assets": [
//!     {
//!       "index": 0,
//!       "kind": "timed_animation",
//!       "frame_count": 12,
//!       "skipped_frames": 0,
//!       "frames": [{ "index": 0, "width": 64, "height": 48, "left": 0, "top": 0, "filename": "asset_000/frame_000.png" }],
//!       "audio": ["asset_000/audio_000.wav"]
//!     }
//!   ]
//! }
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Show module information
//! cargo run --example module_utils -- info MODULE01.DAT --detailed
//!
//! # Export everything to PNG/WAV
//! cargo run --example module_utils -- export MODULE01.DAT -o out/
//!
//! # Decode every module file below a directory, failing on boundary slack
//! cargo run --example module_utils -- --strict scan bin/
//! ```

use clap::{Parser, Subcommand};
use image::{ImageBuffer, RgbImage, RgbaImage};
use log::{error, info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tonka_rs::prelude::*;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "module_utils")]
#[command(author = "tonka-rs project")]
#[command(version = "1.0")]
#[command(about = "Module utility - inspect and export MODULE*.DAT containers", long_about = None)]
struct Cli {
	/// Treat asset boundary mismatches as errors
	#[arg(long, global = true)]
	strict: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display information about a module file
	Info {
		/// Input module file path
		#[arg(value_name = "INPUT_DAT")]
		input: PathBuf,

		/// Show per-frame information
		#[arg(short, long)]
		detailed: bool,
	},

	/// Export background, frames and audio of a module
	Export {
		/// Input module file path
		#[arg(value_name = "INPUT_DAT")]
		input: PathBuf,

		/// Output directory path (optional, defaults to `<input>_export/`)
		#[arg(short, long, value_name = "OUTPUT_DIR")]
		output: Option<PathBuf>,

		/// Render frames opaque instead of keying out the transparent index
		#[arg(long)]
		opaque: bool,
	},

	/// Decode every module file found below a directory
	Scan {
		/// Directory to search
		#[arg(value_name = "DIR")]
		dir: PathBuf,
	},
}

/// Background metadata for JSON serialization
#[derive(Debug, Serialize)]
struct BackgroundMetadata {
	name: String,
	width: u32,
	height: u32,
	filename: Option<String>,
}

/// Frame metadata for JSON serialization
#[derive(Debug, Serialize)]
struct FrameMetadata {
	index: u32,
	width: u32,
	height: u32,
	left: i16,
	top: i16,
	filename: String,
}

/// Asset metadata for JSON serialization
#[derive(Debug, Serialize)]
struct AssetMetadata {
	index: usize,
	kind: AssetKind,
	contents: FrameContents,
	frame_count: u32,
	skipped_frames: usize,
	hotspot: (u16, u16),
	frames: Vec<FrameMetadata>,
	audio: Vec<String>,
}

/// Complete module metadata structure
#[derive(Debug, Serialize)]
struct ModuleMetadata {
	chunk_offsets: Vec<u64>,
	background: BackgroundMetadata,
	assets: Vec<AssetMetadata>,
}

fn decode_config(strict: bool) -> DecodeConfig {
	if strict {
		DecodeConfig::strict()
	} else {
		DecodeConfig::default()
	}
}

fn load_module(path: &Path, config: &DecodeConfig) -> Result<ModuleFile, Box<dyn std::error::Error>> {
	let data = fs::read(path)?;
	let module = ModuleFile::from_bytes_with_config(&data, config)?;
	Ok(module)
}

fn handle_info(input: PathBuf, detailed: bool, config: &DecodeConfig) -> Result<(), Box<dyn std::error::Error>> {
	let module = load_module(&input, config)?;

	println!("=== {} ===", input.display());
	println!("{module}");
	println!("Reserved: 0x{:08X}", module.reserved());
	println!("Boundaries:");
	for (index, offset) in module.chunk_offsets().iter().enumerate() {
		println!("  [{index}] 0x{offset:08X}");
	}
	println!();

	for (index, asset) in module.iter().enumerate() {
		println!("Asset #{index}: {asset}");
		println!(
			"  {} frames kept, {} skipped, {} audio chunks",
			asset.frames().len(),
			asset.skipped_frames(),
			asset.audio_chunks().len()
		);
		if detailed {
			for frame in asset.frames() {
				println!("    {frame}");
			}
			for clip in asset.audio_chunks() {
				println!("    {clip} ({} ms)", clip.duration_ms());
			}
		}
	}

	Ok(())
}

fn save_rgb_png(width: u32, height: u32, rgb: Vec<u8>, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let img: RgbImage = ImageBuffer::from_raw(width, height, rgb).ok_or("Failed to create RGB image")?;
	img.save(path)?;
	Ok(())
}

fn save_rgba_png(width: u32, height: u32, rgba: Vec<u8>, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let img: RgbaImage = ImageBuffer::from_raw(width, height, rgba).ok_or("Failed to create RGBA image")?;
	img.save(path)?;
	Ok(())
}

fn handle_export(
	input: PathBuf,
	output: Option<PathBuf>,
	opaque: bool,
	config: &DecodeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
	let module = load_module(&input, config)?;
	let output = output.unwrap_or_else(|| {
		let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("module");
		input.with_file_name(format!("{stem}_export"))
	});
	fs::create_dir_all(&output)?;

	let background = module.background();
	let background_filename = if u64::from(background.width()) * u64::from(background.height())
		== background.pixel_count() as u64
	{
		let filename = "background.png".to_string();
		save_rgb_png(background.width(), background.height(), background.to_rgb(), &output.join(&filename))?;
		Some(filename)
	} else {
		warn!("Background dimensions disagree with its pixel count, skipping image");
		None
	};

	let palette = background.palette();
	let mut assets = Vec::with_capacity(module.assets().len());
	for (index, asset) in module.iter().enumerate() {
		let asset_dir = format!("asset_{index:03}");
		fs::create_dir_all(output.join(&asset_dir))?;

		let mut frames = Vec::with_capacity(asset.frames().len());
		for frame in asset.frames() {
			let filename = format!("{asset_dir}/frame_{:03}.png", frame.index());
			let path = output.join(&filename);
			let result = if opaque {
				save_rgb_png(frame.width(), frame.height(), frame.to_rgb(palette), &path)
			} else {
				save_rgba_png(frame.width(), frame.height(), frame.to_rgba(palette), &path)
			};
			if let Err(e) = result {
				warn!("Asset {index} frame {}: {e}", frame.index());
				continue;
			}
			frames.push(FrameMetadata {
				index: frame.index(),
				width: frame.width(),
				height: frame.height(),
				left: frame.left(),
				top: frame.top(),
				filename,
			});
		}

		let mut audio = Vec::with_capacity(asset.audio_chunks().len());
		for (clip_index, clip) in asset.audio_chunks().iter().enumerate() {
			let filename = format!("{asset_dir}/audio_{clip_index:03}.wav");
			let mut file = fs::File::create(output.join(&filename))?;
			clip.write_wav(&mut file)?;
			audio.push(filename);
		}

		info!("Asset {index}: {} frames, {} audio chunks exported", frames.len(), audio.len());
		assets.push(AssetMetadata {
			index,
			kind: asset.kind(),
			contents: asset.contents(),
			frame_count: asset.frame_count(),
			skipped_frames: asset.skipped_frames(),
			hotspot: asset.hotspot(),
			frames,
			audio,
		});
	}

	let metadata = ModuleMetadata {
		chunk_offsets: module.chunk_offsets().to_vec(),
		background: BackgroundMetadata {
			name: background.name().to_string(),
			width: background.width(),
			height: background.height(),
			filename: background_filename,
		},
		assets,
	};
	fs::write(output.join("metadata.json"), serde_json::to_string_pretty(&metadata)?)?;

	info!("Exported {} to {}", input.display(), output.display());
	Ok(())
}

fn handle_scan(dir: PathBuf, config: &DecodeConfig) -> Result<(), Box<dyn std::error::Error>> {
	let mut decoded = 0usize;
	let mut failed = 0usize;

	for entry in WalkDir::new(&dir).into_iter().filter_map(Result::ok) {
		if !entry.file_type().is_file() {
			continue;
		}
		let Some(name) = entry.file_name().to_str() else {
			continue;
		};
		if !is_module_file_name(name) {
			continue;
		}

		match load_module(entry.path(), config) {
			Ok(module) => {
				decoded += 1;
				info!("{}: {module}", entry.path().display());
			}
			Err(e) => {
				failed += 1;
				error!("{}: {e}", entry.path().display());
			}
		}
	}

	println!("{decoded} decoded, {failed} failed");
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = decode_config(cli.strict);

	match cli.command {
		Commands::Info {
			input,
			detailed,
		} => handle_info(input, detailed, &config),

		Commands::Export {
			input,
			output,
			opaque,
		} => handle_export(input, output, opaque, &config),

		Commands::Scan {
			dir,
		} => handle_scan(dir, &config),
	}
}
