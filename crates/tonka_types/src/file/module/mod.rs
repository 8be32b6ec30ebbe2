//! Module (`MODULE*.DAT`) container support for `tonka-rs` project.
//!
//! A module holds the assets of one game screen: a background image with the
//! screen palette, followed by any number of animation-like assets. Each of
//! them lives in a chunk located by an offset table at the start of the file.
//!
//! # File Structure
//!
//! | Size    | Field                                               |
//! |---------|-----------------------------------------------------|
//! | 2       | `chunk_count`                                       |
//! | 4 × n   | absolute offsets of the asset chunks                |
//! | 2       | `chunk_count` again                                 |
//! | 4       | reserved, normally zero                             |
//! | ...     | background chunk, ending exactly at the first offset |
//! | ...     | one asset chunk per offset, each ending at the next  |
//!
//! The file length acts as the final boundary, so `chunk_count` offsets give
//! `chunk_count + 1` boundaries and `chunk_count` assets.
//!
//! # Examples
//!
//! ## Decoding a module
//!
//! ```no_run
//! use tonka_types::file::module::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = File::open("MODULE01.DAT")?;
//!
//! println!("{}", module.background());
//! for (index, asset) in module.assets().iter().enumerate() {
//!     println!("Asset #{index}: {asset}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Rendering frames
//!
//! ```no_run
//! use tonka_types::file::module::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = File::open("MODULE01.DAT")?;
//! let palette = module.background().palette();
//!
//! for asset in module.assets() {
//!     for frame in asset.frames() {
//!         let rgba = frame.to_rgba(palette);
//!         assert_eq!(rgba.len(), frame.pixels().len() * 4);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Strict boundaries
//!
//! ```no_run
//! use tonka_types::file::module::{DecodeConfig, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("MODULE01.DAT")?;
//! let module = File::from_bytes_with_config(&data, &DecodeConfig::strict())?;
//! println!("{} assets", module.assets().len());
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;
use std::io::Read;

use log::{debug, warn};

use crate::file::{ByteCursor, ModuleError};

mod asset;
mod audio;
mod background;
mod config;
mod frame;
mod palette;

pub mod constants;
pub mod packbits;

pub use self::asset::{Asset, AssetKind, FrameContents};
pub use self::audio::PcmClip;
pub use self::background::Background;
pub use self::config::DecodeConfig;
pub use self::frame::{Frame, FrameRead};
pub use self::palette::{Color, Palette};


/// A decoded module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	chunk_offsets: Vec<u64>,
	reserved: u32,
	background: Background,
	assets: Vec<Asset>,
}

impl File {
	/// Opens and decodes a module file with the default configuration.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or fails to decode.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, ModuleError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Decodes a module from a byte slice with the default configuration.
	pub fn from_bytes(data: &[u8]) -> Result<Self, ModuleError> {
		Self::from_bytes_with_config(data, &DecodeConfig::default())
	}

	/// Decodes a module from a byte slice.
	pub fn from_bytes_with_config(data: &[u8], config: &DecodeConfig) -> Result<Self, ModuleError> {
		let mut cursor = ByteCursor::new(data);
		Self::decode(&mut cursor, config)
	}

	/// Decodes a module from any reader with the default configuration.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, ModuleError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Decodes a module spanning the whole cursor.
	///
	/// # Errors
	///
	/// - `FormatViolation` if the chunk table is inconsistent
	/// - `InChunk` wrapping the failure of a background or asset decode,
	///   including `IntegrityViolation` when the background overruns or
	///   underruns the first boundary, or an asset misses its end boundary
	///   in strict mode
	pub fn decode(cursor: &mut ByteCursor<'_>, config: &DecodeConfig) -> Result<Self, ModuleError> {
		let chunk_offsets = read_chunk_table(cursor)?;

		let reserved = cursor.read_u32_le()?;
		if reserved != 0 {
			warn!("Reserved module header word is 0x{reserved:08X}, expected 0");
		}

		let header_end = cursor.position();
		if chunk_offsets[0] < header_end {
			return Err(ModuleError::format_violation(
				header_end,
				format!("first chunk at 0x{:08X} lies inside the header", chunk_offsets[0]),
			));
		}

		debug!(
			"*** CHUNK BACKGROUND (0x{header_end:08X} -> 0x{:08X} [0x{:04X} bytes]) ***",
			chunk_offsets[0],
			chunk_offsets[0] - header_end
		);
		cursor.enter_scope();
		let background = Background::decode(cursor)
			.and_then(|background| {
				expect_position(cursor, chunk_offsets[0])?;
				Ok(background)
			})
			.map_err(|e| e.in_chunk(0, cursor.position()))?;

		let palette = background.shared_palette().clone();
		let mut assets = Vec::with_capacity(chunk_offsets.len() - 1);
		for (index, bounds) in chunk_offsets.windows(2).enumerate() {
			let (start, end) = (bounds[0], bounds[1]);
			let chunk = index + 1;
			debug!("*** CHUNK {chunk} (0x{start:08X} -> 0x{end:08X} [0x{:04X} bytes]) ***", end - start);

			if cursor.position() != start {
				warn!(
					"Chunk {chunk}: stream at 0x{:08X}, seeking to declared start 0x{start:08X}",
					cursor.position()
				);
			}
			cursor.seek(start).map_err(|e| e.in_chunk(chunk, start))?;

			let asset = Asset::decode(cursor, &palette, config)
				.map_err(|e| e.in_chunk(chunk, cursor.position()))?;

			if cursor.position() != end {
				if config.strict_asset_boundaries {
					return Err(ModuleError::IntegrityViolation {
						expected: end,
						actual: cursor.position(),
					}
					.in_chunk(chunk, cursor.position()));
				}
				warn!(
					"Chunk {chunk}: asset ended at 0x{:08X}, declared end 0x{end:08X}",
					cursor.position()
				);
			}

			assets.push(asset);
		}

		Ok(Self {
			chunk_offsets,
			reserved,
			background,
			assets,
		})
	}

	/// Returns the chunk boundaries, including the final file length.
	pub fn chunk_offsets(&self) -> &[u64] {
		&self.chunk_offsets
	}

	/// Returns the number of chunks declared in the header.
	pub fn chunk_count(&self) -> usize {
		self.chunk_offsets.len() - 1
	}

	/// Returns the reserved header word.
	pub fn reserved(&self) -> u32 {
		self.reserved
	}

	/// Returns the background.
	pub fn background(&self) -> &Background {
		&self.background
	}

	/// Returns the assets in chunk order.
	pub fn assets(&self) -> &[Asset] {
		&self.assets
	}

	/// Returns an iterator over the assets.
	pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
		self.assets.iter()
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Module: {} chunks, background {:?} {}x{}",
			self.chunk_count(),
			self.background.name(),
			self.background.width(),
			self.background.height()
		)
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Asset;
	type IntoIter = std::slice::Iter<'a, Asset>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Reads the chunk count, the offset table and the redundant count, and
/// appends the file length as the final boundary.
fn read_chunk_table(cursor: &mut ByteCursor<'_>) -> Result<Vec<u64>, ModuleError> {
	let chunk_count = cursor.read_u16_le()?;
	debug!("Expecting {chunk_count} chunks");

	let mut offsets = Vec::with_capacity(chunk_count as usize + 1);
	for index in 0..chunk_count {
		let offset = u64::from(cursor.read_u32_le()?);
		debug!("Registered chunk {} / {chunk_count} @ 0x{offset:08X}", index + 1);
		offsets.push(offset);
	}
	offsets.push(cursor.len() as u64);

	let redundant_count = cursor.read_u16_le()?;
	if redundant_count != chunk_count {
		return Err(ModuleError::format_violation(
			cursor.position() - 2,
			format!("chunk count {chunk_count} repeated as {redundant_count}"),
		));
	}

	if let Some(bounds) = offsets.windows(2).find(|bounds| bounds[0] >= bounds[1]) {
		return Err(ModuleError::format_violation(
			cursor.position(),
			format!(
				"chunk boundaries not strictly increasing: 0x{:08X} then 0x{:08X}",
				bounds[0], bounds[1]
			),
		));
	}

	Ok(offsets)
}

fn expect_position(cursor: &ByteCursor<'_>, expected: u64) -> Result<(), ModuleError> {
	let actual = cursor.position();
	if actual != expected {
		return Err(ModuleError::IntegrityViolation {
			expected,
			actual,
		});
	}
	Ok(())
}
