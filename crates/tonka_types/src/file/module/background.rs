//! Background record, the first chunk of every module.
//!
//! # Layout
//!
//! | Size   | Field                                     |
//! |--------|-------------------------------------------|
//! | 5 × 2  | reserved `u16` words                      |
//! | 0x50   | name, padded with NUL bytes               |
//! | 4 × 4  | reserved `u32` words                      |
//! | 0x24   | reserved                                  |
//! | 2 × 4  | reserved `u32` words                      |
//! | 0x14   | reserved                                  |
//! | 0x400  | palette, 256 × (blue, green, red, pad)    |
//! | 4      | `width`                                   |
//! | 4      | `height`                                  |
//! | 4      | `pixel_count`                             |
//! | 0x0C   | reserved                                  |
//! | n      | `pixel_count` uncompressed palette indices |

use std::fmt::Display;
use std::sync::Arc;

use encoding_rs::WINDOWS_1252;
use log::debug;

use crate::file::{ByteCursor, ModuleError};

use super::{constants, palette::Palette};

/// Decoded background image with the module's shared palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
	name: String,
	palette: Arc<Palette>,
	width: u32,
	height: u32,
	pixels: Vec<u8>,
}

impl Background {
	/// Decodes a background record starting at the cursor position.
	///
	/// # Errors
	///
	/// Returns `UnexpectedEof` if the record or its pixel data is truncated.
	pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, ModuleError> {
		skip_reserved(cursor, constants::BACKGROUND_LEADING_WORDS * 2, "leading words")?;

		let raw_name = cursor.read_bytes(constants::BACKGROUND_NAME_SIZE)?;
		let name = decode_name(raw_name);

		skip_reserved(cursor, constants::BACKGROUND_NAME_TRAILING_DWORDS * 4, "name trailer")?;
		skip_reserved(cursor, constants::BACKGROUND_RESERVED_1_SIZE, "reserved block 1")?;
		skip_reserved(cursor, constants::BACKGROUND_MIDDLE_DWORDS * 4, "middle words")?;
		skip_reserved(cursor, constants::BACKGROUND_RESERVED_2_SIZE, "reserved block 2")?;

		let palette = Palette::decode(cursor)?;

		let width = cursor.read_u32_le()?;
		let height = cursor.read_u32_le()?;
		let pixel_count = cursor.read_u32_le()?;
		skip_reserved(cursor, constants::BACKGROUND_RESERVED_3_SIZE, "reserved block 3")?;

		if u64::from(width) * u64::from(height) != u64::from(pixel_count) {
			debug!("Background {name:?}: {width}x{height} does not match {pixel_count} pixels");
		}

		let pixels = cursor.read_bytes(pixel_count as usize)?.to_vec();

		Ok(Self {
			name,
			palette: Arc::new(palette),
			width,
			height,
			pixels,
		})
	}

	/// Returns the background name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the module palette.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns a shared handle to the module palette.
	pub fn shared_palette(&self) -> &Arc<Palette> {
		&self.palette
	}

	/// Returns the width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the raw palette indices.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Returns the number of stored pixels.
	pub fn pixel_count(&self) -> usize {
		self.pixels.len()
	}

	/// Renders the background to packed RGB bytes.
	pub fn to_rgb(&self) -> Vec<u8> {
		self.palette.apply_rgb(&self.pixels)
	}
}

impl Display for Background {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Background {:?}: {}x{}", self.name, self.width, self.height)
	}
}

fn skip_reserved(cursor: &mut ByteCursor<'_>, count: usize, field: &str) -> Result<(), ModuleError> {
	let start = cursor.position();
	if cursor.skip_reserved(count)? {
		debug!("Background {field} at 0x{start:08X} holds nonzero bytes");
	}
	Ok(())
}

/// Strips trailing NUL padding and decodes the name as Windows-1252.
fn decode_name(raw: &[u8]) -> String {
	let end = raw.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
	let (name, _, _) = WINDOWS_1252.decode(&raw[..end]);
	name.into_owned()
}
