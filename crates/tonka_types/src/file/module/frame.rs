//! Asset frame decoding.
//!
//! # Layout
//!
//! | Size | Field                                   |
//! |------|-----------------------------------------|
//! | 4    | `width`                                 |
//! | 4    | `height`                                |
//! | 4    | `uncompressed_size` (nominal)           |
//! | 4    | `compressed_size`                       |
//! | 4    | `audio_length` in bytes                 |
//! | 2    | `left` (signed)                         |
//! | 2    | `top` (signed)                          |
//! | n    | audio samples, only when audio is due   |
//! | n    | PackBits compressed palette indices     |
//!
//! # Phantom frames
//!
//! Some assets declare one frame more than they store. The bytes read as that
//! frame's dimensions then belong to the next chunk: exactly one of them is
//! zero, or one exceeds 16 bits. Such a frame is reported as
//! [`FrameRead::Skipped`] and the 8 dimension bytes are pushed back.

use std::fmt::Display;
use std::sync::Arc;

use log::{trace, warn};

use crate::file::{ByteCursor, ModuleError};

use super::{audio::PcmClip, config::DecodeConfig, constants, packbits, palette::Palette};

/// Outcome of reading one frame record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRead {
	/// A complete frame, with the audio chunk stored in front of its bitmap
	Valid {
		/// The decoded frame
		frame: Frame,
		/// Audio stored with this frame, if any
		audio: Option<PcmClip>,
	},
	/// A phantom frame; the cursor is back where the record started
	Skipped,
}

impl FrameRead {
	/// Returns `true` for a phantom frame.
	pub fn is_skipped(&self) -> bool {
		matches!(self, Self::Skipped)
	}
}

/// One decoded bitmap of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	index: u32,
	width: u32,
	height: u32,
	uncompressed_size: u32,
	compressed_size: u32,
	audio_length: u32,
	left: i16,
	top: i16,
	has_audio: bool,
	pixels: Vec<u8>,
	palette: Option<Arc<Palette>>,
}

impl Frame {
	/// Reads one frame record.
	///
	/// # Arguments
	///
	/// * `cursor` - Cursor at the first byte of the frame record
	/// * `frame_index` - Position of this frame within its asset
	/// * `audio_expected` - Whether an audio chunk is due with this frame
	/// * `config` - Decode configuration
	///
	/// # Errors
	///
	/// Returns `UnexpectedEof` on truncated data, `MalformedRun` on a corrupt
	/// bitmap payload, and `RewindOutOfScope` if a phantom frame cannot be
	/// pushed back.
	pub fn decode(
		cursor: &mut ByteCursor<'_>,
		frame_index: u32,
		audio_expected: bool,
		config: &DecodeConfig,
	) -> Result<FrameRead, ModuleError> {
		let start = cursor.position();
		let width = cursor.read_u32_le()?;
		let height = cursor.read_u32_le()?;

		if is_phantom(width, height) {
			cursor.rewind(constants::FRAME_DIMENSIONS_SIZE)?;
			warn!(
				"Skipping phantom frame {frame_index} at 0x{start:08X} ({width}x{height}), rewound to 0x{:08X}",
				cursor.position()
			);
			return Ok(FrameRead::Skipped);
		}

		let uncompressed_size = cursor.read_u32_le()?;
		let compressed_size = cursor.read_u32_le()?;
		let audio_length = cursor.read_u32_le()?;
		let left = cursor.read_i16_le()?;
		let top = cursor.read_i16_le()?;

		let audio = if audio_expected && audio_length > 0 {
			let length = if frame_index == 0 && audio_length == constants::DOUBLED_AUDIO_LENGTH {
				audio_length * 2
			} else {
				audio_length
			};
			let samples = cursor.read_bytes(length as usize)?.to_vec();
			Some(PcmClip::new(samples))
		} else {
			None
		};

		let payload = cursor.read_bytes(compressed_size as usize)?;
		let mut pixels = packbits::decompress_with_hint(payload, uncompressed_size as usize)?;
		if config.trim_rle_overrun && pixels.len() == uncompressed_size as usize + 1 {
			pixels.pop();
		}

		trace!(
			"Frame {frame_index} at 0x{start:08X}: {width}x{height} @ ({left}, {top}), {compressed_size} -> {} bytes, audio {}",
			pixels.len(),
			audio.as_ref().map_or(0, |clip| clip.samples.len())
		);

		let frame = Self {
			index: frame_index,
			width,
			height,
			uncompressed_size,
			compressed_size,
			audio_length,
			left,
			top,
			has_audio: audio.is_some(),
			pixels,
			palette: None,
		};

		Ok(FrameRead::Valid {
			frame,
			audio,
		})
	}

	/// Attaches the module palette to this frame.
	pub fn attach_palette(&mut self, palette: Arc<Palette>) {
		self.palette = Some(palette);
	}

	/// Returns the attached palette, if any.
	pub fn palette(&self) -> Option<&Arc<Palette>> {
		self.palette.as_ref()
	}

	/// Returns the position of this frame within its asset.
	pub fn index(&self) -> u32 {
		self.index
	}

	/// Returns the frame width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the frame height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the horizontal offset relative to the asset origin.
	pub fn left(&self) -> i16 {
		self.left
	}

	/// Returns the vertical offset relative to the asset origin.
	pub fn top(&self) -> i16 {
		self.top
	}

	/// Returns the nominal uncompressed size stored in the record.
	pub fn uncompressed_size(&self) -> u32 {
		self.uncompressed_size
	}

	/// Returns the size of the compressed payload.
	pub fn compressed_size(&self) -> u32 {
		self.compressed_size
	}

	/// Returns the audio length field as stored on disk.
	pub fn audio_length(&self) -> u32 {
		self.audio_length
	}

	/// Returns `true` if an audio chunk was read with this frame.
	pub fn has_audio(&self) -> bool {
		self.has_audio
	}

	/// Returns the decompressed palette indices.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Renders the frame to packed RGB bytes with the given palette.
	pub fn to_rgb(&self, palette: &Palette) -> Vec<u8> {
		palette.apply_rgb(&self.pixels)
	}

	/// Renders the frame to packed RGBA bytes, with the transparent index
	/// fully transparent.
	pub fn to_rgba(&self, palette: &Palette) -> Vec<u8> {
		palette.apply_rgba(&self.pixels, Some(constants::TRANSPARENT_INDEX))
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame #{}: {}x{} @ ({}, {}), {} bytes{}",
			self.index,
			self.width,
			self.height,
			self.left,
			self.top,
			self.pixels.len(),
			if self.has_audio {
				" + audio"
			} else {
				""
			}
		)
	}
}

/// Dimensions that cannot belong to a real frame.
fn is_phantom(width: u32, height: u32) -> bool {
	(width == 0) != (height == 0)
		|| width > constants::MAX_FRAME_DIMENSION
		|| height > constants::MAX_FRAME_DIMENSION
}
