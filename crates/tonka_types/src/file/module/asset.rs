//! Asset records: every chunk after the background.
//!
//! Each asset is an animation-like sequence of frames behind a fixed header.
//!
//! # Header Layout
//!
//! | Size  | Field                                              |
//! |-------|----------------------------------------------------|
//! | 3 × 2 | type codes, see [`AssetKind`]                      |
//! | 2     | `frame_count` (per direction and facet for cursors) |
//! | 2     | frame contents, see [`FrameContents`]              |
//! | 2 × 2 | nominal `width`, `height`                          |
//! | 0x56  | reserved                                           |
//! | 2 × 2 | `left`, `top`                                      |
//! | 0x04  | reserved                                           |
//! | 2 × 2 | horizontal and vertical resolution                 |
//! | 0x0C  | reserved                                           |
//! | 2 × 2 | hotspot x, y (zero when not clickable)             |
//!
//! Video-only assets then store one absolute `u32` offset per frame. The
//! table is consumed but not used: frames are read sequentially.
//!
//! # Audio Cadence
//!
//! Assets with audio store an audio chunk in front of every eighth bitmap,
//! starting with the first. Each chunk holds up to one second of 22050 Hz
//! 8-bit mono audio.

use std::fmt::Display;
use std::sync::Arc;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::file::{ByteCursor, ModuleError};

use super::{
	audio::PcmClip,
	config::DecodeConfig,
	constants,
	frame::{Frame, FrameRead},
	palette::Palette,
};

/// Kind of an asset, derived from its three type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
	/// `[0, 0, 0]`
	AudioOnly,
	/// `[0, 1, 1]`
	EarthComponent,
	/// `[1, 1, 1]`
	TimedAnimation,
	/// `[2, 1, 1]`
	ClickableStill,
	/// `[3, 1, 1]`
	ScriptedAnimation,
	/// `[1, 0x0C, facets]`; the last two codes double as the cursor layout
	Cursor {
		/// Number of directions (second type code)
		directions: u16,
		/// Number of facets per direction (third type code)
		facets: u16,
	},
}

impl AssetKind {
	/// Classifies the three type codes at the start of an asset.
	///
	/// # Errors
	///
	/// Returns `UnknownAssetType` if the codes match no known kind.
	pub fn from_type_codes(codes: [u16; 3]) -> Result<Self, ModuleError> {
		match codes {
			[0, 0, 0] => Ok(Self::AudioOnly),
			[0, 1, 1] => Ok(Self::EarthComponent),
			[1, 1, 1] => Ok(Self::TimedAnimation),
			[2, 1, 1] => Ok(Self::ClickableStill),
			[3, 1, 1] => Ok(Self::ScriptedAnimation),
			[1, constants::CURSOR_TYPE_CODE, facets] => Ok(Self::Cursor {
				directions: codes[1],
				facets,
			}),
			_ => Err(ModuleError::UnknownAssetType {
				codes,
			}),
		}
	}

	/// Returns `true` for cursors.
	pub fn is_cursor(&self) -> bool {
		matches!(self, Self::Cursor { .. })
	}

	/// Expands the stored frame count into the number of frame records.
	///
	/// Cursors store one count per direction and facet combination; every
	/// other kind stores the count as is. Returns `None` on overflow.
	///
	/// # Examples
	///
	/// ```
	/// use tonka_types::file::module::AssetKind;
	///
	/// let cursor = AssetKind::Cursor { directions: 2, facets: 3 };
	/// assert_eq!(cursor.effective_frame_count(4), Some(24));
	/// assert_eq!(AssetKind::TimedAnimation.effective_frame_count(4), Some(4));
	/// ```
	pub fn effective_frame_count(&self, raw_frame_count: u16) -> Option<u32> {
		match *self {
			Self::Cursor {
				directions,
				facets,
			} => u32::from(raw_frame_count)
				.checked_mul(u32::from(directions))?
				.checked_mul(u32::from(facets)),
			_ => Some(u32::from(raw_frame_count)),
		}
	}
}

impl Display for AssetKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::AudioOnly => write!(f, "Audio only"),
			Self::EarthComponent => write!(f, "Earth component"),
			Self::TimedAnimation => write!(f, "Timed animation"),
			Self::ClickableStill => write!(f, "Clickable still"),
			Self::ScriptedAnimation => write!(f, "Scripted animation"),
			Self::Cursor {
				directions,
				facets,
			} => write!(f, "Cursor ({directions} directions × {facets} facets)"),
		}
	}
}

/// Contents of every frame in an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum FrameContents {
	/// Bitmaps only, preceded by a frame offset table
	VideoOnly = 0x00,
	/// Bitmaps with interleaved audio chunks
	AudioAndVideo = 0x08,
	/// Unknown contents, laid out like `AudioAndVideo`
	Unknown = 0x0C,
}

impl FrameContents {
	/// Converts a raw value to `FrameContents`.
	pub fn from_u16(value: u16) -> Result<Self, ModuleError> {
		match value {
			0x00 => Ok(Self::VideoOnly),
			0x08 => Ok(Self::AudioAndVideo),
			0x0C => Ok(Self::Unknown),
			_ => Err(ModuleError::UnknownFrameContents(value)),
		}
	}

	/// Converts `FrameContents` to its raw value.
	pub fn to_u16(self) -> u16 {
		self as u16
	}

	/// Returns `true` if frames may carry audio chunks.
	pub fn may_have_audio(self) -> bool {
		self != Self::VideoOnly
	}
}

impl Display for FrameContents {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::VideoOnly => write!(f, "Video only"),
			Self::AudioAndVideo => write!(f, "Audio and video"),
			Self::Unknown => write!(f, "Unknown"),
		}
	}
}

/// A decoded asset with its frames and audio chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
	kind: AssetKind,
	type_codes: [u16; 3],
	raw_frame_count: u16,
	frame_count: u32,
	contents: FrameContents,
	width: u16,
	height: u16,
	left: u16,
	top: u16,
	horizontal_resolution: u16,
	vertical_resolution: u16,
	hotspot_x: u16,
	hotspot_y: u16,
	frames: Vec<Frame>,
	audio_chunks: Vec<PcmClip>,
	skipped_frames: usize,
}

impl Asset {
	/// Decodes an asset starting at the cursor position.
	///
	/// # Arguments
	///
	/// * `cursor` - Cursor at the first byte of the asset
	/// * `palette` - Module palette, attached to every kept frame
	/// * `config` - Decode configuration
	///
	/// # Errors
	///
	/// Returns `UnknownAssetType` or `UnknownFrameContents` on unrecognized
	/// header values, `FormatViolation` if the cursor frame count overflows,
	/// and any frame decoding error.
	pub fn decode(
		cursor: &mut ByteCursor<'_>,
		palette: &Arc<Palette>,
		config: &DecodeConfig,
	) -> Result<Self, ModuleError> {
		cursor.enter_scope();
		let start = cursor.position();

		let type_codes = [cursor.read_u16_le()?, cursor.read_u16_le()?, cursor.read_u16_le()?];
		let kind = AssetKind::from_type_codes(type_codes)?;

		let raw_frame_count = cursor.read_u16_le()?;
		let frame_count = kind.effective_frame_count(raw_frame_count).ok_or_else(|| {
			ModuleError::format_violation(
				cursor.position(),
				format!("frame count {raw_frame_count} overflows for {kind}"),
			)
		})?;

		let contents = FrameContents::from_u16(cursor.read_u16_le()?)?;

		let width = cursor.read_u16_le()?;
		let height = cursor.read_u16_le()?;
		if cursor.skip_reserved(constants::ASSET_RESERVED_1_SIZE)? {
			debug!("Asset at 0x{start:08X}: reserved block 1 holds nonzero bytes");
		}
		let left = cursor.read_u16_le()?;
		let top = cursor.read_u16_le()?;
		if cursor.skip_reserved(constants::ASSET_RESERVED_2_SIZE)? {
			debug!("Asset at 0x{start:08X}: reserved block 2 holds nonzero bytes");
		}
		let horizontal_resolution = cursor.read_u16_le()?;
		let vertical_resolution = cursor.read_u16_le()?;
		if cursor.skip_reserved(constants::ASSET_RESERVED_3_SIZE)? {
			debug!("Asset at 0x{start:08X}: reserved block 3 holds nonzero bytes");
		}
		let hotspot_x = cursor.read_u16_le()?;
		let hotspot_y = cursor.read_u16_le()?;

		debug!(
			"Asset at 0x{start:08X}: {kind}, {contents}, {frame_count} frames, {width}x{height} @ ({left}, {top})"
		);

		if contents == FrameContents::VideoOnly {
			cursor.skip((frame_count as usize).saturating_mul(constants::FRAME_OFFSET_ENTRY_SIZE))?;
		}

		let mut frames = Vec::new();
		let mut audio_chunks = Vec::new();
		let mut skipped_frames = 0;
		for frame_index in 0..frame_count {
			trace!("Frame {} of {frame_count}", frame_index + 1);
			let audio_expected = config.audio_expected(contents.may_have_audio(), frame_index);
			match Frame::decode(cursor, frame_index, audio_expected, config)? {
				FrameRead::Valid {
					mut frame,
					audio,
				} => {
					frame.attach_palette(Arc::clone(palette));
					frames.push(frame);
					audio_chunks.extend(audio);
				}
				FrameRead::Skipped => {
					// the skip rewinds to the same bytes, so every later index would skip too
					skipped_frames += 1;
					if frame_index + 1 < frame_count {
						debug!(
							"Asset at 0x{start:08X}: stopping after phantom frame {frame_index}, {} frame records not present",
							frame_count - frame_index - 1
						);
					}
					break;
				}
			}
		}

		Ok(Self {
			kind,
			type_codes,
			raw_frame_count,
			frame_count,
			contents,
			width,
			height,
			left,
			top,
			horizontal_resolution,
			vertical_resolution,
			hotspot_x,
			hotspot_y,
			frames,
			audio_chunks,
			skipped_frames,
		})
	}

	/// Returns the asset kind.
	pub fn kind(&self) -> AssetKind {
		self.kind
	}

	/// Returns the raw type codes.
	pub fn type_codes(&self) -> [u16; 3] {
		self.type_codes
	}

	/// Returns the frame count as stored in the header.
	pub fn raw_frame_count(&self) -> u16 {
		self.raw_frame_count
	}

	/// Returns the number of frame records, after cursor expansion.
	pub fn frame_count(&self) -> u32 {
		self.frame_count
	}

	/// Returns the frame contents.
	pub fn contents(&self) -> FrameContents {
		self.contents
	}

	/// Returns the nominal width.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the nominal height.
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the left position.
	pub fn left(&self) -> u16 {
		self.left
	}

	/// Returns the top position.
	pub fn top(&self) -> u16 {
		self.top
	}

	/// Returns the horizontal and vertical resolution fields.
	pub fn resolution(&self) -> (u16, u16) {
		(self.horizontal_resolution, self.vertical_resolution)
	}

	/// Returns the hotspot, `(0, 0)` when not clickable.
	pub fn hotspot(&self) -> (u16, u16) {
		(self.hotspot_x, self.hotspot_y)
	}

	/// Returns the kept frames.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the audio chunks in stream order.
	pub fn audio_chunks(&self) -> &[PcmClip] {
		&self.audio_chunks
	}

	/// Returns the number of phantom frames that were dropped.
	pub fn skipped_frames(&self) -> usize {
		self.skipped_frames
	}

	/// Returns `true` if the frames form a library of stills rather than an
	/// animation.
	///
	/// Cursors and audio-only assets are always discrete; other kinds are
	/// discrete with at most three kept frames.
	pub fn is_discrete(&self) -> bool {
		is_discrete(self.kind, self.frames.len())
	}

	/// Returns `true` if the frames are meant to be played in sequence.
	pub fn is_animation(&self) -> bool {
		!self.is_discrete()
	}
}

impl Display for Asset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} ({}): {} frames, {} audio chunks, {}x{} @ ({}, {})",
			self.kind,
			self.contents,
			self.frames.len(),
			self.audio_chunks.len(),
			self.width,
			self.height,
			self.left,
			self.top
		)
	}
}

fn is_discrete(kind: AssetKind, kept_frames: usize) -> bool {
	matches!(kind, AssetKind::Cursor { .. } | AssetKind::AudioOnly)
		|| kept_frames <= constants::DISCRETE_FRAME_CUTOFF
}
