//! Decode configuration for module files.
//!
//! The container has some observed slack around asset boundaries and one
//! known encoder quirk in the RLE payloads. This module lets callers pick how
//! strictly those are treated.

use super::constants;

/// Configuration for decoding a module file.
///
/// # Presets
///
/// - `default()`: warn on asset boundary slack, trim one-byte RLE overruns
/// - `strict()`: asset boundary mismatches are errors, RLE output kept as is
/// - `lenient()`: same as default
///
/// # Examples
///
/// ```
/// use tonka_types::file::module::DecodeConfig;
///
/// let config = DecodeConfig::strict();
/// assert!(config.strict_asset_boundaries);
///
/// let config = DecodeConfig::default().with_bitmaps_per_audio(4);
/// assert_eq!(config.bitmaps_per_audio, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
	/// Fail when an asset does not end exactly at the next chunk boundary
	pub strict_asset_boundaries: bool,
	/// Drop the last decompressed byte when the output is one byte longer than
	/// the frame's nominal uncompressed size
	pub trim_rle_overrun: bool,
	/// Number of bitmap frames between two audio chunks
	pub bitmaps_per_audio: u32,
}

impl Default for DecodeConfig {
	fn default() -> Self {
		Self {
			strict_asset_boundaries: false,
			trim_rle_overrun: true,
			bitmaps_per_audio: constants::BITMAPS_PER_AUDIO,
		}
	}
}

impl DecodeConfig {
	/// Create a strict configuration.
	pub fn strict() -> Self {
		Self {
			strict_asset_boundaries: true,
			trim_rle_overrun: false,
			..Self::default()
		}
	}

	/// Create a lenient configuration, matching the observed format slack.
	pub fn lenient() -> Self {
		Self::default()
	}

	/// Overrides the audio cadence.
	///
	/// A cadence of zero is treated as one.
	pub fn with_bitmaps_per_audio(mut self, bitmaps_per_audio: u32) -> Self {
		self.bitmaps_per_audio = bitmaps_per_audio.max(1);
		self
	}

	/// Returns `true` if an audio chunk is expected after the given frame.
	pub fn audio_expected(&self, has_audio: bool, frame_index: u32) -> bool {
		has_audio && frame_index % self.bitmaps_per_audio.max(1) == 0
	}
}
