//! Audio chunks interleaved with asset frames.

use std::fmt::Display;
use std::io::{Seek, Write};

use crate::file::ModuleError;

use super::constants;

/// Mono 8-bit unsigned PCM clip extracted from an asset frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PcmClip {
	/// Raw unsigned 8-bit samples
	pub samples: Vec<u8>,
	/// Sample rate in Hz
	pub sample_rate: u32,
	/// Number of channels
	pub channels: u16,
	/// Bits per sample
	pub bit_depth: u16,
	/// Whether samples are signed
	pub signed: bool,
}

impl PcmClip {
	/// Wraps raw samples as a clip using the format's fixed audio parameters.
	pub fn new(samples: Vec<u8>) -> Self {
		Self {
			samples,
			sample_rate: constants::AUDIO_SAMPLE_RATE,
			channels: 1,
			bit_depth: 8,
			signed: false,
		}
	}

	/// Number of samples per channel.
	pub fn sample_count(&self) -> usize {
		self.samples.len() / self.channels.max(1) as usize
	}

	/// Duration of the clip in milliseconds.
	pub fn duration_ms(&self) -> u64 {
		if self.sample_rate == 0 {
			return 0;
		}
		self.sample_count() as u64 * 1000 / u64::from(self.sample_rate)
	}

	/// Writes the clip as a WAV file to the given writer.
	pub fn write_wav<W: Write + Seek>(&self, writer: &mut W) -> Result<(), ModuleError> {
		let spec = hound::WavSpec {
			channels: self.channels,
			sample_rate: self.sample_rate,
			bits_per_sample: 8,
			sample_format: hound::SampleFormat::Int,
		};

		let mut wav_writer = hound::WavWriter::new(writer, spec)?;

		// hound stores 8-bit samples unsigned and expects them centered on zero
		for &sample in &self.samples {
			wav_writer.write_sample((i16::from(sample) - 128) as i8)?;
		}

		wav_writer.finalize()?;

		Ok(())
	}
}

impl Display for PcmClip {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"PCM: {} samples, {} Hz, {} ch, {}-bit {}",
			self.sample_count(),
			self.sample_rate,
			self.channels,
			self.bit_depth,
			if self.signed {
				"signed"
			} else {
				"unsigned"
			}
		)
	}
}
