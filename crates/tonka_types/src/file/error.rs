//! Error types for module file decoding.

use thiserror::Error;

/// Errors that can occur when decoding a module file.
#[derive(Debug, Error)]
pub enum ModuleError {
	/// The stream ran out in the middle of a record
	#[error(
		"Unexpected end of data at offset 0x{offset:08X}: needed {needed} bytes, {available} available"
	)]
	UnexpectedEof {
		/// Absolute position of the failed read
		offset: u64,
		/// Number of bytes the read required
		needed: usize,
		/// Number of bytes left in the stream
		available: usize,
	},

	/// A structural invariant of the container does not hold
	#[error("Format violation at offset 0x{offset:08X}: {message}")]
	FormatViolation {
		/// Absolute position where the violation was detected
		offset: u64,
		/// Description of the violated invariant
		message: String,
	},

	/// The stream position after a record does not match its declared boundary
	#[error("Integrity violation: expected stream position 0x{expected:08X}, found 0x{actual:08X}")]
	IntegrityViolation {
		/// Declared boundary
		expected: u64,
		/// Actual stream position
		actual: u64,
	},

	/// The asset type codes do not match any known asset kind
	#[error("Unknown asset type codes: {codes:02X?}")]
	UnknownAssetType {
		/// The three raw type codes
		codes: [u16; 3],
	},

	/// The frame contents field holds an unknown value
	#[error("Unknown frame contents: 0x{0:04X}")]
	UnknownFrameContents(u16),

	/// The RLE stream holds an undefined control byte
	#[error("Malformed RLE run at offset {offset}: control byte 0x{control:02X}")]
	MalformedRun {
		/// Offset of the control byte within the compressed payload
		offset: usize,
		/// The control byte
		control: u8,
	},

	/// A rewind would move before the start of the current record
	#[error("Cannot rewind {requested} bytes: only {available} bytes read in the current record")]
	RewindOutOfScope {
		/// Number of bytes asked to rewind
		requested: usize,
		/// Number of bytes between the record start and the current position
		available: usize,
	},

	/// A failure inside a specific chunk
	#[error("Chunk {chunk} failed at offset 0x{offset:08X}: {source}")]
	InChunk {
		/// Chunk index (0 is the background, assets start at 1)
		chunk: usize,
		/// Stream position when the failure was reported
		offset: u64,
		/// Underlying failure
		#[source]
		source: Box<ModuleError>,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),

	/// WAV encoding error
	#[error(transparent)]
	WavError(#[from] hound::Error),
}

impl ModuleError {
	/// Creates a new `FormatViolation` error.
	pub fn format_violation(offset: u64, message: impl Into<String>) -> Self {
		Self::FormatViolation {
			offset,
			message: message.into(),
		}
	}

	/// Wraps this error with the chunk it occurred in.
	pub fn in_chunk(self, chunk: usize, offset: u64) -> Self {
		Self::InChunk {
			chunk,
			offset,
			source: Box::new(self),
		}
	}

	/// Returns the innermost error, skipping chunk attribution.
	pub fn root_cause(&self) -> &ModuleError {
		match self {
			Self::InChunk {
				source,
				..
			} => source.root_cause(),
			other => other,
		}
	}

	/// Returns the chunk index this error was attributed to, if any.
	pub fn chunk(&self) -> Option<usize> {
		match self {
			Self::InChunk {
				chunk,
				..
			} => Some(*chunk),
			_ => None,
		}
	}
}
