//! PackBits-style run-length decompression for asset frames.
//!
//! ## Encoding
//!
//! The compressed payload is a sequence of records, each starting with a
//! control byte read as a signed 8-bit integer `n`:
//!
//! | Control       | Meaning                                            |
//! |---------------|----------------------------------------------------|
//! | `0..=127`     | Literal run: copy the next `n + 1` bytes           |
//! | `-127..=-1`   | Replicated run: repeat the next byte `-n + 1` times |
//! | `-128` (0x80) | Undefined, rejected with `MalformedRun`            |
//!
//! Decoding stops when the whole payload is consumed. No state is carried
//! between calls.

use crate::file::ModuleError;

/// Control byte that has no defined meaning in this format
const UNDEFINED_CONTROL: i8 = -128;

/// Largest output per input byte: a two-byte replicated run yields 128 bytes
const MAX_EXPANSION: usize = 64;

/// Decompresses a complete PackBits payload.
///
/// # Examples
///
/// ```
/// use tonka_types::file::module::packbits;
///
/// // literal run of 2 bytes, then 0x07 repeated 3 times
/// let pixels = packbits::decompress(&[0x01, 0xAA, 0xBB, 0xFE, 0x07]).unwrap();
/// assert_eq!(pixels, vec![0xAA, 0xBB, 0x07, 0x07, 0x07]);
/// ```
///
/// # Errors
///
/// Returns `MalformedRun` for a `0x80` control byte and `UnexpectedEof` when
/// a run extends past the end of the payload.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, ModuleError> {
	decompress_with_hint(data, 0)
}

/// Decompresses a complete PackBits payload, pre-sizing the output buffer.
///
/// `size_hint` is usually the frame's nominal uncompressed size. It only
/// affects the initial allocation, never the output length, and is capped by
/// the most the payload can expand to.
pub fn decompress_with_hint(data: &[u8], size_hint: usize) -> Result<Vec<u8>, ModuleError> {
	let mut output = Vec::with_capacity(size_hint.min(data.len().saturating_mul(MAX_EXPANSION)));
	let mut read_offset = 0;

	while read_offset < data.len() {
		let control_offset = read_offset;
		let control = data[read_offset] as i8;
		read_offset += 1;

		match control {
			0..=127 => {
				let run_length = control as usize + 1;
				let run = data.get(read_offset..read_offset + run_length).ok_or(
					ModuleError::UnexpectedEof {
						offset: read_offset as u64,
						needed: run_length,
						available: data.len() - read_offset,
					},
				)?;
				output.extend_from_slice(run);
				read_offset += run_length;
			}
			UNDEFINED_CONTROL => {
				return Err(ModuleError::MalformedRun {
					offset: control_offset,
					control: control as u8,
				});
			}
			_ => {
				let Some(&color) = data.get(read_offset) else {
					return Err(ModuleError::UnexpectedEof {
						offset: read_offset as u64,
						needed: 1,
						available: 0,
					});
				};
				read_offset += 1;
				let run_length = (-(control as i16)) as usize + 1;
				output.resize(output.len() + run_length, color);
			}
		}
	}

	Ok(output)
}
