//! Random-access little-endian reader over an in-memory module file.
//!
//! [`ByteCursor`] keeps an absolute position into a borrowed byte slice and a
//! record scope start. The scope bounds [`ByteCursor::rewind`], so a decoder can
//! push back bytes it read for the current record but never bytes belonging to
//! an earlier one.

use crate::file::ModuleError;

/// Cursor over a byte slice with fixed-width little-endian reads.
///
/// # Examples
///
/// ```
/// use tonka_types::file::ByteCursor;
///
/// let data = [0x02, 0x00, 0x10, 0x00, 0x00, 0x00];
/// let mut cursor = ByteCursor::new(&data);
///
/// assert_eq!(cursor.read_u16_le().unwrap(), 2);
/// assert_eq!(cursor.read_u32_le().unwrap(), 0x10);
/// assert_eq!(cursor.position(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
	data: &'a [u8],
	position: usize,
	scope_start: usize,
}

impl<'a> ByteCursor<'a> {
	/// Creates a cursor at the start of `data`.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			position: 0,
			scope_start: 0,
		}
	}

	/// Returns the current absolute position.
	#[inline]
	pub fn position(&self) -> u64 {
		self.position as u64
	}

	/// Returns the total length of the underlying data.
	#[inline]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the underlying data is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the number of bytes left to read.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.position)
	}

	/// Marks the current position as the start of a new record.
	pub fn enter_scope(&mut self) {
		self.scope_start = self.position;
	}

	/// Moves to an absolute position and starts a new record scope there.
	///
	/// # Errors
	///
	/// Returns `UnexpectedEof` if `position` lies past the end of the data.
	pub fn seek(&mut self, position: u64) -> Result<(), ModuleError> {
		let target = usize::try_from(position).unwrap_or(usize::MAX);
		if target > self.data.len() {
			return Err(ModuleError::UnexpectedEof {
				offset: position,
				needed: target - self.data.len(),
				available: 0,
			});
		}
		self.position = target;
		self.scope_start = target;
		Ok(())
	}

	/// Moves the position back by exactly `count` bytes.
	///
	/// # Errors
	///
	/// Returns `RewindOutOfScope` if the new position would precede the start
	/// of the current record scope.
	pub fn rewind(&mut self, count: usize) -> Result<(), ModuleError> {
		let available = self.position - self.scope_start;
		if count > available {
			return Err(ModuleError::RewindOutOfScope {
				requested: count,
				available,
			});
		}
		self.position -= count;
		Ok(())
	}

	/// Reads `count` raw bytes.
	///
	/// # Errors
	///
	/// Returns `UnexpectedEof` if fewer than `count` bytes remain.
	pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], ModuleError> {
		let available = self.remaining();
		if count > available {
			return Err(ModuleError::UnexpectedEof {
				offset: self.position(),
				needed: count,
				available,
			});
		}
		let bytes = &self.data[self.position..self.position + count];
		self.position += count;
		Ok(bytes)
	}

	/// Skips `count` bytes of reserved data.
	pub fn skip(&mut self, count: usize) -> Result<(), ModuleError> {
		self.read_bytes(count).map(|_| ())
	}

	/// Skips `count` bytes of reserved data, returning `true` if any of them
	/// is nonzero.
	pub fn skip_reserved(&mut self, count: usize) -> Result<bool, ModuleError> {
		self.read_bytes(count).map(|bytes| bytes.iter().any(|&b| b != 0))
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ModuleError> {
		let mut buffer = [0u8; N];
		buffer.copy_from_slice(self.read_bytes(N)?);
		Ok(buffer)
	}

	/// Reads an unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8, ModuleError> {
		self.read_array::<1>().map(|b| b[0])
	}

	/// Reads a signed byte.
	pub fn read_i8(&mut self) -> Result<i8, ModuleError> {
		self.read_array::<1>().map(i8::from_le_bytes)
	}

	/// Reads a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16, ModuleError> {
		self.read_array().map(u16::from_le_bytes)
	}

	/// Reads a little-endian `i16`.
	pub fn read_i16_le(&mut self) -> Result<i16, ModuleError> {
		self.read_array().map(i16::from_le_bytes)
	}

	/// Reads a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32, ModuleError> {
		self.read_array().map(u32::from_le_bytes)
	}
}
