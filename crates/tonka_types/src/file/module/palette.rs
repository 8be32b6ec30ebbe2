//! Background palette support.
//!
//! Every module embeds one 256-colour palette in its background record. It is
//! stored as blue, green, red plus a padding byte per entry, and shared by the
//! background and every asset frame of the same module.

use std::fmt;

use crate::file::{ByteCursor, ModuleError};

use super::constants;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Color {
	/// Creates a new RGB color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
	}
}

/// 256-color palette decoded to RGB order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; constants::PALETTE_ENTRIES],
}

impl Palette {
	/// Creates a palette with all entries black.
	pub fn new() -> Self {
		Self {
			colors: [Color::default(); constants::PALETTE_ENTRIES],
		}
	}

	/// Creates a grayscale palette where each entry matches its index.
	pub fn grayscale() -> Self {
		let mut palette = Self::new();
		for (index, color) in palette.colors.iter_mut().enumerate() {
			*color = Color::gray(index as u8);
		}
		palette
	}

	/// Reads a palette stored as 256 blue-green-red-padding entries.
	///
	/// # Errors
	///
	/// Returns `UnexpectedEof` if fewer than 1024 bytes remain.
	pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, ModuleError> {
		let raw = cursor.read_bytes(constants::PALETTE_DISK_SIZE)?;
		let mut palette = Self::new();
		for (color, entry) in
			palette.colors.iter_mut().zip(raw.chunks_exact(constants::PALETTE_ENTRY_SIZE))
		{
			*color = Color::rgb(entry[2], entry[1], entry[0]);
		}
		Ok(palette)
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Sets a color at the specified index.
	#[inline]
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[index as usize] = color;
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; constants::PALETTE_ENTRIES] {
		&self.colors
	}

	/// Returns the palette as packed red, green, blue bytes (768 bytes).
	pub fn to_rgb_bytes(&self) -> [u8; constants::PALETTE_RGB_SIZE] {
		let mut bytes = [0u8; constants::PALETTE_RGB_SIZE];
		for (chunk, color) in bytes.chunks_exact_mut(3).zip(self.colors.iter()) {
			chunk.copy_from_slice(&[color.r, color.g, color.b]);
		}
		bytes
	}

	/// Expands palette indices into packed RGB bytes.
	pub fn apply_rgb(&self, indices: &[u8]) -> Vec<u8> {
		let mut rgb = Vec::with_capacity(indices.len() * 3);
		for &index in indices {
			let color = self.get(index);
			rgb.extend_from_slice(&[color.r, color.g, color.b]);
		}
		rgb
	}

	/// Expands palette indices into packed RGBA bytes, with one index made
	/// fully transparent.
	pub fn apply_rgba(&self, indices: &[u8], transparent_index: Option<u8>) -> Vec<u8> {
		let mut rgba = Vec::with_capacity(indices.len() * 4);
		for &index in indices {
			let color = self.get(index);
			let alpha = if Some(index) == transparent_index {
				0
			} else {
				255
			};
			rgba.extend_from_slice(&[color.r, color.g, color.b, alpha]);
		}
		rgba
	}

	/// Returns an iterator over palette colors.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors", constants::PALETTE_ENTRIES)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}
