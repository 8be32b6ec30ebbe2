//! Synthetic module files for integration tests.

/// A 2x2 frame record whose bitmap is one replicated run of `color`.
pub(crate) fn frame(color: u8, audio: &[u8]) -> Vec<u8> {
	let compressed = [0xFD, color];
	let mut data = Vec::new();
	data.extend_from_slice(&2u32.to_le_bytes());
	data.extend_from_slice(&2u32.to_le_bytes());
	data.extend_from_slice(&4u32.to_le_bytes());
	data.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
	data.extend_from_slice(&(audio.len() as u32).to_le_bytes());
	data.extend_from_slice(&3i16.to_le_bytes());
	data.extend_from_slice(&4i16.to_le_bytes());
	data.extend_from_slice(audio);
	data.extend_from_slice(&compressed);
	data
}

/// An asset header followed by `frames`; the offset table is emitted for
/// video-only contents.
pub(crate) fn asset(type_codes: [u16; 3], raw_frame_count: u16, contents: u16, frames: &[Vec<u8>]) -> Vec<u8> {
	let mut data = Vec::new();
	for code in type_codes {
		data.extend_from_slice(&code.to_le_bytes());
	}
	data.extend_from_slice(&raw_frame_count.to_le_bytes());
	data.extend_from_slice(&contents.to_le_bytes());
	data.extend_from_slice(&2u16.to_le_bytes());
	data.extend_from_slice(&2u16.to_le_bytes());
	data.extend_from_slice(&[0u8; 0x56]);
	data.extend_from_slice(&10u16.to_le_bytes());
	data.extend_from_slice(&20u16.to_le_bytes());
	data.extend_from_slice(&[0u8; 4]);
	data.extend_from_slice(&640u16.to_le_bytes());
	data.extend_from_slice(&480u16.to_le_bytes());
	data.extend_from_slice(&[0u8; 0x0C]);
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&1u16.to_le_bytes());
	if contents == 0 {
		data.extend(std::iter::repeat_n(0u8, frames.len() * 4));
	}
	for frame in frames {
		data.extend_from_slice(frame);
	}
	data
}

/// A background record with a red-to-blue palette ramp.
pub(crate) fn background(name: &[u8], width: u32, height: u32) -> Vec<u8> {
	let mut data = vec![0u8; 10];
	let mut name_field = [0u8; 0x50];
	name_field[..name.len()].copy_from_slice(name);
	data.extend_from_slice(&name_field);
	data.extend_from_slice(&[0u8; 16 + 0x24 + 8 + 0x14]);
	for i in 0..=255u8 {
		// blue, green, red, pad
		data.extend_from_slice(&[255 - i, 0, i, 0]);
	}
	let pixel_count = width * height;
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&height.to_le_bytes());
	data.extend_from_slice(&pixel_count.to_le_bytes());
	data.extend_from_slice(&[0u8; 0x0C]);
	data.extend((0..pixel_count).map(|i| (i % 256) as u8));
	data
}

/// Lays out the header, the background and the assets back to back.
pub(crate) fn module(background: &[u8], assets: &[Vec<u8>]) -> Vec<u8> {
	let count = assets.len() as u16;
	let mut next = 2 + assets.len() * 4 + 2 + 4 + background.len();

	let mut data = Vec::new();
	data.extend_from_slice(&count.to_le_bytes());
	for asset in assets {
		data.extend_from_slice(&(next as u32).to_le_bytes());
		next += asset.len();
	}
	data.extend_from_slice(&count.to_le_bytes());
	data.extend_from_slice(&0u32.to_le_bytes());
	data.extend_from_slice(background);
	for asset in assets {
		data.extend_from_slice(asset);
	}
	data
}
