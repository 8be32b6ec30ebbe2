//! Module file format constants.
//!
//! Sizes of the reserved blocks are in bytes, in on-disk order.

/// Size of the background name field (null padded)
pub const BACKGROUND_NAME_SIZE: usize = 0x50;

/// Number of reserved `u16` words at the start of the background record
pub const BACKGROUND_LEADING_WORDS: usize = 5;

/// Number of reserved `u32` words following the background name
pub const BACKGROUND_NAME_TRAILING_DWORDS: usize = 4;

/// First reserved block of the background record
pub const BACKGROUND_RESERVED_1_SIZE: usize = 0x24;

/// Number of reserved `u32` words after the first reserved block
pub const BACKGROUND_MIDDLE_DWORDS: usize = 2;

/// Second reserved block of the background record, right before the palette
pub const BACKGROUND_RESERVED_2_SIZE: usize = 0x14;

/// Reserved block between the background dimensions and its pixels
pub const BACKGROUND_RESERVED_3_SIZE: usize = 0x0C;

/// Number of palette entries
pub const PALETTE_ENTRIES: usize = 256;

/// On-disk size of one palette entry (blue, green, red, padding)
pub const PALETTE_ENTRY_SIZE: usize = 4;

/// On-disk size of the palette
pub const PALETTE_DISK_SIZE: usize = PALETTE_ENTRIES * PALETTE_ENTRY_SIZE;

/// Size of the decoded palette (red, green, blue triples)
pub const PALETTE_RGB_SIZE: usize = PALETTE_ENTRIES * 3;

/// Reserved block after the asset dimensions
pub const ASSET_RESERVED_1_SIZE: usize = 0x56;

/// Reserved block after the asset position
pub const ASSET_RESERVED_2_SIZE: usize = 0x04;

/// Reserved block after the asset resolution
pub const ASSET_RESERVED_3_SIZE: usize = 0x0C;

/// Size of one entry of the video-only frame offset table
pub const FRAME_OFFSET_ENTRY_SIZE: usize = 4;

/// Size of the frame width and height fields
pub const FRAME_DIMENSIONS_SIZE: usize = 8;

/// Largest plausible frame dimension
pub const MAX_FRAME_DIMENSION: u32 = 0xFFFF;

/// Sample rate of all embedded audio, in Hz
pub const AUDIO_SAMPLE_RATE: u32 = 22050;

/// Stored audio length that is doubled when found in the first frame
pub const DOUBLED_AUDIO_LENGTH: u32 = 0x5622;

/// Default number of bitmap frames between audio chunks
pub const BITMAPS_PER_AUDIO: u32 = 8;

/// Palette index rendered transparent in asset frames
pub const TRANSPARENT_INDEX: u8 = 0x0F;

/// Assets with at most this many frames are exported as discrete stills
pub const DISCRETE_FRAME_CUTOFF: usize = 3;

/// Second type code shared by all cursor assets
pub const CURSOR_TYPE_CODE: u16 = 0x0C;
