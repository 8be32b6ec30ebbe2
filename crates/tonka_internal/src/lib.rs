//! This module is separated into its own crate to enable simple dynamic linking for `tonka`, and should not be used directly.

/// `use tonka::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export tonka_types for convenience
pub use tonka_types;

// Re-export commonly used types at crate root
pub use tonka_types::file::{
	Asset, AssetKind, Background, DecodeConfig, Frame, FrameContents, ModuleError, ModuleFile,
	Palette, PcmClip, is_module_file_name,
};
