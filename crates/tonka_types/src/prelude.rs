//! Prelude module for `tonka_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use tonka_types::prelude::*;
//!
//! let config = DecodeConfig::strict();
//! assert!(is_module_file_name("MODULE01.DAT"));
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Module types
	Asset,
	AssetKind,
	Background,
	ByteCursor,
	Color,
	DecodeConfig,
	Frame,
	FrameContents,
	FrameRead,
	ModuleError,
	ModuleFile,
	Palette,
	PcmClip,

	// Helpers
	is_module_file_name,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
