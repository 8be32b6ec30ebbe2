//! File type support for `tonka-rs` project.

use std::sync::LazyLock;

use regex::Regex;

mod cursor;
mod error;

pub mod module;

pub use cursor::ByteCursor;
pub use error::ModuleError;

pub use module::{
	Asset, AssetKind, Background, Color, DecodeConfig, File as ModuleFile, Frame, FrameContents,
	FrameRead, Palette, PcmClip,
};

/// File names of module containers, e.g. `MODULE01.DAT`.
static MODULE_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^module.*\.dat$").unwrap_or_else(|e| panic!("invalid module file pattern: {e}"))
});

/// Returns `true` if `file_name` names a module container.
///
/// Matching is case-insensitive and applies to the bare file name, not a path.
///
/// # Examples
///
/// ```
/// use tonka_types::file::is_module_file_name;
///
/// assert!(is_module_file_name("MODULE01.DAT"));
/// assert!(is_module_file_name("module_quarry.dat"));
/// assert!(!is_module_file_name("SOUND.DAT"));
/// ```
pub fn is_module_file_name(file_name: &str) -> bool {
	MODULE_FILE_NAME.is_match(file_name)
}
