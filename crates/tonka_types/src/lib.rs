//! This crate provides core data types and file format support for the `tonka-rs` project.
//!
//! # File Formats
//!
//! - **Module** (`MODULE*.DAT`): Chunked containers holding one background image
//!   with its palette and a sequence of animation-like assets. Asset frames are
//!   PackBits compressed and may carry interleaved 8-bit PCM audio.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use tonka_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = ModuleFile::open("MODULE01.DAT")?;
//! for asset in module.assets() {
//!     println!("{asset}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use tonka_types::file::module::{DecodeConfig, File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("MODULE01.DAT")?;
//! let module = File::from_bytes_with_config(&data, &DecodeConfig::strict())?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use tonka_types::prelude::*;` to import commonly used items.
pub mod prelude;
