#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `tonka-rs` decodes the `MODULE*.DAT` asset containers of a 1997 construction
//! title into backgrounds, palettes, animation frames and PCM audio.
//!
//! ```no_run
//! use tonka_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = ModuleFile::open("MODULE01.DAT")?;
//! println!("{module}");
//! # Ok(())
//! # }
//! ```
pub use tonka_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use tonka_dylib;
