//! Prelude module for `tonka_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use tonka_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let config = DecodeConfig::default();
//! let palette = Palette::grayscale();
//! assert_eq!(palette.to_rgb_bytes().len(), 768);
//! assert!(!config.strict_asset_boundaries);
//! ```

// Re-export everything from tonka_types::prelude
#[doc(inline)]
pub use tonka_types::prelude::*;

// Re-export the entire tonka_types module for advanced usage
#[doc(inline)]
pub use tonka_types;
