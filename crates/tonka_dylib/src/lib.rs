//! Forces `tonka_internal` to be built as a dynamic library.
//!
//! Enabled through the `dynamic_linking` feature of the root crate to speed up
//! incremental builds of the command-line utilities. Do not depend on it directly.

pub use tonka_internal::*;
