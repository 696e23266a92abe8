//! Seqtools is a grab bag of generic sequence utilities.
//!
//! The following notes may be useful:
//! - Sequence algorithms borrow slices and return fresh `Vec`s, never mutating input.
//! - The SD codec writes plain-old-data values as `u64`-prefixed chunks in
//!   native byte order, so files are only portable between matching machines.
//! - File reading works at the libc level (rustix), so you can follow man pages.
//! - Assumes a 64 bit unix target, for now at least.
//! - No subscriber is installed; events go through `tracing` if the caller wants them.

#[cfg(not(target_pointer_width = "64"))]
compile_error!("code assumes usize is u64");
#[cfg(not(unix))]
compile_error!("code assumes a unix target");

pub mod ansi;
pub mod boundless;
pub mod enum_array;
pub mod format;
pub mod property;
pub mod sd;
pub mod seq;
#[cfg(test)]
mod test_utils;
pub mod text;

pub use boundless::{Boundless, BoundlessVec};
pub use enum_array::{EnumArray, Enumerated};
