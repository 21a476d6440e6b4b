#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_any_mono8`] for automatic format detection.
pub mod functional;

/// JPEG image encoding.
pub mod jpeg;

pub use crate::error::IoError;
pub use crate::functional::read_image_any_mono8;
pub use crate::jpeg::write_image_jpeg_mono8;
