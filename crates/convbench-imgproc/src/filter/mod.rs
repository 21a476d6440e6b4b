//! Filter operations
//!
//! This module provides the fixed 3x3 integer filters and the convolution
//! engine that applies them.

/// Filter kernels
pub mod kernels;

/// 3x3 convolution
mod convolution;
pub use convolution::*;

/// Filter errors
mod error;
pub use error::FilterError;
