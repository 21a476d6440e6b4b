use convbench_image::ImageError;
use thiserror::Error;

use crate::parallel::ParallelError;

/// Errors related to filter operations.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// The output image could not be allocated.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The parallel dispatch failed.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// The kernel divisor is zero.
    #[error("kernel divisor must be non-zero")]
    ZeroDivisor,
}
