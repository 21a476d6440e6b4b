use std::path::PathBuf;

use convbench_imgproc::{filter::FilterError, parallel::ParallelError};
use convbench_io::IoError;

/// An error type for the benchmark driver.
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    /// The input directory is missing or is not a directory.
    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    /// The input directory holds no file with a supported extension.
    #[error("No input images (.jpg, .png, .jpeg) found in {0}")]
    NoInputImages(PathBuf),

    /// The worker thread count is not a positive integer.
    #[error("Thread count must be a positive integer, got {0:?}")]
    InvalidThreadCount(String),

    /// Error to access the filesystem or the console.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to encode an output image.
    #[error(transparent)]
    Codec(#[from] IoError),

    /// Error while filtering an image.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Error while building the worker pool.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
