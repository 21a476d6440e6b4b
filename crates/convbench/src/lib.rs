#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Runtime configuration and command line arguments.
pub mod config;

/// Input file discovery.
pub mod discovery;

/// The per-image benchmark loop.
pub mod driver;

/// Error types for the benchmark driver.
pub mod error;

/// Console report formatting.
pub mod report;

/// Timing samples and aggregated results.
pub mod timing;

pub use convbench_image as image;
pub use convbench_imgproc as imgproc;
pub use convbench_io as io;

pub use crate::config::BenchConfig;
pub use crate::error::BenchError;
