use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use argh::FromArgs;

use crate::error::BenchError;

/// Default directory scanned for input images.
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Default directory for the sequential pipeline outputs.
pub const DEFAULT_SEQUENTIAL_DIR: &str = "output_sequential";

/// Default directory for the parallel pipeline outputs.
pub const DEFAULT_PARALLEL_DIR: &str = "output_parallel";

/// Default prefix of every output file name.
pub const DEFAULT_OUTPUT_PREFIX: &str = "result_";

/// Quality of the encoded JPEG outputs.
pub const JPEG_QUALITY: u8 = 100;

#[derive(FromArgs, Debug)]
/// Benchmark a sequential and a parallel blur+sharpen over a directory of images
pub struct Args {
    /// directory holding the input images
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT_DIR)")]
    pub input_dir: PathBuf,

    /// directory receiving the sequential outputs
    #[argh(option, default = "PathBuf::from(DEFAULT_SEQUENTIAL_DIR)")]
    pub sequential_dir: PathBuf,

    /// directory receiving the parallel outputs
    #[argh(option, default = "PathBuf::from(DEFAULT_PARALLEL_DIR)")]
    pub parallel_dir: PathBuf,

    /// prefix prepended to every output file name
    #[argh(option, default = "String::from(DEFAULT_OUTPUT_PREFIX)")]
    pub prefix: String,

    /// number of worker threads; asked on stdin when omitted
    #[argh(option)]
    pub num_threads: Option<usize>,
}

/// Settings of one benchmark run.
///
/// Built once at startup and passed explicitly to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Directory holding the input images.
    pub input_dir: PathBuf,
    /// Directory receiving the sequential outputs.
    pub sequential_output_dir: PathBuf,
    /// Directory receiving the parallel outputs.
    pub parallel_output_dir: PathBuf,
    /// Prefix prepended to every output file name.
    pub output_prefix: String,
    /// Number of worker threads of the parallel strategy. Always positive.
    pub num_threads: usize,
    /// JPEG quality of the outputs.
    pub jpeg_quality: u8,
}

impl BenchConfig {
    /// Create a configuration with default output settings.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidThreadCount`] when `num_threads` is zero.
    pub fn new(input_dir: impl Into<PathBuf>, num_threads: usize) -> Result<Self, BenchError> {
        if num_threads == 0 {
            return Err(BenchError::InvalidThreadCount(num_threads.to_string()));
        }

        Ok(Self {
            input_dir: input_dir.into(),
            sequential_output_dir: PathBuf::from(DEFAULT_SEQUENTIAL_DIR),
            parallel_output_dir: PathBuf::from(DEFAULT_PARALLEL_DIR),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            num_threads,
            jpeg_quality: JPEG_QUALITY,
        })
    }

    /// Replace both output directories.
    pub fn with_output_dirs(
        mut self,
        sequential: impl Into<PathBuf>,
        parallel: impl Into<PathBuf>,
    ) -> Self {
        self.sequential_output_dir = sequential.into();
        self.parallel_output_dir = parallel.into();
        self
    }

    /// Replace the output file prefix.
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Build the configuration from the command line.
    ///
    /// When `--num-threads` is absent the count is read from `input` after
    /// writing a prompt to `output`.
    pub fn from_args(
        args: Args,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Self, BenchError> {
        let num_threads = match args.num_threads {
            Some(n) => n,
            None => prompt_thread_count(input, output)?,
        };

        Ok(Self::new(args.input_dir, num_threads)?
            .with_output_dirs(args.sequential_dir, args.parallel_dir)
            .with_output_prefix(args.prefix))
    }
}

/// Parse a worker thread count.
///
/// Surrounding whitespace is ignored. Zero, negative and non-numeric values
/// are rejected.
pub fn parse_thread_count(text: &str) -> Result<usize, BenchError> {
    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BenchError::InvalidThreadCount(text.trim().to_string())),
    }
}

/// Ask for the worker thread count and read one line of answer.
pub fn prompt_thread_count(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<usize, BenchError> {
    write!(output, "Number of worker threads: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_thread_count(&line)
}
