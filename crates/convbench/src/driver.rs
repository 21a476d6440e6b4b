use std::{ffi::OsString, io::Write, path::Path};

use convbench_imgproc::{
    parallel::{ExecutionStrategy, WorkerPool},
    pipeline::blur_sharpen,
};
use convbench_io::{read_image_any_mono8, write_image_jpeg_mono8};

use crate::{
    config::BenchConfig,
    discovery::list_images,
    error::BenchError,
    report::ReportWriter,
    timing::{timed, BenchSummary, FileTiming},
};

/// Run the whole benchmark.
///
/// The input directory is validated and the worker pool built before any
/// output directory is created. Files are then processed one at a time: decode,
/// sequential pipeline, write, parallel pipeline, write. Files that fail to
/// decode are skipped and do not appear in the report.
///
/// # Errors
///
/// * [`BenchError::InputDirNotFound`] if the input directory is missing.
/// * [`BenchError::NoInputImages`] if it holds no candidate image file.
/// * Any filesystem, filter or encoding error, which aborts the run.
pub fn run<W: Write>(
    config: &BenchConfig,
    report: &mut ReportWriter<W>,
) -> Result<BenchSummary, BenchError> {
    let inputs = list_images(&config.input_dir)?;
    if inputs.is_empty() {
        return Err(BenchError::NoInputImages(config.input_dir.clone()));
    }

    let pool = WorkerPool::new(config.num_threads)?;
    let parallel = ExecutionStrategy::Parallel(pool);

    std::fs::create_dir_all(&config.sequential_output_dir)?;
    std::fs::create_dir_all(&config.parallel_output_dir)?;

    log::info!(
        "processing {} candidate files from {:?}",
        inputs.len(),
        config.input_dir
    );

    report.header()?;

    let mut summary = BenchSummary::default();
    for path in &inputs {
        let Some(timing) = process_file(path, config, &parallel)? else {
            continue;
        };
        report.row(&timing)?;
        summary.record(timing);
    }

    report.summary(&summary)?;

    Ok(summary)
}

/// Benchmark both pipelines on one file.
///
/// Returns `Ok(None)` when the file cannot be decoded.
pub fn process_file(
    path: &Path,
    config: &BenchConfig,
    parallel_strategy: &ExecutionStrategy,
) -> Result<Option<FileTiming>, BenchError> {
    let Some(file_name) = path.file_name() else {
        return Ok(None);
    };

    let image = match read_image_any_mono8(path) {
        Ok(image) => image,
        Err(err) => {
            log::debug!("skipping {:?}: {}", path, err);
            return Ok(None);
        }
    };

    let mut output_name = OsString::from(&config.output_prefix);
    output_name.push(file_name);

    let serial_strategy = ExecutionStrategy::Serial;
    let (sequential_image, sequential) = timed(serial_strategy.label(), || {
        blur_sharpen(&image, &serial_strategy)
    })?;
    write_image_jpeg_mono8(
        config.sequential_output_dir.join(&output_name),
        &sequential_image,
        config.jpeg_quality,
    )?;

    let (parallel_image, parallel) = timed(parallel_strategy.label(), || {
        blur_sharpen(&image, parallel_strategy)
    })?;
    write_image_jpeg_mono8(
        config.parallel_output_dir.join(&output_name),
        &parallel_image,
        config.jpeg_quality,
    )?;

    log::debug!(
        "{:?}: {} {:?}, {} {:?}",
        file_name,
        sequential.strategy,
        sequential.elapsed,
        parallel.strategy,
        parallel.elapsed
    );

    Ok(Some(FileTiming {
        file_name: file_name.to_string_lossy().into_owned(),
        sequential: sequential.elapsed,
        parallel: parallel.elapsed,
    }))
}
