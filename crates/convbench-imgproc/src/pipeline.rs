use convbench_image::Image;

use crate::{
    filter::{filter3x3, kernels::FilterKernel, FilterError},
    parallel::ExecutionStrategy,
};

/// The stages of the benchmark pipeline, in application order.
pub const PIPELINE_STAGES: [FilterKernel; 2] = [FilterKernel::Blur, FilterKernel::Sharpen];

/// Apply a sequence of kernels, feeding each output into the next stage.
///
/// Every stage runs with the same `strategy`. Intermediate buffers are dropped
/// as soon as the next stage has consumed them. An empty `stages` slice
/// returns a copy of `src`.
pub fn run_stages(
    src: &Image<u8, 1>,
    stages: &[FilterKernel],
    strategy: &ExecutionStrategy,
) -> Result<Image<u8, 1>, FilterError> {
    let Some((first, rest)) = stages.split_first() else {
        return Ok(src.clone());
    };

    let mut current = filter3x3(src, first.kernel(), strategy)?;
    for stage in rest {
        log::trace!("running {} stage ({})", stage.name(), strategy.label());
        current = filter3x3(&current, stage.kernel(), strategy)?;
    }

    Ok(current)
}

/// Blur an image and then sharpen the result.
///
/// # Arguments
///
/// * `src` - The source grayscale image.
/// * `strategy` - The execution strategy used for both stages.
///
/// # Returns
///
/// A new image; `src` is left untouched.
///
/// # Examples
///
/// ```
/// use convbench_image::Image;
/// use convbench_imgproc::{parallel::ExecutionStrategy, pipeline::blur_sharpen};
///
/// let src = Image::<u8, 1>::from_size_val([8, 8].into(), 42).unwrap();
/// let dst = blur_sharpen(&src, &ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.size(), src.size());
/// ```
pub fn blur_sharpen(
    src: &Image<u8, 1>,
    strategy: &ExecutionStrategy,
) -> Result<Image<u8, 1>, FilterError> {
    run_stages(src, &PIPELINE_STAGES, strategy)
}
