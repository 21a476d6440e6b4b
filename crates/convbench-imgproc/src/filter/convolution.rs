use std::ops::Range;

use convbench_image::Image;

use super::{kernels::Kernel3x3, FilterError};
use crate::parallel::{partition_even, ExecutionStrategy, WorkerPool};

/// Weighted 3x3 sum around the interior pixel `(x, y)`, divided and clamped.
///
/// PRECONDITION: `1 <= x < width - 1` and `1 <= y < height - 1`.
#[inline]
fn convolve_pixel(src: &[u8], width: usize, x: usize, y: usize, kernel: &Kernel3x3) -> u8 {
    let mut sum = 0i32;
    for (ky, row) in kernel.weights().iter().enumerate() {
        let offset = (y + ky - 1) * width + x - 1;
        for (kx, &weight) in row.iter().enumerate() {
            sum += i32::from(src[offset + kx]) * weight;
        }
    }
    // integer division truncates towards zero
    (sum / kernel.divisor()).clamp(0, 255) as u8
}

/// Allocate the zeroed output and report whether any interior pixel exists.
fn prepare_output(
    src: &Image<u8, 1>,
    kernel: &Kernel3x3,
) -> Result<(Image<u8, 1>, bool), FilterError> {
    if kernel.divisor() == 0 {
        return Err(FilterError::ZeroDivisor);
    }
    let dst = Image::from_size_val(src.size(), 0u8)?;
    let has_interior = src.width() >= 3 && src.height() >= 3;
    Ok((dst, has_interior))
}

/// Apply a 3x3 kernel to a grayscale image with the given execution strategy.
///
/// The output has the size of `src` and is always a freshly allocated buffer.
/// Only interior pixels (`1 <= x <= W-2`, `1 <= y <= H-2`) are written; the
/// outermost rows and columns stay zero. Images narrower or shorter than three
/// pixels produce an all-zero output.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 1).
/// * `kernel` - The kernel to apply.
/// * `strategy` - How to schedule the per-pixel work.
///
/// # Returns
///
/// The filtered image. Every strategy produces the same pixels.
///
/// # Errors
///
/// Returns [`FilterError::ZeroDivisor`] if the kernel divisor is zero.
///
/// # Examples
///
/// ```
/// use convbench_image::Image;
/// use convbench_imgproc::filter::{filter3x3, kernels::BLUR};
/// use convbench_imgproc::parallel::ExecutionStrategy;
///
/// let src = Image::<u8, 1>::from_size_val([5, 5].into(), 100).unwrap();
/// let dst = filter3x3(&src, &BLUR, &ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.get_pixel(2, 2, 0).unwrap(), 100);
/// assert_eq!(dst.get_pixel(0, 2, 0).unwrap(), 0);
/// ```
pub fn filter3x3(
    src: &Image<u8, 1>,
    kernel: &Kernel3x3,
    strategy: &ExecutionStrategy,
) -> Result<Image<u8, 1>, FilterError> {
    match strategy {
        ExecutionStrategy::Serial => filter3x3_serial(src, kernel),
        ExecutionStrategy::Parallel(pool) => filter3x3_parallel(src, kernel, pool),
    }
}

/// Apply a 3x3 kernel on the current thread, visiting pixels in row-major order.
pub fn filter3x3_serial(
    src: &Image<u8, 1>,
    kernel: &Kernel3x3,
) -> Result<Image<u8, 1>, FilterError> {
    let (mut dst, has_interior) = prepare_output(src, kernel)?;
    if !has_interior {
        return Ok(dst);
    }

    let (width, height) = (src.width(), src.height());
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            dst_data[y * width + x] = convolve_pixel(src_data, width, x, y, kernel);
        }
    }

    Ok(dst)
}

/// Apply a 3x3 kernel using a static split of the interior pixels.
///
/// The interior `(y, x)` iteration space is flattened and split into one
/// contiguous range per worker. Each worker writes only the output span that
/// covers its range, so the output needs no locking; the source is shared
/// read-only. Returns once every worker has finished.
pub fn filter3x3_parallel(
    src: &Image<u8, 1>,
    kernel: &Kernel3x3,
    pool: &WorkerPool,
) -> Result<Image<u8, 1>, FilterError> {
    let (mut dst, has_interior) = prepare_output(src, kernel)?;
    if !has_interior {
        return Ok(dst);
    }

    let (width, height) = (src.width(), src.height());
    let inner_width = width - 2;
    let interior_len = inner_width * (height - 2);

    // flat interior index -> (x, y)
    let coords = |i: usize| (1 + i % inner_width, 1 + i / inner_width);
    let linear = |i: usize| {
        let (x, y) = coords(i);
        y * width + x
    };

    let ranges = partition_even(interior_len, pool.num_threads());
    let spans: Vec<Range<usize>> = ranges
        .iter()
        .map(|r| linear(r.start)..linear(r.end - 1) + 1)
        .collect();

    log::trace!(
        "filter3x3_parallel: {} interior pixels over {} spans",
        interior_len,
        spans.len()
    );

    let src_data = src.as_slice();
    pool.for_each_span(dst.as_slice_mut(), &spans, |k, chunk| {
        let base = spans[k].start;
        for i in ranges[k].clone() {
            let (x, y) = coords(i);
            chunk[y * width + x - base] = convolve_pixel(src_data, width, x, y, kernel);
        }
    })?;

    Ok(dst)
}
