use std::path::Path;

use convbench_image::Image;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::IoError;

/// Writes the given JPEG _(grayscale)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `image` - The image containing the grayscale data.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
///
/// # Errors
///
/// Returns [`IoError::ImageTooLarge`] if either side exceeds `u16::MAX` pixels.
pub fn write_image_jpeg_mono8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
    quality: u8,
) -> Result<(), IoError> {
    let limit = u16::MAX as usize;
    let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::ImageTooLarge(
                image.width(),
                image.height(),
                limit,
            ))
        }
    };

    let encoder = Encoder::new_file(file_path.as_ref(), quality)?;
    encoder.encode(image.as_slice(), width, height, ColorType::Luma)?;

    log::trace!("wrote {:?} ({}x{})", file_path.as_ref(), width, height);

    Ok(())
}
