use std::path::Path;

use convbench_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as a single channel _(mono8)_.
///
/// The format is detected from the file content, so any format supported by
/// the image crate is accepted regardless of extension. Color images are
/// reduced to luma; alpha is dropped.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A grayscale image with a single channel.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] for missing files,
/// [`IoError::ImageDecodeError`] for unreadable content and
/// [`IoError::EmptyImage`] when the decoded image has no pixels.
pub fn read_image_any_mono8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    if size.area() == 0 {
        return Err(IoError::EmptyImage(file_path));
    }

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}
