use std::path::{Path, PathBuf};

use crate::error::BenchError;

/// File extensions picked up from the input directory.
///
/// Matching is case-sensitive: `photo.JPG` is not an input.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Whether the path carries one of the [`IMAGE_EXTENSIONS`].
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// List the candidate image files directly inside `dir`.
///
/// Subdirectories are not visited. The result is sorted by path so that the
/// report order does not depend on the filesystem.
///
/// # Errors
///
/// Returns [`BenchError::InputDirNotFound`] if `dir` does not exist or is not
/// a directory.
pub fn list_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, BenchError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(BenchError::InputDirNotFound(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            images.push(path);
        } else {
            log::trace!("ignoring {:?}", path);
        }
    }
    images.sort();

    Ok(images)
}
