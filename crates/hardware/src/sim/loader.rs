//! Image Loader.
//!
//! Reads a program image from disk. The file must be exactly 2048 bytes:
//! the instruction store followed by the data region.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::LoadError;
use crate::soc::memory::Image;

/// Loads a program image from a file.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be read and
/// [`LoadError::Size`] if it is not exactly 2048 bytes long.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image, LoadError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read image");
    let image = Image::from_bytes(&data)?;
    debug!(
        code_words = image
            .instructions()
            .chunks_exact(4)
            .filter(|word| word.iter().any(|&b| b != 0))
            .count(),
        data_bytes = image.data().iter().filter(|&&b| b != 0).count(),
        "image loaded"
    );
    Ok(image)
}
