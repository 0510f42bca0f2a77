//! Writing rendered images to disk.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{ImageBuffer, TracerError, TracerResult};
use phong_math::color_to_rgb8;

/// Encode `image` and write it to `path`.
///
/// The format follows the file extension. Missing parent directories are
/// created.
pub fn write_image(image: &ImageBuffer, path: &Path) -> TracerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| TracerError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let encoded = RgbImage::from_fn(image.width, image.height, |x, y| {
        Rgb(color_to_rgb8(image.get(x, y)))
    });

    encoded.save(path).map_err(|source| TracerError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })
}
