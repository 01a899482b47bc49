//! Decoding the source image and encoding the extracted tile

use crate::io::configuration::LOSSLESS_EXTENSION;
use crate::io::error::{AlgorithmError, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Decode an image file in any format the `image` crate recognizes
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the tile as PNG, regardless of the destination's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_tile(tile: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    tile.save_with_format(path, ImageFormat::Png)
        .map_err(|e| AlgorithmError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Guess whether a file holds lossless data from its extension
pub fn is_lossless_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LOSSLESS_EXTENSION))
}
