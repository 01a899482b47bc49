//! Tile rectangle arithmetic and extraction from the source image

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use image::DynamicImage;

/// Everything needed to cut one tile out of the source image
///
/// The row period is the horizontal repeat and so becomes the tile width;
/// the column period becomes the tile height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    /// Period detected along rows
    pub row_period: usize,
    /// Period detected along columns
    pub col_period: usize,
    /// Left edge of the crop
    pub offset_x: u32,
    /// Top edge of the crop
    pub offset_y: u32,
}

impl TileSpec {
    /// Tile width in pixels
    pub const fn width(&self) -> usize {
        self.row_period
    }

    /// Tile height in pixels
    pub const fn height(&self) -> usize {
        self.col_period
    }

    /// Check the tile rectangle against image dimensions
    ///
    /// Returns `(x, y, width, height)` ready for cropping.
    ///
    /// # Errors
    ///
    /// Returns an error if either period is zero, or if the rectangle
    /// reaches past the right or bottom edge of the image
    pub fn rectangle(&self, image_width: u32, image_height: u32) -> Result<(u32, u32, u32, u32)> {
        if self.row_period == 0 || self.col_period == 0 {
            return Err(invalid_parameter(
                "tile size",
                &format!("{}x{}", self.width(), self.height()),
                &"tile dimensions must be positive",
            ));
        }

        let fits = |offset: u32, extent: usize, limit: u32| {
            u32::try_from(extent)
                .ok()
                .filter(|&extent| offset.checked_add(extent).is_some_and(|end| end <= limit))
        };

        match (
            fits(self.offset_x, self.width(), image_width),
            fits(self.offset_y, self.height(), image_height),
        ) {
            (Some(width), Some(height)) => Ok((self.offset_x, self.offset_y, width, height)),
            _ => Err(AlgorithmError::TileOutOfBounds {
                offset: (self.offset_x, self.offset_y),
                size: (self.width(), self.height()),
                image: (image_width, image_height),
            }),
        }
    }
}

/// Copy the tile rectangle into a new image of exactly the tile's size
///
/// The tile keeps the source's pixel format, so alpha and bit depth pass
/// through untouched.
///
/// # Errors
///
/// Returns an error if the rectangle does not lie entirely inside the image
pub fn extract_tile(image: &DynamicImage, spec: &TileSpec) -> Result<DynamicImage> {
    let (x, y, width, height) = spec.rectangle(image.width(), image.height())?;
    Ok(image.crop_imm(x, y, width, height))
}
