//! Row and column sampling from a decoded image

use crate::io::error::{Result, invalid_parameter};
use crate::math::Color;
use image::{ImageBuffer, Rgba};

/// Source image at the precision periods are detected in
pub type SampleImage = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Direction a line runs through the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A horizontal line at a fixed `y`; its period governs tile width
    Row,
    /// A vertical line at a fixed `x`; its period governs tile height
    Column,
}

impl Axis {
    /// Short label used in reports and progress output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Row => "Row",
            Self::Column => "Col",
        }
    }

    /// Number of lines along this axis (image height for rows, width for columns)
    pub fn line_count(self, image: &SampleImage) -> usize {
        let (width, height) = image.dimensions();
        match self {
            Self::Row => height as usize,
            Self::Column => width as usize,
        }
    }

    /// Number of pixels in each line along this axis
    pub fn line_length(self, image: &SampleImage) -> usize {
        let (width, height) = image.dimensions();
        match self {
            Self::Row => width as usize,
            Self::Column => height as usize,
        }
    }
}

/// Read one row or column as an ordered color sequence
///
/// Pixels are visited once each, in increasing coordinate order.
///
/// # Errors
///
/// Returns an error if `index` is not a valid line on `axis`
pub fn sample_line(image: &SampleImage, axis: Axis, index: usize) -> Result<Vec<Color>> {
    let count = axis.line_count(image);
    if index >= count {
        return Err(invalid_parameter(
            "line index",
            &index,
            &format!("{} axis only has {count} lines", axis.label()),
        ));
    }

    let fixed = index as u32;
    let length = axis.line_length(image) as u32;
    let line: Vec<Color> = match axis {
        Axis::Row => (0..length)
            .filter_map(|x| image.get_pixel_checked(x, fixed))
            .map(|pixel| Color::from(*pixel))
            .collect(),
        Axis::Column => (0..length)
            .filter_map(|y| image.get_pixel_checked(fixed, y))
            .map(|pixel| Color::from(*pixel))
            .collect(),
    };

    Ok(line)
}
