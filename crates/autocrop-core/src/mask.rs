//! Foreground mask extraction and bounding-box scan.
//!
//! A pixel is foreground when the average of its first three channel values
//! is greater than zero; alpha and any further channels are ignored. The
//! mask is a plain boolean grid with the same dimensions as the image, built
//! once per invocation and discarded after the bounding box is extracted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for pixel buffer shape validation.
///
/// The crop geometry itself never fails; these errors only arise at the
/// boundary where raw pixel data enters the crate.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The image has a zero width or height.
    #[error("Image has zero width or height")]
    EmptyImage,

    /// The image has no channels.
    #[error("Image has zero channels")]
    NoChannels,

    /// The pixel buffer does not match the declared dimensions.
    #[error("Pixel buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Axis-aligned bounding box in inclusive pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Leftmost foreground column
    pub x_min: u32,
    /// Topmost foreground row
    pub y_min: u32,
    /// Rightmost foreground column (inclusive)
    pub x_max: u32,
    /// Bottommost foreground row (inclusive)
    pub y_max: u32,
}

impl BoundingBox {
    /// Box width in pixels (inclusive coordinates, so `x_max - x_min + 1`)
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    /// Box height in pixels (inclusive coordinates, so `y_max - y_min + 1`)
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }

    /// Length of the larger box side in pixels
    pub fn largest_side(&self) -> u32 {
        self.width().max(self.height())
    }
}

/// Boolean foreground grid derived from an image's pixel data.
#[derive(Debug, Clone)]
pub struct ForegroundMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl ForegroundMask {
    /// Build a mask from channel-last float pixel data.
    ///
    /// `pixels` is row-major with `channels` interleaved values per pixel.
    /// A pixel is foreground when the mean of its first `min(channels, 3)`
    /// values is greater than zero, so alpha and any further channels never
    /// contribute.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when a dimension or the channel count is zero,
    /// or when the buffer length does not match
    /// `width * height * channels`.
    pub fn from_channels(
        pixels: &[f32],
        width: u32,
        height: u32,
        channels: u32,
    ) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::EmptyImage);
        }
        if channels == 0 {
            return Err(ShapeError::NoChannels);
        }

        let channels = channels as usize;
        let expected = width as usize * height as usize * channels;
        if pixels.len() != expected {
            return Err(ShapeError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let used = channels.min(3);
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for pixel in pixels.chunks_exact(channels) {
            let mean = pixel[..used].iter().sum::<f32>() / used as f32;
            data.push(mean > 0.0);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a mask from RGB pixel data (3 bytes per pixel, row-major).
    ///
    /// For unsigned data the mean of the channels is positive exactly when
    /// any channel is non-zero, so the predicate reduces to "not pure
    /// black".
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when a dimension is zero or the buffer length
    /// does not match `width * height * 3`.
    pub fn from_rgb8(pixels: &[u8], width: u32, height: u32) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::EmptyImage);
        }

        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(ShapeError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for pixel in pixels.chunks_exact(3) {
            data.push(pixel.iter().any(|&v| v != 0));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a mask from a decoded image.
    ///
    /// The image is converted to RGB first, which drops any alpha channel
    /// and so matches the first-three-channels rule of the other
    /// constructors.
    pub fn from_image(image: &image::DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let data = rgb
            .pixels()
            .map(|pixel| pixel.0.iter().any(|&v| v != 0))
            .collect();

        Self {
            width: rgb.width(),
            height: rgb.height(),
            data,
        }
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the pixel at the given coordinates is foreground.
    ///
    /// Out-of-bounds coordinates are background.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Compute the bounding box of all foreground pixels.
    ///
    /// Returns `None` when the mask contains no foreground pixel at all,
    /// which is the caller's signal to fall back to the uncropped result.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;

        for y in 0..self.height {
            let row_start = y as usize * self.width as usize;
            let row = &self.data[row_start..row_start + self.width as usize];

            for (x, &foreground) in row.iter().enumerate() {
                if !foreground {
                    continue;
                }
                let x = x as u32;
                match bbox.as_mut() {
                    Some(bbox) => {
                        bbox.x_min = bbox.x_min.min(x);
                        bbox.x_max = bbox.x_max.max(x);
                        // Rows are scanned top to bottom
                        bbox.y_max = y;
                    }
                    None => {
                        bbox = Some(BoundingBox {
                            x_min: x,
                            y_min: y,
                            x_max: x,
                            y_max: y,
                        });
                    }
                }
            }
        }

        bbox
    }
}
