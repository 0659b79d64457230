//! Applying a crop rectangle to pixel data.
//!
//! The geometry in [`crate::geometry`] only decides where to crop; this
//! module performs the cut. Rectangles are clamped to the image bounds, so
//! applying any rectangle the geometry returns (including the full-image
//! fallback) is always safe.

use image::{DynamicImage, GenericImageView};

use crate::mask::ShapeError;
use crate::CropRect;

/// Extract a crop rectangle from RGB pixel data.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `rect` - The rectangle to extract, clamped to the image bounds
///
/// # Returns
///
/// A new RGB buffer containing only the cropped region. The output is at
/// least 1x1 pixels.
///
/// # Errors
///
/// Returns [`ShapeError`] when a dimension is zero or the buffer length
/// does not match `width * height * 3`.
pub fn apply_crop(
    pixels: &[u8],
    width: u32,
    height: u32,
    rect: &CropRect,
) -> Result<Vec<u8>, ShapeError> {
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

    // Fast path: the rectangle covers the whole image
    if rect.x == 0 && rect.y == 0 && rect.width >= width && rect.height >= height {
        return Ok(pixels.to_vec());
    }

    let (left, top, out_width, out_height) = clamp_rect(rect, width, height);

    let mut output = vec![0u8; out_width as usize * out_height as usize * 3];
    let row_bytes = out_width as usize * 3;

    // Copy pixel data row by row
    for row in 0..out_height as usize {
        let src_start = ((top as usize + row) * width as usize + left as usize) * 3;
        let dst_start = row * row_bytes;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&pixels[src_start..src_start + row_bytes]);
    }

    Ok(output)
}

/// Extract a crop rectangle from a decoded image.
///
/// The rectangle is clamped to the image bounds; a rectangle covering the
/// whole image returns a copy of the original.
pub fn apply_crop_image(image: &DynamicImage, rect: &CropRect) -> DynamicImage {
    let (width, height) = image.dimensions();

    // Fast path: nothing to cut (also covers the degenerate empty image)
    if width == 0
        || height == 0
        || (rect.x == 0 && rect.y == 0 && rect.width >= width && rect.height >= height)
    {
        return image.clone();
    }

    let (left, top, out_width, out_height) = clamp_rect(rect, width, height);
    image.crop_imm(left, top, out_width, out_height)
}

/// Clamp a rectangle to the bounds of a `width x height` image.
///
/// Returns `(left, top, out_width, out_height)` with the origin inside the
/// image and the output dimensions at least 1x1. Requires non-zero image
/// dimensions.
fn clamp_rect(rect: &CropRect, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let left = rect.x.min(width - 1);
    let top = rect.y.min(height - 1);
    let right = (left as u64 + rect.width as u64).min(width as u64) as u32;
    let bottom = (top as u64 + rect.height as u64).min(height as u64) as u32;

    (left, top, (right - left).max(1), (bottom - top).max(1))
}
