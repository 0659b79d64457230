//! Crop geometry around foreground content.
//!
//! The computation is a single deterministic pass: extract the foreground
//! bounding box, pad its larger side into a crop size that keeps the
//! image's aspect ratio, center the window, slide it to cover the box
//! within the image bounds, then validate. Every degenerate situation
//! resolves to the full-image rectangle, never to a partial crop.
//!
//! # Algorithm
//!
//! For an image of `W x H` with foreground bounding box `B`:
//!
//! ```text
//! new_width  = trunc(largest_side(B) * (1 + 2 * size_margin))
//! new_height = trunc(new_width * (H / W))
//! x, y       = centered, then slid per axis to cover B
//! ```
//!
//! All size and position computations truncate; nothing rounds. The slide
//! adjustments are applied once per edge, in a fixed order, and are not
//! re-checked against each other; the final containment check routes any
//! combination they cannot satisfy to the fallback.

use crate::mask::{ForegroundMask, ShapeError};
use crate::{CropParams, CropRect};

/// Compute the crop rectangle around a mask's foreground content.
///
/// Returns the uncropped full-image rectangle when the mask has no
/// foreground pixels, when the padded crop would exceed the image along an
/// axis, or when the bounding box cannot be covered within the image
/// bounds. This function never fails.
///
/// # Arguments
///
/// * `mask` - Foreground mask of the image (carries the image dimensions)
/// * `params` - Size and position margins; a position margin larger than
///   the size margin is capped at the size margin
///
/// # Example
///
/// ```
/// use autocrop_core::{compute_crop, CropParams, ForegroundMask};
///
/// // 100x100 image with a single foreground pixel at (50, 50)
/// let mut pixels = vec![0.0f32; 100 * 100 * 3];
/// pixels[(50 * 100 + 50) * 3] = 1.0;
/// let mask = ForegroundMask::from_channels(&pixels, 100, 100, 3).unwrap();
///
/// let rect = compute_crop(&mask, &CropParams::new(0.5, 0.1));
/// assert_eq!((rect.width, rect.height, rect.x, rect.y), (2, 2, 49, 49));
/// ```
pub fn compute_crop(mask: &ForegroundMask, params: &CropParams) -> CropRect {
    let image_width = mask.width() as i64;
    let image_height = mask.height() as i64;
    let uncropped = CropRect::uncropped(mask.width(), mask.height());

    // Position slack cannot exceed size padding
    let params = params.normalized();

    let bbox = match mask.bounding_box() {
        Some(bbox) => bbox,
        None => return uncropped,
    };

    // Pad the larger box side on both sides; the height then follows the
    // image's aspect ratio, not the box's. Divide before multiplying: the
    // order decides where exact ratios land after truncation.
    let largest_side = bbox.largest_side() as f64;
    let new_width = (largest_side + 2.0 * largest_side * params.size_margin) as i64;
    let new_height = (new_width as f64 * (image_height as f64 / image_width as f64)) as i64;

    // Center the window. Floor division makes "coordinate is negative" and
    // "crop exceeds the image along this axis" the same condition.
    let mut x = (image_width - new_width).div_euclid(2);
    let mut y = (image_height - new_height).div_euclid(2);
    if x < 0 || y < 0 {
        return uncropped;
    }

    // Slide the window so it covers the box, clamped to the image bounds,
    // with up to margin_px of slack between box and window edge. Four
    // independent adjustments in a fixed order, no second pass.
    let margin_px = (new_height as f64 * params.pos_margin) as i64;
    let (x_min, y_min) = (bbox.x_min as i64, bbox.y_min as i64);
    let (x_max, y_max) = (bbox.x_max as i64, bbox.y_max as i64);

    if x_min < x {
        x = (x_min - margin_px).max(0);
    }
    if y_min < y {
        y = (y_min - margin_px).max(0);
    }
    if x_max >= x + new_width {
        x = (x_max - new_width + margin_px).min(image_width - new_width);
    }
    if y_max >= y + new_height {
        y = (y_max - new_height + margin_px).min(image_height - new_height);
    }

    // A slide for one edge may have uncovered the opposite edge; that is
    // not retried, it falls back.
    if x_min < x || y_min < y || x_max >= x + new_width || y_max >= y + new_height {
        return uncropped;
    }

    CropRect::new(new_width as u32, new_height as u32, x as u32, y as u32)
}

/// Compute the crop rectangle straight from channel-last float pixel data.
///
/// Convenience wrapper that builds the [`ForegroundMask`] and runs
/// [`compute_crop`] in one call.
///
/// # Errors
///
/// Returns [`ShapeError`] when the buffer does not match the declared
/// dimensions; the geometry itself cannot fail.
pub fn compute_crop_from_channels(
    pixels: &[f32],
    width: u32,
    height: u32,
    channels: u32,
    params: &CropParams,
) -> Result<CropRect, ShapeError> {
    let mask = ForegroundMask::from_channels(pixels, width, height, channels)?;
    Ok(compute_crop(&mask, params))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
