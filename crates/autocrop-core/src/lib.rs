//! Autocrop Core - crop geometry around image content
//!
//! This crate computes an axis-aligned crop rectangle around the foreground
//! content of an image: the bounding box of all non-black pixels, padded by
//! a configurable size margin, positioned to stay within the image bounds.
//! The computation is pure and deterministic; whenever a valid crop cannot
//! be established, the full-image rectangle is returned instead.

pub mod apply;
pub mod geometry;
pub mod mask;

pub use apply::{apply_crop, apply_crop_image};
pub use geometry::{compute_crop, compute_crop_from_channels};
pub use mask::{BoundingBox, ForegroundMask, ShapeError};

/// Margin parameters for crop geometry
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropParams {
    /// Fraction of the bounding box's larger side added as padding on each
    /// side of the crop (0.0 to 10.0)
    pub size_margin: f64,
    /// Fraction of the crop height allowed as extra slack when the crop
    /// window is slid to cover the bounding box (0.0 to 10.0)
    pub pos_margin: f64,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            size_margin: 0.5,
            pos_margin: 0.1,
        }
    }
}

impl CropParams {
    /// Lower bound of the documented range for both margins.
    pub const MARGIN_MIN: f64 = 0.0;
    /// Upper bound of the documented range for both margins.
    pub const MARGIN_MAX: f64 = 10.0;

    /// Create parameters from explicit margin values
    pub fn new(size_margin: f64, pos_margin: f64) -> Self {
        Self {
            size_margin,
            pos_margin,
        }
    }

    /// Clamp both margins into the documented range.
    ///
    /// Range enforcement is a host concern; the geometry itself only
    /// normalizes the relation between the two margins.
    pub fn clamped(&self) -> Self {
        Self {
            size_margin: self.size_margin.clamp(Self::MARGIN_MIN, Self::MARGIN_MAX),
            pos_margin: self.pos_margin.clamp(Self::MARGIN_MIN, Self::MARGIN_MAX),
        }
    }

    /// Cap the position margin at the size margin.
    ///
    /// Position slack cannot exceed size padding; a larger value behaves
    /// exactly as if the size margin had been passed.
    pub fn normalized(&self) -> Self {
        let mut params = *self;
        if params.pos_margin > params.size_margin {
            params.pos_margin = params.size_margin;
        }
        params
    }
}

/// Crop rectangle in pixel coordinates.
///
/// `x`/`y` are the top-left corner; the window covers the half-open pixel
/// ranges `[x, x + width)` and `[y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    /// Crop width in pixels
    pub width: u32,
    /// Crop height in pixels
    pub height: u32,
    /// Left edge of the crop window
    pub x: u32,
    /// Top edge of the crop window
    pub y: u32,
}

impl CropRect {
    /// Create a crop rectangle from explicit values
    pub fn new(width: u32, height: u32, x: u32, y: u32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }

    /// The full-image rectangle, the universal fallback value.
    ///
    /// Returned whenever a valid padded and positioned crop cannot be
    /// established for an image of the given dimensions.
    pub fn uncropped(image_width: u32, image_height: u32) -> Self {
        Self {
            width: image_width,
            height: image_height,
            x: 0,
            y: 0,
        }
    }

    /// Check whether this rectangle covers an entire image of the given
    /// dimensions, i.e. whether it equals the uncropped fallback.
    pub fn is_full_image(&self, image_width: u32, image_height: u32) -> bool {
        *self == Self::uncropped(image_width, image_height)
    }

    /// Check whether a bounding box lies entirely within this window.
    ///
    /// Containment is half-open: the inclusive box coordinates must satisfy
    /// `x_max < x + width` and `y_max < y + height`.
    pub fn contains(&self, bbox: &BoundingBox) -> bool {
        bbox.x_min >= self.x
            && bbox.y_min >= self.y
            && (bbox.x_max as u64) < self.x as u64 + self.width as u64
            && (bbox.y_max as u64) < self.y as u64 + self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = CropParams::default();
        assert_eq!(params.size_margin, 0.5);
        assert_eq!(params.pos_margin, 0.1);
    }

    #[test]
    fn test_params_clamped() {
        let params = CropParams::new(12.0, -1.0).clamped();
        assert_eq!(params.size_margin, 10.0);
        assert_eq!(params.pos_margin, 0.0);
    }

    #[test]
    fn test_params_clamped_in_range_unchanged() {
        let params = CropParams::new(0.75, 0.25).clamped();
        assert_eq!(params, CropParams::new(0.75, 0.25));
    }

    #[test]
    fn test_params_normalized_caps_pos_margin() {
        let params = CropParams::new(0.5, 2.0).normalized();
        assert_eq!(params.size_margin, 0.5);
        assert_eq!(params.pos_margin, 0.5);
    }

    #[test]
    fn test_params_normalized_keeps_smaller_pos_margin() {
        let params = CropParams::new(0.5, 0.1).normalized();
        assert_eq!(params, CropParams::new(0.5, 0.1));
    }

    #[test]
    fn test_uncropped_covers_full_image() {
        let rect = CropRect::uncropped(640, 480);
        assert_eq!(rect, CropRect::new(640, 480, 0, 0));
        assert!(rect.is_full_image(640, 480));
        assert!(!rect.is_full_image(640, 481));
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = CropRect::new(10, 10, 5, 5);

        // Box filling the window exactly
        let inside = BoundingBox {
            x_min: 5,
            y_min: 5,
            x_max: 14,
            y_max: 14,
        };
        assert!(rect.contains(&inside));

        // One past the right edge: index 15 is outside [5, 15)
        let outside = BoundingBox {
            x_min: 5,
            y_min: 5,
            x_max: 15,
            y_max: 14,
        };
        assert!(!rect.contains(&outside));
    }

    #[test]
    fn test_contains_rejects_box_left_of_window() {
        let rect = CropRect::new(10, 10, 5, 5);
        let bbox = BoundingBox {
            x_min: 4,
            y_min: 5,
            x_max: 9,
            y_max: 9,
        };
        assert!(!rect.contains(&bbox));
    }
}
