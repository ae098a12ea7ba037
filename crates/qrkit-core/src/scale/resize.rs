//! Resize functions for the output scaling step.
//!
//! Uses the `image` crate's resampling. The uniform scale factor is applied
//! in integer arithmetic so the larger side lands exactly on the target.

use super::{FilterType, ScaleError};
use crate::render::RenderedImage;

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `ScaleError::InvalidTarget` for a zero target dimension and
/// `ScaleError::BufferMismatch` if the source pixels do not match its size.
pub fn resize(
    image: &RenderedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RenderedImage, ScaleError> {
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidTarget { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image().ok_or(ScaleError::BufferMismatch {
        width: image.width,
        height: image.height,
    })?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(RenderedImage::from_rgb_image(resized))
}

/// Scale an image uniformly so its larger side equals `target`.
///
/// The factor is `target / max(width, height)` and both sides are scaled by
/// it, rounding down. Unlike a fit-within resize this also upsamples: a
/// 232px symbol asked for 480px comes back at 480x480.
///
/// # Errors
///
/// Returns `ScaleError::InvalidTarget` if `target` is zero and
/// `ScaleError::EmptySource` if the image has no pixels.
pub fn scale_to_max_dimension(
    image: &RenderedImage,
    target: u32,
    filter: FilterType,
) -> Result<RenderedImage, ScaleError> {
    if target == 0 {
        return Err(ScaleError::InvalidTarget {
            width: target,
            height: target,
        });
    }
    if image.is_empty() {
        return Err(ScaleError::EmptySource);
    }

    let (new_width, new_height) = fit_dimensions(image.width, image.height, target);

    resize(image, new_width, new_height, filter)
}

/// Calculate dimensions scaled by `target / max(width, height)`.
///
/// Each side is floored, and a side that would floor to zero is kept at one
/// pixel. Zero-sized input yields `(0, 0)`.
pub fn fit_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let longest = u64::from(width.max(height));
    let scale_side = |side: u32| -> u32 {
        let scaled = u64::from(side) * u64::from(target) / longest;
        // scaled <= target, which fits in u32
        (scaled as u32).max(1)
    };

    (scale_side(width), scale_side(height))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the larger output side always equals the target.
        #[test]
        fn prop_larger_side_matches_target(
            width in 1u32..=4000,
            height in 1u32..=4000,
            target in 1u32..=2000,
        ) {
            let (w, h) = fit_dimensions(width, height, target);
            prop_assert_eq!(w.max(h), target);
        }

        /// Property: square inputs produce square outputs.
        #[test]
        fn prop_square_stays_square(side in 1u32..=4000, target in 1u32..=2000) {
            let (w, h) = fit_dimensions(side, side, target);
            prop_assert_eq!(w, h);
            prop_assert_eq!(w, target);
        }

        /// Property: the shorter side is the floor of the exact scaled value.
        #[test]
        fn prop_shorter_side_is_floored(
            long in 1u32..=4000,
            short_num in 1u32..=100,
            target in 1u32..=2000,
        ) {
            let short = (long * short_num / 100).max(1);
            let (w, h) = fit_dimensions(long, short, target);
            let exact = short as f64 * target as f64 / long as f64;
            prop_assert_eq!(w, target);
            prop_assert!(h as f64 <= exact.max(1.0));
            prop_assert!((exact - h as f64) < 1.0);
        }

        /// Property: scaling real images honors the computed dimensions.
        #[test]
        fn prop_scaled_image_dimensions(
            side in 1u32..=64,
            target in 100u32..=300,
        ) {
            let img = RenderedImage::new(side, side, vec![255u8; (side * side * 3) as usize]);
            let scaled = scale_to_max_dimension(&img, target, FilterType::Nearest).unwrap();
            prop_assert_eq!(scaled.width, target);
            prop_assert_eq!(scaled.height, target);
            prop_assert_eq!(scaled.pixels.len(), (target * target * 3) as usize);
        }
    }
}
