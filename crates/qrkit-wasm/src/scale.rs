//! Image scaling WASM bindings.
//!
//! Exposes the output scaler for shells that re-scale the preview, e.g.
//! when the user drags the output scale slider without regenerating.

use crate::types::{filter_from_u8, JsRenderedImage};
use qrkit_core::scale;
use wasm_bindgen::prelude::*;

/// Scale an image so its larger side equals `target`.
///
/// # Arguments
///
/// * `image` - The source image
/// * `target` - Larger side of the result, in pixels
/// * `filter` - Resize algorithm: 0=Nearest (default), 1=Bilinear, 2=Lanczos3
///
/// # Errors
///
/// Returns an error if `target` is zero or the image is empty.
#[wasm_bindgen]
pub fn scale_to_max_dimension(
    image: &JsRenderedImage,
    target: u32,
    filter: u8,
) -> Result<JsRenderedImage, JsValue> {
    scale::scale_to_max_dimension(&image.to_rendered(), target, filter_from_u8(filter))
        .map(JsRenderedImage::from_rendered)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
