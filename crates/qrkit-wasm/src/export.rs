//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode RGB pixel data to PNG bytes
//! - [`encode_png_from_image`] - Encode a JsRenderedImage to PNG bytes

use crate::types::JsRenderedImage;
use qrkit_core::export;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    export::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsRenderedImage to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsRenderedImage) -> Result<Vec<u8>, JsValue> {
    let pixels = image.pixels();
    export::encode_png(&pixels, image.width(), image.height())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
