//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core QRKit types,
//! handling the conversion between Rust and JavaScript data representations.

use qrkit_core::render::RenderedImage;
use qrkit_core::scale::FilterType;
use wasm_bindgen::prelude::*;

/// A rendered RGB image wrapper for JavaScript.
///
/// Pixel data stays in WASM memory until `pixels()` copies it out as a
/// `Uint8Array`, e.g. for drawing the preview onto a canvas.
#[wasm_bindgen]
#[derive(Clone)]
pub struct JsRenderedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRenderedImage {
    /// Create a new JsRenderedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRenderedImage {
        JsRenderedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect()
    }
}

impl JsRenderedImage {
    /// Create a JsRenderedImage from a core RenderedImage.
    pub(crate) fn from_rendered(img: RenderedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core RenderedImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_rendered(&self) -> RenderedImage {
        RenderedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (sharp module edges)
/// - 1 = Bilinear
/// - 2 = Lanczos3
///
/// Any other value defaults to Nearest.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        1 => FilterType::Bilinear,
        2 => FilterType::Lanczos3,
        _ => FilterType::Nearest,
    }
}
