//! QRKit WASM - WebAssembly bindings for QRKit
//!
//! This crate exposes the qrkit-core pipeline to the browser UI that owns
//! the generator form.
//!
//! # Module Structure
//!
//! - `generate` - Form defaults, selector labels and the `generate` entry point
//! - `types` - WASM-compatible wrapper types for image data
//! - `scale` - Output scaling bindings
//! - `export` - PNG encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { generate, default_form } from '@qrkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const result = generate({ ...default_form(), payload: 'https://example.com' });
//! console.log(`Preview ${result.preview.width}x${result.preview.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod generate;
mod logger;
mod scale;
mod types;

// Re-export public types
pub use export::{encode_png, encode_png_from_image};
pub use generate::{default_form, error_correction_labels, generate, JsGeneratedQr};
pub use scale::scale_to_max_dimension;
pub use types::JsRenderedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install();
    log::info!("QRKit WASM {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
