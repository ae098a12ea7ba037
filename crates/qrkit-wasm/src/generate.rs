//! QR generation WASM bindings.
//!
//! This module is the boundary with the presentation shell: the UI sends its
//! current form values, and gets back the preview image, its caption and the
//! download artifacts.
//!
//! # Functions
//!
//! - [`generate`] - Run the full pipeline for one "Generate" press
//! - [`default_form`] - Initial form values for the UI
//! - [`error_correction_labels`] - Options for the error correction selector
//!
//! # Example
//!
//! ```typescript
//! import { generate, default_form } from '@qrkit/wasm';
//!
//! const form = { ...default_form(), payload: textArea.value };
//! try {
//!   const result = generate(form);
//!   drawPreview(result.preview, result.caption);
//!   offerDownload(result.png_bytes(), result.png_file_name, result.png_mime);
//!   if (result.has_svg) {
//!     offerDownload(result.svg_bytes(), result.svg_file_name, result.svg_mime);
//!   }
//! } catch (message) {
//!   showError(message); // "Please enter text or a URL to encode."
//! }
//! ```

use crate::types::JsRenderedImage;
use qrkit_core::export::OutputArtifact;
use qrkit_core::{pipeline, ErrorCorrectionLevel, FormState, GenerateError, GeneratedQr};
use wasm_bindgen::prelude::*;

/// Result of one successful generation, accessible from JavaScript.
#[wasm_bindgen]
pub struct JsGeneratedQr {
    preview: JsRenderedImage,
    caption: String,
    png: OutputArtifact,
    svg: Option<OutputArtifact>,
}

#[wasm_bindgen]
impl JsGeneratedQr {
    /// Scaled preview image (same pixels as the PNG download).
    #[wasm_bindgen(getter)]
    pub fn preview(&self) -> JsRenderedImage {
        self.preview.clone()
    }

    /// Caption for the preview: the payload as entered.
    #[wasm_bindgen(getter)]
    pub fn caption(&self) -> String {
        self.caption.clone()
    }

    /// PNG file contents.
    pub fn png_bytes(&self) -> Vec<u8> {
        self.png.bytes.clone()
    }

    /// Suggested PNG file name, e.g. `qr_code.png`.
    #[wasm_bindgen(getter)]
    pub fn png_file_name(&self) -> String {
        self.png.suggested_file_name.clone()
    }

    /// PNG MIME type.
    #[wasm_bindgen(getter)]
    pub fn png_mime(&self) -> String {
        self.png.mime_type().to_string()
    }

    /// Whether an SVG download is available.
    #[wasm_bindgen(getter)]
    pub fn has_svg(&self) -> bool {
        self.svg.is_some()
    }

    /// SVG file contents, if vector export succeeded.
    pub fn svg_bytes(&self) -> Option<Vec<u8>> {
        self.svg.as_ref().map(|a| a.bytes.clone())
    }

    /// Suggested SVG file name, if vector export succeeded.
    #[wasm_bindgen(getter)]
    pub fn svg_file_name(&self) -> Option<String> {
        self.svg.as_ref().map(|a| a.suggested_file_name.clone())
    }

    /// SVG MIME type, if vector export succeeded.
    #[wasm_bindgen(getter)]
    pub fn svg_mime(&self) -> Option<String> {
        self.svg.as_ref().map(|a| a.mime_type().to_string())
    }
}

impl JsGeneratedQr {
    pub(crate) fn from_generated(generated: GeneratedQr) -> Self {
        Self {
            preview: JsRenderedImage::from_rendered(generated.preview),
            caption: generated.caption,
            png: generated.png,
            svg: generated.svg,
        }
    }
}

/// Run the pipeline for a form snapshot.
pub(crate) fn generate_from_form(form: &FormState) -> Result<JsGeneratedQr, GenerateError> {
    pipeline::generate(&form.to_request()).map(JsGeneratedQr::from_generated)
}

/// Generate a QR code from the current form values.
///
/// # Arguments
///
/// * `form` - A plain object with any of `payload`, `error_correction`
///   (`"M"` or `"M (15%)"`), `module_size`, `border_modules`, `output_scale`
///   and `file_name`. Missing fields take their defaults; sliders are clamped
///   to their ranges.
///
/// # Errors
///
/// Throws the error message as a string:
/// - `"Please enter text or a URL to encode."` for an empty payload
/// - an encoding message when the payload does not fit in a QR symbol
#[wasm_bindgen]
pub fn generate(form: JsValue) -> Result<JsGeneratedQr, JsValue> {
    let form: FormState = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Invalid form: {}", e)))?;
    generate_from_form(&form).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the initial form values.
#[wasm_bindgen]
pub fn default_form() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&FormState::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the error correction selector labels, lowest level first.
#[wasm_bindgen]
pub fn error_correction_labels() -> js_sys::Array {
    ErrorCorrectionLevel::ALL
        .iter()
        .map(|level| JsValue::from_str(level.label()))
        .collect()
}

/// Tests for generate bindings.
///
/// Functions returning `JsValue` only work on wasm32 targets, so these tests
/// go through `generate_from_form`.
#[cfg(test)]
mod tests {
    use super::*;
    use qrkit_core::ValidationError;

    #[test]
    fn test_generate_from_default_form_with_payload() {
        let form = FormState {
            payload: "HELLO".to_string(),
            ..FormState::default()
        };
        let result = generate_from_form(&form).unwrap();

        assert_eq!(result.caption(), "HELLO");
        assert_eq!(result.preview().width(), 480);
        assert_eq!(result.preview().height(), 480);
        assert_eq!(result.png_file_name(), "qr_code.png");
        assert_eq!(result.png_mime(), "image/png");
        assert_eq!(&result.png_bytes()[1..4], b"PNG");
        assert!(result.has_svg());
        assert_eq!(result.svg_file_name().as_deref(), Some("qr_code.svg"));
        assert_eq!(result.svg_mime().as_deref(), Some("image/svg+xml"));
    }

    #[test]
    fn test_generate_clamps_sliders() {
        let form = FormState {
            payload: "HELLO".to_string(),
            output_scale: 9999,
            module_size: 1,
            ..FormState::default()
        };
        let result = generate_from_form(&form).unwrap();
        assert_eq!(result.preview().width(), 1200);
    }

    #[test]
    fn test_generate_empty_payload() {
        let err = generate_from_form(&FormState::default()).err().unwrap();
        assert_eq!(err, GenerateError::Validation(ValidationError::EmptyPayload));
        assert_eq!(err.to_string(), "Please enter text or a URL to encode.");
    }

    #[test]
    fn test_generate_custom_file_name() {
        let form = FormState {
            payload: "HELLO".to_string(),
            file_name: "flyer".to_string(),
            ..FormState::default()
        };
        let result = generate_from_form(&form).unwrap();
        assert_eq!(result.png_file_name(), "flyer.png");
        assert_eq!(result.svg_file_name().as_deref(), Some("flyer.svg"));
    }
}
