//! Form state owned by the presentation shell.
//!
//! The shell keeps a [`FormState`], reads it once per "Generate" action and
//! hands it over as a fresh [`EncodeRequest`]. Sliders clamp their values,
//! so [`FormState::to_request`] applies the same ranges before anything
//! reaches the pipeline.

use serde::{Deserialize, Serialize};

use crate::request::{
    EncodeRequest, ErrorCorrectionLevel, DEFAULT_BORDER_MODULES, DEFAULT_FILE_NAME,
    DEFAULT_MODULE_SIZE, DEFAULT_OUTPUT_SCALE, MAX_BORDER_MODULES, MAX_MODULE_SIZE,
    MAX_OUTPUT_SCALE, MIN_BORDER_MODULES, MIN_MODULE_SIZE, MIN_OUTPUT_SCALE,
};
use crate::scale::FilterType;

/// Current values of the generator form.
///
/// Deserializes from partial objects; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    /// Text or URL to encode
    pub payload: String,
    /// Error correction selection (`"M"` or `"M (15%)"`)
    pub error_correction: ErrorCorrectionLevel,
    /// Box size slider, pixels per module (2 to 20)
    pub module_size: u32,
    /// Border slider, in modules (0 to 10)
    pub border_modules: u32,
    /// Output scale slider, in pixels (100 to 1200)
    pub output_scale: u32,
    /// Desired download name without extension
    pub file_name: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            payload: String::new(),
            error_correction: ErrorCorrectionLevel::M,
            module_size: DEFAULT_MODULE_SIZE,
            border_modules: DEFAULT_BORDER_MODULES,
            output_scale: DEFAULT_OUTPUT_SCALE,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl FormState {
    /// Create a form with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this form with every slider inside its range.
    pub fn clamped(&self) -> Self {
        Self {
            module_size: self.module_size.clamp(MIN_MODULE_SIZE, MAX_MODULE_SIZE),
            border_modules: self
                .border_modules
                .clamp(MIN_BORDER_MODULES, MAX_BORDER_MODULES),
            output_scale: self.output_scale.clamp(MIN_OUTPUT_SCALE, MAX_OUTPUT_SCALE),
            ..self.clone()
        }
    }

    /// Build the request for one pipeline run.
    pub fn to_request(&self) -> EncodeRequest {
        let form = self.clamped();
        EncodeRequest {
            payload: form.payload,
            error_correction: form.error_correction,
            module_size: form.module_size,
            border_modules: form.border_modules,
            output_scale: form.output_scale,
            file_name: form.file_name,
            filter: FilterType::default(),
        }
    }
}
