//! Request types for the generation pipeline.
//!
//! An [`EncodeRequest`] is built fresh for every "Generate" action from the
//! current form state and is never persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scale::FilterType;

/// Smallest module size the form accepts, in pixels.
pub const MIN_MODULE_SIZE: u32 = 2;
/// Largest module size the form accepts, in pixels.
pub const MAX_MODULE_SIZE: u32 = 20;
/// Default module size, in pixels.
pub const DEFAULT_MODULE_SIZE: u32 = 8;

/// Smallest border (quiet zone), in modules.
pub const MIN_BORDER_MODULES: u32 = 0;
/// Largest border (quiet zone), in modules.
pub const MAX_BORDER_MODULES: u32 = 10;
/// Default border (quiet zone), in modules.
pub const DEFAULT_BORDER_MODULES: u32 = 4;

/// Smallest output scale, in pixels.
pub const MIN_OUTPUT_SCALE: u32 = 100;
/// Largest output scale, in pixels.
pub const MAX_OUTPUT_SCALE: u32 = 1200;
/// Default output scale, in pixels.
pub const DEFAULT_OUTPUT_SCALE: u32 = 480;

/// Base name used for downloads when the user leaves the file name blank.
pub const DEFAULT_FILE_NAME: &str = "qr_code";

/// Error returned when a string does not name an error correction level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown error correction level: {0:?}")]
pub struct ParseLevelError(pub String);

/// QR error correction level.
///
/// Each level trades symbol density for the share of the symbol that can be
/// damaged while still decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ErrorCorrectionLevel {
    /// Recovers roughly 7% damage.
    L,
    /// Recovers roughly 15% damage.
    #[default]
    M,
    /// Recovers roughly 25% damage.
    Q,
    /// Recovers roughly 30% damage.
    H,
}

impl ErrorCorrectionLevel {
    /// All levels in increasing order of resilience.
    pub const ALL: [ErrorCorrectionLevel; 4] = [
        ErrorCorrectionLevel::L,
        ErrorCorrectionLevel::M,
        ErrorCorrectionLevel::Q,
        ErrorCorrectionLevel::H,
    ];

    /// Single-letter name of the level.
    pub fn letter(self) -> &'static str {
        match self {
            ErrorCorrectionLevel::L => "L",
            ErrorCorrectionLevel::M => "M",
            ErrorCorrectionLevel::Q => "Q",
            ErrorCorrectionLevel::H => "H",
        }
    }

    /// Label shown in the level selector, e.g. `"M (15%)"`.
    pub fn label(self) -> &'static str {
        match self {
            ErrorCorrectionLevel::L => "L (7%)",
            ErrorCorrectionLevel::M => "M (15%)",
            ErrorCorrectionLevel::Q => "Q (25%)",
            ErrorCorrectionLevel::H => "H (30%)",
        }
    }

    /// Approximate recoverable damage, in percent.
    pub fn recovery_percent(self) -> u8 {
        match self {
            ErrorCorrectionLevel::L => 7,
            ErrorCorrectionLevel::M => 15,
            ErrorCorrectionLevel::Q => 25,
            ErrorCorrectionLevel::H => 30,
        }
    }

    /// Convert to the encoder's level constant.
    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrectionLevel::L => qrcode::EcLevel::L,
            ErrorCorrectionLevel::M => qrcode::EcLevel::M,
            ErrorCorrectionLevel::Q => qrcode::EcLevel::Q,
            ErrorCorrectionLevel::H => qrcode::EcLevel::H,
        }
    }

    /// Convert from the encoder's level constant.
    pub fn from_ec_level(level: qrcode::EcLevel) -> Self {
        match level {
            qrcode::EcLevel::L => ErrorCorrectionLevel::L,
            qrcode::EcLevel::M => ErrorCorrectionLevel::M,
            qrcode::EcLevel::Q => ErrorCorrectionLevel::Q,
            qrcode::EcLevel::H => ErrorCorrectionLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the bare letter or the selector label, case-insensitively.
impl FromStr for ErrorCorrectionLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| {
                level.letter().eq_ignore_ascii_case(trimmed)
                    || level.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl TryFrom<String> for ErrorCorrectionLevel {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ErrorCorrectionLevel> for String {
    fn from(level: ErrorCorrectionLevel) -> Self {
        level.letter().to_string()
    }
}

/// Parameters for one run of the generation pipeline.
///
/// Numeric fields are expected to already be inside their form ranges
/// (see [`crate::form::FormState::to_request`]); the pipeline does not
/// re-validate them beyond rejecting values that would produce an empty image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    /// Text or URL to encode.
    pub payload: String,
    /// Error correction level for the symbol.
    pub error_correction: ErrorCorrectionLevel,
    /// Pixels per module before scaling (2 to 20).
    pub module_size: u32,
    /// Quiet zone width in modules (0 to 10).
    pub border_modules: u32,
    /// Target larger dimension of the PNG, in pixels (100 to 1200).
    pub output_scale: u32,
    /// Base name for the downloadable files, without extension.
    pub file_name: String,
    /// Resampling filter used when scaling to `output_scale`.
    pub filter: FilterType,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            payload: String::new(),
            error_correction: ErrorCorrectionLevel::default(),
            module_size: DEFAULT_MODULE_SIZE,
            border_modules: DEFAULT_BORDER_MODULES,
            output_scale: DEFAULT_OUTPUT_SCALE,
            file_name: DEFAULT_FILE_NAME.to_string(),
            filter: FilterType::default(),
        }
    }
}

impl EncodeRequest {
    /// Create a request for `payload` with default parameters.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Check whether the payload has any non-whitespace content.
    pub fn has_payload(&self) -> bool {
        !self.payload.trim().is_empty()
    }
}
