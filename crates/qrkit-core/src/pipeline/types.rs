//! Result and error types for the generation pipeline.

use qrcode::types::QrError;
use thiserror::Error;

use crate::export::{ExportError, OutputArtifact};
use crate::render::{RenderError, RenderedImage};
use crate::scale::ScaleError;

/// Rejected input. Shown to the user as a plain message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Payload is empty or only whitespace.
    #[error("Please enter text or a URL to encode.")]
    EmptyPayload,
}

/// Failure while producing the required artifacts. Fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The encoder rejected the payload, e.g. it exceeds symbol capacity.
    #[error("QR encoding failed: {0}")]
    Symbol(#[from] QrError),

    /// The symbol could not be rasterized.
    #[error("Rendering failed: {0}")]
    Raster(#[from] RenderError),

    /// The raster could not be scaled to the output size.
    #[error("Scaling failed: {0}")]
    Scale(#[from] ScaleError),

    /// The PNG download could not be encoded.
    #[error(transparent)]
    Png(#[from] ExportError),
}

/// Any failure of [`generate`](super::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl GenerateError {
    /// Check whether the failure was caused by user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerateError::Validation(_))
    }
}

/// Everything one successful run hands back to the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQr {
    /// Scaled raster for on-screen display. Same pixels as the PNG.
    pub preview: RenderedImage,
    /// Caption for the preview: the payload as entered.
    pub caption: String,
    /// PNG download. Always present.
    pub png: OutputArtifact,
    /// SVG download, absent when the vector pathway failed.
    pub svg: Option<OutputArtifact>,
}

impl GeneratedQr {
    /// All downloadable artifacts, PNG first.
    pub fn artifacts(&self) -> Vec<&OutputArtifact> {
        std::iter::once(&self.png).chain(self.svg.as_ref()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = GenerateError::from(ValidationError::EmptyPayload);
        assert_eq!(err.to_string(), "Please enter text or a URL to encode.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_encoding_error_wraps_encoder_error() {
        let err = GenerateError::from(EncodingError::from(QrError::DataTooLong));
        assert!(!err.is_validation());
        assert!(matches!(
            err,
            GenerateError::Encoding(EncodingError::Symbol(QrError::DataTooLong))
        ));
        assert!(err.to_string().starts_with("QR encoding failed: "));
    }

    #[test]
    fn test_png_error_is_transparent() {
        let inner = ExportError::InvalidDimensions {
            width: 0,
            height: 0,
        };
        let err = EncodingError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
