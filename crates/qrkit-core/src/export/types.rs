//! Core types for artifact export.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::DEFAULT_FILE_NAME;

/// Errors that can occur while exporting an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ArtifactFormat,
        message: String,
    },

    /// The export pathway is not available in this build or environment
    #[error("{0} export is unavailable")]
    Unavailable(ArtifactFormat),
}

/// File format of a downloadable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactFormat {
    /// Portable Network Graphics raster.
    Png,
    /// Scalable Vector Graphics document.
    Svg,
}

impl ArtifactFormat {
    /// MIME type sent with the download.
    pub fn mime_type(self) -> &'static str {
        match self {
            ArtifactFormat::Png => "image/png",
            ArtifactFormat::Svg => "image/svg+xml",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Png => "png",
            ArtifactFormat::Svg => "svg",
        }
    }
}

impl std::fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactFormat::Png => f.write_str("PNG"),
            ArtifactFormat::Svg => f.write_str("SVG"),
        }
    }
}

/// A downloadable file produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    /// Format of `bytes`.
    pub format: ArtifactFormat,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
    /// File name offered to the browser, including extension.
    pub suggested_file_name: String,
}

impl OutputArtifact {
    /// Create an artifact named `<base_name>.<extension>`.
    ///
    /// A blank base name falls back to `qr_code`.
    pub fn new(format: ArtifactFormat, bytes: Vec<u8>, base_name: &str) -> Self {
        let base = base_name.trim();
        let base = if base.is_empty() { DEFAULT_FILE_NAME } else { base };
        Self {
            format,
            bytes,
            suggested_file_name: format!("{}.{}", base, format.extension()),
        }
    }

    /// MIME type of the artifact.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Size of the encoded file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the artifact has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mime_types() {
        assert_eq!(ArtifactFormat::Png.mime_type(), "image/png");
        assert_eq!(ArtifactFormat::Svg.mime_type(), "image/svg+xml");
    }

    #[test]
    fn test_artifact_file_names() {
        let png = OutputArtifact::new(ArtifactFormat::Png, vec![1, 2, 3], "qr_code");
        assert_eq!(png.suggested_file_name, "qr_code.png");
        assert_eq!(png.mime_type(), "image/png");
        assert_eq!(png.len(), 3);

        let svg = OutputArtifact::new(ArtifactFormat::Svg, vec![], "ticket");
        assert_eq!(svg.suggested_file_name, "ticket.svg");
        assert!(svg.is_empty());
    }

    #[test]
    fn test_blank_file_name_falls_back() {
        let png = OutputArtifact::new(ArtifactFormat::Png, vec![], "   ");
        assert_eq!(png.suggested_file_name, "qr_code.png");
    }

    #[test]
    fn test_file_name_is_trimmed() {
        let svg = OutputArtifact::new(ArtifactFormat::Svg, vec![], " menu ");
        assert_eq!(svg.suggested_file_name, "menu.svg");
    }

    #[test]
    fn test_export_error_display() {
        let err = ExportError::EncodingFailed {
            format: ArtifactFormat::Png,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "PNG encoding failed: boom");
        assert_eq!(
            ExportError::Unavailable(ArtifactFormat::Svg).to_string(),
            "SVG export is unavailable"
        );
    }
}
