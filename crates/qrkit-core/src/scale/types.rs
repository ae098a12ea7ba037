//! Core types for image scaling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for scaling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Requested target size is zero.
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    /// Source image has no pixels.
    #[error("Cannot scale an empty image")]
    EmptySource,

    /// Pixel buffer does not match the image dimensions.
    #[error("Pixel buffer does not match {width}x{height} RGB image")]
    BufferMismatch { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation. Keeps module edges hard.
    #[default]
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Lanczos3 interpolation.
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}
