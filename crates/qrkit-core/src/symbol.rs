//! Encoder adapter over the `qrcode` crate.
//!
//! Symbol construction (mode selection, Reed-Solomon coding, masking) is
//! entirely the encoder's job. This module only picks the level, lets the
//! encoder grow the version until the payload fits, and exposes the
//! resulting module matrix.

use std::fmt;

use qrcode::types::QrError;
use qrcode::{Color, QrCode, Version};

use crate::request::ErrorCorrectionLevel;

/// An encoded QR symbol: a square grid of dark and light modules.
#[derive(Clone)]
pub struct QrSymbol {
    code: QrCode,
    level: ErrorCorrectionLevel,
}

impl QrSymbol {
    /// Width (and height) of the symbol in modules, without quiet zone.
    pub fn width(&self) -> u32 {
        self.code.width() as u32
    }

    /// Symbol version chosen by the encoder (1 to 40).
    pub fn version(&self) -> i16 {
        match self.code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        }
    }

    /// Error correction level the symbol was built with.
    pub fn level(&self) -> ErrorCorrectionLevel {
        self.level
    }

    /// Check whether the module at column `x`, row `y` is dark.
    ///
    /// Coordinates outside the symbol are light, so quiet-zone lookups
    /// need no special casing.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        let width = self.width();
        if x >= width || y >= width {
            return false;
        }
        self.code[(x as usize, y as usize)] == Color::Dark
    }

    /// Module matrix in row-major order, `true` for dark.
    pub fn modules(&self) -> Vec<bool> {
        self.code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect()
    }

    /// Number of dark modules in the symbol.
    pub fn dark_count(&self) -> usize {
        self.code.to_colors().iter().filter(|&&c| c == Color::Dark).count()
    }

    pub(crate) fn code(&self) -> &QrCode {
        &self.code
    }
}

impl fmt::Debug for QrSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrSymbol")
            .field("version", &self.version())
            .field("width", &self.width())
            .field("level", &self.level)
            .finish()
    }
}

/// Encode `payload` into the smallest symbol that holds it at `level`.
///
/// The payload is encoded as given; callers decide whether to trim it.
///
/// # Errors
///
/// Returns the encoder's `QrError` unchanged, typically
/// `QrError::DataTooLong` when the payload exceeds version 40 capacity.
pub fn encode_symbol(payload: &str, level: ErrorCorrectionLevel) -> Result<QrSymbol, QrError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), level.to_ec_level())?;
    Ok(QrSymbol { code, level })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello_is_version_one() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::M).unwrap();
        assert_eq!(symbol.version(), 1);
        assert_eq!(symbol.width(), 21);
        assert_eq!(symbol.level(), ErrorCorrectionLevel::M);
    }

    #[test]
    fn test_width_follows_version() {
        let symbol = encode_symbol("https://example.com", ErrorCorrectionLevel::H).unwrap();
        assert_eq!(symbol.width(), 17 + 4 * symbol.version() as u32);
    }

    #[test]
    fn test_higher_level_never_shrinks_symbol() {
        let payload = "The quick brown fox jumps over the lazy dog";
        let low = encode_symbol(payload, ErrorCorrectionLevel::L).unwrap();
        let high = encode_symbol(payload, ErrorCorrectionLevel::H).unwrap();
        assert!(high.version() >= low.version());
    }

    #[test]
    fn test_longer_payload_grows_symbol() {
        let short = encode_symbol("hi", ErrorCorrectionLevel::M).unwrap();
        let long = encode_symbol(&"x".repeat(500), ErrorCorrectionLevel::M).unwrap();
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_modules_matrix_shape() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::Q).unwrap();
        let modules = symbol.modules();
        assert_eq!(modules.len(), 21 * 21);
        assert_eq!(modules.iter().filter(|&&d| d).count(), symbol.dark_count());
    }

    #[test]
    fn test_finder_pattern_corners_are_dark() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::M).unwrap();
        let last = symbol.width() - 1;
        assert!(symbol.is_dark(0, 0));
        assert!(symbol.is_dark(last, 0));
        assert!(symbol.is_dark(0, last));
        // Separator next to the top-left finder is light
        assert!(!symbol.is_dark(7, 0));
    }

    #[test]
    fn test_out_of_bounds_is_light() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::M).unwrap();
        assert!(!symbol.is_dark(21, 0));
        assert!(!symbol.is_dark(0, 1000));
    }

    #[test]
    fn test_payload_over_capacity_fails() {
        // Version 40-H holds 1273 bytes
        let payload = "a".repeat(3000);
        let err = encode_symbol(&payload, ErrorCorrectionLevel::H).unwrap_err();
        assert_eq!(err, QrError::DataTooLong);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = encode_symbol("same input", ErrorCorrectionLevel::Q).unwrap();
        let b = encode_symbol("same input", ErrorCorrectionLevel::Q).unwrap();
        assert_eq!(a.modules(), b.modules());
    }

    #[test]
    fn test_debug_shows_geometry() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::L).unwrap();
        let debug = format!("{:?}", symbol);
        assert!(debug.contains("version: 1"));
        assert!(debug.contains("width: 21"));
    }
}
