//! The parameter-to-artifact pipeline.
//!
//! One call runs the whole sequence for a single "Generate" action:
//!
//! ```text
//! Idle -> Validating -> (Rejected | Encoding -> Rendering -> Scaling -> Exporting -> Ready)
//! ```
//!
//! The pipeline is a pure function of its [`EncodeRequest`]. It holds no
//! state between runs and performs no I/O; all artifacts are in-memory
//! buffers.
//!
//! # Failure policy
//!
//! Validation and encoding failures abort the run. The SVG download is
//! best-effort: when the vector pathway fails, the run still succeeds with
//! the PNG alone.

mod types;

pub use types::{EncodingError, GenerateError, GeneratedQr, ValidationError};

use log::debug;

use crate::export::{encode_png, ArtifactFormat, OutputArtifact, SvgExporter, VectorExporter};
use crate::render::{render_raster, RasterStyle};
use crate::request::EncodeRequest;
use crate::scale::scale_to_max_dimension;
use crate::symbol::encode_symbol;

/// Generate the preview and downloads for `request`.
///
/// Uses [`SvgExporter`] for the vector download.
///
/// # Errors
///
/// * `GenerateError::Validation` if the payload is empty after trimming.
/// * `GenerateError::Encoding` if the encoder rejects the payload or the
///   raster/PNG stages fail.
pub fn generate(request: &EncodeRequest) -> Result<GeneratedQr, GenerateError> {
    generate_with(request, &SvgExporter)
}

/// Same as [`generate`], with a caller-supplied vector pathway.
pub fn generate_with(
    request: &EncodeRequest,
    vector: &dyn VectorExporter,
) -> Result<GeneratedQr, GenerateError> {
    validate(request)?;

    // The encoder sees the payload as entered; trimming is only for validation.
    let symbol = encode_symbol(&request.payload, request.error_correction)
        .map_err(EncodingError::from)?;
    debug!(
        "Encoded {} bytes as version {} ({}x{} modules, level {})",
        request.payload.len(),
        symbol.version(),
        symbol.width(),
        symbol.width(),
        symbol.level().letter()
    );

    let style = RasterStyle::new(request.module_size, request.border_modules);
    let raster = render_raster(&symbol, &style).map_err(EncodingError::from)?;
    debug!("Rasterized symbol to {}x{}", raster.width, raster.height);

    let preview = scale_to_max_dimension(&raster, request.output_scale, request.filter)
        .map_err(EncodingError::from)?;
    debug!("Scaled preview to {}x{}", preview.width, preview.height);

    let png_bytes =
        encode_png(&preview.pixels, preview.width, preview.height).map_err(EncodingError::from)?;
    let png = OutputArtifact::new(ArtifactFormat::Png, png_bytes, &request.file_name);
    debug!("Exported {} ({} bytes)", png.suggested_file_name, png.len());

    // Vector export is optional; its error is intentionally dropped here.
    let svg = match vector.export_svg(&symbol) {
        Ok(bytes) => {
            let artifact = OutputArtifact::new(ArtifactFormat::Svg, bytes, &request.file_name);
            debug!("Exported {} ({} bytes)", artifact.suggested_file_name, artifact.len());
            Some(artifact)
        }
        Err(e) => {
            debug!("Omitting SVG download: {}", e);
            None
        }
    };

    Ok(GeneratedQr {
        preview,
        caption: request.payload.clone(),
        png,
        svg,
    })
}

/// Reject requests with nothing to encode.
pub fn validate(request: &EncodeRequest) -> Result<(), ValidationError> {
    if request.has_payload() {
        Ok(())
    } else {
        Err(ValidationError::EmptyPayload)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::request::{
        ErrorCorrectionLevel, MAX_BORDER_MODULES, MAX_MODULE_SIZE, MAX_OUTPUT_SCALE,
        MIN_BORDER_MODULES, MIN_MODULE_SIZE, MIN_OUTPUT_SCALE,
    };
    use proptest::prelude::*;

    fn level_strategy() -> impl Strategy<Value = ErrorCorrectionLevel> {
        prop::sample::select(ErrorCorrectionLevel::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Property: valid requests give a square PNG whose side is the output scale.
        #[test]
        fn prop_output_is_square_at_requested_scale(
            payload in "[ -~]{0,60}[!-~]",
            level in level_strategy(),
            module_size in MIN_MODULE_SIZE..=MAX_MODULE_SIZE,
            border_modules in MIN_BORDER_MODULES..=MAX_BORDER_MODULES,
            output_scale in MIN_OUTPUT_SCALE..=MAX_OUTPUT_SCALE,
        ) {
            let req = EncodeRequest {
                error_correction: level,
                module_size,
                border_modules,
                output_scale,
                ..EncodeRequest::new(payload)
            };
            let out = generate(&req).unwrap();

            prop_assert_eq!(out.preview.width, output_scale);
            prop_assert_eq!(out.preview.height, output_scale);
            prop_assert!(out.svg.is_some());
        }

        /// Property: whitespace-only payloads are always rejected.
        #[test]
        fn prop_whitespace_rejected(payload in "[ \t\r\n]{0,20}") {
            let err = generate(&EncodeRequest::new(payload)).unwrap_err();
            prop_assert_eq!(err, GenerateError::Validation(ValidationError::EmptyPayload));
        }
    }
}
