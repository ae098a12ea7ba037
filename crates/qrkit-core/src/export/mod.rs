//! Artifact export for QRKit.
//!
//! This module provides functionality for:
//! - Encoding a scaled raster to PNG bytes
//! - Producing the SVG download from an encoded symbol
//! - Naming downloadable artifacts and reporting their MIME types
//!
//! PNG export is required for every run; SVG export is best-effort and its
//! failures are handled by the pipeline, not here.
//!
//! # Examples
//!
//! ```ignore
//! use qrkit_core::export::encode_png;
//!
//! let pixels = vec![255u8; 100 * 100 * 3]; // White image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;
mod svg;
mod types;

pub use png::encode_png;
pub use svg::{SvgExporter, VectorExporter};
pub use types::{ArtifactFormat, ExportError, OutputArtifact};
