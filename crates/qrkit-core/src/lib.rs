//! QRKit Core - QR code generation pipeline
//!
//! This crate turns a payload and a handful of visual parameters into a
//! scannable QR code: a scaled RGB preview, a PNG download and, when the
//! vector pathway succeeds, an SVG download.
//!
//! Symbol construction is delegated to the `qrcode` crate and raster work to
//! the `image` crate; this crate validates input, rasterizes, scales and
//! exports.
//!
//! # Examples
//!
//! ```ignore
//! use qrkit_core::{generate, EncodeRequest};
//!
//! let out = generate(&EncodeRequest::new("https://example.com")).unwrap();
//! std::fs::write(&out.png.suggested_file_name, &out.png.bytes).unwrap();
//! ```

pub mod export;
pub mod form;
pub mod pipeline;
pub mod render;
pub mod request;
pub mod scale;
pub mod symbol;

pub use export::{ArtifactFormat, OutputArtifact};
pub use form::FormState;
pub use pipeline::{generate, generate_with, EncodingError, GenerateError, GeneratedQr, ValidationError};
pub use render::RenderedImage;
pub use request::{EncodeRequest, ErrorCorrectionLevel};
pub use scale::FilterType;
pub use symbol::{encode_symbol, QrSymbol};
