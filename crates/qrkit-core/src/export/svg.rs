//! SVG export for the vector download.

use super::ExportError;
use crate::render::render_svg;
use crate::symbol::QrSymbol;

/// A pathway that turns an encoded symbol into an SVG file.
///
/// The pipeline treats this pathway as optional: any `Err` drops the SVG
/// download and the run still succeeds.
pub trait VectorExporter {
    /// Render `symbol` as SVG file bytes.
    fn export_svg(&self, symbol: &QrSymbol) -> Result<Vec<u8>, ExportError>;
}

/// Default vector pathway backed by the encoder's SVG renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgExporter;

impl VectorExporter for SvgExporter {
    fn export_svg(&self, symbol: &QrSymbol) -> Result<Vec<u8>, ExportError> {
        Ok(render_svg(symbol).into_bytes())
    }
}
