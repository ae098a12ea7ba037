//! Vector rendering of QR symbols.
//!
//! The document comes from the encoder library's own SVG renderer. It always
//! uses the standard quiet zone and fixed module units: vector output is
//! resolution-independent, so the raster module size and output scale do
//! not apply.

use qrcode::render::svg;

use crate::symbol::QrSymbol;

/// Quiet zone the SVG renderer places around the symbol, in modules.
pub const SVG_QUIET_ZONE_MODULES: u32 = 4;

/// User units per module in the SVG document.
const SVG_MODULE_UNITS: u32 = 10;

/// Render a symbol as a black-on-white SVG document.
pub fn render_svg(symbol: &QrSymbol) -> String {
    symbol
        .code()
        .render::<svg::Color<'_>>()
        .quiet_zone(true)
        .module_dimensions(SVG_MODULE_UNITS, SVG_MODULE_UNITS)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ErrorCorrectionLevel;
    use crate::symbol::encode_symbol;

    #[test]
    fn test_svg_document_structure() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::M).unwrap();
        let svg = render_svg(&symbol);

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("#000000"));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn test_svg_size_includes_quiet_zone() {
        let symbol = encode_symbol("HELLO", ErrorCorrectionLevel::M).unwrap();
        let svg = render_svg(&symbol);

        // (21 + 2 * 4) modules at 10 units each
        let side = (symbol.width() + 2 * SVG_QUIET_ZONE_MODULES) * SVG_MODULE_UNITS;
        assert_eq!(side, 290);
        assert!(svg.contains(&format!("width=\"{}\"", side)));
        assert!(svg.contains(&format!("height=\"{}\"", side)));
    }

    #[test]
    fn test_svg_is_deterministic() {
        let symbol = encode_symbol("https://example.com", ErrorCorrectionLevel::H).unwrap();
        assert_eq!(render_svg(&symbol), render_svg(&symbol));
    }
}
