//! Rendering of encoded symbols.
//!
//! This module provides functionality for:
//! - Rasterizing a [`QrSymbol`] into an RGB pixel image at a given module size and border
//! - Rendering a [`QrSymbol`] as a resolution-independent SVG document
//!
//! [`QrSymbol`]: crate::symbol::QrSymbol

mod raster;
mod svg;
mod types;

pub use raster::render_raster;
pub use svg::{render_svg, SVG_QUIET_ZONE_MODULES};
pub use types::{RasterStyle, RenderError, RenderedImage, BLACK, WHITE};
