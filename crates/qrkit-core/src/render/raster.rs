//! Raster rendering of QR symbols.

use image::{Rgb, RgbImage};

use super::{RasterStyle, RenderError, RenderedImage};
use crate::symbol::QrSymbol;

/// Largest side length, in pixels, the rasterizer will allocate.
const MAX_SIDE: u64 = 16_384;

/// Rasterize a symbol into an RGB image.
///
/// Every module becomes a `module_size` x `module_size` block and the symbol
/// is surrounded by `border_modules` light modules on each side, so the image
/// is always square with side `(width + 2 * border) * module_size`.
///
/// # Errors
///
/// Returns `RenderError::InvalidModuleSize` for a zero module size and
/// `RenderError::TooLarge` if the side would exceed 16384 pixels.
pub fn render_raster(symbol: &QrSymbol, style: &RasterStyle) -> Result<RenderedImage, RenderError> {
    let module_size = style.module_size;
    if module_size == 0 {
        return Err(RenderError::InvalidModuleSize(module_size));
    }

    let border = style.border_modules;
    let modules = u64::from(symbol.width()) + 2 * u64::from(border);
    let side = modules * u64::from(module_size);
    if side > MAX_SIDE {
        return Err(RenderError::TooLarge {
            modules: modules.min(u64::from(u32::MAX)) as u32,
            module_size,
        });
    }
    let side = side as u32;

    let mut img = RgbImage::from_pixel(side, side, Rgb(style.light));
    let dark = Rgb(style.dark);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let module_x = x / module_size;
        let module_y = y / module_size;
        if module_x < border || module_y < border {
            continue;
        }
        if symbol.is_dark(module_x - border, module_y - border) {
            *pixel = dark;
        }
    }

    Ok(RenderedImage::from_rgb_image(img))
}
