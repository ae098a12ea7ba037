//! Core types for symbol rendering.

use thiserror::Error;

/// Pure black, the default module color.
pub const BLACK: [u8; 3] = [0, 0, 0];
/// Pure white, the default background color.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Error types for raster rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Module size of zero would produce an empty image.
    #[error("Invalid module size: {0} (must be at least 1 pixel)")]
    InvalidModuleSize(u32),

    /// Rendered side length does not fit in memory limits.
    #[error("Rendered image too large: {modules} modules at {module_size}px")]
    TooLarge { modules: u32, module_size: u32 },
}

/// Visual parameters for rasterizing a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterStyle {
    /// Side length of one module, in pixels.
    pub module_size: u32,
    /// Quiet zone width, in modules.
    pub border_modules: u32,
    /// Color of dark modules.
    pub dark: [u8; 3],
    /// Color of light modules and the quiet zone.
    pub light: [u8; 3],
}

impl RasterStyle {
    /// Black-on-white style with the given geometry.
    pub fn new(module_size: u32, border_modules: u32) -> Self {
        Self {
            module_size,
            border_modules,
            dark: BLACK,
            light: WHITE,
        }
    }
}

/// A rendered image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl RenderedImage {
    /// Create a new RenderedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a RenderedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// RGB value at (`x`, `y`), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 3;
        let rgb = self.pixels.get(offset..offset + 3)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }

    /// Luma plane in row-major order, for readers that want grayscale input.
    pub fn to_luma(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .map(|p| ((u32::from(p[0]) * 299 + u32::from(p[1]) * 587 + u32::from(p[2]) * 114) / 1000) as u8)
            .collect()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Check if the image is square.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}
