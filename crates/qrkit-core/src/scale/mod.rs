//! Output scaling for rendered QR images.
//!
//! This module provides functionality for:
//! - Scaling a rendered symbol so its larger side matches the requested output size
//! - Exact-dimension resizing with a selectable resampling filter
//!
//! All operations are synchronous and return new [`RenderedImage`] values
//! without modifying the input.
//!
//! [`RenderedImage`]: crate::render::RenderedImage

mod resize;
mod types;

pub use resize::{fit_dimensions, resize, scale_to_max_dimension};
pub use types::{FilterType, ScaleError};
