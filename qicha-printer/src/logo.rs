//! Logo loading for label printing
//!
//! Sticker labels carry a store logo drawn into a fixed rect. The driver
//! adapter needs the pixels as RGB8; anything the `image` crate can decode
//! is accepted.

use crate::error::{PrintError, PrintResult};
use image::RgbImage;

/// Load a logo image from disk and convert it to RGB8
pub fn load_logo(path: &str) -> PrintResult<RgbImage> {
    let img = image::open(path)
        .map_err(|e| PrintError::Image(format!("failed to open {}: {}", path, e)))?;
    Ok(img.to_rgb8())
}
