use anyhow::Context;

use crate::{MaskResult, foundation::core::RasterImage};

/// Decode encoded image bytes (PNG, JPEG, ...) into a straight RGBA8 [`RasterImage`].
///
/// Masks keep straight alpha: the extraction stage reads the alpha channel as-is, so
/// no premultiplication happens here.
pub fn decode_image(bytes: &[u8]) -> MaskResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    Ok(RasterImage::from_rgba8(rgba))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
