use std::sync::Arc;

use crate::foundation::error::{MaskError, MaskResult};

/// Straight (non-premultiplied) RGBA8 raster image, row-major, tightly packed.
///
/// Immutable once produced: pipeline stages allocate and return new images rather
/// than mutating their input. Pixel bytes sit behind an [`Arc`] so clones are cheap
/// and the documented identity fast paths can return the input unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Construct an image from raw RGBA8 bytes.
    ///
    /// `pixels.len()` must equal `width * height * 4`. Zero-dimension images are
    /// valid and carry a zero-length buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> MaskResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(MaskError::validation(format!(
                "pixel buffer length {} does not match {width}x{height} rgba8 ({expected})",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Allocate an opaque-black image (`0,0,0,255` everywhere).
    pub fn opaque_black(width: u32, height: u32) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = vec![0u8; count * 4];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major RGBA8.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA bytes of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    pub(crate) fn from_pixel_vec(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }

    pub(crate) fn to_rgba8(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.as_ref().clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    pub(crate) fn from_rgba8(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_pixel_vec(width, height, img.into_raw())
    }
}

/// Aspect-fitting strategy for [`crate::aspect_fit`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Fit the whole source within the canvas; shorter axis gains black bands.
    #[default]
    Contain,
    /// Fill the canvas; the longer axis overflows and is clipped.
    Cover,
    /// Fill the requested square region, ignoring the source aspect ratio.
    Stretch,
}

impl FitMode {
    /// Parse a mode name. Unrecognized names fall back to [`FitMode::Contain`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "cover" => Self::Cover,
            "stretch" => Self::Stretch,
            _ => Self::Contain,
        }
    }
}

/// Geometric and tonal parameters for a shape request.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Uniform scale factor; 1.0 = original scale. Must be finite and > 0.
    pub size: f32,
    /// Edge hardness in `[0, 1]`; 0 keeps the soft gradient, 1 is a binary edge.
    /// Values outside the range are clamped.
    pub hard_edge: f32,
    /// Preserve the source aspect ratio (routes through [`crate::aspect_fit`]).
    pub preserve_aspect: bool,
    /// Fitting strategy when `preserve_aspect` is set.
    pub fit_mode: FitMode,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            size: 1.0,
            hard_edge: 0.0,
            preserve_aspect: false,
            fit_mode: FitMode::Contain,
        }
    }
}

impl ShapeParams {
    /// Reject non-finite or non-positive scale factors.
    pub fn validate(&self) -> MaskResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(MaskError::validation(format!(
                "size must be finite and > 0, got {}",
                self.size
            )));
        }
        if !self.hard_edge.is_finite() {
            return Err(MaskError::validation("hard_edge must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
