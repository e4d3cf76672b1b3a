use image::{Rgba, RgbaImage, imageops};

use crate::foundation::{
    core::RasterImage,
    math::{centered_offset, px_round},
};

/// Scale factors within this window of 1.0 skip resampling entirely; rendering at
/// exactly 1.0 would otherwise jitter from float rounding.
const IDENTITY_WINDOW: std::ops::RangeInclusive<f32> = 0.99..=1.01;

/// Draw `src` scaled by `size` and centered on an opaque-black canvas of the same
/// dimensions as `src`.
///
/// Scales inside `[0.99, 1.01]` return the input unchanged. Resampling uses the
/// Catmull-Rom filter; content scaled past the canvas bounds is clipped.
pub fn center_scale(src: &RasterImage, size: f32) -> RasterImage {
    if IDENTITY_WINDOW.contains(&size) {
        return src.clone();
    }

    let (width, height) = (src.width(), src.height());
    let scaled_w = px_round(f64::from(width) * f64::from(size));
    let scaled_h = px_round(f64::from(height) * f64::from(size));

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    if scaled_w > 0 && scaled_h > 0 {
        let scaled = imageops::resize(
            &src.to_rgba8(),
            scaled_w,
            scaled_h,
            imageops::FilterType::CatmullRom,
        );
        imageops::overlay(
            &mut canvas,
            &scaled,
            centered_offset(width, scaled_w),
            centered_offset(height, scaled_h),
        );
    }
    RasterImage::from_rgba8(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/center_scale.rs"]
mod tests;
