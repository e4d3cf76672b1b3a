use image::{Rgba, RgbaImage, imageops};

use crate::foundation::{
    core::{FitMode, RasterImage},
    math::{FULL_SCALE_BREAK, centered_offset, clamp01, px_round},
};
use crate::pipeline::threshold;

/// Minimum side of the square output canvas.
const MIN_CANVAS: u32 = 1024;

/// Composite `src` onto a square opaque-black canvas of side
/// `max(width, height, 1024)`, with optional inline binarization.
///
/// With `preserve_aspect` unset, scales below 0.9 draw a uniform
/// `(side * size)` square centered on the canvas; scales at or above 0.9 stretch
/// the source over the whole canvas. With `preserve_aspect` set the draw rectangle
/// follows `fit_mode`: `contain` keeps the whole source visible, `cover` fills the
/// canvas and clips the overflowing axis, `stretch` forces a square region.
///
/// A clamped `hard_edge > 0` binarizes the entire canvas in place after
/// compositing (background pixels have luminance 0 and stay black under any
/// positive cut). The result is always fully opaque. Zero-dimension sources draw
/// nothing and yield the plain black canvas.
pub fn aspect_fit(
    src: &RasterImage,
    size: f32,
    hard_edge: f32,
    preserve_aspect: bool,
    fit_mode: FitMode,
) -> RasterImage {
    let side = src.width().max(src.height()).max(MIN_CANVAS);
    let mut canvas = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 255]));

    let (draw_w, draw_h) = draw_rect(src, side, size, preserve_aspect, fit_mode);
    if draw_w > 0 && draw_h > 0 {
        let scaled = imageops::resize(
            &src.to_rgba8(),
            draw_w,
            draw_h,
            imageops::FilterType::CatmullRom,
        );
        imageops::overlay(
            &mut canvas,
            &scaled,
            centered_offset(side, draw_w),
            centered_offset(side, draw_h),
        );
    }

    let mut pixels = canvas.into_raw();
    let hard = clamp01(hard_edge);
    if hard > 0.0 {
        threshold::apply_in_place(&mut pixels, hard);
    } else {
        // The draw may blend a semi-transparent source over the background; the
        // emitted mask is opaque regardless.
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
    }
    RasterImage::from_pixel_vec(side, side, pixels)
}

fn draw_rect(
    src: &RasterImage,
    side: u32,
    size: f32,
    preserve_aspect: bool,
    fit_mode: FitMode,
) -> (u32, u32) {
    if src.width() == 0 || src.height() == 0 {
        return (0, 0);
    }

    let target = f64::from(side) * f64::from(size);
    if !preserve_aspect {
        return if size < FULL_SCALE_BREAK {
            (px_round(target), px_round(target))
        } else {
            (side, side)
        };
    }

    let ratio = f64::from(src.width()) / f64::from(src.height());
    match fit_mode {
        FitMode::Contain => {
            if ratio > 1.0 {
                (px_round(target), px_round(target / ratio))
            } else {
                (px_round(target * ratio), px_round(target))
            }
        }
        FitMode::Cover => {
            if ratio > 1.0 {
                (px_round(target * ratio), px_round(target))
            } else {
                (px_round(target), px_round(target / ratio))
            }
        }
        FitMode::Stretch => (px_round(target), px_round(target)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/aspect_fit.rs"]
mod tests;
