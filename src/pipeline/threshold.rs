use crate::foundation::{core::RasterImage, math::clamp01};

/// Binarize a luminance mask.
///
/// `hard_edge` is clamped to `[0, 1]`; the same clamped semantics apply to the
/// inline pass inside [`crate::aspect_fit`]. A clamped value of 0 is the identity
/// transform and returns the input byte-identical. Otherwise the cut point is
/// `128 * (1 - hard_edge)`: luminance (read from R, since R = G = B after
/// extraction) above the cut becomes 255, everything else 0, and alpha is forced
/// to 255. At `hard_edge = 1` the cut is 0, so only exact-zero luminance stays off.
pub fn threshold(src: &RasterImage, hard_edge: f32) -> RasterImage {
    let hard = clamp01(hard_edge);
    if hard <= 0.0 {
        return src.clone();
    }
    let mut pixels = src.pixels().to_vec();
    apply_in_place(&mut pixels, hard);
    RasterImage::from_pixel_vec(src.width(), src.height(), pixels)
}

/// Binarization pass over raw RGBA8 bytes. `hard` must already be clamped to (0, 1].
pub(crate) fn apply_in_place(pixels: &mut [u8], hard: f32) {
    let cut = 128.0 * (1.0 - hard);
    for px in pixels.chunks_exact_mut(4) {
        let v = if f32::from(px[0]) > cut { 255 } else { 0 };
        px[0] = v;
        px[1] = v;
        px[2] = v;
        px[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/threshold.rs"]
mod tests;
