use crate::foundation::core::RasterImage;

/// Convert a decoded RGBA image into its luminance mask: for every pixel
/// `R = G = B = source alpha` and `A = 255`.
///
/// Pure and total; a zero-dimension input yields a zero-length buffer. Runs once per
/// mask, at registration time.
pub fn alpha_to_luminance(src: &RasterImage) -> RasterImage {
    let mut pixels = src.pixels().to_vec();
    for px in pixels.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = a;
        px[1] = a;
        px[2] = a;
        px[3] = 255;
    }
    RasterImage::from_pixel_vec(src.width(), src.height(), pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/extract.rs"]
mod tests;
