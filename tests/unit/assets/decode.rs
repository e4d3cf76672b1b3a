use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_keeps_straight_alpha() {
    let bytes = png_bytes(1, 1, vec![100, 50, 200, 128]);
    let img = decode_image(&bytes).unwrap();
    assert_eq!(img.width(), 1);
    assert_eq!(img.height(), 1);
    // No premultiplication: bytes come back exactly as encoded.
    assert_eq!(img.pixel(0, 0), Some([100, 50, 200, 128]));
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}
