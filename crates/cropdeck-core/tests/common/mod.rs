#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use cropdeck_core::preset::{MaskShape, Preset, PresetTag};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Single-colour RGBA image.
pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Image split into four coloured quadrants: red (TL), green (TR),
/// blue (BL), black (BR).
pub fn quadrants(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let right = x >= width / 2;
        let bottom = y >= height / 2;
        Rgba(match (right, bottom) {
            (false, false) => RED,
            (true, false) => GREEN,
            (false, true) => BLUE,
            (true, true) => BLACK,
        })
    })
}

/// Every pixel distinct: r = x, g = y, b = x ^ y.
pub fn coordinate_pattern(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    })
}

/// Encode an image as PNG bytes, the way an upload would arrive.
pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    encode_as(img, ImageFormat::Png)
}

pub fn encode_as(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    let dynamic = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).to_rgb8()),
        _ => DynamicImage::ImageRgba8(img.clone()),
    };
    dynamic
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("encode test image");
    buf
}

/// A rectangle preset of arbitrary size, for pixel-exact checks.
pub fn custom_preset(width: u32, height: u32) -> Preset {
    Preset {
        tag: PresetTag::HeaderBanner,
        width,
        height,
        mask: MaskShape::Rectangle,
    }
}

/// Insert an EXIF APP1 segment carrying `orientation` right after the SOI
/// marker of a JPEG stream.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG stream");

    // Big-endian TIFF header, one IFD0 entry: 0x0112 SHORT x1.
    let mut tiff = vec![b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
    tiff.extend_from_slice(&[0x00, 0x01]);
    tiff.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
    tiff.extend_from_slice(&orientation.to_be_bytes());
    tiff.extend_from_slice(&[0x00, 0x00]);
    tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);
    let segment_len = (payload.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}
