//! Decoding source images and packaging corrected output.
//!
//! Goes through the `image` crate in both directions. Everything is
//! converted to 8-bit: RGBA on the way in, RGB on the way out.

use image::{RgbImage, RgbaImage};

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{CurvelabError, Result};

/// Decode an encoded image (PNG, JPEG, ...) into a straight-alpha RGBA8 buffer.
pub fn decode_rgba(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)?;
    tracing::debug!(
        "decoded {}x{} {:?} source image",
        img.width(),
        img.height(),
        img.color()
    );
    from_rgba_image(img.to_rgba8())
}

/// Take ownership of an already-decoded RGBA image.
pub fn from_rgba_image(img: RgbaImage) -> Result<PixelBuffer> {
    let (width, height) = img.dimensions();
    let row_bytes = width as usize * Channels::Rgba.count();
    PixelBuffer::from_raw(width, height, Channels::Rgba, row_bytes, img.into_raw())
}

/// Package an RGB buffer as a displayable image.
///
/// Checked entry point for arbitrary buffers. The engine allocates its
/// output once and refreshes it through the same [`copy_into`] core.
pub fn to_rgb_image(buffer: &PixelBuffer) -> Result<RgbImage> {
    if buffer.channels() != Channels::Rgb {
        return Err(CurvelabError::ChannelMismatch {
            expected: Channels::Rgb,
            found: buffer.channels(),
        });
    }
    let mut img = RgbImage::new(buffer.width(), buffer.height());
    copy_into(buffer, &mut img);
    Ok(img)
}

/// Copy RGB rows into an image of the same dimensions, dropping stride padding.
pub(crate) fn copy_into(buffer: &PixelBuffer, img: &mut RgbImage) {
    let row_len = buffer.row_len();
    for (dst, src) in img.chunks_exact_mut(row_len).zip(buffer.rows()) {
        dst.copy_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("png encode");
        bytes
    }

    #[test]
    fn test_decode_png_keeps_straight_alpha() {
        let img = RgbaImage::from_raw(2, 1, vec![200, 100, 50, 0, 1, 2, 3, 128]).unwrap();
        let buf = decode_rgba(&encode_png(&img)).unwrap();
        assert_eq!(buf.channels(), Channels::Rgba);
        assert_eq!((buf.width(), buf.height()), (2, 1));
        // Fully transparent pixel keeps its color bytes.
        assert_eq!(buf.as_bytes(), &[200, 100, 50, 0, 1, 2, 3, 128]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_rgba(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CurvelabError::Decode(_)));
    }

    #[test]
    fn test_to_rgb_image_strips_padding() {
        let data = vec![1, 2, 3, 0, 4, 5, 6, 0];
        let buf = PixelBuffer::from_raw(1, 2, Channels::Rgb, 4, data).unwrap();
        let img = to_rgb_image(&buf).unwrap();
        assert_eq!(img.dimensions(), (1, 2));
        assert_eq!(img.as_raw(), &vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_to_rgb_image_rejects_rgba() {
        let buf = PixelBuffer::new(1, 1, Channels::Rgba).unwrap();
        assert!(matches!(
            to_rgb_image(&buf),
            Err(CurvelabError::ChannelMismatch { .. })
        ));
    }
}
