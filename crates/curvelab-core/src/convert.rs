//! RGBA8 → RGB8 conversion.

use crate::buffer::{Channels, PixelBuffer};
use crate::error::{CurvelabError, Result};

/// Copy the color channels of `source` into `destination`, dropping alpha.
///
/// Both buffers must have the same dimensions; strides may differ.
/// Alpha is discarded as-is (no compositing against a background).
///
/// This is the checked entry point for callers holding arbitrary buffers.
/// [`CorrectionEngine`](crate::CorrectionEngine) validates its layouts once
/// at construction and then calls the same [`drop_alpha`] core per pass.
pub fn rgba_to_rgb(source: &PixelBuffer, destination: &mut PixelBuffer) -> Result<()> {
    if source.channels() != Channels::Rgba {
        return Err(CurvelabError::ChannelMismatch {
            expected: Channels::Rgba,
            found: source.channels(),
        });
    }
    if destination.channels() != Channels::Rgb {
        return Err(CurvelabError::ChannelMismatch {
            expected: Channels::Rgb,
            found: destination.channels(),
        });
    }
    if source.width() != destination.width() || source.height() != destination.height() {
        return Err(CurvelabError::DimensionMismatch {
            src_width: source.width(),
            src_height: source.height(),
            dst_width: destination.width(),
            dst_height: destination.height(),
        });
    }
    drop_alpha(source, destination);
    Ok(())
}

/// Unchecked core of [`rgba_to_rgb`]; callers guarantee matching layouts.
pub(crate) fn drop_alpha(source: &PixelBuffer, destination: &mut PixelBuffer) {
    for (src_row, dst_row) in source.rows().zip(destination.rows_mut()) {
        for (rgba, rgb) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(3)) {
            rgb.copy_from_slice(&rgba[..3]);
        }
    }
}
