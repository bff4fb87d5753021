//! Strided 8-bit pixel storage and its planar view.

use std::fmt;

use crate::error::{CurvelabError, Result};

/// Interleaved channel layouts supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, straight (non-premultiplied) alpha.
    Rgba,
}

impl Channels {
    /// Bytes per pixel.
    pub const fn count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB8"),
            Self::Rgba => write!(f, "RGBA8"),
        }
    }
}

/// An 8-bit-per-channel image with an explicit row stride.
///
/// Rows may carry trailing padding (`row_bytes > width * channels`);
/// padding bytes are never read or written by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    row_bytes: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer with tightly packed rows.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        let row_bytes = checked_row_len(width, height, channels)?;
        let len = checked_total_len(row_bytes, height)?;
        Ok(Self {
            width,
            height,
            channels,
            row_bytes,
            data: vec![0; len],
        })
    }

    /// Wrap existing storage.
    ///
    /// `data` must hold at least `height * row_bytes` bytes, and `row_bytes`
    /// must fit a full row of pixels.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: Channels,
        row_bytes: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        let min = checked_row_len(width, height, channels)?;
        if row_bytes < min {
            return Err(CurvelabError::StrideTooSmall { row_bytes, min });
        }
        let required = checked_total_len(row_bytes, height)?;
        if data.len() < required {
            return Err(CurvelabError::BufferTooSmall {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            row_bytes,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Distance in bytes between the starts of consecutive rows.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Bytes of pixel data in one row, excluding padding.
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels.count()
    }

    /// Raw storage, padding included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel bytes of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.row_bytes;
        Some(&self.data[start..start + self.row_len()])
    }

    /// Iterate rows top to bottom, padding stripped.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let row_len = self.row_len();
        self.data
            .chunks(self.row_bytes)
            .take(self.height as usize)
            .map(move |row| &row[..row_len])
    }

    /// Mutable rows, padding stripped.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let row_len = self.row_len();
        self.data
            .chunks_mut(self.row_bytes)
            .take(self.height as usize)
            .map(move |row| &mut row[..row_len])
    }

    /// Copy the pixel bytes into a new tightly packed vector.
    pub fn to_packed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.row_len() * self.height as usize);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }

    /// View the buffer as one channel, `channels` times as wide.
    ///
    /// Every byte of every pixel becomes an independent sample, so a
    /// per-sample function covers all channels in one pass.
    pub fn planar_mut(&mut self) -> PlanarViewMut<'_> {
        PlanarViewMut {
            width: self.row_len(),
            height: self.height as usize,
            row_bytes: self.row_bytes,
            data: &mut self.data,
        }
    }
}

/// Single-channel view over an interleaved [`PixelBuffer`].
pub struct PlanarViewMut<'a> {
    width: usize,
    height: usize,
    row_bytes: usize,
    data: &'a mut [u8],
}

impl PlanarViewMut<'_> {
    /// Samples per row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample rows, padding stripped.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let width = self.width;
        self.data
            .chunks_mut(self.row_bytes)
            .take(self.height)
            .map(move |row| &mut row[..width])
    }

    /// All samples as one slice. Only available when rows have no padding.
    pub fn as_contiguous_mut(&mut self) -> Option<&mut [u8]> {
        if self.row_bytes != self.width {
            return None;
        }
        let len = self.width * self.height;
        Some(&mut self.data[..len])
    }

    /// Replace every sample with `f(sample)`.
    pub fn for_each_sample(&mut self, mut f: impl FnMut(u8) -> u8) {
        for row in self.rows_mut() {
            for sample in row.iter_mut() {
                *sample = f(*sample);
            }
        }
    }
}

fn checked_row_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(CurvelabError::EmptyImage { width, height });
    }
    (width as usize)
        .checked_mul(channels.count())
        .ok_or(CurvelabError::SizeOverflow {
            row_bytes: usize::MAX,
            height,
        })
}

fn checked_total_len(row_bytes: usize, height: u32) -> Result<usize> {
    row_bytes
        .checked_mul(height as usize)
        .ok_or(CurvelabError::SizeOverflow { row_bytes, height })
}
