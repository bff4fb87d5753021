use crate::buffer::Channels;

/// Errors produced while setting up buffers or selecting presets.
///
/// Applying a preset to a constructed engine never fails; everything here
/// is either a setup problem or a bad lookup from the caller.
#[derive(Debug, thiserror::Error)]
pub enum CurvelabError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("row stride of {row_bytes} bytes is smaller than the {min} bytes a row needs")]
    StrideTooSmall { row_bytes: usize, min: usize },
    #[error("pixel storage holds {len} bytes but {required} are required")]
    BufferTooSmall { len: usize, required: usize },
    #[error("{height} rows of {row_bytes} bytes do not fit in memory")]
    SizeOverflow { row_bytes: usize, height: u32 },
    #[error("expected a {expected} buffer, found {found}")]
    ChannelMismatch { expected: Channels, found: Channels },
    #[error("destination is {dst_width}x{dst_height} but source is {src_width}x{src_height}")]
    DimensionMismatch {
        src_width: u32,
        src_height: u32,
        dst_width: u32,
        dst_height: u32,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("no preset at index {0}")]
    UnknownPreset(usize),
    #[error("no preset named {0:?}")]
    UnknownPresetName(String),
}

pub type Result<T> = std::result::Result<T, CurvelabError>;
