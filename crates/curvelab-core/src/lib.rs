//! Curvelab Core — tone-curve presets and the 8-bit correction engine.
//!
//! This crate holds the preset table, pixel buffer handling, and the
//! piecewise-gamma kernel. No UI or windowing dependencies.

pub mod buffer;
pub mod codec;
pub mod convert;
pub mod engine;
pub mod error;
pub mod gamma;
pub mod preset;

// Re-exports for convenience.
pub use buffer::{Channels, PixelBuffer, PlanarViewMut};
pub use engine::CorrectionEngine;
pub use error::{CurvelabError, Result};
pub use gamma::PiecewiseGamma;
pub use preset::{PresetFamily, ResponseCurvePreset, find_preset, preset, presets};
