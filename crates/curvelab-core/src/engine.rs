//! The correction engine: one source image, one reusable destination, one
//! active preset.
//!
//! Every preset change re-runs the full transform from the untouched
//! source, so corrections never compound:
//!
//! ```text
//!   Source RGBA ──→ drop alpha ──→ Destination RGB ──→ planar view ──→ LUT ──→ Output RgbImage
//! ```

use image::RgbImage;

use crate::buffer::{Channels, PixelBuffer};
use crate::codec;
use crate::convert;
use crate::error::{CurvelabError, Result};
use crate::gamma::PiecewiseGamma;
use crate::preset::{self, ResponseCurvePreset};

/// Applies response-curve presets to a fixed source image.
#[derive(Debug)]
pub struct CorrectionEngine {
    source: PixelBuffer,
    destination: PixelBuffer,
    preset: ResponseCurvePreset,
    output: RgbImage,
}

impl CorrectionEngine {
    /// Build an engine over an RGBA8 source and render the first preset.
    pub fn new(source: PixelBuffer) -> Result<Self> {
        if source.channels() != Channels::Rgba {
            return Err(CurvelabError::ChannelMismatch {
                expected: Channels::Rgba,
                found: source.channels(),
            });
        }

        let destination = PixelBuffer::new(source.width(), source.height(), Channels::Rgb)?;
        let output = RgbImage::new(source.width(), source.height());
        let first = preset::presets()[0];

        tracing::info!(
            "correction engine ready: {}x{}, initial preset {}",
            source.width(),
            source.height(),
            first
        );

        let mut engine = Self {
            source,
            destination,
            preset: first,
            output,
        };
        engine.render();
        Ok(engine)
    }

    /// Decode an encoded image and build an engine over it.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        Self::new(codec::decode_rgba(bytes)?)
    }

    /// Make `preset` active and recompute the output from the source.
    pub fn apply_preset(&mut self, preset: &ResponseCurvePreset) -> &RgbImage {
        self.preset = *preset;
        self.render();
        &self.output
    }

    /// Select a built-in preset by table index.
    pub fn apply_preset_at(&mut self, index: usize) -> Result<&RgbImage> {
        let preset = preset::preset(index).ok_or(CurvelabError::UnknownPreset(index))?;
        Ok(self.apply_preset(preset))
    }

    /// Select a built-in preset by label or segment code.
    pub fn apply_preset_named(&mut self, name: &str) -> Result<&RgbImage> {
        let (_, preset) = preset::find_preset(name)
            .ok_or_else(|| CurvelabError::UnknownPresetName(name.to_string()))?;
        Ok(self.apply_preset(preset))
    }

    /// The built-in preset table.
    pub fn presets(&self) -> &'static [ResponseCurvePreset] {
        preset::presets()
    }

    pub fn active_preset(&self) -> &ResponseCurvePreset {
        &self.preset
    }

    /// Output of the most recent pass.
    pub fn current_output(&self) -> &RgbImage {
        &self.output
    }

    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    /// RGB working buffer after the most recent pass.
    pub fn destination(&self) -> &PixelBuffer {
        &self.destination
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.source.width(), self.source.height())
    }

    fn render(&mut self) {
        tracing::debug!(
            "applying {} to {}x{}",
            self.preset,
            self.source.width(),
            self.source.height()
        );

        // Start over from the source every time.
        convert::drop_alpha(&self.source, &mut self.destination);

        let curve = PiecewiseGamma::from_preset(&self.preset);
        curve.apply_planar(&mut self.destination.planar_mut());

        codec::copy_into(&self.destination, &mut self.output);
    }
}
