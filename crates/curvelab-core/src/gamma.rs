//! Piecewise gamma kernel for 8-bit samples.
//!
//! A two-regime tone curve split at a boundary sample value. Samples are
//! normalized to `[0, 1]`, mapped, clamped, and rescaled back to `[0, 255]`
//! with round-to-nearest.
//!
//! # Formula
//! With `x = v / 255`:
//! ```text
//! v <= boundary (or gamma == 0):  y = L0 × x + L1
//! v >  boundary:                  y = pow(max(E0 × x + E1, 0), gamma) + E2
//!
//! out = round(clamp(y, 0, 1) × 255)
//! ```
//!
//! # Complexity
//! - Bake LUT: O(256)
//! - Apply: O(N) table lookups, one per sample

use crate::buffer::PlanarViewMut;
use crate::preset::ResponseCurvePreset;

/// Exponential coefficients used by every shipped preset: a bare `pow(x, gamma)`.
pub const IDENTITY_EXPONENTIAL: [f32; 3] = [1.0, 0.0, 0.0];

/// Parameters of one piecewise curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseGamma {
    /// Last sample value routed to the linear branch (inclusive).
    pub boundary: u8,
    /// `(slope, intercept)` of the linear branch.
    pub linear: [f32; 2],
    /// `(scale, offset, bias)` of the power-law branch.
    pub exponential: [f32; 3],
    /// Power-law exponent. `0.0` disables the power-law branch.
    pub gamma: f32,
}

impl PiecewiseGamma {
    pub fn from_preset(preset: &ResponseCurvePreset) -> Self {
        Self {
            boundary: preset.boundary,
            linear: preset.linear_coefficients,
            exponential: IDENTITY_EXPONENTIAL,
            gamma: preset.gamma,
        }
    }

    /// Evaluate the curve on a normalized input, without clamping.
    pub fn evaluate_normalized(&self, x: f32, linear_branch: bool) -> f32 {
        if linear_branch {
            self.linear[0] * x + self.linear[1]
        } else {
            let [scale, offset, bias] = self.exponential;
            (scale * x + offset).max(0.0).powf(self.gamma) + bias
        }
    }

    /// Map a single 8-bit sample.
    pub fn evaluate(&self, v: u8) -> u8 {
        let linear_branch = self.gamma == 0.0 || v <= self.boundary;
        let y = self.evaluate_normalized(f32::from(v) / 255.0, linear_branch);
        quantize(y)
    }

    /// Bake the curve into a 256-entry lookup table indexed by input sample.
    pub fn bake_lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (v, out) in (0..=u8::MAX).zip(lut.iter_mut()) {
            *out = self.evaluate(v);
        }
        lut
    }

    /// Apply the curve in place to a flat run of samples.
    pub fn apply(&self, samples: &mut [u8]) {
        let lut = self.bake_lut();
        apply_lut(&lut, samples);
    }

    /// Apply the curve to every sample of a planar view.
    pub fn apply_planar(&self, view: &mut PlanarViewMut<'_>) {
        let lut = self.bake_lut();
        if let Some(samples) = view.as_contiguous_mut() {
            apply_lut(&lut, samples);
        } else {
            view.for_each_sample(|v| lut[v as usize]);
        }
    }
}

fn apply_lut(lut: &[u8; 256], samples: &mut [u8]) {
    for sample in samples {
        *sample = lut[*sample as usize];
    }
}

/// Clamp to `[0, 1]` and rescale to the nearest 8-bit value.
fn quantize(y: f32) -> u8 {
    // NaN saturates to 0 in the cast.
    (y.clamp(0.0, 1.0) * 255.0).round() as u8
}
