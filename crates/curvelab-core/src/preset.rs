//! Response-curve presets.
//!
//! The table is fixed at compile time. Its order matters: callers select by
//! index, and the first entry is what a freshly built engine shows.

use serde::Serialize;
use std::fmt;

/// Which segmented control a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFamily {
    /// Pure linear curves (gamma disabled).
    Linear,
    /// Curves with an active power-law segment.
    Exponential,
}

impl fmt::Display for PresetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Exponential => write!(f, "exponential"),
        }
    }
}

/// A named configuration of the piecewise response curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseCurvePreset {
    /// Identifier shown to users and accepted by [`find_preset`].
    pub label: &'static str,
    /// Short segment code (`L1`..`L4`, `E1`..`E3`).
    pub code: &'static str,
    /// Samples at or below this value take the linear branch.
    pub boundary: u8,
    /// `(slope, intercept)` of the linear branch, in normalized units.
    pub linear_coefficients: [f32; 2],
    /// Exponent of the power-law branch. `0.0` disables that branch.
    pub gamma: f32,
}

impl ResponseCurvePreset {
    pub const fn new(
        label: &'static str,
        code: &'static str,
        boundary: u8,
        linear_coefficients: [f32; 2],
        gamma: f32,
    ) -> Self {
        Self {
            label,
            code,
            boundary,
            linear_coefficients,
            gamma,
        }
    }

    pub fn family(&self) -> PresetFamily {
        if self.gamma == 0.0 {
            PresetFamily::Linear
        } else {
            PresetFamily::Exponential
        }
    }
}

impl fmt::Display for ResponseCurvePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.code)
    }
}

static PRESETS: [ResponseCurvePreset; 7] = [
    // Returns each pixel unchanged.
    ResponseCurvePreset::new("identity-linear", "L1", 255, [1.0, 0.0], 0.0),
    // Washed out: everything squeezed into the upper half.
    ResponseCurvePreset::new("wash-out", "L2", 255, [0.5, 0.5], 0.0),
    ResponseCurvePreset::new("high-contrast", "L3", 255, [3.0, -1.0], 0.0),
    // Negative image.
    ResponseCurvePreset::new("invert", "L4", 255, [-1.0, 1.0], 0.0),
    // Returns each pixel unchanged; gamma 1 is the identity.
    ResponseCurvePreset::new("identity-exp", "E1", 0, [1.0, 0.0], 1.0),
    ResponseCurvePreset::new("darken", "E2", 0, [1.0, 0.0], 2.2),
    ResponseCurvePreset::new("lighten", "E3", 0, [1.0, 0.0], 1.0 / 2.2),
];

/// All built-in presets, in selection order.
pub fn presets() -> &'static [ResponseCurvePreset] {
    &PRESETS
}

/// Preset at `index`, if any.
pub fn preset(index: usize) -> Option<&'static ResponseCurvePreset> {
    PRESETS.get(index)
}

/// Look up a preset by label or segment code, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<(usize, &'static ResponseCurvePreset)> {
    let name = name.trim();
    PRESETS
        .iter()
        .enumerate()
        .find(|(_, p)| p.label.eq_ignore_ascii_case(name) || p.code.eq_ignore_ascii_case(name))
}

/// `(index, preset)` pairs belonging to one family, in table order.
pub fn family_presets(
    family: PresetFamily,
) -> impl Iterator<Item = (usize, &'static ResponseCurvePreset)> {
    PRESETS
        .iter()
        .enumerate()
        .filter(move |(_, p)| p.family() == family)
}
