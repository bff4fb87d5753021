//! Preset picker state: two segmented controls and the "linear" checkbox.
//!
//! Only one control is enabled at a time. Flipping the checkbox enables the
//! other control and selects its first segment, which shows the unmodified
//! image (L1 or E1).

use curvelab_core::preset::{self, PresetFamily};
use curvelab_core::{CurvelabError, Result};

/// Which control is live and which segment is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetControls {
    linear_enabled: bool,
    selected: usize,
}

impl PresetControls {
    pub fn new(linear_enabled: bool) -> Self {
        let mut controls = Self {
            linear_enabled,
            selected: 0,
        };
        controls.selected = controls.first_segment();
        controls
    }

    pub fn enabled_family(&self) -> PresetFamily {
        if self.linear_enabled {
            PresetFamily::Linear
        } else {
            PresetFamily::Exponential
        }
    }

    /// Preset index of the selected segment.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Toggle the checkbox. Returns the preset index to render.
    pub fn set_linear(&mut self, on: bool) -> usize {
        self.linear_enabled = on;
        self.selected = self.first_segment();
        self.selected
    }

    /// Click a segment. Disabled segments and unknown indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        let preset = preset::preset(index)?;
        if preset.family() != self.enabled_family() {
            return None;
        }
        self.selected = index;
        Some(index)
    }

    /// Resolve a script entry into the preset indices a user would step through.
    ///
    /// Entries are labels, segment codes, or table indices. A preset from the
    /// disabled family first flips the checkbox, which renders that family's
    /// first segment.
    pub fn press(&mut self, entry: &str) -> Result<Vec<usize>> {
        let index = resolve_entry(entry)?;
        let mut steps = Vec::with_capacity(2);
        if self.select(index).is_none() {
            steps.push(self.set_linear(!self.linear_enabled));
            if index != self.selected {
                self.select(index);
                steps.push(index);
            }
        } else {
            steps.push(index);
        }
        Ok(steps)
    }

    fn first_segment(&self) -> usize {
        preset::family_presets(self.enabled_family())
            .map(|(index, _)| index)
            .next()
            .unwrap_or(0)
    }
}

fn resolve_entry(entry: &str) -> Result<usize> {
    let entry = entry.trim();
    if let Ok(index) = entry.parse::<usize>() {
        return preset::preset(index)
            .map(|_| index)
            .ok_or(CurvelabError::UnknownPreset(index));
    }
    preset::find_preset(entry)
        .map(|(index, _)| index)
        .ok_or_else(|| CurvelabError::UnknownPresetName(entry.to_string()))
}
