//! Application configuration for the demo.

use std::path::PathBuf;

/// Overrides the bundled sample image.
const IMAGE_VAR: &str = "CURVELAB_IMAGE";
/// Comma-separated preset script (labels, codes or indices).
const PRESETS_VAR: &str = "CURVELAB_PRESETS";
/// `0`/`false` starts with the exponential controls enabled.
const LINEAR_VAR: &str = "CURVELAB_LINEAR";

/// Runtime configuration for the curvelab demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Image to load instead of the bundled sample.
    pub image_path: Option<PathBuf>,
    /// Preset selections to play back, in order. Empty means "every preset".
    pub script: Vec<String>,
    /// Whether the linear controls start enabled.
    pub start_linear: bool,
}

impl AppConfig {
    /// Build from a variable lookup; `Default` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            image_path: lookup(IMAGE_VAR)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            script: lookup(PRESETS_VAR)
                .map(|s| parse_script(&s))
                .unwrap_or_default(),
            start_linear: lookup(LINEAR_VAR)
                .map(|s| !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_script(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.image_path, None);
        assert!(cfg.script.is_empty());
        assert!(cfg.start_linear);
    }

    #[test]
    fn test_script_is_split_and_trimmed() {
        let cfg = config(&[("CURVELAB_PRESETS", " invert, ,E2,3 ")]);
        assert_eq!(cfg.script, ["invert", "E2", "3"]);
    }

    #[test]
    fn test_linear_flag_and_image_path() {
        let cfg = config(&[("CURVELAB_LINEAR", "False"), ("CURVELAB_IMAGE", "/tmp/food.jpg")]);
        assert!(!cfg.start_linear);
        assert_eq!(cfg.image_path, Some(PathBuf::from("/tmp/food.jpg")));

        let cfg = config(&[("CURVELAB_IMAGE", "  ")]);
        assert_eq!(cfg.image_path, None);
    }
}
