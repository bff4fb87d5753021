//! Curvelab Demo — pick a tone-curve preset and watch the sample image change.
//!
//! Plays a preset selection script through the picker controls, runs each
//! selection through the correction engine, and hands the frames to the
//! display thread.

mod config;
mod controls;
mod display;

use std::borrow::Cow;
use std::process::ExitCode;

use curvelab_core::{CorrectionEngine, CurvelabError, presets};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::controls::PresetControls;
use crate::display::{DisplayError, DisplayFrame, DisplayHandle, LogPresenter};

/// Bundled sample photograph.
const SAMPLE_IMAGE: &[u8] = include_bytes!("../assets/sample.png");

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(AppConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing is shown when setup fails.
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> Result<(), DemoError> {
    let bytes = source_bytes(&config)?;
    let mut engine = CorrectionEngine::from_encoded(&bytes)?;
    let display = display::spawn_display(LogPresenter::default())?;

    let mut controls = PresetControls::new(config.start_linear);
    show(&mut engine, &display, controls.selected())?;

    let script: Vec<String> = if config.script.is_empty() {
        presets().iter().map(|p| p.label.to_string()).collect()
    } else {
        config.script
    };

    for entry in &script {
        match controls.press(entry) {
            Ok(steps) => {
                for index in steps {
                    show(&mut engine, &display, index)?;
                }
            }
            Err(e) => tracing::warn!("skipping preset entry {entry:?}: {e}"),
        }
    }

    let presenter = display.close()?;
    tracing::info!("presented {} frames", presenter.presented());
    Ok(())
}

fn source_bytes(config: &AppConfig) -> Result<Cow<'static, [u8]>, DemoError> {
    match &config.image_path {
        Some(path) => {
            tracing::info!("loading source image from {}", path.display());
            Ok(Cow::Owned(std::fs::read(path)?))
        }
        None => Ok(Cow::Borrowed(SAMPLE_IMAGE)),
    }
}

fn show(
    engine: &mut CorrectionEngine,
    display: &DisplayHandle<LogPresenter>,
    index: usize,
) -> Result<(), DemoError> {
    let image = engine.apply_preset_at(index)?.clone();
    display.show(DisplayFrame {
        preset: *engine.active_preset(),
        image,
    })?;
    Ok(())
}

/// Errors that stop the demo.
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to read source image: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] CurvelabError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}
