//! Display thread that receives corrected frames.
//!
//! The engine runs on the caller's thread; finished frames are handed off
//! over an unbounded channel to a dedicated thread with its own
//! current-thread tokio runtime, the way a UI queue would receive them.

use std::thread::JoinHandle;

use curvelab_core::ResponseCurvePreset;
use image::RgbImage;
use serde::Serialize;
use tokio::sync::mpsc;

/// One rendered frame, owned by the display side.
#[derive(Debug, Clone)]
pub struct DisplayFrame {
    pub preset: ResponseCurvePreset,
    pub image: RgbImage,
}

/// What gets reported for each presented frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSummary {
    pub preset: &'static str,
    pub code: &'static str,
    pub width: u32,
    pub height: u32,
    /// Mean of each channel on the 0–255 scale.
    pub mean_rgb: [f32; 3],
}

impl FrameSummary {
    pub fn of(frame: &DisplayFrame) -> Self {
        let mut sums = [0u64; 3];
        for px in frame.image.pixels() {
            for (sum, &v) in sums.iter_mut().zip(px.0.iter()) {
                *sum += u64::from(v);
            }
        }
        let count = (u64::from(frame.image.width()) * u64::from(frame.image.height())).max(1);
        Self {
            preset: frame.preset.label,
            code: frame.preset.code,
            width: frame.image.width(),
            height: frame.image.height(),
            mean_rgb: sums.map(|s| s as f32 / count as f32),
        }
    }
}

/// Something that can put a frame in front of the user.
pub trait FramePresenter: Send + 'static {
    fn present(&mut self, frame: DisplayFrame);
}

/// Presenter that reports each frame through the log.
#[derive(Debug, Default)]
pub struct LogPresenter {
    presented: usize,
}

impl LogPresenter {
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl FramePresenter for LogPresenter {
    fn present(&mut self, frame: DisplayFrame) {
        self.presented += 1;
        match serde_json::to_string(&FrameSummary::of(&frame)) {
            Ok(json) => tracing::info!("frame {}: {json}", self.presented),
            Err(e) => tracing::warn!("failed to serialize frame summary: {e}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to start display runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("display thread has shut down")]
    Closed,
    #[error("display thread panicked")]
    Panicked,
}

/// Sending half of the display thread, plus the thread itself.
pub struct DisplayHandle<P> {
    tx: mpsc::UnboundedSender<DisplayFrame>,
    thread: JoinHandle<P>,
}

impl<P: FramePresenter> DisplayHandle<P> {
    /// Queue a frame for presentation. Never blocks.
    pub fn show(&self, frame: DisplayFrame) -> Result<(), DisplayError> {
        self.tx.send(frame).map_err(|_| DisplayError::Closed)
    }

    /// Stop accepting frames, wait for the queue to drain, and hand back the presenter.
    pub fn close(self) -> Result<P, DisplayError> {
        drop(self.tx);
        self.thread.join().map_err(|_| DisplayError::Panicked)
    }
}

/// Spawn the display thread around `presenter`.
pub fn spawn_display<P: FramePresenter>(
    mut presenter: P,
) -> Result<DisplayHandle<P>, DisplayError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<DisplayFrame>();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let thread = std::thread::spawn(move || {
        rt.block_on(async {
            tracing::debug!("display thread started");
            while let Some(frame) = rx.recv().await {
                presenter.present(frame);
            }
            tracing::debug!("display thread stopping");
        });
        presenter
    });

    Ok(DisplayHandle { tx, thread })
}
