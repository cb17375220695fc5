//! Rendering and recording configuration.

use std::path::PathBuf;

use crate::epicycles::{Layout, Mode};
use crate::error::{Error, Result};

/// RGBA color, 8 bits per channel
pub type Rgba = [u8; 4];

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width (pixels)
    pub canvas_width: u32,

    /// Canvas height (pixels)
    pub canvas_height: u32,

    pub background: Rgba,

    /// Circle swept by each rotating vector
    pub circle_color: Rgba,

    /// Rotating vectors and guide lines
    pub arm_color: Rgba,

    /// Reconstructed path
    pub trail_color: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            background: [0, 0, 0, 255],
            circle_color: [0, 160, 0, 255],
            arm_color: [220, 40, 40, 255],
            trail_color: [255, 255, 255, 255],
        }
    }
}

impl RenderConfig {
    /// Chain origins for this canvas size
    pub fn layout(&self) -> Layout {
        Layout::for_canvas(self.canvas_width, self.canvas_height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }
}

/// Output configuration for snapshots and frame recording
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds); `None` writes one snapshot per cycle
    pub duration_secs: Option<f32>,

    /// Output directory for frames and snapshots
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(output_dir: impl Into<PathBuf>, duration_secs: Option<f32>) -> Self {
        Self {
            duration_secs,
            output_dir: output_dir.into(),
            fps: 30,
        }
    }

    /// Total number of frames to capture, if recording
    pub fn total_frames(&self) -> Option<usize> {
        self.duration_secs
            .map(|secs| (secs * self.fps as f32).ceil() as usize)
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame))
    }

    /// Snapshot of the final frame of a cycle
    pub fn snapshot_path(&self, cycle: usize, mode: Mode) -> PathBuf {
        self.output_dir
            .join(format!("cycle_{:03}_{}.png", cycle, mode))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be > 0".to_string()));
        }
        if let Some(secs) = self.duration_secs {
            if !(secs.is_finite() && secs > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "recording duration must be positive, got {}",
                    secs
                )));
            }
        }
        Ok(())
    }
}
