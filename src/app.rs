//! Headless driver: animates a path spectrum and writes PNG output.

use log::{debug, info};
use std::fs;

use crate::epicycles::{Animator, Step};
use crate::error::Result;
use crate::fourier::PathSpectrum;
use crate::params::{PlaybackConfig, RecordingConfig, RenderConfig};
use crate::rendering::{draw_step, RasterCanvas};

/// What a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub cycles_completed: usize,
    pub images_written: usize,
}

/// Application state
pub struct App {
    animator: Animator,
    canvas: RasterCanvas,
    recording: RecordingConfig,
    playback: PlaybackConfig,
}

impl App {
    pub fn new(
        spectrum: PathSpectrum,
        render_config: &RenderConfig,
        recording: RecordingConfig,
        playback: PlaybackConfig,
    ) -> Result<Self> {
        render_config.validate()?;
        recording.validate()?;
        playback.validate()?;

        let animator = Animator::new(spectrum, render_config.layout())?;
        info!(
            "{} components per axis ({} frames per cycle)",
            animator.spectrum().len(),
            animator.frames_per_cycle()
        );

        Ok(Self {
            animator,
            canvas: RasterCanvas::new(render_config),
            recording,
            playback,
        })
    }

    /// Record every frame for the configured duration, or run the
    /// configured number of cycles writing one snapshot per cycle
    pub fn run(&mut self) -> Result<RunSummary> {
        match self.recording.total_frames() {
            Some(total_frames) => self.record(total_frames),
            None => self.play(self.playback.cycles),
        }
    }

    fn record(&mut self, total_frames: usize) -> Result<RunSummary> {
        fs::create_dir_all(self.recording.frames_dir())?;
        info!(
            "Recording {} frames at {} fps to {}",
            total_frames,
            self.recording.fps,
            self.recording.frames_dir().display()
        );

        for frame in 0..total_frames {
            let step = self.animator.tick()?;
            self.render(&step);
            self.canvas.save(&self.recording.frame_path(frame))?;

            if (frame + 1) % self.recording.fps as usize == 0 {
                debug!("Recorded {}/{} frames", frame + 1, total_frames);
            }
        }

        Ok(RunSummary {
            frames: total_frames,
            cycles_completed: self.animator.cycles_completed(),
            images_written: total_frames,
        })
    }

    fn play(&mut self, cycles: usize) -> Result<RunSummary> {
        fs::create_dir_all(&self.recording.output_dir)?;
        let mut frames = 0;
        let mut images_written = 0;

        while self.animator.cycles_completed() < cycles {
            let step = self.animator.tick()?;
            frames += 1;

            if step.cycle_completed() {
                let path = self
                    .recording
                    .snapshot_path(self.animator.cycles_completed() - 1, step.mode);
                self.render(&step);
                self.canvas.save(&path)?;
                images_written += 1;
                info!("Wrote {}", path.display());
            }
        }

        Ok(RunSummary {
            frames,
            cycles_completed: self.animator.cycles_completed(),
            images_written,
        })
    }

    fn render(&mut self, step: &Step) {
        self.canvas.clear();
        draw_step(&mut self.canvas, step, step.trail(self.animator.session()));
    }
}
