//! Command-line argument parsing.

use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::params::{PlaybackConfig, RecordingConfig, RenderConfig, SamplingConfig};
use crate::path::{parse_svg, Contour, Shape};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Epicycles")]
#[command(about = "Fourier epicycle reconstruction of vector outlines", long_about = None)]
pub struct Args {
    /// Built-in shape: heart (default), star, square, circle
    #[arg(long, value_name = "SHAPE", default_value = "heart")]
    pub shape: String,

    /// SVG document or bare path data to trace instead of a built-in shape
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,

    /// Points sampled from each contour
    #[arg(long, value_name = "N", default_value = "50")]
    pub samples: usize,

    /// Cycles to run when not recording (modes alternate each cycle)
    #[arg(long, value_name = "N", default_value = "2")]
    pub cycles: usize,

    /// Record every frame for this long (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Directory for snapshots and recorded frames
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output: PathBuf,

    /// Canvas width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "800")]
    pub width: u32,

    /// Canvas height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "800")]
    pub height: u32,
}

impl Args {
    /// Parse the built-in shape, falling back to the heart
    pub fn parse_shape(&self) -> Shape {
        match Shape::from_name(&self.shape) {
            Some(shape) => shape,
            None => {
                warn!("Unknown shape '{}', using heart", self.shape);
                Shape::Heart
            }
        }
    }

    /// Contours from `--svg` if given, otherwise from the built-in shape
    pub fn load_contours(&self) -> Result<Vec<Contour>> {
        match &self.svg {
            Some(path) => {
                info!("Outline: {}", path.display());
                let text = fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_svg(&text)
            }
            None => {
                let shape = self.parse_shape();
                info!("Outline: built-in {}", shape.name());
                shape.contours()
            }
        }
    }

    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            samples_per_contour: self.samples,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            canvas_width: self.width,
            canvas_height: self.height,
            ..RenderConfig::default()
        }
    }

    pub fn recording_config(&self) -> RecordingConfig {
        RecordingConfig::new(self.output.clone(), self.record)
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            cycles: self.cycles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["epicycles"]);
        assert_eq!(args.parse_shape(), Shape::Heart);
        assert_eq!(args.sampling_config().samples_per_contour, 50);
        assert_eq!(args.playback_config().cycles, 2);
        assert_eq!(args.render_config().canvas_width, 800);
        assert_eq!(args.recording_config().total_frames(), None);
        assert_eq!(args.recording_config().fps, 30);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "epicycles",
            "--shape",
            "star",
            "--samples",
            "120",
            "--record",
            "2",
            "--width",
            "640",
            "--output",
            "out",
        ]);
        assert_eq!(args.parse_shape(), Shape::Star);
        assert_eq!(args.sampling_config().samples_per_contour, 120);
        assert_eq!(args.recording_config().total_frames(), Some(60));
        assert_eq!(args.render_config().canvas_width, 640);
        assert_eq!(args.render_config().canvas_height, 800);
        assert_eq!(args.recording_config().output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_shape_falls_back() {
        let args = Args::parse_from(["epicycles", "--shape", "hexagon"]);
        assert_eq!(args.parse_shape(), Shape::Heart);
    }

    #[test]
    fn test_load_contours_from_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.svg");
        fs::write(&path, r#"<svg><path d="M0 0 L10 0 L10 10 Z"/></svg>"#).unwrap();

        let args = Args::parse_from(["epicycles", "--svg", path.to_str().unwrap()]);
        let contours = args.load_contours().unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].curve_count(), 3);
    }

    #[test]
    fn test_load_contours_missing_file() {
        let args = Args::parse_from(["epicycles", "--svg", "/nonexistent/outline.svg"]);
        assert!(matches!(args.load_contours(), Err(Error::Read { .. })));
    }
}
