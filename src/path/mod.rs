//! Path sampling: Bézier contours in, evenly stepped points out.

mod shapes;
mod svg;

pub use shapes::Shape;
pub use svg::{parse_path_data, parse_svg};

use glam::Vec2;
use log::{debug, warn};

use crate::error::{Error, Result};

/// Anchor of a contour plus the two control points of the curve leaving it
///
/// Curve `i` of a contour runs `p0_i, p1_i, p2_i, p0_{i+1}`; the control
/// points of the last segment are unused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl BezierSegment {
    /// Segment with no outgoing curve
    pub fn anchor(point: Vec2) -> Self {
        Self {
            p0: point,
            p1: point,
            p2: point,
        }
    }
}

/// One connected run of cubic Bézier curves
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub segments: Vec<BezierSegment>,
    pub closed: bool,
}

impl Contour {
    /// Number of curves (one fewer than the segment count)
    pub fn curve_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Sample `samples` points across the whole contour
    ///
    /// The contour parameter runs from 0 to `curve_count` in equal steps;
    /// its integer part picks the curve and its fraction is the local `t`.
    /// The end point of the last curve is never emitted, so closed contours
    /// do not repeat their start point.
    pub fn sample(&self, samples: usize) -> Vec<Vec2> {
        let curves = self.curve_count();
        if curves == 0 {
            return Vec::new();
        }

        let delta = curves as f32 / samples as f32;
        let mut points = Vec::with_capacity(samples);
        let mut time = 0.0f32;

        for _ in 0..samples {
            let index = (time.floor() as usize).min(curves - 1);
            let t = time - index as f32;

            let s = &self.segments[index];
            let end = self.segments[index + 1].p0;
            points.push(cubic_bezier(s.p0, s.p1, s.p2, end, t));

            time += delta;
        }

        points
    }
}

/// Evaluate a cubic Bézier curve at `t`
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Sample every contour and concatenate the points in contour order
pub fn sample_contours(contours: &[Contour], samples_per_contour: usize) -> Result<Vec<Vec2>> {
    if samples_per_contour == 0 {
        return Err(Error::InvalidConfig(
            "samples per contour must be > 0".to_string(),
        ));
    }

    let mut points = Vec::new();
    for (i, contour) in contours.iter().enumerate() {
        if contour.curve_count() == 0 {
            warn!("Skipping contour {} with no curves", i);
            continue;
        }
        points.extend(contour.sample(samples_per_contour));
    }

    debug!(
        "Sampled {} points from {} contours",
        points.len(),
        contours.len()
    );
    Ok(points)
}

/// Split a path into its X and Y coordinate sequences
pub fn split_axes(points: &[Vec2]) -> (Vec<f32>, Vec<f32>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}
