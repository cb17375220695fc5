//! Drawing of epicycle frames.
//!
//! [`Canvas`] is the drawing contract the animation reports to: dots for the
//! circles, lines for the rotating vectors, and a polyline for the trail.
//! [`RasterCanvas`] implements it on an RGBA image so frames can be written
//! out as PNG files.

use glam::Vec2;
use image::{Rgba as Pixel, RgbaImage};
use std::f32::consts::TAU;
use std::path::Path;

use crate::epicycles::Step;
use crate::error::Result;
use crate::params::{RenderConfig, Rgba};

/// Upper bound on the segments used to outline one circle
const MAX_CIRCLE_SEGMENTS: usize = 1024;

/// Slack around the canvas kept when clipping lines (pixels)
const CLIP_MARGIN_PX: f32 = 2.0;

/// Receiver of primitive draw requests
pub trait Canvas {
    /// Circle outline centered at `center`
    fn draw_dot(&mut self, center: Vec2, diameter: f32);

    fn draw_line(&mut self, from: Vec2, to: Vec2);

    /// Replace the displayed path with `points`
    fn set_polyline(&mut self, points: &[Vec2]);
}

/// Draw one animation step: every arm with its circle, the guide
/// connectors, then the trail
pub fn draw_step<C: Canvas + ?Sized>(canvas: &mut C, step: &Step, trail: &[Vec2]) {
    for arm in &step.arms {
        canvas.draw_dot(arm.center, arm.diameter);
        canvas.draw_line(arm.center, arm.tip);
    }
    for &(from, to) in &step.connectors {
        canvas.draw_line(from, to);
    }
    canvas.set_polyline(trail);
}

/// Software canvas backed by an RGBA image
pub struct RasterCanvas {
    image: RgbaImage,
    background: Rgba,
    circle_color: Rgba,
    arm_color: Rgba,
    trail_color: Rgba,
}

impl RasterCanvas {
    pub fn new(config: &RenderConfig) -> Self {
        let image = RgbaImage::from_pixel(
            config.canvas_width,
            config.canvas_height,
            Pixel(config.background),
        );
        Self {
            image,
            background: config.background,
            circle_color: config.circle_color,
            arm_color: config.arm_color,
            trail_color: config.trail_color,
        }
    }

    /// Fill the whole canvas with the background color
    pub fn clear(&mut self) {
        let background = Pixel(self.background);
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color at a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Write the canvas as a PNG file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }

    fn plot(&mut self, point: Vec2, color: Rgba) {
        let x = point.x.round();
        let y = point.y.round();
        if x < 0.0 || y < 0.0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = Pixel(color);
        }
    }

    fn segment(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }

        let min = Vec2::splat(-CLIP_MARGIN_PX);
        let max = Vec2::new(self.image.width() as f32, self.image.height() as f32)
            + Vec2::splat(CLIP_MARGIN_PX);
        let Some((from, to)) = clip_segment(from, to, min, max) else {
            return;
        };

        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            self.plot(from.lerp(to, i as f32 / steps as f32), color);
        }
    }
}

impl Canvas for RasterCanvas {
    fn draw_dot(&mut self, center: Vec2, diameter: f32) {
        let radius = diameter * 0.5;
        if !(center.is_finite() && radius.is_finite()) {
            return;
        }
        if radius < 0.5 {
            self.plot(center, self.circle_color);
            return;
        }

        let segments = ((TAU * radius).ceil() as usize).clamp(8, MAX_CIRCLE_SEGMENTS);
        let mut previous = center + Vec2::new(radius, 0.0);
        for i in 1..=segments {
            let angle = TAU * i as f32 / segments as f32;
            let next = center + radius * Vec2::new(angle.cos(), angle.sin());
            self.segment(previous, next, self.circle_color);
            previous = next;
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.segment(from, to, self.arm_color);
    }

    fn set_polyline(&mut self, points: &[Vec2]) {
        if let [only] = points {
            self.plot(*only, self.trail_color);
        }
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], self.trail_color);
        }
    }
}

/// Clip the segment `from → to` to the box `min..=max` (Liang-Barsky)
///
/// Returns `None` when the segment misses the box entirely.
fn clip_segment(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let delta = to - from;
    let mut enter = 0.0f32;
    let mut exit = 1.0f32;

    for (p, q) in [
        (-delta.x, from.x - min.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y - min.y),
        (delta.y, max.y - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            enter = enter.max(r);
        } else {
            exit = exit.min(r);
        }
        if enter > exit {
            return None;
        }
    }

    Some((from + delta * enter, from + delta * exit))
}
