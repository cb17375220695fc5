//! Chained rotating-vector sums.

use glam::Vec2;

use super::{Epicycle, Reconstruction};
use crate::error::{Error, Result};
use crate::fourier::FrequencyComponent;

/// Sum one axis' components as rotating vectors starting at `origin`
///
/// Vector `i` has length `amplitude_i` and angle
/// `frequency_i * time + phase_i + rotation_offset`. Components are consumed
/// in list order; an empty list leaves the tip at `origin`.
pub fn reconstruct_single_axis(
    origin: Vec2,
    rotation_offset: f32,
    time: f32,
    components: &[FrequencyComponent],
) -> Reconstruction {
    let mut tip = origin;
    let mut arms = Vec::with_capacity(components.len());

    for c in components {
        let previous = tip;
        let angle = c.angle_at(time) + rotation_offset;
        tip += c.amplitude * Vec2::new(angle.cos(), angle.sin());

        arms.push(Epicycle {
            center: previous,
            tip,
            diameter: c.amplitude * 2.0,
        });
    }

    Reconstruction { tip, arms }
}

/// Sum two component lists pairwise into a single chain
///
/// Each step adds two vectors. The X coordinate always advances at the
/// first list's frequency and the Y coordinate at the second list's, while
/// the first vector uses the first list's amplitude and phase and the second
/// vector the second list's amplitude and phase shifted by `rotation_offset`.
/// Both lists must have the same length.
pub fn reconstruct_dual_axis(
    origin: Vec2,
    rotation_offset: f32,
    time: f32,
    first: &[FrequencyComponent],
    second: &[FrequencyComponent],
) -> Result<Reconstruction> {
    if first.len() != second.len() {
        return Err(Error::LengthMismatch {
            expected: first.len(),
            actual: second.len(),
        });
    }

    let mut tip = origin;
    let mut arms = Vec::with_capacity(first.len());

    for (a, b) in first.iter().zip(second) {
        let previous = tip;
        let x_rate = a.frequency * time;
        let y_rate = b.frequency * time;

        tip.x += a.amplitude * (x_rate + a.phase).cos();
        tip.y += a.amplitude * (y_rate + a.phase).sin();

        tip.x += b.amplitude * (x_rate + b.phase + rotation_offset).cos();
        tip.y += b.amplitude * (y_rate + b.phase + rotation_offset).sin();

        arms.push(Epicycle {
            center: previous,
            tip,
            diameter: a.amplitude * 2.0 + b.amplitude * 2.0,
        });
    }

    Ok(Reconstruction { tip, arms })
}
