//! Discrete Fourier decomposition of sampled path coordinates.
//!
//! Each coordinate axis of a path is decomposed on its own into a list of
//! oscillators (frequency, amplitude, phase). Summing those oscillators as
//! chained rotating vectors redraws the axis, which is what the epicycle
//! animator does every frame.

use glam::Vec2;
use log::debug;
use rustfft::num_complex::Complex;
use std::f32::consts::TAU;

use crate::error::{Error, Result};
use crate::path::split_axes;

/// One oscillator of a decomposed sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyComponent {
    /// Position in the component list (0..N)
    pub index: usize,

    /// Real part of the normalized coefficient
    pub re: f32,

    /// Imaginary part of the normalized coefficient
    pub im: f32,

    /// Angular rate in cycles per animation cycle (equal to `index`)
    pub frequency: f32,

    /// Circle radius, `sqrt(re² + im²)`
    pub amplitude: f32,

    /// Starting angle in radians, `atan2(im, re)`
    pub phase: f32,
}

impl FrequencyComponent {
    fn from_coefficient(index: usize, coefficient: Complex<f32>) -> Self {
        Self {
            index,
            re: coefficient.re,
            im: coefficient.im,
            frequency: index as f32,
            amplitude: coefficient.norm(),
            phase: coefficient.arg(),
        }
    }

    /// Angle of this oscillator at animation time `time` (radians)
    pub fn angle_at(&self, time: f32) -> f32 {
        self.frequency * time + self.phase
    }
}

/// Decompose a real sample sequence into `N` frequency components.
///
/// For every `k` in `0..N`:
///
/// ```text
/// re(k) =  (1/N) Σ x[n] cos(2πkn/N)
/// im(k) = -(1/N) Σ x[n] sin(2πkn/N)
/// ```
///
/// Components are returned in ascending `k`, which is also the order the
/// animator chains them in. The summation is deliberately the literal O(N²)
/// one; every component is built from all samples.
pub fn idft(samples: &[f32]) -> Result<Vec<FrequencyComponent>> {
    if samples.is_empty() {
        return Err(Error::EmptySamples);
    }

    let len = samples.len();
    let scale = len as f32;
    let mut components = Vec::with_capacity(len);

    for k in 0..len {
        let mut sum = Complex::new(0.0f32, 0.0);
        for (n, &x) in samples.iter().enumerate() {
            // k*n reduced mod N keeps phi small without changing its value
            let phi = TAU * ((k * n) % len) as f32 / scale;
            sum.re += x * phi.cos();
            sum.im -= x * phi.sin();
        }
        components.push(FrequencyComponent::from_coefficient(k, sum / scale));
    }

    debug!("Decomposed {} samples into {} components", len, components.len());
    Ok(components)
}

/// Frequency components for both axes of one sampled path
#[derive(Debug, Clone)]
pub struct PathSpectrum {
    pub x: Vec<FrequencyComponent>,
    pub y: Vec<FrequencyComponent>,
}

impl PathSpectrum {
    /// Split the path into X and Y sequences and decompose each
    pub fn from_points(points: &[Vec2]) -> Result<Self> {
        let (xs, ys) = split_axes(points);
        let x = idft(&xs)?;
        let y = idft(&ys)?;
        Ok(Self { x, y })
    }

    /// Number of components per axis (equals the number of path samples)
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
