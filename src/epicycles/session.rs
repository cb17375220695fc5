//! Animation clock and trail for one reconstruction session.

use glam::Vec2;
use log::{debug, trace};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::mem;

use super::chain::{reconstruct_dual_axis, reconstruct_single_axis};
use super::{Epicycle, Layout, Mode};
use crate::error::{Error, Result};
use crate::fourier::FrequencyComponent;

/// Result of advancing the session by one frame
#[derive(Debug, Clone)]
pub struct Step {
    /// Mode that produced this step
    pub mode: Mode,

    /// Reconstructed path point for this frame
    pub point: Vec2,

    /// Every rotating vector of the frame's chain(s), in summation order
    pub arms: Vec<Epicycle>,

    /// Guide segments from the chain tips to `point` (combined mode only)
    pub connectors: Vec<(Vec2, Vec2)>,

    /// The finished trail, present only on the step that completes a cycle
    pub completed_trail: Option<Vec<Vec2>>,
}

impl Step {
    pub fn cycle_completed(&self) -> bool {
        self.completed_trail.is_some()
    }

    /// Trail to display alongside this step
    ///
    /// The session has already been reset when a cycle completes, so the
    /// finished trail is returned instead of the (now empty) live one.
    pub fn trail<'a>(&'a self, session: &'a AnimationSession) -> &'a [Vec2] {
        match &self.completed_trail {
            Some(trail) => trail.as_slice(),
            None => session.trail(),
        }
    }
}

/// Clock and accumulated trail of one animation
///
/// The clock runs from 0 to 2π in steps of `2π / N`. The trail collects one
/// point per step and is emptied when the clock wraps.
#[derive(Debug, Clone)]
pub struct AnimationSession {
    layout: Layout,
    time: f32,
    trail: Vec<Vec2>,
}

impl AnimationSession {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            time: 0.0,
            trail: Vec::new(),
        }
    }

    /// Current animation time (radians)
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Points accumulated so far in the current cycle
    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Advance one frame with two independent single-axis chains
    ///
    /// The X chain runs from the layout's combined X origin with no offset,
    /// the Y chain from the combined Y origin a quarter turn ahead. The
    /// frame's point takes X from the first chain's tip and Y from the
    /// second's.
    pub fn step_combined(
        &mut self,
        x: &[FrequencyComponent],
        y: &[FrequencyComponent],
    ) -> Result<Step> {
        if x.is_empty() {
            return Err(Error::EmptyComponents);
        }

        let px = reconstruct_single_axis(self.layout.combined_x_origin, 0.0, self.time, x);
        let py = reconstruct_single_axis(self.layout.combined_y_origin, FRAC_PI_2, self.time, y);
        let point = Vec2::new(px.tip.x, py.tip.y);
        let connectors = vec![(px.tip, point), (py.tip, point)];

        let mut arms = px.arms;
        arms.extend(py.arms);

        let completed_trail = self.advance(point, x.len());
        Ok(Step {
            mode: Mode::Combined,
            point,
            arms,
            connectors,
            completed_trail,
        })
    }

    /// Advance one frame with a single chain interleaving both axes
    pub fn step_interleaved(
        &mut self,
        x: &[FrequencyComponent],
        y: &[FrequencyComponent],
    ) -> Result<Step> {
        if x.is_empty() {
            return Err(Error::EmptyComponents);
        }

        let chain =
            reconstruct_dual_axis(self.layout.interleaved_origin, FRAC_PI_2, self.time, x, y)?;
        let point = chain.tip;

        let completed_trail = self.advance(point, x.len());
        Ok(Step {
            mode: Mode::Interleaved,
            point,
            arms: chain.arms,
            connectors: Vec::new(),
            completed_trail,
        })
    }

    /// Record `point` and move the clock forward by one of `steps_per_cycle`
    /// steps, returning the finished trail when the cycle ends.
    fn advance(&mut self, point: Vec2, steps_per_cycle: usize) -> Option<Vec<Vec2>> {
        self.trail.push(point);

        let dt = TAU / steps_per_cycle as f32;
        self.time += dt;
        trace!("t = {:.4} ({} points)", self.time, self.trail.len());

        // Half a step of slack absorbs float drift so a cycle is exactly N steps
        if self.time > TAU - dt * 0.5 {
            self.time = 0.0;
            let completed = mem::take(&mut self.trail);
            debug!("Cycle completed after {} steps", completed.len());
            Some(completed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::idft;

    fn spectrum(n: usize) -> (Vec<FrequencyComponent>, Vec<FrequencyComponent>) {
        let xs: Vec<f32> = (0..n).map(|i| (i as f32 * 0.9).cos() * 50.0).collect();
        let ys: Vec<f32> = (0..n).map(|i| (i as f32 * 1.3).sin() * 50.0).collect();
        (idft(&xs).unwrap(), idft(&ys).unwrap())
    }

    fn session() -> AnimationSession {
        AnimationSession::new(Layout::for_canvas(800, 800))
    }

    #[test]
    fn test_fresh_session_state() {
        let session = session();
        assert_eq!(session.time(), 0.0);
        assert!(session.trail().is_empty());
    }

    #[test]
    fn test_combined_cycle_completes_once_on_final_step() {
        for n in [1usize, 3, 4, 7, 8, 50, 64] {
            let (x, y) = spectrum(n);
            let mut session = session();

            for i in 0..n {
                if i == n - 1 {
                    assert_eq!(session.trail().len(), n - 1);
                }
                let step = session.step_combined(&x, &y).unwrap();
                if i < n - 1 {
                    assert!(!step.cycle_completed(), "n={} completed early at {}", n, i);
                } else {
                    assert!(step.cycle_completed(), "n={} did not complete", n);
                    assert_eq!(step.completed_trail.as_ref().unwrap().len(), n);
                }
            }

            assert!(session.trail().is_empty());
            assert_eq!(session.time(), 0.0);
        }
    }

    #[test]
    fn test_interleaved_cycle_completes_once_on_final_step() {
        let n = 16;
        let (x, y) = spectrum(n);
        let mut session = session();

        let completions = (0..n)
            .map(|_| session.step_interleaved(&x, &y).unwrap())
            .filter(Step::cycle_completed)
            .count();
        assert_eq!(completions, 1);
        assert!(session.trail().is_empty());
    }

    #[test]
    fn test_combined_point_cross_selects_axes() {
        let (x, y) = spectrum(10);
        let mut session = session();
        let layout = *session.layout();

        let px = reconstruct_single_axis(layout.combined_x_origin, 0.0, 0.0, &x);
        let py = reconstruct_single_axis(layout.combined_y_origin, FRAC_PI_2, 0.0, &y);

        let step = session.step_combined(&x, &y).unwrap();
        assert_eq!(step.mode, Mode::Combined);
        assert_eq!(step.point, Vec2::new(px.tip.x, py.tip.y));
        assert_eq!(step.arms.len(), x.len() + y.len());
        assert_eq!(step.connectors, vec![(px.tip, step.point), (py.tip, step.point)]);
        assert_eq!(session.trail(), &[step.point]);
    }

    #[test]
    fn test_combined_traces_sampled_x() {
        // X chain at zero offset revisits the samples, shifted by the origin
        let xs = [10.0f32, 20.0, 30.0, 40.0, 50.0];
        let x = idft(&xs).unwrap();
        let y = idft(&[0.0; 5]).unwrap();
        let mut session = session();
        let origin = session.layout().combined_x_origin;

        for &expected in &xs {
            let step = session.step_combined(&x, &y).unwrap();
            assert!((step.point.x - (origin.x + expected)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_interleaved_uses_center_origin() {
        let zeros = idft(&[0.0; 4]).unwrap();
        let mut session = session();
        let step = session.step_interleaved(&zeros, &zeros).unwrap();
        assert_eq!(step.mode, Mode::Interleaved);
        assert_eq!(step.point, session.layout().interleaved_origin);
        assert!(step.connectors.is_empty());
    }

    #[test]
    fn test_interleaved_length_mismatch() {
        let (x, _) = spectrum(4);
        let (y, _) = spectrum(5);
        let mut session = session();
        let err = session.step_interleaved(&x, &y).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(session.trail().is_empty());
        assert_eq!(session.time(), 0.0);
    }

    #[test]
    fn test_empty_components_rejected() {
        let mut session = session();
        assert!(matches!(
            session.step_combined(&[], &[]),
            Err(Error::EmptyComponents)
        ));
        assert!(matches!(
            session.step_interleaved(&[], &[]),
            Err(Error::EmptyComponents)
        ));
    }

    #[test]
    fn test_step_trail_prefers_completed() {
        let (x, y) = spectrum(2);
        let mut session = session();

        let first = session.step_combined(&x, &y).unwrap();
        assert_eq!(first.trail(&session).len(), 1);

        let second = session.step_combined(&x, &y).unwrap();
        assert!(session.trail().is_empty());
        assert_eq!(second.trail(&session).len(), 2);
    }
}
