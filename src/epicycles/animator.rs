//! Alternating combined / interleaved playback of one path spectrum.

use log::info;

use super::session::{AnimationSession, Step};
use super::{Layout, Mode};
use crate::error::{Error, Result};
use crate::fourier::PathSpectrum;

/// Drives an [`AnimationSession`] over a path spectrum, switching mode
/// every time a cycle completes (combined first)
pub struct Animator {
    spectrum: PathSpectrum,
    session: AnimationSession,
    mode: Mode,
    cycles_completed: usize,
}

impl Animator {
    /// Create an animator for the given spectrum and chain layout
    pub fn new(spectrum: PathSpectrum, layout: Layout) -> Result<Self> {
        if spectrum.is_empty() {
            return Err(Error::EmptyComponents);
        }
        if spectrum.x.len() != spectrum.y.len() {
            return Err(Error::LengthMismatch {
                expected: spectrum.x.len(),
                actual: spectrum.y.len(),
            });
        }

        Ok(Self {
            spectrum,
            session: AnimationSession::new(layout),
            mode: Mode::default(),
            cycles_completed: 0,
        })
    }

    /// Advance one frame in the current mode
    pub fn tick(&mut self) -> Result<Step> {
        let step = match self.mode {
            Mode::Combined => self
                .session
                .step_combined(&self.spectrum.x, &self.spectrum.y)?,
            Mode::Interleaved => self
                .session
                .step_interleaved(&self.spectrum.x, &self.spectrum.y)?,
        };

        if step.cycle_completed() {
            self.cycles_completed += 1;
            info!(
                "Cycle {} ({}) completed, switching to {}",
                self.cycles_completed,
                self.mode,
                self.mode.other()
            );
            self.mode = self.mode.other();
        }

        Ok(step)
    }

    /// Mode the next tick will run in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    pub fn spectrum(&self) -> &PathSpectrum {
        &self.spectrum
    }

    pub fn cycles_completed(&self) -> usize {
        self.cycles_completed
    }

    /// Frames needed to sweep one full cycle
    pub fn frames_per_cycle(&self) -> usize {
        self.spectrum.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::idft;
    use glam::Vec2;

    fn square_spectrum() -> PathSpectrum {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(50.0, 50.0),
        ];
        PathSpectrum::from_points(&points).unwrap()
    }

    #[test]
    fn test_animator_alternates_modes() {
        let mut animator = Animator::new(square_spectrum(), Layout::for_canvas(800, 800)).unwrap();
        let n = animator.frames_per_cycle();
        assert_eq!(n, 5);

        let mut modes = Vec::new();
        for _ in 0..n * 4 {
            let step = animator.tick().unwrap();
            if step.cycle_completed() {
                modes.push(step.mode);
                assert!(animator.session().trail().is_empty());
            }
        }

        assert_eq!(
            modes,
            vec![
                Mode::Combined,
                Mode::Interleaved,
                Mode::Combined,
                Mode::Interleaved
            ]
        );
        assert_eq!(animator.cycles_completed(), 4);
        assert_eq!(animator.mode(), Mode::Combined);
    }

    #[test]
    fn test_animator_mode_holds_within_cycle() {
        let mut animator = Animator::new(square_spectrum(), Layout::for_canvas(640, 480)).unwrap();
        for _ in 0..4 {
            assert_eq!(animator.tick().unwrap().mode, Mode::Combined);
        }
        assert_eq!(animator.tick().unwrap().mode, Mode::Combined);
        assert_eq!(animator.tick().unwrap().mode, Mode::Interleaved);
    }

    #[test]
    fn test_animator_rejects_mismatched_spectrum() {
        let spectrum = PathSpectrum {
            x: idft(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            y: idft(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
        };
        let err = Animator::new(spectrum, Layout::for_canvas(800, 800))
            .err()
            .unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_animator_rejects_empty_spectrum() {
        let spectrum = PathSpectrum {
            x: Vec::new(),
            y: Vec::new(),
        };
        assert!(matches!(
            Animator::new(spectrum, Layout::for_canvas(800, 800)),
            Err(Error::EmptyComponents)
        ));
    }
}
