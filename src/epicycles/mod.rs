//! Epicycle reconstruction and animation.
//!
//! Frequency components are chained tip to tail as rotating vectors. The
//! chain functions are pure: they take the animation time and
//! return the final tip together with every intermediate arm, so drawing is
//! left to whoever consumes the [`Reconstruction`]. [`AnimationSession`] owns
//! the clock and the trail, and [`Animator`] alternates the two display modes
//! cycle by cycle.

mod animator;
mod chain;
mod session;

// Re-export public types
pub use animator::Animator;
pub use chain::{reconstruct_dual_axis, reconstruct_single_axis};
pub use session::{AnimationSession, Step};

use glam::Vec2;
use std::fmt;

/// Distance from the canvas edge to the origin of each combined-mode chain (pixels)
pub const CHAIN_MARGIN_PX: f32 = 100.0;

/// One rotating vector of a reconstructed chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycle {
    /// Position before this vector was added (circle center)
    pub center: Vec2,

    /// Position after this vector was added
    pub tip: Vec2,

    /// Circle diameter swept by the vector
    pub diameter: f32,
}

/// Final position of a chain plus its intermediate arms, in summation order
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub tip: Vec2,
    pub arms: Vec<Epicycle>,
}

/// Reconstruction mode driven for one full cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Two independent single-axis chains, X taken from one and Y from the other
    #[default]
    Combined,

    /// One chain mixing both axes' components step by step
    Interleaved,
}

impl Mode {
    /// The mode that follows this one once its cycle completes
    pub fn other(self) -> Self {
        match self {
            Mode::Combined => Mode::Interleaved,
            Mode::Interleaved => Mode::Combined,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Combined => "combined",
            Mode::Interleaved => "interleaved",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chain origins on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Origin of the X chain in combined mode
    pub combined_x_origin: Vec2,

    /// Origin of the Y chain in combined mode
    pub combined_y_origin: Vec2,

    /// Origin of the single chain in interleaved mode
    pub interleaved_origin: Vec2,
}

impl Layout {
    /// Place the chains for a canvas of the given size.
    ///
    /// The X chain sits along the top edge right of center, the Y chain along
    /// the left edge below center, and the interleaved chain at the center.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        Self {
            combined_x_origin: Vec2::new(half_w + CHAIN_MARGIN_PX, CHAIN_MARGIN_PX),
            combined_y_origin: Vec2::new(CHAIN_MARGIN_PX, half_h + CHAIN_MARGIN_PX),
            interleaved_origin: Vec2::new(half_w, half_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_alternates() {
        assert_eq!(Mode::default(), Mode::Combined);
        assert_eq!(Mode::Combined.other(), Mode::Interleaved);
        assert_eq!(Mode::Interleaved.other(), Mode::Combined);
        assert_eq!(Mode::Interleaved.to_string(), "interleaved");
    }

    #[test]
    fn test_layout_for_canvas() {
        let layout = Layout::for_canvas(800, 800);
        assert_eq!(layout.combined_x_origin, Vec2::new(500.0, 100.0));
        assert_eq!(layout.combined_y_origin, Vec2::new(100.0, 500.0));
        assert_eq!(layout.interleaved_origin, Vec2::new(400.0, 400.0));
    }
}
