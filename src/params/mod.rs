//! Parameter definitions with units and documented semantics.
//!
//! Defaults reproduce the classic epicycle demo:
//! - 800×800 px canvas
//! - 50 samples per contour
//! - 30 frames per second when recording

mod playback;
mod render;
mod sampling;

// Re-export all types
pub use playback::PlaybackConfig;
pub use render::{RecordingConfig, RenderConfig, Rgba};
pub use sampling::SamplingConfig;
