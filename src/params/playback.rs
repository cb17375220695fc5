//! Headless playback configuration.

use crate::error::{Error, Result};

/// How long to animate when not recording
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Full cycles to run; modes alternate, combined first
    pub cycles: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        // One combined and one interleaved cycle
        Self { cycles: 2 }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(Error::InvalidConfig("cycles must be > 0".to_string()));
        }
        Ok(())
    }
}
