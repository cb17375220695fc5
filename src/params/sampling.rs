//! Path sampling configuration.

use crate::error::{Error, Result};

/// How densely outlines are sampled before decomposition
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Points taken from each contour, spread evenly over its curves.
    /// Also the number of frequency components per contour, so the
    /// transform cost grows with the square of the total.
    pub samples_per_contour: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples_per_contour: 50,
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples_per_contour == 0 {
            return Err(Error::InvalidConfig(
                "samples per contour must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_validate() {
        assert!(SamplingConfig::default().validate().is_ok());
        let config = SamplingConfig {
            samples_per_contour: 0,
        };
        assert!(config.validate().is_err());
    }
}
