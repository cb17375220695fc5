//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the transform, the animator and the surrounding tooling.
#[derive(Debug, Error)]
pub enum Error {
    /// The transform needs at least one sample to normalize by.
    #[error("invalid argument: sample sequence is empty")]
    EmptySamples,

    /// Stepping needs at least one component to derive the clock increment.
    #[error("invalid argument: frequency component list is empty")]
    EmptyComponents,

    /// Dual-axis reconstruction pairs components index by index.
    #[error("invalid argument: component lists differ in length (expected {expected}, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    /// SVG input that parsed but yields no usable outline.
    #[error("path data error: {0}")]
    PathData(String),

    #[error("failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    /// True for the argument-validation failures of the transform and animator.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EmptySamples | Error::EmptyComponents | Error::LengthMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        assert!(Error::EmptySamples.is_invalid_argument());
        assert!(Error::EmptyComponents.is_invalid_argument());
        assert!(Error::LengthMismatch {
            expected: 4,
            actual: 5
        }
        .is_invalid_argument());
        assert!(!Error::InvalidConfig("fps".to_string()).is_invalid_argument());
        assert!(!Error::PathData("empty".to_string()).is_invalid_argument());
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = Error::LengthMismatch {
            expected: 4,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: component lists differ in length (expected 4, got 5)"
        );
    }
}
