//! Epicycles library - Fourier decomposition and epicycle animation of paths

pub mod app;
pub mod cli;
pub mod epicycles;
pub mod error;
pub mod fourier;
pub mod params;
pub mod path;
pub mod rendering;

pub use error::{Error, Result};
