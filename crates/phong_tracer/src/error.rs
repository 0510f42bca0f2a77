//! Error type for scene validation and image output.
//!
//! Intersection tests never fail: a degenerate ray or primitive is simply
//! reported as a miss.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing a render or writing its result.
#[derive(Error, Debug)]
pub enum TracerError {
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write image {}: {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type TracerResult<T> = Result<T, TracerError>;
