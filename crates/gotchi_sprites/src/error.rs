use std::io;

use thiserror::Error;

/// Errors raised by the core's own filesystem and encoding operations.
///
/// Per-slot image misses and decode failures never surface here; they are
/// accumulated into [`GenerationResult`](crate::GenerationResult)
/// diagnostics instead.
#[derive(Error, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
