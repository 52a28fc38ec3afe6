use std::io;
use std::path::PathBuf;

use enough::StopReason;

/// Errors from buffer allocation, filling, and PPM output.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PixmapError {
    #[error("failed to allocate {bytes} bytes of pixel storage")]
    AllocationFailed { bytes: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("image dimensions must be non-zero: {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("failed to create image file {}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("unrecognized pixel layout {0:?} (expected \"24\", \"32\" or \"24ptr\")")]
    InvalidLayout(String),

    #[error("cannot {operation} an image in state {state}")]
    InvalidState {
        operation: &'static str,
        state: crate::ImageState,
    },

    #[error("{layout} pixel buffer used after release")]
    Released { layout: crate::PixelLayout },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PixmapError {
    fn from(r: StopReason) -> Self {
        PixmapError::Cancelled(r)
    }
}
