//! Errors for building images and views over caller provided buffers.

/// Contract violations detected while wrapping raw pixel storage.
#[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
pub enum Error {
    /// The row stride is shorter than a row.
    #[error("row stride {stride} is smaller than the image width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The buffer cannot hold the requested rows.
    #[error("buffer holds {actual} scalars, but {expected} are required")]
    BufferTooSmall { expected: usize, actual: usize },
    /// The buffer length does not match `width * height * channels`.
    #[error("buffer holds {actual} scalars, expected exactly {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
