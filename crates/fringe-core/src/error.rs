//! Error types for fringe-core
//!
//! Provides a unified error type for the construction-time failures shared
//! by the mask and tracer crates. Each variant captures enough context for
//! diagnostics without exposing internal implementation details.

use thiserror::Error;

/// fringe-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions (must both be positive)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// Row stride shorter than the declared width
    #[error("stride {stride} is shorter than width {width}")]
    StrideTooShort { width: u32, stride: u32 },

    /// Raster buffer too small for the declared height and stride
    #[error("buffer of {len} bytes too small for height {height} and stride {stride}")]
    BufferTooSmall { len: usize, height: u32, stride: u32 },
}

/// Result type alias for fringe-core operations
pub type Result<T> = std::result::Result<T, Error>;
