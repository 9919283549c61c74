//! Fatal conditions that abort a trace before any usable line exists.
//!
//! These can only arise while bootstrapping the first two points of a
//! walk (§4.2.2); once that pair exists, a trace always returns at
//! least those two points, and further trouble is reported through a
//! [`crate::TraceOutcome`] instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("seed ({x}, {y}) is outside the image")]
    InvalidSeed { x: i64, y: i64 },

    #[error("width could not be measured at the seed")]
    WidthUnmeasurable,

    #[error("no sufficiently bright point found along the seed direction")]
    LowContrastStart,

    #[error("the perpendicular companion point fell outside the image")]
    SecondPointOutOfBounds,
}

pub type Result<T> = std::result::Result<T, TraceError>;
