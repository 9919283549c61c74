//! fringeline - Interferogram fringe analysis core
//!
//! Two independent components over a shared [`Raster`](fringe_core::Raster)
//! view:
//!
//! - [`mask`]: a per-row elliptical admissibility mask constraining the
//!   analysis region to an annulus between a user-drawn outer and inner
//!   ellipse.
//! - [`trace`]: a ridge-following tracer that walks a bright fringe from
//!   a seed pixel and returns its path, width, and intensity profile.
//!
//! # Example
//!
//! ```
//! use fringeline::mask::{EllipseParams, Mask};
//!
//! let mut mask = Mask::new(10, 4).unwrap();
//! mask.set_ellipse(EllipseParams::new(5, 2, 3, 2), true);
//! assert!(mask.is_inside(5, 2));
//! ```

pub use fringe_core::{Direction, Error, IPoint, Raster};

pub mod mask {
    pub use fringe_mask::{EllipseParams, Mask, RowBoundary};
}

pub mod trace {
    pub use fringe_trace::{TraceError, TraceOutcome, TraceReport, Tracer, TracerParams, TracePoint};
}
