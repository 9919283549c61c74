//! fringe-core - Shared raster view and geometric types for interferogram
//! fringe analysis
//!
//! This crate provides the types shared by the elliptical mask and fringe
//! tracer:
//!
//! - [`Raster`] - a borrowed, row-major 8-bit grayscale image view
//! - [`Direction`] - the four discrete ridge-tracing directions
//! - [`IPoint`] - an integer pixel coordinate
//! - [`Error`] / [`Result`] - the shared construction-time error type

mod error;
mod geometry;
mod raster;

pub use error::{Error, Result};
pub use geometry::{Direction, IPoint};
pub use raster::Raster;
