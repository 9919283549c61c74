//! The tracer itself: binds a raster view and parameters, and walks
//! ridge lines from a seed point.

use fringe_core::{IPoint, Raster};

use crate::error::TraceError;
use crate::outcome::TraceReport;
use crate::params::TracerParams;
use crate::state::TraceState;

/// Walks ridge lines across a grayscale raster.
///
/// Binds a non-owning [`Raster`] view for its lifetime `'a`; swap in a
/// different image with [`Tracer::set_image`] without reallocating the
/// tracer itself.
pub struct Tracer<'a> {
    pub(crate) raster: Raster<'a>,
    params: TracerParams,
    last_error: Option<TraceError>,
}

impl<'a> Tracer<'a> {
    pub fn new(raster: Raster<'a>, params: TracerParams) -> Self {
        Self {
            raster,
            params,
            last_error: None,
        }
    }

    /// Bind a new raster view, replacing whatever was set before.
    pub fn set_image(&mut self, raster: Raster<'a>) {
        self.raster = raster;
    }

    pub fn params(&self) -> &TracerParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut TracerParams {
        &mut self.params
    }

    pub fn set_params(&mut self, params: TracerParams) {
        self.params = params;
    }

    /// The error from the most recent failing [`Tracer::trace_line`]
    /// call, if any.
    pub fn last_error(&self) -> Option<TraceError> {
        self.last_error
    }

    /// Walk a ridge line outward from `(seed_x, seed_y)`.
    ///
    /// Bootstraps a first pair of points (§4.2.2), then extends them
    /// forward (and, if [`TracerParams::bidirectional`] is set,
    /// backward) one step at a time (§4.2.3) until each direction hits
    /// a terminal condition. Fails only if the bootstrap itself cannot
    /// produce a usable starting pair; once it has, the walk always
    /// returns at least those two points.
    pub fn trace_line(&mut self, seed_x: i64, seed_y: i64) -> Result<TraceReport, TraceError> {
        if !self.raster.contains(seed_x, seed_y) {
            let err = TraceError::InvalidSeed {
                x: seed_x,
                y: seed_y,
            };
            self.last_error = Some(err);
            return Err(err);
        }

        let bootstrap = match self.first_step(seed_x, seed_y) {
            Ok(b) => b,
            Err(err) => {
                self.last_error = Some(err);
                return Err(err);
            }
        };

        let max_steps = self.params.max_steps;
        let mut forward_line = vec![bootstrap.point1, bootstrap.point2];
        let mut forward_state = bootstrap.state;
        let forward = self.run_steps(&mut forward_line, &mut forward_state, max_steps);

        let mut backward_line: Option<Vec<crate::point::TracePoint>> = None;
        let mut backward = None;

        if self.params.bidirectional {
            let seed = IPoint::new(seed_x, seed_y);
            let point1 = IPoint::new(bootstrap.point1.x, bootstrap.point1.y);
            let reflected = seed + (seed - point1);
            if let Some((width, _)) = self.measure_width(reflected) {
                let seed_point = crate::point::TracePoint::new(
                    seed_x,
                    seed_y,
                    bootstrap.seed_width,
                    bootstrap.state.cur_average,
                );
                let reflected_point = crate::point::TracePoint::new(
                    reflected.x,
                    reflected.y,
                    width,
                    self.avg_intensity(reflected),
                );
                let mut line = vec![seed_point, reflected_point];
                let mut state = TraceState {
                    cur_width: width,
                    cur_average: bootstrap.state.cur_average,
                };
                let outcome = self.run_steps(&mut line, &mut state, max_steps);
                backward_line = Some(line);
                backward = Some(outcome);
            }
        }

        let mut points = Vec::new();
        if let Some(line) = backward_line {
            points.extend(line.into_iter().rev());
        }
        points.extend(forward_line);

        self.last_error = None;
        Ok(TraceReport {
            points,
            forward,
            backward,
        })
    }
}

pub(crate) struct Bootstrap {
    pub point1: crate::point::TracePoint,
    pub point2: crate::point::TracePoint,
    pub seed_width: f64,
    pub state: TraceState,
}
