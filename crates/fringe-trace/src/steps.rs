//! Bootstrapping the first two points of a walk (§4.2.2), and
//! extending a walk one step at a time until it hits a terminal
//! condition (§4.2.3).

use fringe_core::IPoint;

use crate::error::TraceError;
use crate::outcome::TraceOutcome;
use crate::point::TracePoint;
use crate::state::TraceState;
use crate::tracer::{Bootstrap, Tracer};

impl<'a> Tracer<'a> {
    pub(crate) fn first_step(&self, sx: i64, sy: i64) -> Result<Bootstrap, TraceError> {
        let seed = IPoint::new(sx, sy);
        let (w0, dir0) = self
            .measure_width(seed)
            .ok_or(TraceError::WidthUnmeasurable)?;
        let seed_width = w0.max(5.0);
        let cur_average = self.avg_intensity(seed);

        let (dx, dy) = dir0.to_vector();
        let search_dist = seed_width * self.params().max_width_change;
        let m = self
            .find_max_along(
                seed,
                IPoint::new(dx, dy),
                search_dist,
                cur_average,
                self.params().intensity_threshold,
            )
            .ok_or(TraceError::LowContrastStart)?;

        let (w1, dir1) = self.measure_width(m).ok_or(TraceError::WidthUnmeasurable)?;

        let (ddx, ddy) = dir1.to_vector();
        let (sgx, sgy) = (ddx.signum(), ddy.signum());
        let perp = IPoint::new(-sgy, sgx);
        let mag = if ddx != 0 && ddy != 0 {
            w1 * std::f64::consts::FRAC_1_SQRT_2
        } else {
            w1
        };
        let offset_x = (perp.x as f64 * mag).round() as i64;
        let offset_y = (perp.y as f64 * mag).round() as i64;
        let raw = IPoint::new(sx + offset_x, sy + offset_y);
        if !self.raster.contains(raw.x, raw.y) {
            return Err(TraceError::SecondPointOutOfBounds);
        }
        let c = self.center_perpendicular(raw, perp, w1);

        let point1 = TracePoint::new(m.x, m.y, w1, self.avg_intensity(m));
        let point2 = TracePoint::new(c.x, c.y, w1, self.avg_intensity(c));

        Ok(Bootstrap {
            point1,
            point2,
            seed_width,
            state: TraceState {
                cur_width: w1,
                cur_average,
            },
        })
    }

    /// Extend `line` (already holding >= 2 points) in place until a
    /// terminal or fatal-but-expected condition stops the walk.
    pub(crate) fn run_steps(
        &self,
        line: &mut Vec<TracePoint>,
        state: &mut TraceState,
        max_steps: u32,
    ) -> TraceOutcome {
        let first = IPoint::new(line[0].x, line[0].y);

        loop {
            if line.len() as u32 >= max_steps {
                return TraceOutcome::StepsExhausted;
            }
            if state.cur_width < 2.0 {
                return TraceOutcome::WidthCollapsed;
            }

            let p_n = *line.last().unwrap();
            let p_n_pt = IPoint::new(p_n.x, p_n.y);
            let measured = match self.measure_width(p_n_pt) {
                Some(m) => m,
                None => return TraceOutcome::WidthUnmeasurable,
            };
            let mut w = measured.0.clamp(5.0, 80.0);
            let lower = state.cur_width / self.params().max_width_change;
            let upper = state.cur_width * self.params().max_width_change;
            w = w.clamp(lower, upper);
            state.cur_width = w;

            let p_prev = line[line.len() - 2];
            let mut delta = (p_n.x - p_prev.x, p_n.y - p_prev.y);
            if delta.0.abs() < 2 && delta.1.abs() < 2 {
                if line.len() >= 3 {
                    let p_prev2 = line[line.len() - 3];
                    delta = (p_n.x - p_prev2.x, p_n.y - p_prev2.y);
                }
                if delta.0.abs() < 2 && delta.1.abs() < 2 {
                    return TraceOutcome::DirectionIndeterminate;
                }
            }

            let scale = if w <= 5.0 {
                1.0
            } else if w <= 10.0 {
                0.8
            } else if w <= 20.0 {
                0.6
            } else {
                0.4
            };
            let mag = ((delta.0 * delta.0 + delta.1 * delta.1) as f64).sqrt();
            let target_len = w * scale;
            let step = IPoint::new(
                (delta.0 as f64 / mag * target_len).round() as i64,
                (delta.1 as f64 / mag * target_len).round() as i64,
            );

            let q = IPoint::new(p_n.x + step.x, p_n.y + step.y);
            if !self.raster.contains(q.x, q.y) {
                let boundary = self.lin_step_to_boundary(p_n_pt, q);
                line.push(TracePoint::new(
                    boundary.x,
                    boundary.y,
                    w,
                    self.avg_intensity(boundary),
                ));
                return TraceOutcome::Boundary;
            }

            let mut qc = self.center_perpendicular(q, step, w);
            if w > 20.0 {
                let residual = IPoint::new(qc.x - q.x, qc.y - q.y);
                if residual != IPoint::new(0, 0) {
                    qc = self.center_perpendicular(qc, residual, w);
                }
            }

            line.push(TracePoint::new(qc.x, qc.y, w, self.avg_intensity(qc)));

            if line.len() > 5 {
                let dx = (qc.x - first.x) as f64;
                let dy = (qc.y - first.y) as f64;
                if (dx * dx + dy * dy).sqrt() < w {
                    return TraceOutcome::Closed;
                }
            }
        }
    }
}
