//! Local intensity probes the stepping algorithm is built from.

use fringe_core::{Direction, IPoint};

use crate::tracer::Tracer;

impl<'a> Tracer<'a> {
    /// Arithmetic mean of the pixel at `p` and its up-to-eight in-bounds
    /// 8-neighbours. Zero if `p` itself is out of bounds.
    pub(crate) fn avg_intensity(&self, p: IPoint) -> f64 {
        if !self.raster.contains(p.x, p.y) {
            return 0.0;
        }
        let mut sum = self.raster.get_pixel(p.x, p.y) as f64;
        let mut count = 1u32;
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = IPoint::new(p.x + dx, p.y + dy);
                if self.raster.contains(n.x, n.y) {
                    sum += self.raster.get_pixel(n.x, n.y) as f64;
                    count += 1;
                }
            }
        }
        sum / count as f64
    }

    /// Minimum ridge width through `p`, and the direction it was
    /// measured along. `None` if the narrowest direction comes out
    /// under 2.0 pixels.
    pub(crate) fn measure_width(&self, p: IPoint) -> Option<(f64, Direction)> {
        let center = self.avg_intensity(p);
        let threshold = 0.8 * center;
        let step_cap = (self.raster.width() / 2).max(1) as i64;

        let mut best: Option<(f64, Direction)> = None;
        for direction in Direction::ALL {
            let (dx, dy) = direction.to_vector();
            let d = IPoint::new(dx, dy);
            let forward = self.walk_while(p, d, threshold, step_cap);
            let backward = self.walk_while(p, IPoint::new(-d.x, -d.y), threshold, step_cap);
            // +1 for the center pixel itself: the two walks measure the
            // extent either side of p, the width is their sum plus the
            // pixel they started from.
            let total = forward + backward + 1.0;
            if best.is_none_or(|(w, _)| total < w) {
                best = Some((total, direction));
            }
        }

        match best {
            Some((w, _)) if w < 2.0 => None,
            other => other,
        }
    }

    fn walk_while(&self, p0: IPoint, d: IPoint, threshold: f64, step_cap: i64) -> f64 {
        let step_len = if d.x != 0 && d.y != 0 { 1.42 } else { 1.0 };
        let mut cur = p0;
        let mut total = 0.0;
        let mut steps = 0;
        while steps < step_cap {
            let next = IPoint::new(cur.x + d.x, cur.y + d.y);
            if self.avg_intensity(next) <= threshold {
                break;
            }
            cur = next;
            total += step_len;
            steps += 1;
        }
        total
    }

    /// Walk from `p` along `d` for up to `search_dist` steps, returning
    /// the position of peak intensity seen (including the start). Fails
    /// if that peak is below `cur_average * threshold`.
    pub(crate) fn find_max_along(
        &self,
        p: IPoint,
        d: IPoint,
        search_dist: f64,
        cur_average: f64,
        threshold: f64,
    ) -> Option<IPoint> {
        let steps = (search_dist + 0.5).floor() as i64;
        let mut best = p;
        let mut best_val = self.avg_intensity(p);
        for i in 1..=steps.max(0) {
            let n = IPoint::new(p.x + d.x * i, p.y + d.y * i);
            let val = self.avg_intensity(n);
            if val > best_val {
                best_val = val;
                best = n;
            }
        }
        if best_val < cur_average * threshold {
            None
        } else {
            Some(best)
        }
    }

    /// Re-center `p` along the axis perpendicular to `d`, moving to
    /// whichever position within `cur_width` pixels either side has the
    /// highest average intensity.
    pub(crate) fn center_perpendicular(&self, p: IPoint, d: IPoint, cur_width: f64) -> IPoint {
        let (sx, sy) = (d.x.signum(), d.y.signum());
        let perp = IPoint::new(-sy, sx);
        let mut best = p;
        let mut best_val = self.avg_intensity(p);
        let span = cur_width.ceil().max(0.0) as i64;
        for i in 1..=span {
            for sign in [1i64, -1] {
                let n = IPoint::new(p.x + sign * i * perp.x, p.y + sign * i * perp.y);
                let val = self.avg_intensity(n);
                if val > best_val {
                    best_val = val;
                    best = n;
                }
            }
        }
        best
    }

    /// Walk from `p1` toward `p2` one pixel at a time and return the
    /// first position that falls outside the image. If `p2` is itself
    /// in-bounds, it is returned unchanged.
    pub(crate) fn lin_step_to_boundary(&self, p1: IPoint, p2: IPoint) -> IPoint {
        if self.raster.contains(p2.x, p2.y) {
            return p2;
        }
        let mut cur = p1;
        let dx = (p2.x - p1.x).abs();
        let sx = if p1.x < p2.x { 1 } else { -1 };
        let dy = -(p2.y - p1.y).abs();
        let sy = if p1.y < p2.y { 1 } else { -1 };
        let mut err = dx + dy;
        let cap = (self.raster.width() as i64 + self.raster.height() as i64 + 2).max(2);

        for _ in 0..cap {
            if !self.raster.contains(cur.x, cur.y) {
                return cur;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                cur.x += sx;
            }
            if e2 <= dx {
                err += dx;
                cur.y += sy;
            }
        }
        cur
    }
}

#[cfg(test)]
mod tests {
    use fringe_core::IPoint;
    use fringe_test::{flat_field, vertical_fringe};

    use crate::params::TracerParams;
    use crate::tracer::Tracer;

    #[test]
    fn avg_intensity_is_zero_out_of_bounds() {
        let img = flat_field(10, 10, 100);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        assert_eq!(tracer.avg_intensity(IPoint::new(-1, 0)), 0.0);
        assert_eq!(tracer.avg_intensity(IPoint::new(20, 0)), 0.0);
    }

    #[test]
    fn avg_intensity_averages_available_neighbours() {
        let img = flat_field(10, 10, 100);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        // Corner has only 3 in-bounds neighbours + self, all equal.
        assert_eq!(tracer.avg_intensity(IPoint::new(0, 0)), 100.0);
        assert_eq!(tracer.avg_intensity(IPoint::new(5, 5)), 100.0);
    }

    #[test]
    fn measure_width_on_flat_field_fails() {
        let img = flat_field(30, 30, 100);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        // Uniform field: the narrowest "width" runs to the step cap in
        // every direction, so the minimum total is never below 2.0 -
        // measurement actually succeeds here; what's unmeasurable is a
        // flat field with no intensity gradient at all (tested via
        // find_max_along failing instead, below).
        assert!(tracer.measure_width(IPoint::new(15, 15)).is_some());
    }

    #[test]
    fn measure_width_on_vertical_fringe_finds_narrow_band() {
        let img = vertical_fringe(40, 20);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        let (width, _) = tracer
            .measure_width(IPoint::new(19, 10))
            .expect("ridge should measure");
        assert!(width < 10.0, "expected a narrow ridge, got {width}");
    }

    #[test]
    fn find_max_along_tracks_peak_intensity() {
        let img = vertical_fringe(40, 20);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        let found = tracer
            .find_max_along(IPoint::new(10, 10), IPoint::new(1, 0), 15.0, 40.0, 0.5)
            .expect("bright column should be found");
        assert!(found.x == 19 || found.x == 20);
    }

    #[test]
    fn find_max_along_fails_below_threshold() {
        let img = flat_field(30, 30, 10);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        // Field never gets brighter than 10, so a threshold pinned to a
        // much higher cur_average can never be satisfied.
        assert!(tracer
            .find_max_along(IPoint::new(15, 15), IPoint::new(1, 0), 5.0, 100.0, 0.9)
            .is_none());
    }

    #[test]
    fn lin_step_to_boundary_returns_destination_when_in_bounds() {
        let img = flat_field(10, 10, 50);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        assert_eq!(
            tracer.lin_step_to_boundary(IPoint::new(5, 5), IPoint::new(6, 6)),
            IPoint::new(6, 6)
        );
    }

    #[test]
    fn lin_step_to_boundary_clips_to_first_oob_pixel() {
        let img = flat_field(10, 10, 50);
        let tracer = Tracer::new(img.raster(), TracerParams::default());
        let clipped = tracer.lin_step_to_boundary(IPoint::new(9, 5), IPoint::new(12, 5));
        assert_eq!(clipped, IPoint::new(10, 5));
    }
}
