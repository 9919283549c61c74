//! Tunable knobs controlling a ridge trace.

/// Configuration for a single [`crate::Tracer`] trace.
///
/// Mirrors the `Default` + `with_*` builder pattern used throughout this
/// workspace: construct with [`Default::default`], then adjust only the
/// fields that matter with the chained setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerParams {
    /// Width hypothesis held before the first measurement is taken.
    pub initial_width: f64,
    /// Maximum factor by which a re-measured width may differ from the
    /// prior `cur_width` before being clamped.
    pub max_width_change: f64,
    /// Fraction of the seed's average intensity a candidate ridge point
    /// must retain to count as "still on the fringe".
    pub intensity_threshold: f64,
    /// Hard cap on the number of points emitted per direction.
    pub max_steps: u32,
    /// Whether to additionally walk backward from the seed and splice
    /// the two walks together.
    pub bidirectional: bool,
    /// Reserved curvature-adaptive step coefficient; recorded for API
    /// completeness but not consulted by the stepping algorithm.
    pub curvature_coeff: f64,
}

impl Default for TracerParams {
    fn default() -> Self {
        Self {
            initial_width: 20.0,
            max_width_change: 1.5,
            intensity_threshold: 0.5,
            max_steps: 200,
            bidirectional: true,
            curvature_coeff: 1.5,
        }
    }
}

impl TracerParams {
    pub fn with_initial_width(mut self, width: f64) -> Self {
        self.initial_width = width.max(0.0);
        self
    }

    pub fn with_max_width_change(mut self, factor: f64) -> Self {
        self.max_width_change = factor.max(1.0);
        self
    }

    pub fn with_intensity_threshold(mut self, threshold: f64) -> Self {
        self.intensity_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_steps(mut self, steps: u32) -> Self {
        self.max_steps = steps.max(2);
        self
    }

    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    pub fn with_curvature_coeff(mut self, coeff: f64) -> Self {
        self.curvature_coeff = coeff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let params = TracerParams::default();
        assert_eq!(params.initial_width, 20.0);
        assert_eq!(params.max_width_change, 1.5);
        assert_eq!(params.intensity_threshold, 0.5);
        assert_eq!(params.max_steps, 200);
        assert!(params.bidirectional);
        assert_eq!(params.curvature_coeff, 1.5);
    }

    #[test]
    fn setters_clamp_to_sane_ranges() {
        let params = TracerParams::default()
            .with_max_width_change(0.2)
            .with_intensity_threshold(1.4)
            .with_max_steps(0);
        assert_eq!(params.max_width_change, 1.0);
        assert_eq!(params.intensity_threshold, 1.0);
        assert_eq!(params.max_steps, 2);
    }
}
