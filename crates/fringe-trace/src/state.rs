//! Running measurements carried from one step to the next within a
//! single directional walk.

#[derive(Debug, Clone, Copy)]
pub(crate) struct TraceState {
    pub cur_width: f64,
    pub cur_average: f64,
}
