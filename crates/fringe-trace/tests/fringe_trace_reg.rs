//! End-to-end tracer scenarios against synthetic rasters.

use fringe_test::{flat_field, ring_fringe, vertical_fringe};
use fringe_trace::{TracePoint, TracerParams, Tracer};

fn points_in_bounds(points: &[TracePoint], width: u32, height: u32) {
    for p in points {
        assert!(p.x >= 0 && p.x < width as i64, "x={} out of bounds", p.x);
        assert!(p.y >= 0 && p.y < height as i64, "y={} out of bounds", p.y);
        assert!(p.width >= 2.0 && p.width <= 80.0, "width={} out of range", p.width);
    }
}

#[test]
fn degenerate_flat_image_fails_to_trace() {
    let img = flat_field(30, 30, 128);
    let mut tracer = Tracer::new(img.raster(), TracerParams::default());
    let result = tracer.trace_line(15, 15);
    assert!(result.is_err(), "a flat field has no ridge to follow");
    assert!(tracer.last_error().is_some());
}

#[test]
fn vertical_fringe_traces_the_column() {
    let img = vertical_fringe(40, 20);
    let mut tracer = Tracer::new(img.raster(), TracerParams::default());
    let report = tracer
        .trace_line(20, 10)
        .expect("a seed on the bright column should trace");

    assert!(report.points.len() >= 4, "expected a substantial trace, got {}", report.points.len());
    points_in_bounds(&report.points, 40, 20);
    for p in &report.points {
        assert!(
            (19..=21).contains(&p.x),
            "expected the trace to hug the bright column, got x={}",
            p.x
        );
    }
}

#[test]
fn vertical_fringe_unidirectional_still_traces_forward() {
    let img = vertical_fringe(40, 20);
    let params = TracerParams::default().with_bidirectional(false);
    let mut tracer = Tracer::new(img.raster(), params);
    let report = tracer.trace_line(20, 10).expect("forward trace should succeed");
    assert!(report.backward.is_none());
    assert!(!report.points.is_empty());
}

#[test]
fn ring_fringe_produces_a_bounded_trace() {
    let img = ring_fringe(40, 40, 10.0, 2.0);
    let mut tracer = Tracer::new(img.raster(), TracerParams::default());
    let report = tracer
        .trace_line(30, 20)
        .expect("a seed on the ring should trace");

    assert!(report.points.len() >= 2);
    points_in_bounds(&report.points, 40, 40);
}
