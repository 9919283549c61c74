//! The elliptical mask aggregate: one [`RowBoundary`] per image row.

use fringe_core::{Error, Result};

use crate::ellipse::{EllipseParams, apply_inner, apply_outer};
use crate::row::RowBoundary;

/// Per-row admissibility record over an image of fixed `(width, height)`.
///
/// Mask operations are total and never fail except at construction time
/// (non-positive dimensions): invalid ellipse parameters are silently
/// ignored rather than reported, per §4.1.
#[derive(Debug, Clone)]
pub struct Mask {
    width: u32,
    height: u32,
    rows: Vec<RowBoundary>,
}

impl Mask {
    /// Create a mask over a `width x height` image, reset to the default
    /// full-frame-minus-border band.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut mask = Self {
            width: 0,
            height: 0,
            rows: Vec::new(),
        };
        mask.initialize(width, height)?;
        Ok(mask)
    }

    /// Reset to `width x height` and restore the default boundaries
    /// (`lo=1, ro=width-2`, no hole, for every row).
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        self.width = width;
        self.height = height;
        self.rows = vec![
            RowBoundary {
                left_outer: 1,
                right_outer: width as i64 - 2,
                left_inner: 0,
                right_inner: 0,
            };
            height as usize
        ];
        Ok(())
    }

    /// Clear every row to all-zero: no region established.
    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            *row = RowBoundary::empty();
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Impose `ellipse` as the outer or inner constraint. No-ops silently
    /// if `ellipse` is invalid (non-positive semi-axis).
    pub fn set_ellipse(&mut self, ellipse: EllipseParams, outer: bool) {
        if !ellipse.is_valid() {
            return;
        }
        if outer {
            apply_outer(&mut self.rows, self.width, self.height, &ellipse);
        } else {
            apply_inner(&mut self.rows, self.width, self.height, &ellipse);
        }
    }

    /// The boundary record for row `y`, or an empty record if `y` is
    /// out of range.
    pub fn row_boundary(&self, y: i64) -> RowBoundary {
        if y < 0 || y >= self.height as i64 {
            return RowBoundary::empty();
        }
        self.rows[y as usize]
    }

    fn row_in_range(&self, y: i64) -> Option<&RowBoundary> {
        if y < 0 || y >= self.height as i64 {
            None
        } else {
            Some(&self.rows[y as usize])
        }
    }

    pub fn is_inside_outer(&self, x: i64, y: i64) -> bool {
        self.row_in_range(y).is_some_and(|row| row.is_inside_outer(x))
    }

    pub fn is_inside_inner(&self, x: i64, y: i64) -> bool {
        self.row_in_range(y).is_some_and(|row| row.is_inside_inner(x))
    }

    pub fn is_inside(&self, x: i64, y: i64) -> bool {
        self.row_in_range(y).is_some_and(|row| row.is_inside(x))
    }

    /// Reset only the outer boundary on every row (inner holes untouched).
    pub fn reset_outer(&mut self) {
        for row in self.rows.iter_mut() {
            row.left_outer = 0;
            row.right_outer = 0;
        }
    }

    /// Reset only the inner hole on every row (outer band untouched).
    pub fn reset_inner(&mut self) {
        for row in self.rows.iter_mut() {
            row.left_inner = 0;
            row.right_inner = 0;
        }
    }

    /// Reset every row entirely.
    pub fn reset_all(&mut self) {
        self.clear();
    }

    /// Deep-copy `other`'s dimensions and rows into `self`.
    pub fn copy_from(&mut self, other: &Mask) {
        self.width = other.width;
        self.height = other.height;
        self.rows = other.rows.clone();
    }

    /// Verify the §3 ordering invariants hold for every row.
    pub fn validate(&self) -> bool {
        self.rows.iter().all(|row| row.is_valid(self.width))
    }
}
