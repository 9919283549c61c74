//! Per-row boundary record
//!
//! Four x-coordinates describing the admissible annular band on a single
//! image scanline: an outer pair `(lo, ro)` and an inner "hole" pair
//! `(li, ri)`.

/// The admissible band on a single scanline.
///
/// `lo == 0 && ro == 0` means the outer boundary has not been set for this
/// row; `li == 0 && ri == 0` means there is no inner hole on this row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowBoundary {
    pub left_outer: i64,
    pub left_inner: i64,
    pub right_inner: i64,
    pub right_outer: i64,
}

impl RowBoundary {
    /// A row with no outer boundary and no inner hole.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_outer(&self) -> bool {
        self.left_outer != 0 || self.right_outer != 0
    }

    pub fn has_inner(&self) -> bool {
        self.left_inner != 0 || self.right_inner != 0
    }

    /// `x` is within the outer band, or the outer band is unset
    /// (vacuously true).
    pub fn is_inside_outer(&self, x: i64) -> bool {
        if !self.has_outer() {
            return true;
        }
        x >= self.left_outer && x <= self.right_outer
    }

    /// `x` falls in the inner hole. Vacuously false when no hole is set.
    pub fn is_inside_inner(&self, x: i64) -> bool {
        if !self.has_inner() {
            return false;
        }
        x >= self.left_inner && x <= self.right_inner
    }

    /// `x` is in the admissible region: inside the outer band and not in
    /// the inner hole.
    pub fn is_inside(&self, x: i64) -> bool {
        self.is_inside_outer(x) && !self.is_inside_inner(x)
    }

    /// Checks the §3 ordering invariants for this row, when a family is
    /// set. Always true for an all-cleared row.
    pub fn is_valid(&self, width: u32) -> bool {
        let w = width as i64;
        if self.has_outer() {
            if !(0 <= self.left_outer && self.right_outer < w) {
                return false;
            }
            if self.has_inner() {
                if !(self.left_outer <= self.left_inner
                    && self.left_inner < self.right_inner
                    && self.right_inner <= self.right_outer)
                {
                    return false;
                }
            } else if self.left_outer >= self.right_outer {
                return false;
            }
        } else if self.has_inner() && self.left_inner >= self.right_inner {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_is_vacuously_open_and_holeless() {
        let row = RowBoundary::empty();
        assert!(row.is_inside(0));
        assert!(row.is_inside(1_000_000));
        assert!(row.is_valid(100));
    }

    #[test]
    fn outer_band_without_hole() {
        let row = RowBoundary {
            left_outer: 2,
            right_outer: 8,
            ..Default::default()
        };
        assert!(!row.is_inside(1));
        assert!(row.is_inside(2));
        assert!(row.is_inside(5));
        assert!(row.is_inside(8));
        assert!(!row.is_inside(9));
    }

    #[test]
    fn outer_band_with_hole() {
        let row = RowBoundary {
            left_outer: 2,
            left_inner: 3,
            right_inner: 7,
            right_outer: 8,
        };
        assert!(row.is_inside(2));
        assert!(!row.is_inside(5));
        assert!(row.is_inside(8));
        assert!(!row.is_inside(9));
    }
}
