//! fringe-test - Synthetic raster fixtures for fringe-mask and fringe-trace
//!
//! There is no decoded-image corpus to draw golden files from (raster
//! decoding is explicitly out of scope for this workspace), so the
//! equivalent of a golden fixture here is a deterministically generated
//! synthetic raster: a flat field, a single straight bright fringe, a
//! ring fringe (annulus), or a horizontal bright band.

use fringe_core::Raster;

/// An owned 8-bit grayscale buffer (stride == width) plus the dimensions
/// needed to build a [`Raster`] view over it.
pub struct SyntheticImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SyntheticImage {
    pub fn raster(&self) -> Raster<'_> {
        Raster::new(&self.data, self.width, self.height, self.width).expect(
            "synthetic fixtures always build a stride-equals-width buffer of the right length",
        )
    }
}

/// A uniform image of `value` everywhere.
pub fn flat_field(width: u32, height: u32, value: u8) -> SyntheticImage {
    SyntheticImage {
        data: vec![value; width as usize * height as usize],
        width,
        height,
    }
}

/// Two bright columns at the horizontal center (value 255) on a darker
/// background (value 40): a straight vertical fringe running the full
/// height of the image, matching the §8 scenario-5 fixture.
pub fn vertical_fringe(width: u32, height: u32) -> SyntheticImage {
    let mut data = vec![40u8; width as usize * height as usize];
    let c1 = width / 2 - 1;
    let c2 = width / 2;
    for y in 0..height {
        let row = (y * width) as usize;
        data[row + c1 as usize] = 255;
        data[row + c2 as usize] = 255;
    }
    SyntheticImage {
        data,
        width,
        height,
    }
}

/// A bright horizontal band two rows tall at the vertical center.
pub fn horizontal_fringe(width: u32, height: u32) -> SyntheticImage {
    let mut data = vec![40u8; width as usize * height as usize];
    let r1 = height / 2 - 1;
    let r2 = height / 2;
    for row in [r1, r2] {
        let start = (row * width) as usize;
        data[start..start + width as usize].fill(255);
    }
    SyntheticImage {
        data,
        width,
        height,
    }
}

/// A bright annulus of the given `radius` and `ring_width` centered on
/// the image, matching the §8 scenario-6 loop-closure fixture.
pub fn ring_fringe(width: u32, height: u32, radius: f64, ring_width: f64) -> SyntheticImage {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let half = ring_width / 2.0;
    let mut data = vec![40u8; width as usize * height as usize];
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() <= half {
                data[(y * width + x) as usize] = 255;
            }
        }
    }
    SyntheticImage {
        data,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_field_is_uniform() {
        let img = flat_field(8, 8, 128);
        let raster = img.raster();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(raster.get_pixel(x, y), 128);
            }
        }
    }

    #[test]
    fn vertical_fringe_marks_center_columns() {
        let img = vertical_fringe(40, 20);
        let raster = img.raster();
        assert_eq!(raster.get_pixel(19, 10), 255);
        assert_eq!(raster.get_pixel(20, 10), 255);
        assert_eq!(raster.get_pixel(10, 10), 40);
    }

    #[test]
    fn ring_fringe_is_bright_only_near_radius() {
        let img = ring_fringe(40, 40, 10.0, 2.0);
        let raster = img.raster();
        assert_eq!(raster.get_pixel(20, 10), 255);
        assert_eq!(raster.get_pixel(20, 20), 40);
    }
}
