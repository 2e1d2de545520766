use crate::geometry::Frame;
use crate::geometry::geo_traits::{LocalInertia, SectionShape};
use crate::geometry::primitives::Point;

/// Rectangle anchored at `(x, y)` in user space, extending `length` along x
/// and `width` along y. Negative dimensions are accepted; the area is taken
/// unsigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, length: f64, width: f64) -> Self {
        Rect {
            x,
            y,
            length,
            width,
        }
    }
}

impl SectionShape for Rect {
    fn area(&self) -> f64 {
        (self.length * self.width).abs()
    }

    fn centroid(&self, frame: &Frame) -> Point {
        frame.to_frame(self.x + self.length / 2.0, self.y + self.width / 2.0)
    }
}

impl LocalInertia for Rect {
    fn local_ixx(&self) -> f64 {
        self.length * self.width.powi(3) / 12.0
    }

    fn local_iyy(&self) -> f64 {
        self.length.powi(3) * self.width / 12.0
    }
}
