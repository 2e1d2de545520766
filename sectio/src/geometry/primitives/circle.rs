use std::f64::consts::PI;

use crate::geometry::Frame;
use crate::geometry::geo_traits::{LocalInertia, SectionShape};
use crate::geometry::primitives::Point;

/// Circle centered at `(x, y)` in user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Circle { x, y, radius }
    }
}

impl SectionShape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn centroid(&self, frame: &Frame) -> Point {
        frame.to_frame(self.x, self.y)
    }
}

impl LocalInertia for Circle {
    //equal about both axes by symmetry
    fn local_ixx(&self) -> f64 {
        PI * self.radius.powi(4) / 4.0
    }

    fn local_iyy(&self) -> f64 {
        PI * self.radius.powi(4) / 4.0
    }
}
