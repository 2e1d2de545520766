use crate::geometry::Frame;
use crate::geometry::geo_traits::SectionShape;
use crate::geometry::primitives::Point;

/// Triangle defined by three user-space vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v1: Point,
    pub v2: Point,
    pub v3: Point,
}

impl Triangle {
    pub fn new(v1: Point, v2: Point, v3: Point) -> Self {
        Triangle { v1, v2, v3 }
    }
}

impl SectionShape for Triangle {
    //https://en.wikipedia.org/wiki/Shoelace_formula
    fn area(&self) -> f64 {
        let Point(x1, y1) = self.v1;
        let Point(x2, y2) = self.v2;
        let Point(x3, y3) = self.v3;
        ((x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)) / 2.0).abs()
    }

    /// Mean of the three vertices, each translated into frame coordinates.
    fn centroid(&self, frame: &Frame) -> Point {
        let [p1, p2, p3] = [self.v1, self.v2, self.v3].map(|v| frame.to_frame(v.0, v.1));
        Point((p1.0 + p2.0 + p3.0) / 3.0, (p1.1 + p2.1 + p3.1) / 3.0)
    }
}
