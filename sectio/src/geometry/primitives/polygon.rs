use itertools::Itertools;

use crate::geometry::primitives::Point;

/// Closed polygon over an ordered set of user-space vertices, with the
/// wraparound edge implied. Area-only: it has no centroid and never enters
/// the weighted reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Fewer than 3 vertices is accepted and yields a zero area.
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    pub fn area(&self) -> f64 {
        let sigma: f64 = self
            .vertices
            .iter()
            .circular_tuple_windows()
            .map(|(prev, cur)| (prev.0 + cur.0) * (prev.1 - cur.1))
            .sum();
        (sigma / 2.0).abs()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }
}
