use log::debug;

use crate::entities::{Placed, PlacedPolygon, ShapeEntry};
use crate::geometry::primitives::{Circle, Rect, SemiCircle, TriProfile, Triangle};

/// Insertion-ordered, per-kind store backing the centroid engine.
#[derive(Debug, Clone, Default)]
pub struct CentroidRegistry {
    pub rects: Vec<Placed<Rect>>,
    pub circles: Vec<Placed<Circle>>,
    pub triangles: Vec<Placed<Triangle>>,
    pub semi_circles: Vec<Placed<SemiCircle>>,
    pub polygons: Vec<PlacedPolygon>,
}

impl CentroidRegistry {
    /// All records that participate in the weighted reduction, in kind order.
    /// Polygon records are area-only and never appear here.
    pub fn entries(&self) -> impl Iterator<Item = ShapeEntry> + '_ {
        self.rects
            .iter()
            .map(Placed::entry)
            .chain(self.circles.iter().map(Placed::entry))
            .chain(self.triangles.iter().map(Placed::entry))
            .chain(self.semi_circles.iter().map(Placed::entry))
    }

    pub fn n_shapes(&self) -> usize {
        self.rects.len()
            + self.circles.len()
            + self.triangles.len()
            + self.semi_circles.len()
            + self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_shapes() == 0
    }

    /// Discards every record.
    pub fn clear(&mut self) {
        debug!("clearing {} shape records", self.n_shapes());
        self.rects.clear();
        self.circles.clear();
        self.triangles.clear();
        self.semi_circles.clear();
        self.polygons.clear();
    }
}

/// Insertion-ordered, per-kind store backing the inertia engine. Disjoint
/// from the centroid store, even when both hold identical geometry.
#[derive(Debug, Clone, Default)]
pub struct InertiaRegistry {
    pub rects: Vec<Placed<Rect>>,
    pub circles: Vec<Placed<Circle>>,
    pub triangles: Vec<Placed<TriProfile>>,
    pub semi_circles: Vec<Placed<SemiCircle>>,
}

impl InertiaRegistry {
    pub fn n_shapes(&self) -> usize {
        self.rects.len() + self.circles.len() + self.triangles.len() + self.semi_circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_shapes() == 0
    }

    /// Discards every record.
    pub fn clear(&mut self) {
        debug!("clearing {} inertia records", self.n_shapes());
        self.rects.clear();
        self.circles.clear();
        self.triangles.clear();
        self.semi_circles.clear();
    }
}
