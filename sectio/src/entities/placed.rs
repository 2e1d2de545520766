use crate::geometry::Frame;
use crate::geometry::geo_traits::SectionShape;
use crate::geometry::primitives::{Point, Polygon};

/// A shape registered in an engine: the raw parameters plus the area and
/// frame-space center baked in at add-time.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed<S> {
    /// Raw shape parameters as supplied by the caller
    pub shape: S,
    /// Unsigned area
    pub area: f64,
    /// Center in frame coordinates, fixed at add-time
    pub center: Point,
    /// Cutouts contribute negatively to every reduction
    pub cutout: bool,
}

impl<S: SectionShape> Placed<S> {
    pub fn new(shape: S, frame: &Frame, cutout: bool) -> Self {
        let area = shape.area();
        let center = shape.centroid(frame);
        Placed {
            shape,
            area,
            center,
            cutout,
        }
    }
}

impl<S> Placed<S> {
    /// Sign of this record's contribution to a reduction.
    pub fn factor(&self) -> f64 {
        if self.cutout { -1.0 } else { 1.0 }
    }

    /// The record's reduction-facing data, detached from the shape kind.
    pub fn entry(&self) -> ShapeEntry {
        ShapeEntry {
            area: self.area,
            center: self.center,
            cutout: self.cutout,
        }
    }
}

/// Kind-erased view of a record, as consumed by the centroid reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeEntry {
    pub area: f64,
    pub center: Point,
    pub cutout: bool,
}

impl ShapeEntry {
    pub fn factor(&self) -> f64 {
        if self.cutout { -1.0 } else { 1.0 }
    }
}

/// Polygon record: area-only, excluded from the centroid reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPolygon {
    pub shape: Polygon,
    pub area: f64,
    pub cutout: bool,
}

impl PlacedPolygon {
    pub fn new(shape: Polygon, cutout: bool) -> Self {
        let area = shape.area();
        PlacedPolygon {
            shape,
            area,
            cutout,
        }
    }
}
