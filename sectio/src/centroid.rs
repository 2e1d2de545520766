use log::debug;
use serde::{Deserialize, Serialize};

use crate::entities::{CentroidRegistry, Placed, PlacedPolygon};
use crate::geometry::Frame;
use crate::geometry::primitives::{Circle, Point, Polygon, Rect, SemiCircle, Triangle};

/// Composite centroid of the registered shapes, re-expressed relative to the
/// origin in user-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    /// Signed net area. Negative when cutouts outweigh the additive shapes.
    pub area: f64,
    /// `false` when the net area is exactly zero and no centroid exists.
    pub valid: bool,
}

impl Centroid {
    /// The result of reducing a figure with zero net area.
    pub fn degenerate() -> Self {
        Centroid {
            x: 0.0,
            y: 0.0,
            area: 0.0,
            valid: false,
        }
    }
}

/// Accumulates shapes and reduces them to a composite centroid and signed
/// net area.
///
/// Area and center are computed against the frame as it is at add-time;
/// moving the origin afterwards does not re-place earlier records.
#[derive(Debug, Clone, Default)]
pub struct CentroidEngine {
    pub frame: Frame,
    pub registry: CentroidRegistry,
}

impl CentroidEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.frame.set_origin(x, y);
    }

    pub fn set_reference_axis(&mut self, x: f64, y: f64) {
        self.frame.set_reference_axis(x, y);
    }

    pub fn add_rect(&mut self, rect: Rect, cutout: bool) {
        self.registry.rects.push(Placed::new(rect, &self.frame, cutout));
    }

    pub fn add_circle(&mut self, circle: Circle, cutout: bool) {
        self.registry
            .circles
            .push(Placed::new(circle, &self.frame, cutout));
    }

    pub fn add_triangle(&mut self, triangle: Triangle, cutout: bool) {
        self.registry
            .triangles
            .push(Placed::new(triangle, &self.frame, cutout));
    }

    pub fn add_semi_circle(&mut self, semi_circle: SemiCircle, cutout: bool) {
        self.registry
            .semi_circles
            .push(Placed::new(semi_circle, &self.frame, cutout));
    }

    /// Registers a polygon. Its area is retained on the record, but polygons
    /// are excluded from the reduction and do not shift the result.
    pub fn add_polygon(&mut self, polygon: Polygon, cutout: bool) {
        self.registry.polygons.push(PlacedPolygon::new(polygon, cutout));
    }

    /// Reduces the registry to a single weighted centroid.
    ///
    /// Returns [`Centroid::degenerate`] when the net area is exactly zero:
    /// an empty registry, or cutouts exactly cancelling the additive shapes.
    pub fn calculate_centroid(&self) -> Centroid {
        let mut weighted_x = 0.0;
        let mut weighted_y = 0.0;
        let mut net_area = 0.0;

        for entry in self.registry.entries() {
            let factor = entry.factor();
            weighted_x += factor * entry.area * entry.center.0;
            weighted_y += factor * entry.area * entry.center.1;
            net_area += factor * entry.area;
        }

        if net_area == 0.0 {
            debug!(
                "net area is zero over {} records, no centroid",
                self.registry.n_shapes()
            );
            return Centroid::degenerate();
        }

        let Point(x, y) = self
            .frame
            .to_user(Point(weighted_x / net_area, weighted_y / net_area));

        Centroid {
            x,
            y,
            area: net_area,
            valid: true,
        }
    }

    /// Discards every record; the frame keeps its current origin and axis.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}
