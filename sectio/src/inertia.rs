use serde::{Deserialize, Serialize};

use crate::entities::{InertiaRegistry, Placed};
use crate::geometry::Frame;
use crate::geometry::geo_traits::LocalInertia;
use crate::geometry::primitives::{Circle, Point, Rect, SemiCircle, TriProfile};

/// Second moments of area about a pair of axes through a reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inertia {
    pub ixx: f64,
    pub iyy: f64,
}

impl<S: LocalInertia> Placed<S> {
    /// Second moments of this record about `axis`, via the parallel-axis
    /// theorem. Reported unsigned.
    pub fn inertia_about(&self, axis: Point) -> Inertia {
        let dx = self.area * (self.center.0 - axis.0).powi(2);
        let dy = self.area * (self.center.1 - axis.1).powi(2);
        Inertia {
            ixx: (self.shape.local_ixx() + dy).abs(),
            iyy: (self.shape.local_iyy() + dx).abs(),
        }
    }
}

/// Accumulates shapes and reduces them to composite second moments of area
/// about a chosen axis point.
///
/// Like the centroid engine, centers are baked in at add-time against the
/// current frame.
#[derive(Debug, Clone, Default)]
pub struct InertiaEngine {
    pub frame: Frame,
    pub registry: InertiaRegistry,
}

impl InertiaEngine {
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

    pub fn add_triangle(&mut self, triangle: TriProfile, cutout: bool) {
        self.registry
            .triangles
            .push(Placed::new(triangle, &self.frame, cutout));
    }

    pub fn add_semi_circle(&mut self, semi_circle: SemiCircle, cutout: bool) {
        self.registry
            .semi_circles
            .push(Placed::new(semi_circle, &self.frame, cutout));
    }

    /// Reduces every record to its moments about `axis` and sums them with
    /// cutouts negated; the totals are reported unsigned. An empty registry
    /// yields zero moments, there is no degenerate case here.
    pub fn calculate_total_inertia(&self, axis: Point) -> Inertia {
        let mut total_ixx = 0.0;
        let mut total_iyy = 0.0;

        let contributions = self
            .registry
            .rects
            .iter()
            .map(|r| (r.factor(), r.inertia_about(axis)))
            .chain(
                self.registry
                    .circles
                    .iter()
                    .map(|c| (c.factor(), c.inertia_about(axis))),
            )
            .chain(
                self.registry
                    .triangles
                    .iter()
                    .map(|t| (t.factor(), t.inertia_about(axis))),
            )
            .chain(
                self.registry
                    .semi_circles
                    .iter()
                    .map(|s| (s.factor(), s.inertia_about(axis))),
            );

        for (factor, inertia) in contributions {
            total_ixx += factor * inertia.ixx;
            total_iyy += factor * inertia.iyy;
        }

        Inertia {
            ixx: total_ixx.abs(),
            iyy: total_iyy.abs(),
        }
    }

    /// Reduction about the frame's stored reference axis.
    pub fn calculate_inertia_about_reference(&self) -> Inertia {
        self.calculate_total_inertia(self.frame.reference_axis)
    }

    /// Discards every record; the frame keeps its current origin and axis.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}
