use sectio::centroid::CentroidEngine;
use sectio::geometry::primitives::{Circle, Point, Polygon, Rect, SemiCircle, TriProfile, Triangle};
use sectio::inertia::InertiaEngine;

use crate::config::SectioConfig;
use crate::io::ext_repr::{ExtFigure, ExtInertiaShape, ExtShape};

/// Builds both engines from an external figure. The frame is set first so
/// every shape is baked against the configured origin.
pub fn import_figure(config: &SectioConfig, ext: &ExtFigure) -> (CentroidEngine, InertiaEngine) {
    let mut centroid = CentroidEngine::new();
    let mut inertia = InertiaEngine::new();

    centroid.set_origin(config.origin.0, config.origin.1);
    centroid.set_reference_axis(config.reference_axis.0, config.reference_axis.1);
    inertia.set_origin(config.origin.0, config.origin.1);
    inertia.set_reference_axis(config.reference_axis.0, config.reference_axis.1);

    for shape in &ext.shapes {
        match *shape {
            ExtShape::Rectangle {
                x,
                y,
                length,
                width,
                cutout,
            } => centroid.add_rect(Rect::new(x, y, length, width), cutout),
            ExtShape::Circle {
                x,
                y,
                radius,
                cutout,
            } => centroid.add_circle(Circle::new(x, y, radius), cutout),
            ExtShape::Triangle {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                cutout,
            } => centroid.add_triangle(
                Triangle::new(Point(x1, y1), Point(x2, y2), Point(x3, y3)),
                cutout,
            ),
            ExtShape::SemiCircle {
                x,
                y,
                radius,
                cutout,
            } => centroid.add_semi_circle(SemiCircle::new(x, y, radius), cutout),
            ExtShape::Polygon {
                ref vertices,
                cutout,
            } => centroid.add_polygon(
                Polygon::new(vertices.iter().map(|&v| Point::from(v)).collect()),
                cutout,
            ),
        }
    }

    for shape in &ext.inertia_shapes {
        match *shape {
            ExtInertiaShape::Rectangle {
                x,
                y,
                length,
                width,
                cutout,
            } => inertia.add_rect(Rect::new(x, y, length, width), cutout),
            ExtInertiaShape::Circle {
                x,
                y,
                radius,
                cutout,
            } => inertia.add_circle(Circle::new(x, y, radius), cutout),
            ExtInertiaShape::Triangle {
                x,
                y,
                base,
                height,
                cutout,
            } => inertia.add_triangle(TriProfile::new(x, y, base, height), cutout),
            ExtInertiaShape::SemiCircle {
                x,
                y,
                radius,
                cutout,
            } => inertia.add_semi_circle(SemiCircle::new(x, y, radius), cutout),
        }
    }

    (centroid, inertia)
}
