use crate::geometry::Frame;
use crate::geometry::primitives::Point;

/// Trait for shapes that participate in the weighted centroid reduction.
pub trait SectionShape {
    /// Unsigned area of the shape's interior.
    fn area(&self) -> f64;

    /// Center of the shape in frame coordinates.
    fn centroid(&self, frame: &Frame) -> Point;
}

/// Trait for shapes with known centroidal second moments of area.
///
/// Values are about the shape's own centroid; the parallel-axis theorem
/// shifts them to an arbitrary axis point.
pub trait LocalInertia {
    /// Second moment about the horizontal axis through the centroid.
    fn local_ixx(&self) -> f64;

    /// Second moment about the vertical axis through the centroid.
    fn local_iyy(&self) -> f64;
}
