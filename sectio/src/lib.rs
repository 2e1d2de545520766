//! Centroid and area moment of inertia of composite planar sections.
//!
//! Two independent accumulation engines share one shape vocabulary:
//! [`CentroidEngine`](centroid::CentroidEngine) reduces registered shapes to a
//! weighted composite centroid and signed net area, while
//! [`InertiaEngine`](inertia::InertiaEngine) reduces them to second moments of
//! area about a reference axis. Shapes are registered against a mutable
//! [`Frame`](geometry::Frame) and classified as additive or cutout.

/// The centroid accumulation engine
pub mod centroid;

/// Shape records and the per-engine registries that store them
pub mod entities;

/// Geometric primitives, the coordinate frame and base traits
pub mod geometry;

/// The inertia accumulation engine
pub mod inertia;

/// Helper functions which do not belong to any specific module
pub mod util;
