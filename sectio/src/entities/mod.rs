mod placed;
mod registry;

#[doc(inline)]
pub use placed::Placed;
#[doc(inline)]
pub use placed::PlacedPolygon;
#[doc(inline)]
pub use placed::ShapeEntry;
#[doc(inline)]
pub use registry::CentroidRegistry;
#[doc(inline)]
pub use registry::InertiaRegistry;
