mod frame;

/// Set of traits representing the capabilities of section shapes
pub mod geo_traits;

/// Set of geometric primitives - the shape vocabulary of both engines
pub mod primitives;

#[doc(inline)]
pub use frame::Frame;
