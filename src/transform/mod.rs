//! Transform resolution: authored placement in, renderer-ready attribute strings out.
//!
//! The tracking marker lies on a horizontal plane and the viewer looks down at it, so flat media
//! is forced to face up and everything is kept a little above the marker plane.

pub(crate) mod resolve;

pub use resolve::normalize_rotation;
