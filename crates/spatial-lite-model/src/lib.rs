// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial-Lite Model - Ownership handles and shared types for spatial objects
//!
//! This crate provides the pieces every geometric object in the toolkit is
//! built from:
//!
//! - [`SharedHandle`] - shared ownership over any [`RefCounted`] object
//! - [`ReferenceCount`] / [`AtomicReferenceCount`] - embeddable owner counts
//! - [`SpatialObjectPoint`] - a position plus color and identifier payload
//! - [`BoundingBox`] - per-dimension extent with a validity flag
//! - [`PointBasedSpatialObject`] - query interface for composite trees
//!
//! # Example
//!
//! ```
//! use spatial_lite_model::{Counted, SharedHandle, SpatialObjectPoint};
//!
//! let handle = SharedHandle::new(Counted::new(vec![
//!     SpatialObjectPoint::from_coords([0.0, 0.0]),
//!     SpatialObjectPoint::from_coords([1.0, 1.0]),
//! ]));
//! let other = handle.clone();
//! assert_eq!(other.len(), 2);
//! assert_eq!(handle.reference_count(), 2);
//! ```

pub mod bounds;
pub mod error;
pub mod handle;
pub mod point;
pub mod traits;

// Re-export nalgebra point types for convenience
pub use nalgebra::{Point, Point2, Point3};

// Re-export all public types
pub use bounds::*;
pub use error::*;
pub use handle::*;
pub use point::*;
pub use traits::*;
