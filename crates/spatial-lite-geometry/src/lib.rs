// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Spatial-Lite Geometry
//!
//! Point-based spatial objects and the queries that run over them.
//!
//! ## Overview
//!
//! - **Blob**: [`BlobSpatialObject`] owns an ordered point set
//! - **Closest point**: linear scan under a configurable [`DistanceMetric`],
//!   first stored point wins ties
//! - **Membership**: exact coordinate match against stored points
//! - **Bounding box**: cached per-dimension extent, invalidated on edits
//!
//! Blobs carry their own owner count, so they are shared through
//! [`SharedHandle`](spatial_lite_model::SharedHandle).
//!
//! ## Quick Start
//!
//! ```
//! use spatial_lite_geometry::{BlobSpatialObject, Point2, SpatialObjectPoint};
//! use spatial_lite_model::SharedHandle;
//!
//! let blob = BlobSpatialObject::new().with_points(vec![
//!     SpatialObjectPoint::from_coords([0.0, 0.0]),
//!     SpatialObjectPoint::from_coords([1.0, 1.0]),
//!     SpatialObjectPoint::from_coords([5.0, 5.0]),
//! ]);
//! let handle = SharedHandle::new(blob);
//!
//! assert_eq!(handle.closest_point(&Point2::new(0.9, 0.9)), Ok(1));
//! assert!(handle.is_inside(&Point2::new(5.0, 5.0), 0, ""));
//! assert!(handle.compute_object_bounding_box());
//! ```

pub mod blob;
pub mod error;
pub mod metric;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point, Point2, Point3};

// Re-export main types
pub use blob::{BlobSpatialObject, PARALLEL_SCAN_THRESHOLD};
pub use error::{Error, Result};
pub use metric::{Chebyshev, DistanceMetric, Euclidean, Manhattan, SquaredEuclidean};
pub use spatial_lite_model::{BoundingBox, PointBasedSpatialObject, PointId, SpatialObjectPoint};

/// Two-dimensional blob
pub type BlobSpatialObject2 = BlobSpatialObject<2>;
/// Three-dimensional blob
pub type BlobSpatialObject3 = BlobSpatialObject<3>;
