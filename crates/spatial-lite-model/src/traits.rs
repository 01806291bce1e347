// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability traits for point-based spatial objects

use crate::{BoundingBox, PointId, SpatialObjectPoint};
use nalgebra::Point;

/// Query interface shared by every point-based spatial object
///
/// Composite spatial trees hold children behind this trait and aggregate
/// membership tests and bounding boxes across them. When recursing they pass
/// `depth - 1` and forward the name filter unchanged.
///
/// # Example
///
/// ```ignore
/// use spatial_lite_model::PointBasedSpatialObject;
///
/// fn inside_any(children: &[&dyn PointBasedSpatialObject<3>], p: &Point3<f64>, depth: u32) -> bool {
///     children.iter().any(|c| c.is_inside(p, depth.saturating_sub(1), ""))
/// }
/// ```
pub trait PointBasedSpatialObject<const D: usize> {
    /// Type name used by name filters (e.g. "BlobSpatialObject")
    fn type_name(&self) -> &'static str;

    /// Number of stored points, O(1)
    fn number_of_points(&self) -> usize;

    /// Point at `id`, or `None` when out of range
    fn point(&self, id: PointId) -> Option<&SpatialObjectPoint<D>>;

    /// Check if `point` is part of this object
    ///
    /// `depth` bounds recursion into children and `name` restricts which
    /// object types a composite consults; leaf objects accept both without
    /// changing their own answer.
    fn is_inside(&self, point: &Point<f64, D>, depth: u32, name: &str) -> bool;

    /// Recompute and cache the object's bounding box
    ///
    /// Returns `false` when no point with finite coordinates exists.
    fn compute_object_bounding_box(&self) -> bool;

    /// Last computed bounding box; invalid if stale or never computed
    fn object_bounding_box(&self) -> BoundingBox<D>;

    /// Check if the object holds no points
    fn is_empty(&self) -> bool {
        self.number_of_points() == 0
    }

    /// Check if a name filter selects this object (empty selects all)
    fn matches_name(&self, name: &str) -> bool {
        name.is_empty() || name == self.type_name()
    }
}
