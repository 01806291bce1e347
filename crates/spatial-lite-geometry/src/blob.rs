// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blob spatial object - a discrete point set with proximity queries
//!
//! A blob owns an ordered list of [`SpatialObjectPoint`]s and answers three
//! queries over it: the closest stored point to a query position, exact
//! point membership, and the bounding box of the whole set. Blobs carry their
//! own owner count and are normally held through a [`SharedHandle`].
//!
//! # Bounding box caching
//!
//! The bounding box is cached and goes stale whenever the point set changes
//! through [`BlobSpatialObject::set_points`], [`BlobSpatialObject::push_point`],
//! [`BlobSpatialObject::points_mut`] or [`BlobSpatialObject::point_mut`].
//! The mutable accessors mark the cache invalid when called but cannot see
//! edits made later through the returned reference. Call
//! [`BlobSpatialObject::compute_object_bounding_box`] after editing before
//! relying on [`BlobSpatialObject::object_bounding_box`].
//!
//! [`SharedHandle`]: spatial_lite_model::SharedHandle

use crate::metric::{DistanceMetric, Euclidean};
use crate::{Error, Result};
use nalgebra::Point;
use rayon::prelude::*;
use spatial_lite_model::{
    BoundingBox, PointBasedSpatialObject, PointId, RefCounted, ReferenceCount, SpatialObjectPoint,
};
use std::cell::Cell;
use std::fmt;
use std::ops::Index;
use std::ptr::NonNull;
use std::sync::Arc;

/// Point count above which closest-point scans are split across threads
pub const PARALLEL_SCAN_THRESHOLD: usize = 16_384;

/// Discrete point set in `D` dimensions
pub struct BlobSpatialObject<const D: usize = 3> {
    ref_count: ReferenceCount,
    /// Object identifier, -1 when unset
    id: i32,
    points: Vec<SpatialObjectPoint<D>>,
    /// Cached extent, recomputed on demand
    bounding_box: Cell<BoundingBox<D>>,
    metric: Arc<dyn DistanceMetric>,
}

impl<const D: usize> BlobSpatialObject<D> {
    /// Name reported to name filters
    pub const TYPE_NAME: &'static str = "BlobSpatialObject";

    /// Create an empty blob measuring Euclidean distance
    pub fn new() -> Self {
        Self {
            ref_count: ReferenceCount::new(),
            id: -1,
            points: Vec::new(),
            bounding_box: Cell::new(BoundingBox::invalid()),
            metric: Arc::new(Euclidean),
        }
    }

    /// Set the initial point list
    pub fn with_points(mut self, points: impl Into<Vec<SpatialObjectPoint<D>>>) -> Self {
        self.set_points(points.into());
        self
    }

    /// Set the metric used by [`BlobSpatialObject::closest_point`]
    pub fn with_metric(mut self, metric: Arc<dyn DistanceMetric>) -> Self {
        self.metric = metric;
        self
    }

    /// Set the object identifier
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Metric used by closest-point queries
    pub fn metric(&self) -> &dyn DistanceMetric {
        self.metric.as_ref()
    }

    pub fn set_metric(&mut self, metric: Arc<dyn DistanceMetric>) {
        self.metric = metric;
    }

    /// Replace the whole point list
    ///
    /// Invalidates the cached bounding box.
    pub fn set_points(&mut self, points: Vec<SpatialObjectPoint<D>>) {
        self.points = points;
        self.invalidate_bounding_box();
    }

    /// Append a point, returning its identifier
    ///
    /// Invalidates the cached bounding box.
    pub fn push_point(&mut self, point: SpatialObjectPoint<D>) -> PointId {
        self.points.push(point);
        self.invalidate_bounding_box();
        self.points.len() - 1
    }

    /// Stored points in identifier order
    #[inline]
    pub fn points(&self) -> &[SpatialObjectPoint<D>] {
        &self.points
    }

    /// Mutable access to the live point list
    ///
    /// Invalidates the cached bounding box now. Edits made through the
    /// returned reference are not tracked; recompute the bounding box before
    /// using it again.
    pub fn points_mut(&mut self) -> &mut Vec<SpatialObjectPoint<D>> {
        self.invalidate_bounding_box();
        &mut self.points
    }

    /// Point at `id`, or `None` when out of range
    #[inline]
    pub fn point(&self, id: PointId) -> Option<&SpatialObjectPoint<D>> {
        self.points.get(id)
    }

    /// Point at `id`, reporting out-of-range access as an error
    pub fn try_point(&self, id: PointId) -> Result<&SpatialObjectPoint<D>> {
        self.points
            .get(id)
            .ok_or_else(|| Error::point_out_of_range(id, self.points.len()))
    }

    /// Mutable point at `id`
    ///
    /// Invalidates the cached bounding box when the point exists.
    pub fn point_mut(&mut self, id: PointId) -> Option<&mut SpatialObjectPoint<D>> {
        if id < self.points.len() {
            self.invalidate_bounding_box();
        }
        self.points.get_mut(id)
    }

    /// Number of stored points, O(1)
    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Identifier of the stored point closest to `query`
    ///
    /// Scans every point with the configured metric. When several points are
    /// equally close the one stored first wins. Distances that come out as
    /// NaN rank as infinitely far.
    ///
    /// # Errors
    /// [`Error::EmptyPointSet`] when the blob holds no points.
    pub fn closest_point(&self, query: &Point<f64, D>) -> Result<PointId> {
        if self.points.is_empty() {
            log::debug!("closest_point on empty {} #{}", Self::TYPE_NAME, self.id);
            return Err(Error::EmptyPointSet);
        }

        let query = query.coords.as_slice();
        let metric = self.metric.as_ref();
        let closest = if self.points.len() >= PARALLEL_SCAN_THRESHOLD {
            closest_parallel(&self.points, query, metric)
        } else {
            closest_sequential(&self.points, query, metric)
        };
        Ok(closest)
    }

    /// Check if `point` exactly matches a stored position
    ///
    /// This is a point-set membership test: every coordinate must compare
    /// equal. `depth` and `name` are accepted for composite trees and do not
    /// affect the answer of a blob.
    pub fn is_inside(&self, point: &Point<f64, D>, _depth: u32, _name: &str) -> bool {
        self.points.iter().any(|p| p.position() == point)
    }

    /// Recompute and cache the bounding box of all points
    ///
    /// Points with a NaN or infinite coordinate do not contribute and are not
    /// enclosed. Returns `false` and leaves the cache invalid when no point
    /// contributes, including when there are no points at all.
    pub fn compute_object_bounding_box(&self) -> bool {
        match BoundingBox::from_points(self.points.iter().map(SpatialObjectPoint::position)) {
            Some(bbox) => {
                log::debug!(
                    "{} #{}: {} over {} points",
                    Self::TYPE_NAME,
                    self.id,
                    bbox,
                    self.points.len()
                );
                self.bounding_box.set(bbox);
                true
            }
            None => {
                log::debug!("{} #{}: no finite points to bound", Self::TYPE_NAME, self.id);
                self.invalidate_bounding_box();
                false
            }
        }
    }

    /// Last computed bounding box; invalid when stale or never computed
    #[inline]
    pub fn object_bounding_box(&self) -> BoundingBox<D> {
        self.bounding_box.get()
    }

    fn invalidate_bounding_box(&self) {
        let mut bbox = self.bounding_box.get();
        bbox.invalidate();
        self.bounding_box.set(bbox);
    }
}

/// Map NaN to +inf so distances are totally ordered
#[inline]
fn rank(distance: f64) -> f64 {
    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}

fn closest_sequential<const D: usize>(
    points: &[SpatialObjectPoint<D>],
    query: &[f64],
    metric: &dyn DistanceMetric,
) -> PointId {
    let mut best_id = 0;
    let mut best = rank(metric.distance(points[0].coords(), query));
    for (id, point) in points.iter().enumerate().skip(1) {
        let distance = rank(metric.distance(point.coords(), query));
        if distance < best {
            best = distance;
            best_id = id;
        }
    }
    best_id
}

/// Same result as [`closest_sequential`]: reduction keeps the lowest id among
/// equal distances, so the split does not change tie-breaking.
fn closest_parallel<const D: usize>(
    points: &[SpatialObjectPoint<D>],
    query: &[f64],
    metric: &dyn DistanceMetric,
) -> PointId {
    points
        .par_iter()
        .enumerate()
        .map(|(id, point)| (id, rank(metric.distance(point.coords(), query))))
        .reduce_with(|a, b| {
            if b.1 < a.1 || (b.1 == a.1 && b.0 < a.0) {
                b
            } else {
                a
            }
        })
        .map_or(0, |(id, _)| id)
}

impl<const D: usize> Default for BlobSpatialObject<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> Index<PointId> for BlobSpatialObject<D> {
    type Output = SpatialObjectPoint<D>;

    /// Panics when `id` is out of range; use [`BlobSpatialObject::point`] to check.
    fn index(&self, id: PointId) -> &Self::Output {
        &self.points[id]
    }
}

impl<const D: usize> PointBasedSpatialObject<D> for BlobSpatialObject<D> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn number_of_points(&self) -> usize {
        BlobSpatialObject::number_of_points(self)
    }

    fn point(&self, id: PointId) -> Option<&SpatialObjectPoint<D>> {
        BlobSpatialObject::point(self, id)
    }

    fn is_inside(&self, point: &Point<f64, D>, depth: u32, name: &str) -> bool {
        BlobSpatialObject::is_inside(self, point, depth, name)
    }

    fn compute_object_bounding_box(&self) -> bool {
        BlobSpatialObject::compute_object_bounding_box(self)
    }

    fn object_bounding_box(&self) -> BoundingBox<D> {
        BlobSpatialObject::object_bounding_box(self)
    }
}

// SAFETY: blobs reach handles through `SharedHandle::new`, which boxes them;
// the last release frees that box. `Cell` fields keep the type `!Sync`.
unsafe impl<const D: usize> RefCounted for BlobSpatialObject<D> {
    fn retain(&self) {
        self.ref_count.increment();
    }

    unsafe fn release(this: NonNull<Self>) {
        let blob = this.as_ref();
        if blob.ref_count.decrement() == 0 {
            log::trace!("destroying {} #{}", Self::TYPE_NAME, blob.id);
            drop(Box::from_raw(this.as_ptr()));
        }
    }

    fn reference_count(&self) -> usize {
        self.ref_count.get()
    }
}

impl<const D: usize> fmt::Debug for BlobSpatialObject<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobSpatialObject")
            .field("id", &self.id)
            .field("reference_count", &self.ref_count.get())
            .field("points", &self.points.len())
            .field("bounding_box", &self.bounding_box.get())
            .field("metric", &self.metric.name())
            .finish()
    }
}

impl<const D: usize> fmt::Display for BlobSpatialObject<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (id {}, {}D)", Self::TYPE_NAME, self.id, D)?;
        writeln!(f, "  Number of points: {}", self.points.len())?;
        writeln!(f, "  Metric: {}", self.metric.name())?;
        write!(f, "  {}", self.bounding_box.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{Chebyshev, Manhattan};
    use nalgebra::{Point2, Point3};
    use spatial_lite_model::SharedHandle;

    fn points2(coords: &[[f64; 2]]) -> Vec<SpatialObjectPoint<2>> {
        coords.iter().copied().map(SpatialObjectPoint::from_coords).collect()
    }

    fn abc() -> BlobSpatialObject<2> {
        BlobSpatialObject::new().with_points(points2(&[[0.0, 0.0], [1.0, 1.0], [5.0, 5.0]]))
    }

    fn brute_force(points: &[SpatialObjectPoint<2>], query: &Point2<f64>) -> PointId {
        let mut best = (0, f64::INFINITY);
        for (id, point) in points.iter().enumerate() {
            let p = point.position();
            let d = ((p.x - query.x).powi(2) + (p.y - query.y).powi(2)).sqrt();
            if d < best.1 {
                best = (id, d);
            }
        }
        best.0
    }

    /// Deterministic pseudo-random coordinates on a coarse grid so ties occur
    fn grid_cloud(count: usize, seed: u64) -> Vec<SpatialObjectPoint<2>> {
        let mut state = seed;
        (0..count)
            .map(|id| {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
                let x = ((state >> 33) % 64) as f64 * 0.5;
                let y = ((state >> 13) % 64) as f64 * 0.5;
                SpatialObjectPoint::from_coords([x, y]).with_id(id as i32)
            })
            .collect()
    }

    #[test]
    fn test_new_blob_is_empty() {
        let blob = BlobSpatialObject::<3>::new();
        assert_eq!(blob.number_of_points(), 0);
        assert!(blob.is_empty());
        assert_eq!(blob.id(), -1);
        assert_eq!(blob.metric().name(), "euclidean");
        assert!(!blob.object_bounding_box().is_valid());
    }

    #[test]
    fn test_closest_point_scenario() {
        let blob = abc();
        assert_eq!(blob.closest_point(&Point2::new(0.9, 0.9)), Ok(1));
        assert!(blob.is_inside(&Point2::new(5.0, 5.0), 0, ""));
        assert!(!blob.is_inside(&Point2::new(5.0, 5.0001), 0, ""));
    }

    #[test]
    fn test_closest_point_coincident_query() {
        let blob = abc();
        assert_eq!(blob.closest_point(&Point2::new(5.0, 5.0)), Ok(2));
        assert_eq!(blob.closest_point(&Point2::new(0.0, 0.0)), Ok(0));
    }

    #[test]
    fn test_closest_point_ties_pick_first_stored() {
        let blob = BlobSpatialObject::new()
            .with_points(points2(&[[2.0, 0.0], [0.0, 2.0], [-2.0, 0.0], [2.0, 0.0]]));
        assert_eq!(blob.closest_point(&Point2::origin()), Ok(0));

        let duplicates = BlobSpatialObject::new().with_points(points2(&[[9.0, 9.0], [1.0, 1.0], [1.0, 1.0]]));
        assert_eq!(duplicates.closest_point(&Point2::new(1.0, 1.0)), Ok(1));
    }

    #[test]
    fn test_closest_point_empty_is_error() {
        let blob = BlobSpatialObject::<2>::new();
        assert_eq!(blob.closest_point(&Point2::origin()), Err(Error::EmptyPointSet));
    }

    #[test]
    fn test_closest_point_matches_brute_force() {
        let points = grid_cloud(200, 7);
        let blob = BlobSpatialObject::new().with_points(points.clone());

        for query in grid_cloud(50, 99) {
            let expected = brute_force(&points, query.position());
            assert_eq!(blob.closest_point(query.position()), Ok(expected));
        }
        for query in [Point2::new(-3.0, 40.0), Point2::new(0.25, 0.25), Point2::new(31.5, 0.0)] {
            assert_eq!(blob.closest_point(&query), Ok(brute_force(&points, &query)));
        }
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let points = grid_cloud(PARALLEL_SCAN_THRESHOLD + 500, 3);
        let blob = BlobSpatialObject::new().with_points(points.clone());

        for query in grid_cloud(20, 11) {
            let sequential = closest_sequential(&points, query.coords(), &Euclidean);
            assert_eq!(blob.closest_point(query.position()), Ok(sequential));
            assert_eq!(sequential, brute_force(&points, query.position()));
        }
    }

    #[test]
    fn test_closest_point_uses_configured_metric() {
        // Euclidean: (3,3) is ~4.24 away, (0,5) is 5 away.
        // Manhattan: (3,3) is 6 away, (0,5) is 5 away.
        let points = points2(&[[3.0, 3.0], [0.0, 5.0]]);
        let mut blob = BlobSpatialObject::new().with_points(points);
        assert_eq!(blob.closest_point(&Point2::origin()), Ok(0));

        blob.set_metric(Arc::new(Manhattan));
        assert_eq!(blob.closest_point(&Point2::origin()), Ok(1));

        let chebyshev = BlobSpatialObject::new()
            .with_metric(Arc::new(Chebyshev))
            .with_points(points2(&[[4.0, 0.0], [3.0, 3.0]]));
        assert_eq!(chebyshev.closest_point(&Point2::origin()), Ok(1));
    }

    #[test]
    fn test_nan_distances_rank_last() {
        let blob = BlobSpatialObject::new().with_points(points2(&[[f64::NAN, 0.0], [10.0, 10.0]]));
        assert_eq!(blob.closest_point(&Point2::origin()), Ok(1));
    }

    #[test]
    fn test_is_inside_requires_exact_coordinates() {
        let blob = BlobSpatialObject::new()
            .with_points(vec![SpatialObjectPoint::from_coords([1.0, 2.0, 3.0])]);

        assert!(blob.is_inside(&Point3::new(1.0, 2.0, 3.0), 0, ""));
        assert!(!blob.is_inside(&Point3::new(1.0, 2.0, 3.0 + f64::EPSILON * 4.0), 0, ""));
        assert!(!blob.is_inside(&Point3::new(1.0, 2.0, 2.999_999_999), 0, ""));
        assert!(!BlobSpatialObject::<3>::new().is_inside(&Point3::origin(), 0, ""));
    }

    #[test]
    fn test_is_inside_ignores_depth_and_name() {
        let blob = abc();
        let p = Point2::new(1.0, 1.0);
        assert!(blob.is_inside(&p, 5, ""));
        assert!(blob.is_inside(&p, 0, "BlobSpatialObject"));
        assert!(blob.is_inside(&p, 2, "EllipseSpatialObject"));
    }

    #[test]
    fn test_compute_bounding_box() {
        let blob = BlobSpatialObject::new().with_points(points2(&[[0.0, 0.0], [2.0, 3.0], [-1.0, 5.0]]));
        assert!(!blob.object_bounding_box().is_valid());

        assert!(blob.compute_object_bounding_box());
        let bbox = blob.object_bounding_box();
        assert!(bbox.is_valid());
        assert_eq!(bbox.min(), &Point2::new(-1.0, 0.0));
        assert_eq!(bbox.max(), &Point2::new(2.0, 5.0));
        for point in blob.points() {
            assert!(bbox.contains_point(point.position()));
        }
    }

    #[test]
    fn test_compute_bounding_box_empty() {
        let blob = BlobSpatialObject::<2>::new();
        assert!(!blob.compute_object_bounding_box());
        assert!(!blob.object_bounding_box().is_valid());
    }

    #[test]
    fn test_bounding_box_all_nan_points_stays_invalid() {
        let blob = BlobSpatialObject::new().with_points(points2(&[[f64::NAN, f64::NAN]]));
        assert!(!blob.compute_object_bounding_box());
        assert!(!blob.object_bounding_box().is_valid());
        assert_eq!(blob.object_bounding_box().to_string(), "BoundingBox (invalid)");
    }

    #[test]
    fn test_bounding_box_skips_nan_points() {
        let blob = BlobSpatialObject::new().with_points(points2(&[[f64::NAN, 0.0], [1.0, 1.0], [3.0, -2.0]]));
        assert!(blob.compute_object_bounding_box());
        let bbox = blob.object_bounding_box();
        assert_eq!(bbox.min(), &Point2::new(1.0, -2.0));
        assert_eq!(bbox.max(), &Point2::new(3.0, 1.0));
        for point in &blob.points()[1..] {
            assert!(bbox.contains_point(point.position()));
        }
    }

    #[test]
    fn test_bounding_box_from_valid_to_all_nan_invalidates() {
        let mut blob = abc();
        assert!(blob.compute_object_bounding_box());
        blob.set_points(points2(&[[f64::NAN, 1.0], [2.0, f64::NAN]]));
        assert!(!blob.compute_object_bounding_box());
        assert!(!blob.object_bounding_box().is_valid());
    }

    #[test]
    fn test_single_point_bounding_box_is_degenerate_but_valid() {
        let blob = BlobSpatialObject::new().with_points(points2(&[[4.0, -2.0]]));
        assert!(blob.compute_object_bounding_box());
        let bbox = blob.object_bounding_box();
        assert_eq!(bbox.min(), bbox.max());
    }

    #[test]
    fn test_set_points_replaces_and_invalidates() {
        let mut blob = abc();
        assert!(blob.compute_object_bounding_box());

        let replacement = points2(&[[7.0, 7.0], [8.0, -1.0]]);
        blob.set_points(replacement.clone());

        assert_eq!(blob.number_of_points(), replacement.len());
        for (id, expected) in replacement.iter().enumerate() {
            assert_eq!(blob.point(id), Some(expected));
            assert_eq!(&blob[id], expected);
        }
        assert!(!blob.object_bounding_box().is_valid());
    }

    #[test]
    fn test_mutable_access_invalidates_cache() {
        let mut blob = abc();
        assert!(blob.compute_object_bounding_box());
        blob.points_mut().push(SpatialObjectPoint::from_coords([-10.0, 0.0]));
        assert!(!blob.object_bounding_box().is_valid());

        assert!(blob.compute_object_bounding_box());
        assert_eq!(blob.object_bounding_box().min(), &Point2::new(-10.0, 0.0));

        blob.point_mut(0).unwrap().set_id(5);
        assert!(!blob.object_bounding_box().is_valid());
        assert!(blob.point_mut(99).is_none());

        assert!(blob.compute_object_bounding_box());
        assert_eq!(blob.push_point(SpatialObjectPoint::from_coords([0.0, 20.0])), 4);
        assert!(!blob.object_bounding_box().is_valid());
    }

    #[test]
    fn test_out_of_range_point() {
        let blob = abc();
        assert!(blob.point(3).is_none());
        assert_eq!(blob.try_point(3), Err(Error::point_out_of_range(3, 3)));
        assert_eq!(blob.try_point(2).map(SpatialObjectPoint::coords), Ok(&[5.0, 5.0][..]));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let blob = abc();
        let point = blob[3];
        assert_eq!(point.id(), -1);
    }

    #[test]
    fn test_blob_through_shared_handle() {
        let mut handle = SharedHandle::new(BlobSpatialObject::<2>::new().with_id(12));
        assert_eq!(handle.reference_count(), 1);
        handle
            .get_mut()
            .unwrap()
            .set_points(points2(&[[0.0, 0.0], [1.0, 1.0], [5.0, 5.0]]));

        let reader = handle.clone();
        assert_eq!(handle.reference_count(), 2);
        assert!(handle.get_mut().is_none());

        assert_eq!(reader.number_of_points(), 3);
        assert_eq!(reader.closest_point(&Point2::new(0.9, 0.9)), Ok(1));
        assert!(reader.compute_object_bounding_box());
        assert!(handle.object_bounding_box().is_valid());

        drop(handle);
        assert_eq!(reader.reference_count(), 1);
        assert_eq!(reader.id(), 12);
    }

    #[test]
    fn test_composite_dispatch_through_trait() {
        let first = abc();
        let second = BlobSpatialObject::new().with_points(points2(&[[-3.0, -3.0]]));
        let children: [&dyn PointBasedSpatialObject<2>; 2] = [&first, &second];

        let inside_any = |p: &Point2<f64>, depth: u32, name: &str| {
            children
                .iter()
                .filter(|child| child.matches_name(name))
                .any(|child| child.is_inside(p, depth.saturating_sub(1), name))
        };
        assert!(inside_any(&Point2::new(-3.0, -3.0), 1, ""));
        assert!(inside_any(&Point2::new(-3.0, -3.0), 1, "BlobSpatialObject"));
        assert!(!inside_any(&Point2::new(-3.0, -3.0), 1, "TubeSpatialObject"));

        let total: usize = children.iter().map(|c| c.number_of_points()).sum();
        assert_eq!(total, 4);
        assert!(children.iter().all(|c| c.compute_object_bounding_box()));
        assert_eq!(children[1].object_bounding_box().min(), &Point2::new(-3.0, -3.0));
        assert_eq!(children[0].point(2).map(SpatialObjectPoint::id), Some(-1));
        assert!(!children[0].is_empty());
    }

    #[test]
    fn test_display() {
        let blob = abc().with_id(3);
        assert_eq!(
            blob.to_string(),
            "BlobSpatialObject (id 3, 2D)\n  Number of points: 3\n  Metric: euclidean\n  BoundingBox (invalid)"
        );
        blob.compute_object_bounding_box();
        assert!(blob.to_string().ends_with("BoundingBox [0.0, 0.0] - [5.0, 5.0]"));
    }
}
