// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes over point sets

use nalgebra::{Point, SVector};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-dimension `[min, max]` extent with a validity flag
///
/// An invalid box encloses nothing. Boxes cached by spatial objects become
/// invalid whenever the object's points change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox<const D: usize = 3> {
    min: Point<f64, D>,
    max: Point<f64, D>,
    valid: bool,
}

impl<const D: usize> BoundingBox<D> {
    /// Create an invalid (empty) box
    pub fn invalid() -> Self {
        Self {
            min: Point::origin(),
            max: Point::origin(),
            valid: false,
        }
    }

    /// Create a valid box from its corners
    ///
    /// Corners are sorted per dimension, so the argument order does not matter.
    pub fn from_corners(a: Point<f64, D>, b: Point<f64, D>) -> Self {
        let mut bbox = Self::from_point(&a);
        bbox.expand_to_include(&b);
        bbox
    }

    /// Create a zero-sized valid box around a single point
    pub fn from_point(point: &Point<f64, D>) -> Self {
        Self {
            min: *point,
            max: *point,
            valid: true,
        }
    }

    /// Tightest box around the finite points in `points`
    ///
    /// Points with a NaN or infinite coordinate are skipped. Returns `None`
    /// when no finite point remains.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<f64, D>>,
    {
        let mut finite = points
            .into_iter()
            .filter(|point| point.iter().all(|c| c.is_finite()));
        let mut bbox = Self::from_point(finite.next()?);
        for point in finite {
            bbox.expand_to_include(point);
        }
        Some(bbox)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Mark the box stale
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Lower corner (meaningless when invalid)
    #[inline]
    pub fn min(&self) -> &Point<f64, D> {
        &self.min
    }

    /// Upper corner (meaningless when invalid)
    #[inline]
    pub fn max(&self) -> &Point<f64, D> {
        &self.max
    }

    /// Grow to include a point; an invalid box becomes the point itself
    pub fn expand_to_include(&mut self, point: &Point<f64, D>) {
        if !self.valid {
            *self = Self::from_point(point);
            return;
        }
        for i in 0..D {
            self.min[i] = self.min[i].min(point[i]);
            self.max[i] = self.max[i].max(point[i]);
        }
    }

    /// Check if a point lies inside or on the boundary
    pub fn contains_point(&self, point: &Point<f64, D>) -> bool {
        self.valid && (0..D).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Center of the box
    pub fn center(&self) -> Option<Point<f64, D>> {
        self.valid
            .then(|| Point::from((self.min.coords + self.max.coords) * 0.5))
    }

    /// Edge lengths per dimension
    pub fn extent(&self) -> Option<SVector<f64, D>> {
        self.valid.then(|| self.max - self.min)
    }
}

impl<const D: usize> Default for BoundingBox<D> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<const D: usize> fmt::Display for BoundingBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return f.write_str("BoundingBox (invalid)");
        }
        write!(
            f,
            "BoundingBox {:?} - {:?}",
            self.min.coords.as_slice(),
            self.max.coords.as_slice()
        )
    }
}
