// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Points stored by point-based spatial objects

use nalgebra::Point;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a point inside a point collection
pub type PointId = usize;

/// Default RGBA color for new points (opaque red)
pub const DEFAULT_POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// A position in `D`-dimensional space with a color and identifier payload
///
/// The position is the point's identity and is fixed once built; color and
/// identifier may be edited in place.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialObjectPoint<const D: usize = 3> {
    position: Point<f64, D>,
    /// RGBA color [r, g, b, a] where values are 0.0-1.0
    color: [f32; 4],
    /// Caller-assigned identifier, -1 when unset
    id: i32,
}

impl<const D: usize> SpatialObjectPoint<D> {
    /// Create a point at `position` with default payload
    pub fn new(position: Point<f64, D>) -> Self {
        Self {
            position,
            color: DEFAULT_POINT_COLOR,
            id: -1,
        }
    }

    /// Create a point from raw coordinates
    pub fn from_coords(coords: [f64; D]) -> Self {
        Self::new(Point::from(coords))
    }

    /// Set color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Set identifier
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn position(&self) -> &Point<f64, D> {
        &self.position
    }

    /// Coordinates as a contiguous slice of length `D`
    #[inline]
    pub fn coords(&self) -> &[f64] {
        self.position.coords.as_slice()
    }

    #[inline]
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl<const D: usize> Default for SpatialObjectPoint<D> {
    fn default() -> Self {
        Self::new(Point::origin())
    }
}

impl<const D: usize> From<Point<f64, D>> for SpatialObjectPoint<D> {
    fn from(position: Point<f64, D>) -> Self {
        Self::new(position)
    }
}

impl<const D: usize> From<[f64; D]> for SpatialObjectPoint<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::from_coords(coords)
    }
}

impl<const D: usize> fmt::Display for SpatialObjectPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point #{} {:?} color {:?}", self.id, self.coords(), self.color)
    }
}
