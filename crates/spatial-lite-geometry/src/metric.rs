// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Distance metrics for nearest-point queries
//!
//! Metrics work on coordinate slices so one trait object serves every
//! dimension. Both slices must have the same length.

/// Distance between two coordinate tuples
///
/// Smaller values mean closer. Implementations must be symmetric and return
/// zero for identical inputs.
pub trait DistanceMetric: Send + Sync {
    /// Distance from `a` to `b`
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;

    /// Name of this metric (for debugging/printing)
    fn name(&self) -> &'static str;
}

/// Straight-line distance
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        SquaredEuclidean.distance(a, b).sqrt()
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Squared Euclidean distance
///
/// Same ordering as [`Euclidean`] without the square root.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredEuclidean;

impl DistanceMetric for SquaredEuclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "coordinate dimensionality differs");
        a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
    }

    fn name(&self) -> &'static str {
        "squared_euclidean"
    }
}

/// Sum of absolute differences (L1)
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl DistanceMetric for Manhattan {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "coordinate dimensionality differs");
        a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Largest absolute difference along any axis (L-infinity)
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl DistanceMetric for Chebyshev {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "coordinate dimensionality differs");
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}
