// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for point-set queries

use thiserror::Error;

/// Geometry query result type
pub type Result<T> = std::result::Result<T, Error>;

/// Point-set query errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Query needs at least one point
    #[error("Point set is empty")]
    EmptyPointSet,

    /// Point identifier past the end of the collection
    #[error("Point {id} out of range (collection holds {len} points)")]
    PointOutOfRange { id: usize, len: usize },
}

impl Error {
    /// Create an out-of-range error
    pub fn point_out_of_range(id: usize, len: usize) -> Self {
        Error::PointOutOfRange { id, len }
    }
}
