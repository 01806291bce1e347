// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model operations

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors surfaced by the model layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A handle was accessed while referring to nothing
    #[error("Handle is empty")]
    EmptyHandle,
}
