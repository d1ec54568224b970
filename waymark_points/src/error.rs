// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for interest points.

use thiserror::Error;
use waymark_index::IndexError;

/// Errors raised while building interest points.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PointsError {
    /// The point has no coordinate.
    #[error("interest point is missing its coordinate")]
    MissingCoordinate,

    /// The point has no marker.
    #[error("interest point is missing its marker")]
    MissingMarker,

    /// The coordinate could not be built.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Result type for interest point operations.
pub type Result<T> = core::result::Result<T, PointsError>;
