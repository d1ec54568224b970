// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for coordinates, rectangles and the spatial index.

use thiserror::Error;

use crate::types::Coordinate;

/// Errors raised while building coordinates and rectangles.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// A required value was absent.
    #[error("missing {what}")]
    Missing {
        /// Name of the absent value.
        what: &'static str,
    },

    /// The corners do not describe a rectangle with positive width and height.
    #[error("bottom left {bottom_left} is not strictly below and left of top right {top_right}")]
    InvalidGeometry {
        /// Requested bottom-left corner.
        bottom_left: Box<Coordinate>,
        /// Requested top-right corner.
        top_right: Box<Coordinate>,
    },

    /// A decimal literal could not be parsed.
    #[error("invalid decimal literal {input:?}")]
    InvalidDecimal {
        /// The rejected input.
        input: String,
    },
}

/// Result type for index operations.
pub type Result<T> = core::result::Result<T, IndexError>;
