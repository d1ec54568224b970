// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for region construction.

use thiserror::Error;
use waymark_index::{IndexError, Rectangle};

/// Errors raised while building a [`RectilinearRegion`](crate::RectilinearRegion).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// An input slot held no rectangle.
    #[error("rectangle at position {position} is missing")]
    MissingRectangle {
        /// Zero-based position in the input sequence.
        position: usize,
    },

    /// Two rectangles share interior area.
    #[error("rectangles {first} and {second} overlap")]
    Overlap {
        /// The smaller of the two overlapping rectangles (by corner order).
        first: Box<Rectangle>,
        /// The larger of the two overlapping rectangles (by corner order).
        second: Box<Rectangle>,
    },

    /// A rectangle could not be built from its corners.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Result type for region operations.
pub type Result<T> = core::result::Result<T, RegionError>;
