// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_region --heading-base-level=0

//! Waymark Region: overlap-free rectangle sets and their connectivity.
//!
//! A [`RectilinearRegion`] is a set of half-open [`Rectangle`](waymark_index::Rectangle)s,
//! no two of which share interior area. Regions are the query shapes of the Waymark
//! interest point store: because the rectangles never overlap, summing a per-rectangle
//! count never counts a location twice.
//!
//! - [`RectilinearRegion::of`] validates the input. Overlap detection compresses the
//!   rectangle edges into cut lines, seeds a [`SpatialIndex`](waymark_index::SpatialIndex)
//!   lattice at every cut-line crossing, stamps each rectangle into its slice of the lattice
//!   and looks for a cell claimed twice. The result is exact for any decimal boundaries.
//! - [`RectilinearRegion::is_connected`] runs a breadth-first traversal over rectangle
//!   adjacency. [`contact`] classifies how two rectangles touch, and [`Adjacency`] chooses
//!   which kinds of contact count.
//!
//! # Example
//!
//! ```rust
//! use waymark_index::Rectangle;
//! use waymark_region::{Adjacency, RectilinearRegion, RegionError};
//!
//! let r = |l: i32, b: i32, rt: i32, t: i32| Rectangle::from_bounds(l, b, rt, t).unwrap();
//!
//! // An L shape made of two rectangles sharing part of an edge.
//! let l_shape = RectilinearRegion::of([r(0, 0, 3, 1), r(0, 1, 1, 3)]).unwrap();
//! assert!(l_shape.is_connected());
//!
//! // Squares meeting only at a corner are connected by default, but not edge-to-edge.
//! let diagonal = RectilinearRegion::of([r(0, 0, 1, 1), r(1, 1, 2, 2)]).unwrap();
//! assert!(diagonal.is_connected());
//! assert!(!diagonal.is_connected_with(Adjacency::edges_only()));
//!
//! // Overlap is rejected at construction.
//! let err = RectilinearRegion::of([r(0, 0, 2, 2), r(1, 1, 3, 3)]).unwrap_err();
//! assert!(matches!(err, RegionError::Overlap { .. }));
//! ```

mod contact;
mod error;
mod region;

pub use contact::{Adjacency, Contact, contact};
pub use error::{RegionError, Result};
pub use region::RectilinearRegion;
