// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_points --heading-base-level=0

//! Waymark Points: count markers inside rectilinear regions.
//!
//! An [`InterestPoint`] pairs an exact [`Coordinate`](waymark_index::Coordinate) with an
//! opaque marker. A [`Builder`] collects points into a
//! [`SpatialIndex`](waymark_index::SpatialIndex); [`Builder::build`] freezes them into
//! [`InterestPoints`], which answers how many points carrying a given marker fall inside a
//! [`RectilinearRegion`](waymark_region::RectilinearRegion).
//!
//! Each coordinate holds a *set* of markers. Adding the same marker at the same coordinate
//! twice leaves one point, and [`Builder::add`] reports `false` the second time.
//!
//! Counting slices the index once per rectangle of the region. Rectangles are half-open, so
//! a point on a rectangle's left or bottom edge is inside it and a point on its right or top
//! edge is not.
//!
//! # Example
//!
//! ```rust
//! use waymark_index::{Coordinate, Rectangle};
//! use waymark_points::{InterestPoint, InterestPoints};
//! use waymark_region::RectilinearRegion;
//!
//! let mut builder = InterestPoints::builder();
//! assert!(builder.add(InterestPoint::new(Coordinate::new(0, 0), "A")));
//! assert!(!builder.add(InterestPoint::new(Coordinate::new(0, 0), "A")));
//! builder.add(InterestPoint::new(Coordinate::new(5, 5), "B"));
//! let points = builder.build();
//!
//! let unit = RectilinearRegion::of([Rectangle::from_bounds(0, 0, 1, 1).unwrap()]).unwrap();
//! assert_eq!(points.count(&unit, &"A"), 1);
//! assert_eq!(points.count(&unit, &"B"), 0);
//! ```

mod error;
mod point;
mod store;

pub use error::{PointsError, Result};
pub use point::InterestPoint;
pub use store::{Builder, InterestPoints};
