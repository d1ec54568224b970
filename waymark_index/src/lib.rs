// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymark_index --heading-base-level=0

//! Waymark Index: an exact-coordinate, two-level ordered spatial index.
//!
//! Waymark Index is the storage layer under the other Waymark crates.
//!
//! - [`Coordinate`]: an exact `(x, y)` pair of [`BigDecimal`]s, ordered by `x` then `y`.
//! - [`Rectangle`]: a validated axis-aligned box covering `[left, right) x [bottom, top)`.
//! - [`SpatialIndex`]: a map from `x` to a map from `y` to a set of values, with point
//!   lookup, half-open range views ([`Slice`], [`SliceMut`]), bulk stamping and counting.
//!
//! Coordinates are arbitrary-precision decimals. There is no floating-point tolerance anywhere:
//! a value sits on a rectangle's edge or it does not.
//!
//! # Example
//!
//! ```rust
//! use waymark_index::{Coordinate, Merge, Rectangle, SpatialIndex};
//!
//! let mut idx = SpatialIndex::new();
//! idx.insert(&Coordinate::parse("0.5", "0.5").unwrap(), ["cafe"], Merge::Union);
//! idx.insert(&Coordinate::new(1, 0), ["cafe"], Merge::Union);
//! idx.insert(&Coordinate::new(0, 0), ["museum"], Merge::Union);
//!
//! // Right and top edges are outside the rectangle.
//! let area = Rectangle::from_bounds(0, 0, 1, 1).unwrap();
//! let cafes = idx.slice(&area).count_matching(|m| *m == "cafe");
//! assert_eq!(cafes, 1);
//! ```
//!
//! Slices can also write back into the index they came from, which is how a rectangle is
//! rasterized onto a pre-seeded lattice:
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use waymark_index::{Coordinate, Rectangle, SpatialIndex};
//!
//! let cuts: Vec<BigDecimal> = (0..3).map(BigDecimal::from).collect();
//! let mut lattice: SpatialIndex<u32> = SpatialIndex::grid(&cuts, &cuts);
//! let r = Rectangle::from_bounds(0, 0, 2, 1).unwrap();
//! assert_eq!(lattice.slice_mut(&r).add_everywhere(7), 2);
//! assert!(lattice.get(&Coordinate::new(1, 0)).unwrap().contains(&7));
//! ```

mod error;
mod index;
mod slice;
mod types;

pub use bigdecimal::BigDecimal;
pub use error::{IndexError, Result};
pub use index::{Cell, Merge, SpatialIndex};
pub use slice::{Slice, SliceMut};
pub use types::{Coordinate, Rectangle};
