// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interest point store and its builder.

use core::fmt;
use core::hash::Hash;

use waymark_index::{Cell, Coordinate, Merge, SpatialIndex};
use waymark_region::RectilinearRegion;

use crate::point::InterestPoint;

/// An immutable collection of interest points answering per-region marker counts.
///
/// Each coordinate holds a set of markers, so the same marker placed twice at the same
/// coordinate is stored once.
///
/// ```
/// use waymark_index::{Coordinate, Rectangle};
/// use waymark_points::{InterestPoint, InterestPoints};
/// use waymark_region::RectilinearRegion;
///
/// let mut builder = InterestPoints::builder();
/// builder.add(InterestPoint::new(Coordinate::new(1, 1), "school"));
/// builder.add(InterestPoint::new(Coordinate::new(4, 1), "school"));
/// builder.add(InterestPoint::new(Coordinate::new(4, 1), "park"));
/// let points = builder.build();
///
/// let district = RectilinearRegion::of([
///     Rectangle::from_bounds(0, 0, 2, 2).unwrap(),
///     Rectangle::from_bounds(2, 0, 5, 2).unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(points.count(&district, &"school"), 2);
/// assert_eq!(points.count_all(&district), 3);
/// ```
#[derive(Clone, Debug)]
pub struct InterestPoints<M> {
    points: SpatialIndex<M>,
}

impl<M: Eq + Hash> InterestPoints<M> {
    /// Start an empty builder.
    pub fn builder() -> Builder<M> {
        Builder::new()
    }

    /// The markers recorded at `at`, or `None` if no point was ever placed there.
    pub fn get(&self, at: &Coordinate) -> Option<&Cell<M>> {
        self.points.get(at)
    }

    /// Every stored `(coordinate, marker)` in ascending coordinate order.
    ///
    /// Markers sharing a coordinate come out in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &M)> + '_ {
        self.points.iter().flat_map(|(x, y, cell)| {
            cell.iter()
                .map(move |m| (Coordinate::new(x.clone(), y.clone()), m))
        })
    }

    /// Total number of stored points.
    pub fn len(&self) -> usize {
        self.points.count()
    }

    /// Whether the store holds no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of points inside `region` carrying `marker`.
    ///
    /// The region's rectangles never overlap, so summing per-rectangle counts sees each
    /// coordinate at most once.
    pub fn count(&self, region: &RectilinearRegion, marker: &M) -> usize {
        region
            .rectangles()
            .iter()
            .map(|r| self.points.slice(r).count_matching(|m| m == marker))
            .sum()
    }

    /// Number of points inside `region`, whatever their marker.
    pub fn count_all(&self, region: &RectilinearRegion) -> usize {
        region
            .rectangles()
            .iter()
            .map(|r| self.points.slice(r).count())
            .sum()
    }
}

impl<M> fmt::Display for InterestPoints<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interest points: {}", self.points)
    }
}

impl<M: Eq + Hash> FromIterator<InterestPoint<M>> for InterestPoints<M> {
    fn from_iter<I: IntoIterator<Item = InterestPoint<M>>>(iter: I) -> Self {
        let mut builder = Builder::new();
        builder.extend(iter);
        builder.build()
    }
}

/// Accumulates interest points before freezing them into [`InterestPoints`].
#[derive(Clone, Debug)]
pub struct Builder<M> {
    points: SpatialIndex<M>,
}

impl<M: Eq + Hash> Default for Builder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Eq + Hash> Builder<M> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            points: SpatialIndex::new(),
        }
    }

    /// Add a point.
    ///
    /// Returns `false` when the same marker is already at the same coordinate; the store is
    /// unchanged in that case.
    pub fn add(&mut self, point: InterestPoint<M>) -> bool {
        let (coordinate, marker) = point.into_parts();
        let changed = self.points.insert(&coordinate, [marker], Merge::Union);
        tracing::trace!(%coordinate, changed, "added interest point");
        changed
    }

    /// Freeze the accumulated points.
    pub fn build(self) -> InterestPoints<M> {
        tracing::debug!(points = self.points.count(), "built interest point store");
        InterestPoints {
            points: self.points,
        }
    }
}

impl<M: Eq + Hash> Extend<InterestPoint<M>> for Builder<M> {
    fn extend<I: IntoIterator<Item = InterestPoint<M>>>(&mut self, iter: I) {
        for point in iter {
            self.add(point);
        }
    }
}
