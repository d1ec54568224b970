// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interest points: a marker placed at an exact coordinate.

use core::fmt;

use waymark_index::Coordinate;

use crate::error::{PointsError, Result};

/// A marker placed at an exact coordinate.
///
/// The marker is opaque to Waymark; it only needs equality (and hashing, once stored).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterestPoint<M> {
    coordinate: Coordinate,
    marker: M,
}

impl<M> InterestPoint<M> {
    /// Place `marker` at `coordinate`.
    pub fn new(coordinate: Coordinate, marker: M) -> Self {
        Self { coordinate, marker }
    }

    /// Build a point from possibly absent parts.
    pub fn try_new(coordinate: Option<Coordinate>, marker: Option<M>) -> Result<Self> {
        let coordinate = coordinate.ok_or(PointsError::MissingCoordinate)?;
        let marker = marker.ok_or(PointsError::MissingMarker)?;
        Ok(Self { coordinate, marker })
    }

    /// Place `marker` at the coordinate spelled by two decimal literals.
    pub fn parse(x: &str, y: &str, marker: M) -> Result<Self> {
        Ok(Self::new(Coordinate::parse(x, y)?, marker))
    }

    /// Where the point is.
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// What the point is.
    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// Split into `(coordinate, marker)`.
    pub fn into_parts(self) -> (Coordinate, M) {
        (self.coordinate, self.marker)
    }

    /// Whether this point carries `marker`.
    pub fn has_marker(&self, marker: &M) -> bool
    where
        M: PartialEq,
    {
        self.marker == *marker
    }
}

impl<M: fmt::Display> fmt::Display for InterestPoint<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.coordinate, self.marker)
    }
}
