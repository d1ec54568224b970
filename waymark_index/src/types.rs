// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: exact coordinates and half-open rectangles.

use core::fmt;
use core::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{IndexError, Result};

/// An exact `(x, y)` location.
///
/// Ordering is lexicographic: `x` first, ties broken by `y`. Equality, ordering and hashing
/// are numeric, so `1.0` and `1.00` denote the same coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: BigDecimal,
    y: BigDecimal,
}

impl Coordinate {
    /// Create a coordinate from two exact values.
    pub fn new(x: impl Into<BigDecimal>, y: impl Into<BigDecimal>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Create a coordinate from possibly absent components.
    ///
    /// Fails with [`IndexError::Missing`] if either component is `None`.
    pub fn try_new(x: Option<BigDecimal>, y: Option<BigDecimal>) -> Result<Self> {
        let x = x.ok_or(IndexError::Missing { what: "x coordinate" })?;
        let y = y.ok_or(IndexError::Missing { what: "y coordinate" })?;
        Ok(Self { x, y })
    }

    /// Parse a coordinate from two decimal literals such as `"12.5"` and `"-3"`.
    pub fn parse(x: &str, y: &str) -> Result<Self> {
        Ok(Self {
            x: parse_decimal(x)?,
            y: parse_decimal(y)?,
        })
    }

    /// The coordinate `(0, 0)`.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Horizontal component.
    #[inline]
    pub fn x(&self) -> &BigDecimal {
        &self.x
    }

    /// Vertical component.
    #[inline]
    pub fn y(&self) -> &BigDecimal {
        &self.y
    }

    /// Split into `(x, y)`.
    pub fn into_parts(self) -> (BigDecimal, BigDecimal) {
        (self.x, self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn parse_decimal(input: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(input.trim()).map_err(|_| IndexError::InvalidDecimal {
        input: input.into(),
    })
}

/// Axis-aligned rectangle covering the half-open area `[left, right) x [bottom, top)`.
///
/// The bottom and left edges belong to the rectangle, the top and right edges do not, so
/// rectangles that share an edge tile the plane without counting that edge twice.
///
/// A `Rectangle` always has positive width and height; the constructors reject anything else.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rectangle {
    bottom_left: Coordinate,
    top_right: Coordinate,
}

impl Rectangle {
    /// Create a rectangle from its bottom-left and top-right corners.
    ///
    /// Fails with [`IndexError::InvalidGeometry`] unless `bottom_left` is strictly left of and
    /// strictly below `top_right`.
    ///
    /// ```
    /// use waymark_index::{Coordinate, Rectangle};
    ///
    /// let r = Rectangle::new(Coordinate::new(0, 0), Coordinate::new(2, 1)).unwrap();
    /// assert!(r.contains(&Coordinate::new(0, 0)));
    /// assert!(!r.contains(&Coordinate::new(2, 0)));
    ///
    /// // Zero height is rejected.
    /// assert!(Rectangle::new(Coordinate::new(0, 0), Coordinate::new(2, 0)).is_err());
    /// ```
    pub fn new(bottom_left: Coordinate, top_right: Coordinate) -> Result<Self> {
        if bottom_left.x >= top_right.x || bottom_left.y >= top_right.y {
            return Err(IndexError::InvalidGeometry {
                bottom_left: Box::new(bottom_left),
                top_right: Box::new(top_right),
            });
        }
        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    /// Create a rectangle from possibly absent corners.
    pub fn try_new(bottom_left: Option<Coordinate>, top_right: Option<Coordinate>) -> Result<Self> {
        let bottom_left = bottom_left.ok_or(IndexError::Missing {
            what: "bottom left corner",
        })?;
        let top_right = top_right.ok_or(IndexError::Missing {
            what: "top right corner",
        })?;
        Self::new(bottom_left, top_right)
    }

    /// Create a rectangle from its four edges.
    pub fn from_bounds(
        left: impl Into<BigDecimal>,
        bottom: impl Into<BigDecimal>,
        right: impl Into<BigDecimal>,
        top: impl Into<BigDecimal>,
    ) -> Result<Self> {
        Self::new(Coordinate::new(left, bottom), Coordinate::new(right, top))
    }

    /// Bottom-left corner (inside the rectangle).
    #[inline]
    pub fn bottom_left(&self) -> &Coordinate {
        &self.bottom_left
    }

    /// Top-right corner (outside the rectangle).
    #[inline]
    pub fn top_right(&self) -> &Coordinate {
        &self.top_right
    }

    /// Inclusive lower x bound.
    #[inline]
    pub fn left(&self) -> &BigDecimal {
        &self.bottom_left.x
    }

    /// Exclusive upper x bound.
    #[inline]
    pub fn right(&self) -> &BigDecimal {
        &self.top_right.x
    }

    /// Inclusive lower y bound.
    #[inline]
    pub fn bottom(&self) -> &BigDecimal {
        &self.bottom_left.y
    }

    /// Exclusive upper y bound.
    #[inline]
    pub fn top(&self) -> &BigDecimal {
        &self.top_right.y
    }

    /// Whether the half-open area contains the coordinate.
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.left() <= c.x() && c.x() < self.right() && self.bottom() <= c.y() && c.y() < self.top()
    }

    /// The four corners, counter-clockwise from the bottom left.
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            self.bottom_left.clone(),
            Coordinate::new(self.right().clone(), self.bottom().clone()),
            self.top_right.clone(),
            Coordinate::new(self.left().clone(), self.top().clone()),
        ]
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.left(),
            self.right(),
            self.bottom(),
            self.top()
        )
    }
}
