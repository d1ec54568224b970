// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How two rectangles touch, and which kinds of touching count as adjacency.

use waymark_index::{BigDecimal, Rectangle};

bitflags::bitflags! {
    /// Ways in which two non-overlapping rectangles can touch.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Contact: u8 {
        /// One's top edge lies on the other's bottom edge over a positive length.
        const TOP_BOTTOM = 0b0000_0001;
        /// One's right edge lies on the other's left edge over a positive length.
        const LEFT_RIGHT = 0b0000_0010;
        /// The rectangles share a single corner point and nothing else.
        const CORNER     = 0b0000_0100;
    }
}

/// Classify how `a` and `b` touch along their boundaries.
///
/// Returns [`Contact::empty()`] when the boundaries have no point in common.
///
/// ```
/// use waymark_index::Rectangle;
/// use waymark_region::{Contact, contact};
///
/// let a = Rectangle::from_bounds(0, 0, 1, 1).unwrap();
/// let stacked = Rectangle::from_bounds(0, 1, 1, 2).unwrap();
/// let diagonal = Rectangle::from_bounds(1, 1, 2, 2).unwrap();
/// assert_eq!(contact(&a, &stacked), Contact::TOP_BOTTOM);
/// assert_eq!(contact(&a, &diagonal), Contact::CORNER);
/// ```
pub fn contact(a: &Rectangle, b: &Rectangle) -> Contact {
    let mut out = Contact::empty();
    if a.top() == b.bottom() || a.bottom() == b.top() {
        out |= shared_span(
            (a.left(), a.right()),
            (b.left(), b.right()),
            Contact::TOP_BOTTOM,
        );
    }
    if a.right() == b.left() || a.left() == b.right() {
        out |= shared_span(
            (a.bottom(), a.top()),
            (b.bottom(), b.top()),
            Contact::LEFT_RIGHT,
        );
    }
    out
}

/// Closed-interval intersection of two spans along the shared edge's axis.
fn shared_span(
    (lo_a, hi_a): (&BigDecimal, &BigDecimal),
    (lo_b, hi_b): (&BigDecimal, &BigDecimal),
    edge: Contact,
) -> Contact {
    if hi_a < lo_b || lo_a > hi_b {
        Contact::empty()
    } else if hi_a == lo_b || lo_a == hi_b {
        Contact::CORNER
    } else {
        edge
    }
}

/// Policy deciding which [`Contact`] kinds make two rectangles adjacent.
///
/// The default accepts every kind of contact, including a single shared corner, so a
/// diagonal staircase of squares is one connected region. Use [`Adjacency::edges_only`] to
/// require a shared edge of positive length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Adjacency {
    /// Contact kinds that count as adjacency.
    pub accepted: Contact,
}

impl Default for Adjacency {
    fn default() -> Self {
        Self {
            accepted: Contact::all(),
        }
    }
}

impl Adjacency {
    /// Accept edge and corner contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept only contact along a shared edge of positive length.
    pub fn edges_only() -> Self {
        Self {
            accepted: Contact::TOP_BOTTOM | Contact::LEFT_RIGHT,
        }
    }

    /// Also accept corner-only contact.
    pub fn with_corners(mut self) -> Self {
        self.accepted |= Contact::CORNER;
        self
    }

    /// Whether `contact` satisfies this policy.
    pub fn accepts(&self, contact: Contact) -> bool {
        self.accepted.intersects(contact)
    }

    /// Whether `a` and `b` are adjacent under this policy.
    pub fn adjacent(&self, a: &Rectangle, b: &Rectangle) -> bool {
        self.accepts(contact(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: i32, b: i32, r: i32, t: i32) -> Rectangle {
        Rectangle::from_bounds(l, b, r, t).unwrap()
    }

    #[test]
    fn stacked_rectangles_touch_top_bottom() {
        let low = rect(0, 0, 1, 1);
        let high = rect(0, 1, 1, 2);
        assert_eq!(contact(&low, &high), Contact::TOP_BOTTOM);
        assert_eq!(contact(&high, &low), Contact::TOP_BOTTOM);
    }

    #[test]
    fn top_bottom_needs_horizontal_overlap() {
        // Shared y = 1 line, but x ranges [0, 1] and [3, 4] are apart.
        assert_eq!(contact(&rect(0, 1, 1, 2), &rect(3, 0, 4, 1)), Contact::empty());
        // Same x range, y gap between 2 and 3.
        assert_eq!(contact(&rect(0, 1, 1, 2), &rect(0, 3, 1, 4)), Contact::empty());
    }

    #[test]
    fn side_by_side_rectangles_touch_left_right() {
        let a = rect(0, 0, 1, 1);
        let b = rect(1, 0, 2, 1);
        assert_eq!(contact(&a, &b), Contact::LEFT_RIGHT);
        assert_eq!(contact(&b, &a), Contact::LEFT_RIGHT);
    }

    #[test]
    fn left_right_needs_vertical_overlap() {
        assert_eq!(contact(&rect(0, 0, 1, 1), &rect(1, 2, 2, 3)), Contact::empty());
        assert_eq!(contact(&rect(0, 0, 1, 1), &rect(2, 1, 3, 2)), Contact::empty());
    }

    #[test]
    fn partial_edge_overlap_is_an_edge() {
        let wide = rect(0, 0, 4, 1);
        let narrow = rect(3, 1, 6, 2);
        assert_eq!(contact(&wide, &narrow), Contact::TOP_BOTTOM);
    }

    #[test]
    fn diagonal_neighbours_share_a_corner() {
        let a = rect(0, 0, 1, 1);
        let b = rect(1, 1, 2, 2);
        assert_eq!(contact(&a, &b), Contact::CORNER);
        assert!(Adjacency::default().adjacent(&a, &b));
        assert!(!Adjacency::edges_only().adjacent(&a, &b));
        assert!(Adjacency::edges_only().with_corners().adjacent(&a, &b));
    }

    #[test]
    fn far_apart_never_adjacent() {
        let a = rect(0, 0, 1, 1);
        let b = rect(5, 5, 6, 6);
        assert!(!Adjacency::default().adjacent(&a, &b));
    }
}
