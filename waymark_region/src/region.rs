// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectilinear regions: overlap-free rectangle sets with connectivity queries.

use core::fmt;
use std::collections::{BTreeSet, VecDeque};

use hashbrown::HashSet;
use smallvec::SmallVec;
use waymark_index::{Coordinate, Rectangle, SpatialIndex};

use crate::contact::Adjacency;
use crate::error::{RegionError, Result};

/// A set of rectangles no two of which share interior area.
///
/// Construction goes through [`RectilinearRegion::of`], which rejects overlapping input, so
/// every live region is overlap-free. Rectangles are kept sorted by corner order and
/// duplicates collapse into one. Connectivity queries borrow the region and keep their
/// traversal state on the stack, so they can run concurrently on a shared region.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RectilinearRegion {
    rectangles: Vec<Rectangle>,
}

impl RectilinearRegion {
    /// Build a region, failing with [`RegionError::Overlap`] if any two rectangles overlap.
    ///
    /// Rectangles that only share edges or corners do not overlap.
    pub fn of(rectangles: impl IntoIterator<Item = Rectangle>) -> Result<Self> {
        let rectangles: Vec<Rectangle> = rectangles
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if let Some((first, second)) = Self::find_overlap(&rectangles) {
            tracing::debug!(%first, %second, "rejected overlapping region");
            return Err(RegionError::Overlap {
                first: Box::new(first.clone()),
                second: Box::new(second.clone()),
            });
        }
        Ok(Self { rectangles })
    }

    /// Build a region from possibly absent rectangles.
    ///
    /// Fails with [`RegionError::MissingRectangle`] on the first `None`.
    pub fn try_of(rectangles: impl IntoIterator<Item = Option<Rectangle>>) -> Result<Self> {
        let present = rectangles
            .into_iter()
            .enumerate()
            .map(|(position, r)| r.ok_or(RegionError::MissingRectangle { position }))
            .collect::<Result<Vec<_>>>()?;
        Self::of(present)
    }

    /// Build a region from `(bottom_left, top_right)` corner pairs.
    pub fn from_corners(
        corners: impl IntoIterator<Item = (Coordinate, Coordinate)>,
    ) -> Result<Self> {
        let rectangles = corners
            .into_iter()
            .map(|(bottom_left, top_right)| Rectangle::new(bottom_left, top_right))
            .collect::<waymark_index::Result<Vec<_>>>()?;
        Self::of(rectangles)
    }

    /// Find two rectangles in `rectangles` that share interior area.
    ///
    /// Every rectangle edge becomes a cut line; the cut lines span a lattice whose cells are
    /// the elementary intervals between consecutive boundaries. Each rectangle stamps itself
    /// into the lattice cells of its half-open extent, and a cell holding two distinct
    /// rectangles marks an overlap. Identical rectangles count as one.
    pub fn find_overlap(rectangles: &[Rectangle]) -> Option<(&Rectangle, &Rectangle)> {
        let mut xs = BTreeSet::new();
        let mut ys = BTreeSet::new();
        for r in rectangles {
            xs.insert(r.left());
            xs.insert(r.right());
            ys.insert(r.bottom());
            ys.insert(r.top());
        }
        let mut lattice: SpatialIndex<&Rectangle> = SpatialIndex::grid(xs, ys);
        for r in rectangles {
            lattice.slice_mut(r).add_everywhere(r);
        }
        lattice.cells().find(|cell| cell.len() > 1).map(|cell| {
            let mut pair: SmallVec<[&Rectangle; 4]> = cell.iter().copied().collect();
            pair.sort();
            (pair[0], pair[1])
        })
    }

    /// The rectangles, sorted by corner order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Number of rectangles.
    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    /// Whether the region has no rectangles.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Whether any rectangle contains `at` (half-open).
    pub fn contains(&self, at: &Coordinate) -> bool {
        self.rectangles.iter().any(|r| r.contains(at))
    }

    /// Whether every rectangle can be reached from every other through adjacent rectangles,
    /// under the default [`Adjacency`] policy.
    ///
    /// An empty region is not connected.
    pub fn is_connected(&self) -> bool {
        self.is_connected_with(Adjacency::default())
    }

    /// Like [`is_connected`](Self::is_connected) with an explicit adjacency policy.
    pub fn is_connected_with(&self, adjacency: Adjacency) -> bool {
        if self.rectangles.is_empty() {
            return false;
        }
        let visited = self.reachable(0, adjacency).len();
        tracing::debug!(
            visited,
            total = self.rectangles.len(),
            "region connectivity traversal"
        );
        visited == self.rectangles.len()
    }

    /// Breadth-first visit order of the rectangles reachable from `rectangles()[start]`.
    ///
    /// Returns an empty list when `start` is out of range.
    pub fn reachable(&self, start: usize, adjacency: Adjacency) -> Vec<&Rectangle> {
        if start >= self.rectangles.len() {
            return Vec::new();
        }
        let mut visited = HashSet::new();
        self.traverse(start, adjacency, &mut visited)
            .into_iter()
            .map(|i| &self.rectangles[i])
            .collect()
    }

    /// Group the rectangles into connected components.
    ///
    /// Components are listed in order of their first rectangle; each lists its rectangles in
    /// breadth-first order.
    pub fn components(&self, adjacency: Adjacency) -> Vec<Vec<&Rectangle>> {
        let mut visited = HashSet::with_capacity(self.rectangles.len());
        let mut out = Vec::new();
        for start in 0..self.rectangles.len() {
            if visited.contains(&start) {
                continue;
            }
            let group = self.traverse(start, adjacency, &mut visited);
            out.push(group.into_iter().map(|i| &self.rectangles[i]).collect());
        }
        out
    }

    // O(n²): every dequeued rectangle is compared with every unvisited one.
    fn traverse(
        &self,
        start: usize,
        adjacency: Adjacency,
        visited: &mut HashSet<usize>,
    ) -> Vec<usize> {
        let mut order = Vec::new();
        let mut frontier = VecDeque::from([start]);
        visited.insert(start);
        while let Some(current) = frontier.pop_front() {
            order.push(current);
            let here = &self.rectangles[current];
            let neighbours: SmallVec<[usize; 8]> = (0..self.rectangles.len())
                .filter(|i| {
                    !visited.contains(i) && adjacency.adjacent(here, &self.rectangles[*i])
                })
                .collect();
            for next in neighbours {
                visited.insert(next);
                frontier.push_back(next);
            }
        }
        order
    }
}

impl fmt::Display for RectilinearRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, r) in self.rectangles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{r}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_index::IndexError;

    fn rect(l: i32, b: i32, r: i32, t: i32) -> Rectangle {
        Rectangle::from_bounds(l, b, r, t).unwrap()
    }

    #[test]
    fn edge_touching_rectangles_are_accepted() {
        let region = RectilinearRegion::of([rect(0, 0, 1, 1), rect(1, 0, 2, 1)]).unwrap();
        assert_eq!(region.len(), 2);
    }

    #[test]
    fn shared_interior_is_rejected() {
        let err = RectilinearRegion::of([rect(0, 0, 2, 2), rect(1, 1, 3, 3)]).unwrap_err();
        assert_eq!(
            err,
            RegionError::Overlap {
                first: Box::new(rect(0, 0, 2, 2)),
                second: Box::new(rect(1, 1, 3, 3)),
            }
        );
    }

    #[test]
    fn containment_is_an_overlap() {
        let err = RectilinearRegion::of([rect(0, 0, 2, 2), rect(1, 1, 2, 2)]).unwrap_err();
        assert!(matches!(err, RegionError::Overlap { .. }));
    }

    #[test]
    fn thin_sliver_overlap_is_found() {
        // The overlap is [0.999, 1) x [0, 1): narrower than any fixed grid would sample.
        let a = Rectangle::new(
            Coordinate::new(0, 0),
            Coordinate::parse("1", "1").unwrap(),
        )
        .unwrap();
        let b = Rectangle::new(
            Coordinate::parse("0.999", "0").unwrap(),
            Coordinate::new(2, 1),
        )
        .unwrap();
        assert!(RectilinearRegion::find_overlap(&[a.clone(), b.clone()]).is_some());
        assert!(RectilinearRegion::of([a, b]).is_err());
    }

    #[test]
    fn crossing_without_shared_corners_is_found() {
        // A plus sign: neither rectangle has a corner inside the other.
        let horizontal = rect(0, 1, 3, 2);
        let vertical = rect(1, 0, 2, 3);
        assert!(RectilinearRegion::of([horizontal, vertical]).is_err());
    }

    #[test]
    fn duplicates_collapse() {
        let region = RectilinearRegion::of([rect(0, 0, 1, 1), rect(0, 0, 1, 1)]).unwrap();
        assert_eq!(region.len(), 1);
        let slice = [rect(0, 0, 1, 1), rect(0, 0, 1, 1)];
        assert!(RectilinearRegion::find_overlap(&slice).is_none());
    }

    #[test]
    fn missing_rectangle_is_reported_with_position() {
        let err = RectilinearRegion::try_of([Some(rect(0, 0, 1, 1)), None]).unwrap_err();
        assert_eq!(err, RegionError::MissingRectangle { position: 1 });
    }

    #[test]
    fn bad_corners_surface_as_index_errors() {
        let inverted = (Coordinate::new(1, 1), Coordinate::new(0, 0));
        let err = RectilinearRegion::from_corners([inverted]).unwrap_err();
        assert!(matches!(
            err,
            RegionError::Index(IndexError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn stacked_rectangles_are_connected() {
        let region = RectilinearRegion::of([rect(0, 0, 1, 1), rect(0, 1, 1, 2)]).unwrap();
        assert!(region.is_connected());
        assert!(region.is_connected_with(Adjacency::edges_only()));
    }

    #[test]
    fn diagonal_gap_is_not_connected() {
        let region = RectilinearRegion::of([rect(0, 0, 1, 1), rect(1, 2, 2, 3)]).unwrap();
        assert!(!region.is_connected());
    }

    #[test]
    fn empty_region_is_valid_but_not_connected() {
        let region = RectilinearRegion::of([]).unwrap();
        assert!(region.is_empty());
        assert!(!region.is_connected());
        assert!(region.components(Adjacency::default()).is_empty());
    }

    #[test]
    fn single_rectangle_is_connected() {
        let region = RectilinearRegion::of([rect(0, 0, 5, 5)]).unwrap();
        assert!(region.is_connected());
    }

    #[test]
    fn corner_contact_follows_policy() {
        let region = RectilinearRegion::of([rect(0, 0, 1, 1), rect(1, 1, 2, 2)]).unwrap();
        assert!(region.is_connected());
        assert!(!region.is_connected_with(Adjacency::edges_only()));
    }

    #[test]
    fn components_split_disjoint_groups() {
        let region = RectilinearRegion::of([
            rect(0, 0, 1, 1),
            rect(1, 0, 2, 1),
            rect(10, 10, 11, 11),
            rect(10, 11, 11, 12),
            rect(20, 0, 21, 1),
        ])
        .unwrap();
        let groups = region.components(Adjacency::default());
        let sizes: Vec<_> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(groups[2][0], &rect(20, 0, 21, 1));
    }

    #[test]
    fn reachable_is_breadth_first() {
        // A row of four squares; start from the leftmost.
        let region = RectilinearRegion::of((0..4).map(|i| rect(i, 0, i + 1, 1))).unwrap();
        let order: Vec<_> = region
            .reachable(0, Adjacency::default())
            .into_iter()
            .map(|r| r.left().clone())
            .collect();
        let expected: Vec<_> = (0..4).map(waymark_index::BigDecimal::from).collect();
        assert_eq!(order, expected);
        assert!(region.reachable(9, Adjacency::default()).is_empty());
    }

    #[test]
    fn contains_checks_every_rectangle() {
        let region = RectilinearRegion::of([rect(0, 0, 1, 1), rect(5, 5, 6, 6)]).unwrap();
        assert!(region.contains(&Coordinate::new(5, 5)));
        assert!(!region.contains(&Coordinate::new(1, 1)));
        assert_eq!(region.to_string(), "{[0, 1) x [0, 1), [5, 6) x [5, 6)}");
    }

    #[test]
    fn staircase_of_a_thousand_shares_edges() {
        // Each step is two wide and overlaps the next one's bottom edge by one unit.
        let steps: Vec<_> = (0..1000).map(|i| rect(i, i, i + 2, i + 1)).collect();
        let region = RectilinearRegion::of(steps).unwrap();
        assert_eq!(region.len(), 1000);
        assert!(region.is_connected_with(Adjacency::edges_only()));
        assert_eq!(region.reachable(0, Adjacency::edges_only()).len(), 1000);
        assert!(region.is_connected());
    }

    #[test]
    fn corner_staircase_needs_corner_contact() {
        let steps: Vec<_> = (0..1000).map(|i| rect(i, i, i + 1, i + 1)).collect();
        let region = RectilinearRegion::of(steps).unwrap();
        assert_eq!(region.len(), 1000);
        assert!(region.is_connected());
        assert_eq!(region.reachable(0, Adjacency::default()).len(), 1000);
        assert!(!region.is_connected_with(Adjacency::edges_only()));
        assert_eq!(region.reachable(0, Adjacency::edges_only()).len(), 1);
    }
}
