// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borrowed range views over a [`SpatialIndex`].

use core::fmt;
use core::hash::Hash;

use bigdecimal::BigDecimal;

use crate::index::{Cell, SpatialIndex};
use crate::types::{Coordinate, Rectangle};

/// Read-only view of the cells of a [`SpatialIndex`] inside a rectangle.
///
/// Only cells with `left <= x < right` and `bottom <= y < top` are visible. The view shares
/// the parent's cells; use [`Slice::to_index`] to detach a copy.
pub struct Slice<'a, T> {
    index: &'a SpatialIndex<T>,
    area: Rectangle,
}

impl<'a, T> Slice<'a, T> {
    pub(crate) fn new(index: &'a SpatialIndex<T>, area: Rectangle) -> Self {
        Self { index, area }
    }

    /// The rectangle this view is restricted to.
    pub fn area(&self) -> &Rectangle {
        &self.area
    }

    /// Every visible `(x, y, cell)` in ascending coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a BigDecimal, &'a BigDecimal, &'a Cell<T>)> + '_ {
        let (bottom, top) = (self.area.bottom(), self.area.top());
        self.index
            .rows
            .range::<BigDecimal, _>(self.area.left()..self.area.right())
            .flat_map(move |(x, row)| {
                row.range::<BigDecimal, _>(bottom..top)
                    .map(move |(y, cell)| (x, y, cell))
            })
    }

    /// Visit every visible cell (does not allocate).
    pub fn visit<F: FnMut(&'a BigDecimal, &'a BigDecimal, &'a Cell<T>)>(&self, mut f: F) {
        for (x, y, cell) in self.iter() {
            f(x, y, cell);
        }
    }

    /// The cell at `at`, or `None` if it is outside the view or was never recorded.
    pub fn get(&self, at: &Coordinate) -> Option<&'a Cell<T>> {
        if !self.area.contains(at) {
            return None;
        }
        self.index.get(at)
    }

    /// Every visible coordinate in ascending order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter()
            .map(|(x, y, _)| Coordinate::new(x.clone(), y.clone()))
    }

    /// Every visible cell in coordinate order.
    pub fn cells(&self) -> impl Iterator<Item = &'a Cell<T>> + '_ {
        self.iter().map(|(_, _, cell)| cell)
    }

    /// Number of visible cells, empty ones included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no cell is visible.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Total number of values across the visible cells.
    pub fn count(&self) -> usize {
        self.cells().map(Cell::len).sum()
    }

    /// Number of values across the visible cells for which `filter` returns `true`.
    pub fn count_matching<F: FnMut(&T) -> bool>(&self, mut filter: F) -> usize {
        self.cells().flatten().filter(|v| filter(v)).count()
    }
}

impl<T: Clone> Slice<'_, T> {
    /// Copy the visible cells into a new, independent index.
    pub fn to_index(&self) -> SpatialIndex<T> {
        let mut out = SpatialIndex::new();
        for (x, y, cell) in self.iter() {
            out.rows
                .entry(x.clone())
                .or_default()
                .insert(y.clone(), cell.clone());
        }
        out
    }
}

impl<T> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("area", &self.area)
            .field("cells", &self.len())
            .finish_non_exhaustive()
    }
}

/// Mutable view of the cells of a [`SpatialIndex`] inside a rectangle.
///
/// Writes go straight to the parent index. The view never creates cells; it only
/// touches those already present in its area.
pub struct SliceMut<'a, T> {
    index: &'a mut SpatialIndex<T>,
    area: Rectangle,
}

impl<'a, T> SliceMut<'a, T> {
    pub(crate) fn new(index: &'a mut SpatialIndex<T>, area: Rectangle) -> Self {
        Self { index, area }
    }

    /// The rectangle this view is restricted to.
    pub fn area(&self) -> &Rectangle {
        &self.area
    }

    /// Reborrow as a read-only view.
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self.index, self.area.clone())
    }

    /// Apply `f` to every visible cell, returning how many cells were visited.
    pub fn for_each_cell<F: FnMut(&mut Cell<T>)>(&mut self, mut f: F) -> usize {
        let area = &self.area;
        let mut visited = 0;
        for (_, row) in self
            .index
            .rows
            .range_mut::<BigDecimal, _>(area.left()..area.right())
        {
            for (_, cell) in row.range_mut::<BigDecimal, _>(area.bottom()..area.top()) {
                f(cell);
                visited += 1;
            }
        }
        visited
    }
}

impl<T: Eq + Hash + Clone> SliceMut<'_, T> {
    /// Insert `value` into every visible cell, returning how many cells it now occupies here.
    pub fn add_everywhere(&mut self, value: T) -> usize {
        let stamped = self.for_each_cell(|cell| {
            cell.insert(value.clone());
        });
        tracing::trace!(area = %self.area, cells = stamped, "stamped slice");
        stamped
    }
}

impl<T> fmt::Debug for SliceMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceMut")
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn unit_lattice(n: i32) -> SpatialIndex<&'static str> {
        let keys: Vec<BigDecimal> = (0..n).map(BigDecimal::from).collect();
        SpatialIndex::grid(&keys, &keys)
    }

    #[test]
    fn slice_includes_left_and_bottom_edges_only() {
        let mut idx = SpatialIndex::new();
        for (x, y) in [(1, 1), (1, 2), (3, 1), (2, 3), (2, 2), (0, 1)] {
            idx.add_to_cell(&Coordinate::new(x, y), ["p"]);
        }
        let area = Rectangle::from_bounds(1, 1, 3, 3).unwrap();
        let seen: Vec<_> = idx.slice(&area).coordinates().collect();
        assert_eq!(
            seen,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
            ],
            "right edge x=3 and top edge y=3 are excluded"
        );
    }

    #[test]
    fn slice_bounds_are_exact_decimals() {
        let mut idx = SpatialIndex::new();
        idx.add_to_cell(&Coordinate::parse("0.1", "0.1").unwrap(), [1]);
        idx.add_to_cell(&Coordinate::parse("0.2", "0.1").unwrap(), [2]);
        idx.add_to_cell(&Coordinate::parse("0.19999", "0.1").unwrap(), [3]);
        let area = Rectangle::from_bounds(dec("0.1"), dec("0.1"), dec("0.2"), dec("0.2")).unwrap();
        let slice = idx.slice(&area);
        assert_eq!(slice.count(), 2);
        assert_eq!(slice.count_matching(|v| *v == 2), 0);
    }

    #[test]
    fn slice_get_respects_area() {
        let mut idx = SpatialIndex::new();
        idx.add_to_cell(&Coordinate::new(5, 5), ['a']);
        let area = Rectangle::from_bounds(0, 0, 5, 5).unwrap();
        assert!(idx.slice(&area).get(&Coordinate::new(5, 5)).is_none());
        assert!(idx.get(&Coordinate::new(5, 5)).is_some());
    }

    #[test]
    fn slice_shares_cells_with_parent() {
        let idx = unit_lattice(3);
        let area = Rectangle::from_bounds(0, 0, 2, 2).unwrap();
        let slice = idx.slice(&area);
        let from_slice = slice.get(&Coordinate::new(1, 1)).unwrap();
        let from_parent = idx.get(&Coordinate::new(1, 1)).unwrap();
        assert!(core::ptr::eq(from_slice, from_parent));
        assert_eq!(slice.len(), 4);
    }

    #[test]
    fn to_index_detaches_a_copy() {
        let mut idx = unit_lattice(3);
        let area = Rectangle::from_bounds(1, 1, 3, 3).unwrap();
        let copy = idx.slice(&area).to_index();
        idx.add_everywhere("later");
        assert_eq!(copy.len(), 4);
        assert_eq!(copy.count(), 0);
        assert_eq!(copy.x_keys().len(), 2);
    }

    #[test]
    fn add_everywhere_through_mut_view() {
        let mut idx = unit_lattice(4);
        let area = Rectangle::from_bounds(0, 2, 4, 3).unwrap();
        let mut view = idx.slice_mut(&area);
        assert_eq!(view.add_everywhere("band"), 4);
        assert_eq!(view.as_slice().count(), 4);
        assert_eq!(idx.count_matching(|v| *v == "band"), 4);
        assert_eq!(idx.len(), 16, "no cells created");
    }

    #[test]
    fn empty_view_between_cells() {
        let mut idx = unit_lattice(2);
        let area = Rectangle::from_bounds(dec("0.25"), dec("0.25"), dec("0.75"), dec("0.75")).unwrap();
        assert!(idx.slice(&area).is_empty());
        assert_eq!(idx.slice_mut(&area).add_everywhere("x"), 0);
        assert_eq!(idx.count(), 0);
    }
}
