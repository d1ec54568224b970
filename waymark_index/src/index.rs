// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `SpatialIndex` API: a two-level ordered map from `x` then `y` to a set of values.

use core::fmt;
use core::hash::Hash;
use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use hashbrown::HashSet;

use crate::slice::{Slice, SliceMut};
use crate::types::{Coordinate, Rectangle};

/// The set of values recorded at one coordinate.
pub type Cell<T> = HashSet<T>;

pub(crate) type Row<T> = BTreeMap<BigDecimal, Cell<T>>;

/// How [`SpatialIndex::insert`] combines new values with an existing cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Merge {
    /// Discard the existing cell and store exactly the new values.
    Replace,
    /// Add the new values to whatever the cell already holds.
    #[default]
    Union,
}

/// Sparse grid of value sets keyed by exact coordinates.
///
/// Rows are keyed by `x` and columns by `y`, both kept in ascending order, so half-open
/// range selection over a [`Rectangle`] is a pair of ordered range scans. A coordinate that
/// was never written is absent, which is different from a coordinate holding an empty
/// cell (see [`SpatialIndex::grid`]).
///
/// There is no removal: an index only grows. The index has no interior synchronization;
/// mutation goes through `&mut self`, so callers sharing one across threads must provide
/// their own locking.
#[derive(Clone)]
pub struct SpatialIndex<T> {
    pub(crate) rows: BTreeMap<BigDecimal, Row<T>>,
}

impl<T> Default for SpatialIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpatialIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Create an index holding an empty cell at every `(x, y)` in `xs × ys`.
    ///
    /// Duplicate inputs collapse onto the same row or column.
    pub fn grid<'a>(
        xs: impl IntoIterator<Item = &'a BigDecimal>,
        ys: impl IntoIterator<Item = &'a BigDecimal>,
    ) -> Self {
        let column: Row<T> = ys.into_iter().map(|y| (y.clone(), Cell::new())).collect();
        let rows: BTreeMap<BigDecimal, Row<T>> = xs
            .into_iter()
            .map(|x| {
                let row = column.keys().map(|y| (y.clone(), Cell::new())).collect();
                (x.clone(), row)
            })
            .collect();
        tracing::debug!(rows = rows.len(), columns = column.len(), "seeded lattice");
        Self { rows }
    }

    /// The cell at `at`, or `None` if nothing was ever recorded there.
    pub fn get(&self, at: &Coordinate) -> Option<&Cell<T>> {
        self.get_xy(at.x(), at.y())
    }

    /// The cell at `(x, y)`, or `None` if nothing was ever recorded there.
    pub fn get_xy(&self, x: &BigDecimal, y: &BigDecimal) -> Option<&Cell<T>> {
        self.rows.get(x)?.get(y)
    }

    /// Row keys in ascending order.
    pub fn x_keys(&self) -> impl ExactSizeIterator<Item = &BigDecimal> + '_ {
        self.rows.keys()
    }

    /// Column keys of row `x` in ascending order.
    ///
    /// Returns `None` when there is no row `x`, and an empty iterator when the row exists but
    /// has no columns.
    pub fn y_keys<'a>(
        &'a self,
        x: &BigDecimal,
    ) -> Option<impl ExactSizeIterator<Item = &'a BigDecimal> + use<'a, T>> {
        self.rows.get(x).map(BTreeMap::keys)
    }

    /// Every present `(x, y, cell)` in ascending coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (&BigDecimal, &BigDecimal, &Cell<T>)> + '_ {
        self.rows
            .iter()
            .flat_map(|(x, row)| row.iter().map(move |(y, cell)| (x, y, cell)))
    }

    /// Every present coordinate in ascending order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter()
            .map(|(x, y, _)| Coordinate::new(x.clone(), y.clone()))
    }

    /// Every present cell in coordinate order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<T>> + '_ {
        self.rows.values().flat_map(BTreeMap::values)
    }

    /// Number of present cells, empty ones included.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Whether no cell is present.
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(BTreeMap::is_empty)
    }

    /// Total number of values across all cells.
    pub fn count(&self) -> usize {
        self.cells().map(HashSet::len).sum()
    }

    /// Number of values across all cells for which `filter` returns `true`.
    pub fn count_matching<F: FnMut(&T) -> bool>(&self, mut filter: F) -> usize {
        self.cells().flatten().filter(|v| filter(v)).count()
    }

    /// Read-only view of the cells inside `area`'s half-open extent.
    ///
    /// The view borrows the index's cells; nothing is copied.
    pub fn slice(&self, area: &Rectangle) -> Slice<'_, T> {
        Slice::new(self, area.clone())
    }

    /// Mutable view of the cells inside `area`'s half-open extent.
    ///
    /// Writes through the view land in this index.
    pub fn slice_mut(&mut self, area: &Rectangle) -> SliceMut<'_, T> {
        SliceMut::new(self, area.clone())
    }
}

impl<T: Eq + Hash> SpatialIndex<T> {
    /// Replace the cell at `at` with `values`, creating the row and cell if needed.
    ///
    /// Returns the previous cell, if there was one.
    pub fn set_cell(
        &mut self,
        at: &Coordinate,
        values: impl IntoIterator<Item = T>,
    ) -> Option<Cell<T>> {
        self.rows
            .entry(at.x().clone())
            .or_default()
            .insert(at.y().clone(), values.into_iter().collect())
    }

    /// Add `values` to the cell at `at`, creating the row and cell if needed.
    ///
    /// Returns whether the cell's contents changed; values already present do not count.
    pub fn add_to_cell(&mut self, at: &Coordinate, values: impl IntoIterator<Item = T>) -> bool {
        let cell = self
            .rows
            .entry(at.x().clone())
            .or_default()
            .entry(at.y().clone())
            .or_default();
        let mut changed = false;
        for value in values {
            changed |= cell.insert(value);
        }
        changed
    }

    /// Write `values` at `at` according to `merge`.
    ///
    /// Returns whether the cell's contents changed. Creating an empty cell where none existed
    /// counts as a change under [`Merge::Replace`] and not under [`Merge::Union`].
    pub fn insert(
        &mut self,
        at: &Coordinate,
        values: impl IntoIterator<Item = T>,
        merge: Merge,
    ) -> bool {
        match merge {
            Merge::Union => self.add_to_cell(at, values),
            Merge::Replace => {
                let fresh: Cell<T> = values.into_iter().collect();
                let row = self.rows.entry(at.x().clone()).or_default();
                match row.get_mut(at.y()) {
                    Some(cell) if *cell == fresh => false,
                    Some(cell) => {
                        *cell = fresh;
                        true
                    }
                    None => {
                        row.insert(at.y().clone(), fresh);
                        true
                    }
                }
            }
        }
    }
}

impl<T: Eq + Hash + Clone> SpatialIndex<T> {
    /// Insert `value` into every cell currently present.
    ///
    /// The set of cells does not change.
    pub fn add_everywhere(&mut self, value: T) {
        for cell in self.rows.values_mut().flat_map(BTreeMap::values_mut) {
            cell.insert(value.clone());
        }
    }
}

impl<T> fmt::Debug for SpatialIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("rows", &self.rows.len())
            .field("cells", &self.len())
            .field("values", &self.count())
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for SpatialIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} values at [", self.count())?;
        for (i, c) in self.coordinates().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
